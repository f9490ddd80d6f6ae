use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use dsdoc::catalog::{dataset_docs_str, schema_org};
use dsdoc::config::DocsConfig;
use dsdoc::registry::{Registry as _, SnapshotRegistry};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dsdoc", about = "Dataset catalog documentation generator")]
pub struct Cli {
    /// Registry snapshot (JSON) describing the registered builders
    #[arg(long, global = true, env = "DSDOC_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// JSON configuration file. Defaults apply when omitted.
    #[arg(long, global = true, env = "DSDOC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the Markdown catalog (the default command)
    Docs {
        /// Only document these datasets. Repeatable; defaults to every registered dataset.
        #[arg(short, long = "dataset")]
        datasets: Vec<String>,
    },
    /// Print every registered dataset name
    List,
    /// Print the schema.org JSON-LD record of a dataset
    JsonLd {
        /// Dataset name
        name: String,
    },
}

/// Run the selected command and return what should go to stdout.
pub fn run_command(cli: &Cli, config: &DocsConfig) -> Result<String> {
    let path = cli
        .registry
        .as_ref()
        .context("No registry snapshot given; pass --registry or set DSDOC_REGISTRY")?;
    let registry = SnapshotRegistry::from_file(path)?;

    match &cli.command {
        None => handle_docs(&registry, config, &[]),
        Some(Commands::Docs { datasets }) => handle_docs(&registry, config, datasets),
        Some(Commands::List) => {
            let mut names = registry.list_builder_names().join("\n");
            names.push('\n');
            Ok(names)
        }
        Some(Commands::JsonLd { name }) => {
            let mut json = schema_org(&registry, name)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn handle_docs(
    registry: &SnapshotRegistry,
    config: &DocsConfig,
    datasets: &[String],
) -> Result<String> {
    let subset = (!datasets.is_empty()).then_some(datasets);
    let doc = dataset_docs_str(registry, config, subset).context("Failed to generate catalog")?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_repeated_datasets() {
        let cli = Cli::parse_from([
            "dsdoc", "docs", "--registry", "r.json", "-d", "mnist", "--dataset", "glue",
        ]);
        assert_eq!(cli.registry, Some(PathBuf::from("r.json")));
        let Some(Commands::Docs { datasets }) = cli.command else {
            panic!("expected docs command");
        };
        assert_eq!(datasets, vec!["mnist", "glue"]);
    }

    #[test]
    fn missing_registry_is_an_error() {
        let cli = Cli {
            registry: None,
            config: None,
            command: Some(Commands::List),
        };
        assert!(run_command(&cli, &DocsConfig::default()).is_err());
    }
}
