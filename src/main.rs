//! # dsdoc entry point
//!
//! Generates the dataset catalog for a registry snapshot and prints it to
//! stdout:
//!
//! ```bash
//! dsdoc --registry registry.json > docs/datasets.md
//! dsdoc --registry registry.json docs --dataset mnist
//! dsdoc --registry registry.json json-ld mnist
//! ```
//!
//! Logs go to stderr (`RUST_LOG=debug` for details). Any failure exits
//! non-zero without printing a partial document.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // the document itself goes to stdout

mod cli;

use anyhow::Result;
use clap::Parser as _;
use dsdoc::config::DocsConfig;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = DocsConfig::load_or_default(cli.config.as_deref())?;
    dsdoc::logging::init(&config.logging)?;

    let output = cli::run_command(&cli, &config)?;
    print!("{output}");
    Ok(())
}
