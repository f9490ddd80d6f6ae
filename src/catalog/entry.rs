//! Markdown entry for a single dataset builder.
//!
//! Builders without configurations render as one `### "name"` section.
//! Builders with configurations additionally list each configuration and
//! render one `#### "name/config"` block per configuration. Dataset-level
//! fields (description, URLs, citation, statistics, supervised keys) then come
//! from the first configuration, which is the default one.

use super::features::feature_information;
use super::statistics::statistics_information;
use crate::error::Result;
use crate::registry::descriptor::supervised_keys_str;
use crate::registry::{BuilderDescriptor, ConfigDescriptor, DatasetInfo, Registry, SourceLinker};
use crate::utils::size_str;

/// Shown instead of a link when a dataset declares no URL.
pub const NO_KNOWN_URL: &str = "<no known url>";

/// Renders builder entries, resolving configurations through the registry.
pub struct EntryRenderer<'a, R: Registry + ?Sized> {
    registry: &'a R,
    linker: &'a SourceLinker,
}

/// A configuration together with the info record it resolved to.
struct ResolvedConfig<'c> {
    config: &'c ConfigDescriptor,
    info: DatasetInfo,
}

impl<'a, R: Registry + ?Sized> EntryRenderer<'a, R> {
    pub fn new(registry: &'a R, linker: &'a SourceLinker) -> Self {
        Self { registry, linker }
    }

    /// Render the Markdown section for `builder`.
    ///
    /// # Errors
    ///
    /// Fails when the builder's info record or one of its configurations cannot
    /// be resolved.
    pub fn render(&self, builder: &BuilderDescriptor) -> Result<String> {
        tracing::debug!(builder = %builder.name, configs = builder.configs.len(), "Rendering entry");
        if builder.has_configs() {
            self.render_with_configs(builder)
        } else {
            self.render_single(builder)
        }
    }

    fn module_and_class(&self, builder: &BuilderDescriptor, class: &str) -> String {
        format!("{}.{class}", self.linker.display_module(&builder.module))
    }

    fn render_single(&self, builder: &BuilderDescriptor) -> Result<String> {
        let info = builder.info()?;
        let url = url_from_info(info);

        Ok(format!(
            "### `\"{name}\"`

{description}

* URL: [{url}]({url})
* `DatasetBuilder`: [`{module_and_class}`]({cls_url})
* Version: `v{version}`
* Size: `{size}`

#### Features
{features}

{common}",
            name = builder.name,
            description = info.description,
            module_and_class = self.module_and_class(builder, &builder.class_name),
            cls_url = self.linker.source_url(&builder.module),
            version = info.version,
            size = size_str(info.size_in_bytes),
            features = feature_information(info),
            common = dataset_footer(info),
        ))
    }

    fn resolve_configs<'c>(
        &self,
        builder: &'c BuilderDescriptor,
    ) -> Result<Vec<ResolvedConfig<'c>>> {
        builder
            .configs
            .iter()
            .map(|config| -> Result<ResolvedConfig<'c>> {
                let resolved = self
                    .registry
                    .resolve_builder(&builder.name, Some(&config.name))?;
                let info = resolved.info()?.clone();
                Ok(ResolvedConfig { config, info })
            })
            .collect()
    }

    fn render_with_configs(&self, builder: &BuilderDescriptor) -> Result<String> {
        let resolved = self.resolve_configs(builder)?;
        let Some(first) = resolved.first() else {
            return self.render_single(builder);
        };
        let info = &first.info;
        let url = url_from_info(info);

        let bullets: Vec<String> = resolved.iter().map(config_bullet).collect();
        let blocks: Vec<String> = resolved
            .iter()
            .map(|r| config_block(&builder.name, r))
            .collect();

        Ok(format!(
            "### `\"{name}\"`

{description}

* URL: [{url}]({url})
* `DatasetBuilder`: [`{module_and_class}`]({cls_url})

`{name}` is configured with `{config_cls}` and has the following
configurations predefined (defaults to the first one):

{config_names}

{configs}

{common}",
            name = builder.name,
            description = info.description,
            module_and_class = self.module_and_class(builder, &builder.class_name),
            cls_url = self.linker.source_url(&builder.module),
            config_cls = self.module_and_class(builder, &builder.config_class),
            config_names = bullets.join("\n"),
            configs = blocks.join("\n"),
            common = dataset_footer(info),
        ))
    }
}

/// Statistics, URLs, supervised keys and citation shared by both entry shapes.
fn dataset_footer(info: &DatasetInfo) -> String {
    format!(
        "#### Statistics
{statistics}

#### Urls
{urls}

#### Supervised keys (for `as_supervised=True`)
`{supervised_keys}`

{citation}
---
",
        statistics = statistics_information(info),
        urls = format_urls(&info.urls),
        supervised_keys = supervised_keys_str(info.supervised_keys.as_ref()),
        citation = make_citation(&info.citation),
    )
}

fn config_bullet(resolved: &ResolvedConfig<'_>) -> String {
    format!(
        "* `\"{name}\"` (`v{version}`) (`Size: {size}`): {description}\n",
        name = resolved.config.name,
        version = resolved.config.version,
        size = size_str(resolved.info.size_in_bytes),
        description = resolved.config.description,
    )
}

fn config_block(builder_name: &str, resolved: &ResolvedConfig<'_>) -> String {
    format!(
        "#### `\"{builder_name}/{config}\"`

* Size: `{size}`

{features}

",
        config = resolved.config.name,
        size = size_str(resolved.info.size_in_bytes),
        features = feature_information(&resolved.info),
    )
}

/// First URL of `info`, or a placeholder.
pub fn url_from_info(info: &DatasetInfo) -> &str {
    info.primary_url().unwrap_or(NO_KNOWN_URL)
}

/// Markdown list of links.
pub fn format_urls(urls: &[String]) -> String {
    urls.iter()
        .map(|url| format!(" * [{url}]({url})"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Citation block, or an empty string when there is nothing to cite.
pub fn make_citation(citation: &str) -> String {
    let citation = citation.trim();
    if citation.is_empty() {
        String::new()
    } else {
        format!("#### Citation\n```\n{citation}\n```\n")
    }
}

/// Info record describing `builder` as a whole: its own record, or the
/// first configuration's record when it declares configurations.
///
/// # Errors
///
/// Fails when the record (or the default configuration) cannot be resolved.
pub fn default_info<R: Registry + ?Sized>(
    registry: &R,
    builder: &BuilderDescriptor,
) -> Result<DatasetInfo> {
    match builder.configs.first() {
        Some(config) => {
            let resolved = registry.resolve_builder(&builder.name, Some(&config.name))?;
            Ok(resolved.info()?.clone())
        }
        None => Ok(builder.info()?.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::registry::snapshot::{BuilderRecord, ConfigRecord, RegistrySnapshot};
    use crate::registry::{FeatureLeaf, FeaturesDict, SnapshotRegistry, SplitInfo, SupervisedKeys};

    fn info(description: &str, url: &str, size: u64, citation: &str) -> DatasetInfo {
        DatasetInfo {
            description: description.to_owned(),
            version: "1.0.0".to_owned(),
            urls: if url.is_empty() { vec![] } else { vec![url.to_owned()] },
            size_in_bytes: size,
            supervised_keys: Some(SupervisedKeys("image".to_owned(), "label".to_owned())),
            citation: citation.to_owned(),
            features: FeaturesDict::default()
                .with("label", FeatureLeaf::new("ClassLabel", &[], "tf.int64")),
            splits: vec![SplitInfo::new("train", 60_000)],
        }
    }

    fn registry() -> SnapshotRegistry {
        SnapshotRegistry::new(RegistrySnapshot {
            builders: vec![
                BuilderRecord {
                    name: "mnist".to_owned(),
                    module: "tensorflow_datasets.image.mnist".to_owned(),
                    class_name: "MNIST".to_owned(),
                    config_class: None,
                    info: Some(info("D", "http://x", 100, "")),
                    configs: vec![],
                },
                BuilderRecord {
                    name: "corrupted".to_owned(),
                    module: "tensorflow_datasets.image.corrupted".to_owned(),
                    class_name: "Corrupted".to_owned(),
                    config_class: Some("CorruptedConfig".to_owned()),
                    info: None,
                    configs: vec![
                        ConfigRecord {
                            name: "blur".to_owned(),
                            version: "0.1.0".to_owned(),
                            description: "Blurred images".to_owned(),
                            info: info("first", "http://first", 2048, "@first{}"),
                        },
                        ConfigRecord {
                            name: "noise".to_owned(),
                            version: "0.2.0".to_owned(),
                            description: "Noisy images".to_owned(),
                            info: info("second", "http://second", 4096, "@second{}"),
                        },
                    ],
                },
            ],
        })
        .unwrap()
    }

    #[test]
    fn test_single_entry() {
        let registry = registry();
        let linker = SourceLinker::default();
        let renderer = EntryRenderer::new(&registry, &linker);

        let builder = registry.resolve_builder("mnist", None).unwrap();
        let entry = renderer.render(&builder).unwrap();

        assert!(entry.starts_with("### `\"mnist\"`\n\nD\n\n* URL: [http://x](http://x)\n"));
        assert!(entry.contains(
            "* `DatasetBuilder`: [`tfds.image.mnist.MNIST`](https://github.com/tensorflow/datasets/tree/master/tensorflow_datasets/image/mnist.py)"
        ));
        assert!(entry.contains("* Version: `v1.0.0`\n* Size: `100 bytes`"));
        assert!(entry.contains("#### Features\n```python\nFeaturesDict({"));
        assert!(entry.contains("`('image', 'label')`"));
        assert!(!entry.contains("#### Citation"));
        assert!(entry.ends_with("---\n"));
    }

    #[test]
    fn test_entry_with_configs_uses_first_config() {
        let registry = registry();
        let linker = SourceLinker::default();
        let renderer = EntryRenderer::new(&registry, &linker);

        let builder = registry.resolve_builder("corrupted", None).unwrap();
        let entry = renderer.render(&builder).unwrap();

        let blur = entry
            .find("* `\"blur\"` (`v0.1.0`) (`Size: 2.00 KiB`): Blurred images")
            .unwrap();
        let noise = entry
            .find("* `\"noise\"` (`v0.2.0`) (`Size: 4.00 KiB`): Noisy images")
            .unwrap();
        assert!(blur < noise);

        assert_eq!(entry.matches("#### `\"corrupted/").count(), 2);
        assert!(entry.contains("`tfds.image.corrupted.CorruptedConfig`"));
        assert!(entry.contains("[http://first](http://first)"));
        assert!(!entry.contains("http://second"));
        assert!(entry.contains("#### Citation\n```\n@first{}\n```\n"));
        assert!(!entry.contains("@second"));
        assert!(entry.contains("\n\nfirst\n\n"));
    }

    #[test]
    fn test_unresolvable_config_is_fatal() {
        let registry = registry();
        let linker = SourceLinker::default();
        let renderer = EntryRenderer::new(&registry, &linker);

        let mut builder = registry.resolve_builder("corrupted", None).unwrap();
        builder.configs.push(ConfigDescriptor {
            name: "missing".to_owned(),
            version: "1.0.0".to_owned(),
            description: String::new(),
        });

        let result = renderer.render(&builder);
        assert!(matches!(result, Err(CatalogError::Resolution { .. })));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(make_citation("  \n"), "");
        assert_eq!(make_citation(" @a{}\n"), "#### Citation\n```\n@a{}\n```\n");
        assert_eq!(
            format_urls(&["a".to_owned(), "b".to_owned()]),
            " * [a](a)\n * [b](b)"
        );
        assert_eq!(url_from_info(&info("", "", 0, "")), NO_KNOWN_URL);
    }

    #[test]
    fn test_default_info() {
        let registry = registry();
        let corrupted = registry.resolve_builder("corrupted", None).unwrap();
        assert_eq!(default_info(&registry, &corrupted).unwrap().description, "first");

        let mnist = registry.resolve_builder("mnist", None).unwrap();
        assert_eq!(default_info(&registry, &mnist).unwrap().description, "D");
    }
}
