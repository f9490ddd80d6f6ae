//! Catalog generation settings.
//!
//! Every field has a default, so a config file only needs to list what it
//! overrides:
//!
//! ```json
//! {
//!   "source_base_url": "https://example.org/datasets/tree/main/catalog",
//!   "manual_builders": ["image_label_folder", "manual_csv"],
//!   "logging": {"level": "debug"}
//! }
//! ```

use crate::error::{Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings consumed by the grouper, the entry renderer and the logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Leading module segment shared by every builder; dropped when grouping
    pub root_package: String,
    /// Alias shown in place of `root_package` in class references
    pub display_root: String,
    /// Repository URL corresponding to the `root_package` directory
    pub source_base_url: String,
    /// Extension of builder implementation files
    pub source_extension: String,
    /// Builders whose module path contains this segment are never documented
    pub excluded_segment: String,
    /// Builders that need extra construction arguments; skipped unless requested by name
    pub manual_builders: Vec<String>,
    pub logging: LoggingConfig,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            root_package: "tensorflow_datasets".to_owned(),
            display_root: "tfds".to_owned(),
            source_base_url:
                "https://github.com/tensorflow/datasets/tree/master/tensorflow_datasets".to_owned(),
            source_extension: "py".to_owned(),
            excluded_segment: "testing".to_owned(),
            manual_builders: vec!["image_label_folder".to_owned()],
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write daily-rotated log files under the user data directory
    pub log_to_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            log_to_file: false,
        }
    }
}

impl DocsConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self =
            serde_json::from_str(&contents).context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to disk
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Whether `name` is a manual-construction builder.
    pub fn is_manual_builder(&self, name: &str) -> bool {
        self.manual_builders.iter().any(|b| b == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: DocsConfig =
            serde_json::from_str(r#"{"display_root": "cat", "logging": {"level": "debug"}}"#)
                .unwrap();
        assert_eq!(config.display_root, "cat");
        assert_eq!(config.root_package, "tensorflow_datasets");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.log_to_file);
        assert!(config.is_manual_builder("image_label_folder"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dsdoc.json");

        let mut config = DocsConfig::default();
        config.manual_builders.push("manual_csv".to_owned());
        config.save(&path).unwrap();

        let loaded = DocsConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = DocsConfig::load(&dir.path().join("absent.json"));
        assert!(result.is_err());
    }
}
