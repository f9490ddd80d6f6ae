//! Registry backed by a JSON snapshot of the registered builders.
//!
//! The snapshot layout is:
//!
//! ```json
//! {
//!   "builders": [
//!     {"name": "mnist", "module": "tensorflow_datasets.image.mnist",
//!      "class_name": "MNIST", "info": { "version": "1.0.0", ... }},
//!     {"name": "cifar10_corrupted", "module": "...", "class_name": "...",
//!      "config_class": "Cifar10CorruptedConfig",
//!      "configs": [{"name": "brightness_1", "version": "1.0.0",
//!                   "description": "...", "info": { ... }}]}
//!   ]
//! }
//! ```

use super::Registry;
use super::descriptor::{BUILDER_CONFIG, BuilderDescriptor, ConfigDescriptor, DatasetInfo};
use crate::error::{CatalogError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// On-disk snapshot of a registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    #[serde(default)]
    pub builders: Vec<BuilderRecord>,
}

/// One builder as stored in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderRecord {
    pub name: String,
    pub module: String,
    pub class_name: String,

    #[serde(default)]
    pub config_class: Option<String>,

    /// Info record for builders without configurations
    #[serde(default)]
    pub info: Option<DatasetInfo>,

    #[serde(default)]
    pub configs: Vec<ConfigRecord>,
}

/// One builder configuration with the info record it resolves to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigRecord {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    pub info: DatasetInfo,
}

impl BuilderRecord {
    fn descriptor(&self, info: Option<DatasetInfo>) -> BuilderDescriptor {
        BuilderDescriptor {
            name: self.name.clone(),
            module: self.module.clone(),
            class_name: self.class_name.clone(),
            config_class: self
                .config_class
                .clone()
                .unwrap_or_else(|| BUILDER_CONFIG.to_owned()),
            configs: self
                .configs
                .iter()
                .map(|c| ConfigDescriptor {
                    name: c.name.clone(),
                    version: c.version.clone(),
                    description: c.description.clone(),
                })
                .collect(),
            info,
        }
    }
}

/// In-memory registry over a [`RegistrySnapshot`].
#[derive(Debug, Clone)]
pub struct SnapshotRegistry {
    builders: Vec<BuilderRecord>,
}

impl SnapshotRegistry {
    /// Build a registry, rejecting duplicated builder names.
    pub fn new(snapshot: RegistrySnapshot) -> Result<Self> {
        let mut seen = HashSet::new();
        for builder in &snapshot.builders {
            if !seen.insert(builder.name.as_str()) {
                return Err(CatalogError::unresolved(
                    &builder.name,
                    "registered more than once",
                ));
            }
        }
        Ok(Self {
            builders: snapshot.builders,
        })
    }

    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: RegistrySnapshot =
            serde_json::from_str(json).context("Failed to parse registry snapshot")?;
        Self::new(snapshot)
    }

    /// Load a snapshot from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry snapshot: {}", path.display()))?;
        tracing::debug!("Loaded registry snapshot from {}", path.display());
        Self::from_json(&json)
    }

    fn record(&self, name: &str) -> Result<&BuilderRecord> {
        self.builders
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| CatalogError::unresolved(name, "not registered"))
    }
}

impl Registry for SnapshotRegistry {
    fn list_builder_names(&self) -> Vec<String> {
        self.builders.iter().map(|b| b.name.clone()).collect()
    }

    fn resolve_builder(&self, name: &str, config: Option<&str>) -> Result<BuilderDescriptor> {
        let record = self.record(name)?;

        match config {
            None if !record.configs.is_empty() => Ok(record.descriptor(None)),
            None => {
                let info = record.info.clone().ok_or_else(|| {
                    CatalogError::unresolved(name, "builder has neither configurations nor info")
                })?;
                Ok(record.descriptor(Some(info)))
            }
            Some(config_name) => {
                if record.configs.is_empty() {
                    return Err(CatalogError::unresolved_config(
                        name,
                        config_name,
                        "builder has no configurations",
                    ));
                }
                let config = record
                    .configs
                    .iter()
                    .find(|c| c.name == config_name)
                    .ok_or_else(|| {
                        CatalogError::unresolved_config(name, config_name, "unknown configuration")
                    })?;
                Ok(record.descriptor(Some(config.info.clone())))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "builders": [
            {
                "name": "mnist",
                "module": "tensorflow_datasets.image.mnist",
                "class_name": "MNIST",
                "info": {"version": "1.0.0", "size_in_bytes": 100}
            },
            {
                "name": "glue",
                "module": "tensorflow_datasets.text.glue",
                "class_name": "Glue",
                "config_class": "GlueConfig",
                "configs": [
                    {"name": "cola", "version": "0.0.2", "info": {"version": "0.0.2"}},
                    {"name": "sst2", "version": "0.0.2", "info": {"version": "0.0.2", "size_in_bytes": 7}}
                ]
            }
        ]
    }"#;

    #[test]
    fn test_list_preserves_file_order() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();
        assert_eq!(registry.list_builder_names(), vec!["mnist", "glue"]);
    }

    #[test]
    fn test_resolve_plain_builder() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();
        let mnist = registry.resolve_builder("mnist", None).unwrap();
        assert!(!mnist.has_configs());
        assert_eq!(mnist.info().unwrap().size_in_bytes, 100);
        assert_eq!(mnist.config_class, BUILDER_CONFIG);
    }

    #[test]
    fn test_resolve_configured_builder() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();

        let glue = registry.resolve_builder("glue", None).unwrap();
        assert!(glue.info.is_none());
        assert_eq!(glue.configs.len(), 2);
        assert_eq!(glue.config_class, "GlueConfig");

        let sst2 = registry.resolve_builder("glue", Some("sst2")).unwrap();
        assert_eq!(sst2.info().unwrap().size_in_bytes, 7);
    }

    #[test]
    fn test_resolution_errors() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();

        assert!(matches!(
            registry.resolve_builder("missing", None),
            Err(CatalogError::Resolution { .. })
        ));
        assert!(matches!(
            registry.resolve_builder("glue", Some("qqp")),
            Err(CatalogError::Resolution { config: Some(_), .. })
        ));
        assert!(matches!(
            registry.resolve_builder("mnist", Some("default")),
            Err(CatalogError::Resolution { .. })
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let snapshot = RegistrySnapshot {
            builders: vec![
                BuilderRecord {
                    name: "a".to_owned(),
                    module: "tensorflow_datasets.x.a".to_owned(),
                    class_name: "A".to_owned(),
                    config_class: None,
                    info: None,
                    configs: vec![],
                };
                2
            ],
        };
        assert!(SnapshotRegistry::new(snapshot).is_err());
    }
}
