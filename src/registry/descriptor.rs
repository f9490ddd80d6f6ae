//! Core data structures describing registered dataset builders.
//!
//! These are read-only snapshots handed out by a [`Registry`](super::Registry);
//! the catalog renderers never mutate them.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Default type name of a feature-schema container.
pub const FEATURES_DICT: &str = "FeaturesDict";

/// Default class name of a builder configuration.
pub const BUILDER_CONFIG: &str = "BuilderConfig";

/// One registered dataset builder.
///
/// A builder that declares configurations carries no standalone info record:
/// `info` is only populated when the builder was resolved with a specific
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderDescriptor {
    /// Unique snake_case dataset name (e.g. `mnist`)
    pub name: String,

    /// Dot-separated origin module path (e.g. `tensorflow_datasets.image.mnist`)
    pub module: String,

    /// Implementing class name (e.g. `MNIST`)
    pub class_name: String,

    /// Class name of the configuration type
    #[serde(default = "default_config_class")]
    pub config_class: String,

    /// Predefined configurations, in declaration order (first is the default)
    #[serde(default)]
    pub configs: Vec<ConfigDescriptor>,

    /// Resolved metadata record
    #[serde(default)]
    pub info: Option<DatasetInfo>,
}

fn default_config_class() -> String {
    BUILDER_CONFIG.to_owned()
}

impl BuilderDescriptor {
    /// Whether this builder exposes named configurations.
    pub fn has_configs(&self) -> bool {
        !self.configs.is_empty()
    }

    /// Module path split into its segments.
    pub fn module_segments(&self) -> Vec<&str> {
        self.module.split('.').collect()
    }

    /// The resolved info record, or a resolution error when there is none.
    pub fn info(&self) -> Result<&DatasetInfo> {
        self.info
            .as_ref()
            .ok_or_else(|| CatalogError::unresolved(&self.name, "no info record resolved"))
    }
}

/// A named, versioned configuration of a builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDescriptor {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

/// Metadata of a resolved builder (or builder configuration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Dataset version (e.g. `1.0.0`)
    pub version: String,

    /// Source URLs, most relevant first
    #[serde(default)]
    pub urls: Vec<String>,

    /// Total size on disk
    #[serde(default)]
    pub size_in_bytes: u64,

    /// `(input, target)` keys for supervised loading
    #[serde(default)]
    pub supervised_keys: Option<SupervisedKeys>,

    /// BibTeX citation, possibly empty
    #[serde(default)]
    pub citation: String,

    /// Feature schema
    #[serde(default)]
    pub features: FeaturesDict,

    /// Precomputed split statistics in declaration order; empty when not computed
    #[serde(default)]
    pub splits: Vec<SplitInfo>,
}

impl DatasetInfo {
    /// Sum of examples over all splits. Zero means statistics were never computed.
    pub fn total_num_examples(&self) -> u64 {
        self.splits.iter().map(|s| s.num_examples).sum()
    }

    /// First URL, if any.
    pub fn primary_url(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}

/// Example count for one split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitInfo {
    pub name: String,
    pub num_examples: u64,
}

impl SplitInfo {
    pub fn new(name: impl Into<String>, num_examples: u64) -> Self {
        Self {
            name: name.into(),
            num_examples,
        }
    }
}

/// `(input, target)` feature pair used for supervised loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupervisedKeys(pub String, pub String);

impl fmt::Display for SupervisedKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "('{}', '{}')", self.0, self.1)
    }
}

/// Display form of optional supervised keys; absence renders as `None`.
pub fn supervised_keys_str(keys: Option<&SupervisedKeys>) -> String {
    keys.map_or_else(|| "None".to_owned(), ToString::to_string)
}

/// Recursive feature schema: a container type name plus features ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturesDict {
    #[serde(default = "default_features_dict")]
    pub type_name: String,

    #[serde(default)]
    pub features: BTreeMap<String, FeatureNode>,
}

fn default_features_dict() -> String {
    FEATURES_DICT.to_owned()
}

impl Default for FeaturesDict {
    fn default() -> Self {
        Self {
            type_name: default_features_dict(),
            features: BTreeMap::new(),
        }
    }
}

impl FeaturesDict {
    /// Builder-style insertion, mostly for fixtures.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, node: impl Into<FeatureNode>) -> Self {
        self.features.insert(key.into(), node.into());
        self
    }
}

/// A schema entry: either a leaf feature or a nested schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum FeatureNode {
    Leaf(FeatureLeaf),
    Dict(FeaturesDict),
}

impl From<FeatureLeaf> for FeatureNode {
    fn from(leaf: FeatureLeaf) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<FeaturesDict> for FeatureNode {
    fn from(dict: FeaturesDict) -> Self {
        Self::Dict(dict)
    }
}

/// A leaf feature such as `Image(shape=(28, 28, 1), dtype=tf.uint8)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLeaf {
    /// Feature kind (e.g. `Image`, `ClassLabel`, `Tensor`)
    pub kind: String,

    /// Dimensions; `None` is an unknown dimension
    #[serde(default)]
    pub shape: Vec<Option<u64>>,

    /// Element dtype (e.g. `tf.uint8`)
    pub dtype: String,

    /// Extra parameters shown after the dtype, ordered by key
    #[serde(default)]
    pub params: BTreeMap<String, String>,
}

impl FeatureLeaf {
    pub fn new(kind: impl Into<String>, shape: &[Option<u64>], dtype: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            shape: shape.to_vec(),
            dtype: dtype.into(),
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for FeatureLeaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims: Vec<String> = self
            .shape
            .iter()
            .map(|d| d.map_or_else(|| "None".to_owned(), |n| n.to_string()))
            .collect();
        let shape = match dims.as_slice() {
            [single] => format!("({single},)"),
            _ => format!("({})", dims.join(", ")),
        };

        write!(f, "{}(shape={shape}, dtype={}", self.kind, self.dtype)?;
        for (key, value) in &self.params {
            write!(f, ", {key}={value}")?;
        }
        write!(f, ")")
    }
}
