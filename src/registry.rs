//! Dataset registry interface and the descriptor types it hands out.
//!
//! The catalog never talks to a concrete registry directly. Everything goes
//! through the [`Registry`] trait so renderers can be exercised with fixed
//! fixtures, and so per-configuration resolution stays an explicit,
//! injectable dependency.
//!
//! ## Usage
//!
//! ```no_run
//! use dsdoc::registry::{Registry, SnapshotRegistry};
//! use std::path::Path;
//!
//! # fn example() -> dsdoc::error::Result<()> {
//! let registry = SnapshotRegistry::from_file(Path::new("registry.json"))?;
//! for name in registry.list_builder_names() {
//!     let builder = registry.resolve_builder(&name, None)?;
//!     println!("{} -> {}", builder.name, builder.module);
//! }
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod snapshot;
pub mod source;

pub use descriptor::{
    BuilderDescriptor, ConfigDescriptor, DatasetInfo, FeatureLeaf, FeatureNode, FeaturesDict,
    SplitInfo, SupervisedKeys,
};
pub use snapshot::{RegistrySnapshot, SnapshotRegistry};
pub use source::SourceLinker;

use crate::error::Result;

/// Source of registered dataset builders.
pub trait Registry {
    /// All registered dataset names, in registration order.
    fn list_builder_names(&self) -> Vec<String>;

    /// Fully populated descriptor for `name`, optionally resolved with a
    /// specific configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Resolution`](crate::error::CatalogError::Resolution)
    /// when the name or name/config pair cannot be resolved.
    fn resolve_builder(&self, name: &str, config: Option<&str>) -> Result<BuilderDescriptor>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn list_builder_names(&self) -> Vec<String> {
        (**self).list_builder_names()
    }

    fn resolve_builder(&self, name: &str, config: Option<&str>) -> Result<BuilderDescriptor> {
        (**self).resolve_builder(name, config)
    }
}
