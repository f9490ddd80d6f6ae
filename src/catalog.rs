//! Catalog documentation for the datasets of a registry.
//!
//! The pipeline runs leaf-first:
//!
//! - [`namespace`]: resolve builders and group them by module path
//! - [`document`]: order sections and builders, emit the table of contents
//! - [`entry`]: one Markdown section per builder (and per configuration)
//! - [`features`]: pretty-print nested feature schemas
//! - [`statistics`]: per-split example counts
//! - [`schema_org`]: JSON-LD records for dataset search
//!
//! ## Usage
//!
//! ```no_run
//! use dsdoc::catalog::dataset_docs_str;
//! use dsdoc::config::DocsConfig;
//! use dsdoc::registry::SnapshotRegistry;
//! use std::path::Path;
//!
//! # fn example() -> dsdoc::error::Result<()> {
//! let registry = SnapshotRegistry::from_file(Path::new("registry.json"))?;
//! let markdown = dataset_docs_str(&registry, &DocsConfig::default(), None)?;
//! std::fs::write("datasets.md", markdown)?;
//! # Ok(())
//! # }
//! ```
//!
//! Generation is all-or-nothing: an unresolvable builder or configuration
//! aborts the run without producing a partial document.

pub mod document;
pub mod entry;
pub mod features;
pub mod namespace;
pub mod schema_org;
pub mod statistics;

pub use document::{dataset_docs_str, render_document};
pub use entry::EntryRenderer;
pub use features::pprint_features_dict;
pub use namespace::{NamespaceTree, group_descriptors, make_module_to_builder_tree};
pub use schema_org::schema_org;
pub use statistics::render_statistics;
