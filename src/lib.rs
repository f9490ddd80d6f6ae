//! # dsdoc - Dataset Catalog Documentation
//!
//! dsdoc turns the state of a dataset registry into a Markdown catalog: every
//! registered builder gets a section with its description, feature schema,
//! split statistics, citation and links, grouped by namespace and indexed by
//! a table of contents. A JSON-LD (schema.org `Dataset`) record can be
//! produced per builder as well.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dsdoc::catalog::{dataset_docs_str, schema_org};
//! use dsdoc::config::DocsConfig;
//! use dsdoc::registry::SnapshotRegistry;
//! use std::path::Path;
//!
//! # fn example() -> dsdoc::error::Result<()> {
//! let registry = SnapshotRegistry::from_file(Path::new("registry.json"))?;
//! let config = DocsConfig::default();
//!
//! let markdown = dataset_docs_str(&registry, &config, None)?;
//! let json_ld = schema_org(&registry, "mnist")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`catalog`]: grouping, rendering and document assembly
//! - [`registry`]: the registry interface, descriptor types and a JSON snapshot registry
//! - [`config`]: generation settings
//! - [`error`]: error types and handling utilities
//! - [`logging`]: tracing setup
//! - [`utils`]: size and count formatting
//!
//! ## Determinism
//!
//! Output depends only on the registry snapshot: sections, builders and
//! feature keys are explicitly sorted, and configurations keep their declared
//! order. Rendering the same snapshot twice gives byte-identical documents.

#![warn(clippy::all, rust_2018_idioms)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod utils;
