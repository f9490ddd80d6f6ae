//! Grouping of builders by their module path.
//!
//! `tensorflow_datasets.image.mnist` lands in the bucket at
//! `image -> mnist` once the root package segment is dropped.

use crate::config::DocsConfig;
use crate::error::Result;
use crate::registry::{BuilderDescriptor, Registry};
use std::collections::{BTreeMap, HashSet};

/// Tree of builders keyed by module path segment.
///
/// Every node owns a bucket of builders registered exactly at its path plus
/// its child nodes. Buckets keep encounter order and are never merged.
#[derive(Debug, Default)]
pub struct NamespaceTree {
    builders: Vec<BuilderDescriptor>,
    children: BTreeMap<String, NamespaceTree>,
}

impl NamespaceTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `builder` to the bucket at `path`, creating nodes on the way.
    pub fn insert<S: AsRef<str>>(&mut self, path: &[S], builder: BuilderDescriptor) {
        let mut node = self;
        for segment in path {
            node = node.children.entry(segment.as_ref().to_owned()).or_default();
        }
        node.builders.push(builder);
    }

    /// Builders registered exactly at this node.
    pub fn builders(&self) -> &[BuilderDescriptor] {
        &self.builders
    }

    /// Child nodes, ordered by segment.
    pub fn children(&self) -> &BTreeMap<String, Self> {
        &self.children
    }

    pub fn child(&self, segment: &str) -> Option<&Self> {
        self.children.get(segment)
    }

    /// Detach and return the child at `segment`.
    pub fn take_child(&mut self, segment: &str) -> Option<Self> {
        self.children.remove(segment)
    }

    /// Every builder in this subtree: own bucket first, then children in segment order.
    pub fn flatten(&self) -> Vec<&BuilderDescriptor> {
        let mut out: Vec<&BuilderDescriptor> = self.builders.iter().collect();
        for child in self.children.values() {
            out.extend(child.flatten());
        }
        out
    }

    /// Number of builders in this subtree.
    pub fn len(&self) -> usize {
        self.builders.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group already-resolved builders under the configured root package.
///
/// Builders whose module path contains the excluded segment are dropped, as
/// are builders living outside the root package.
pub fn group_descriptors<I>(builders: I, config: &DocsConfig) -> NamespaceTree
where
    I: IntoIterator<Item = BuilderDescriptor>,
{
    let mut tree = NamespaceTree::new();

    for builder in builders {
        let segments: Vec<String> = builder
            .module_segments()
            .into_iter()
            .map(str::to_owned)
            .collect();
        if segments.iter().any(|s| *s == config.excluded_segment) {
            tracing::debug!(builder = %builder.name, module = %builder.module, "Skipping excluded builder");
            continue;
        }
        tree.insert(&segments, builder);
    }

    let root = tree.take_child(&config.root_package).unwrap_or_default();

    for (segment, outside) in tree.children() {
        for builder in outside.flatten() {
            tracing::warn!(
                builder = %builder.name,
                "Skipping builder outside root package '{}' (found under '{segment}')",
                config.root_package
            );
        }
    }

    root
}

/// Names to document: `datasets` in first-seen order without repeats when
/// given, otherwise every registered builder except the manual-construction
/// ones.
pub fn builder_names<R: Registry + ?Sized>(
    registry: &R,
    config: &DocsConfig,
    datasets: Option<&[String]>,
) -> Vec<String> {
    match datasets {
        Some(names) => {
            let mut seen = HashSet::new();
            names
                .iter()
                .filter(|name| seen.insert(name.as_str()))
                .cloned()
                .collect()
        }
        None => registry
            .list_builder_names()
            .into_iter()
            .filter(|name| !config.is_manual_builder(name))
            .collect(),
    }
}

/// Resolve and group builders from the registry.
///
/// # Errors
///
/// Any builder the registry cannot resolve aborts the grouping.
pub fn make_module_to_builder_tree<R: Registry + ?Sized>(
    registry: &R,
    config: &DocsConfig,
    datasets: Option<&[String]>,
) -> Result<NamespaceTree> {
    let builders = builder_names(registry, config, datasets)
        .iter()
        .map(|name| registry.resolve_builder(name, None))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = builders.len(), "Resolved builders");
    Ok(group_descriptors(builders, config))
}
