//! Assembly of the full catalog document.

use super::entry::EntryRenderer;
use super::namespace::{NamespaceTree, make_module_to_builder_tree};
use crate::config::DocsConfig;
use crate::error::Result;
use crate::registry::{BuilderDescriptor, Registry, SourceLinker};

/// One top-level namespace of the catalog with its builders sorted by name.
#[derive(Debug)]
pub struct Section<'t> {
    pub name: &'t str,
    pub builders: Vec<&'t BuilderDescriptor>,
}

/// Split the grouped tree into sections: one per immediate child, ordered by
/// name, each holding every builder of its subtree ordered by name.
pub fn sections(tree: &NamespaceTree) -> Vec<Section<'_>> {
    for builder in tree.builders() {
        tracing::warn!(builder = %builder.name, "Skipping builder without a section segment");
    }

    tree.children()
        .iter()
        .map(|(name, node)| {
            let mut builders = node.flatten();
            builders.sort_by(|a, b| a.name.cmp(&b.name));
            Section {
                name: name.as_str(),
                builders,
            }
        })
        .collect()
}

/// Table-of-contents entry for a section.
pub fn create_section_toc(section: &Section<'_>) -> String {
    let mut lines = vec![format!("* [`{0}`](#{0})", section.name)];
    lines.extend(
        section
            .builders
            .iter()
            .map(|b| format!("  * [`\"{0}\"`](#{0})", b.name)),
    );
    lines.join("\n")
}

fn section_doc(section: &Section<'_>, entries: &[String]) -> String {
    format!(
        "## [`{name}`](#{name})\n\n{datasets}\n",
        name = section.name,
        datasets = entries.join("\n"),
    )
}

fn full_doc(toc: &str, datasets: &str) -> String {
    format!(
        "<!-- auto-generated by dsdoc -->
# Datasets

## Usage

```sh
# See all registered datasets
dsdoc --registry registry.json list

# Regenerate this page
dsdoc --registry registry.json docs > docs/datasets.md

# Document only some datasets
dsdoc --registry registry.json docs --dataset mnist --dataset cifar10

# schema.org JSON-LD record of a single dataset
dsdoc --registry registry.json json-ld mnist
```

---

## All Datasets

{toc}

---

{datasets}
"
    )
}

/// Render the catalog document for `tree`.
///
/// # Errors
///
/// The first entry that fails to render aborts the whole document.
pub fn render_document<R: Registry + ?Sized>(
    registry: &R,
    linker: &SourceLinker,
    tree: &NamespaceTree,
) -> Result<String> {
    let renderer = EntryRenderer::new(registry, linker);

    let mut section_tocs = Vec::new();
    let mut section_docs = Vec::new();
    for section in sections(tree) {
        let entries = section
            .builders
            .iter()
            .map(|b| renderer.render(b))
            .collect::<Result<Vec<_>>>()?;

        section_docs.push(section_doc(&section, &entries));
        section_tocs.push(create_section_toc(&section));
    }

    Ok(full_doc(&section_tocs.join("\n"), &section_docs.join("\n")))
}

/// Catalog documentation for `datasets`, or for every registered builder
/// when `datasets` is `None`.
///
/// # Errors
///
/// Fails on the first builder or configuration the registry cannot resolve.
/// No partial document is returned.
pub fn dataset_docs_str<R: Registry + ?Sized>(
    registry: &R,
    config: &DocsConfig,
    datasets: Option<&[String]>,
) -> Result<String> {
    let tree = make_module_to_builder_tree(registry, config, datasets)?;
    tracing::info!(builders = tree.len(), sections = tree.children().len(), "Generating catalog");

    let linker = SourceLinker::from_config(config);
    render_document(registry, &linker, &tree)
}
