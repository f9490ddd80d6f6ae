//! Pretty-printing of feature schemas.
//!
//! A schema renders as a mapping literal with one key per line, keys in
//! lexicographic order:
//!
//! ```text
//! FeaturesDict({
//!     'image': Image(shape=(28, 28, 1), dtype=tf.uint8),
//!     'meta': {
//!         'id': Text(shape=(), dtype=tf.string),
//!     },
//! })
//! ```
//!
//! Only the root carries the container type name.

use crate::registry::{DatasetInfo, FeatureNode, FeaturesDict};

/// Render `dict` as the root of a schema, starting at `indent` spaces.
///
/// Schemas are owned trees, so any nesting depth renders.
pub fn pprint_features_dict(dict: &FeaturesDict, indent: usize) -> String {
    render_dict(dict, indent, true)
}

fn render_dict(dict: &FeaturesDict, indent: usize, is_root: bool) -> String {
    let outer = " ".repeat(indent);
    let inner = " ".repeat(indent + 4);

    let mut lines = Vec::with_capacity(dict.features.len() + 2);
    lines.push(if is_root {
        format!("{outer}{}({{", dict.type_name)
    } else {
        "{".to_owned()
    });

    // BTreeMap iterates in key order
    for (key, node) in &dict.features {
        let value = match node {
            FeatureNode::Leaf(leaf) => leaf.to_string(),
            FeatureNode::Dict(nested) => render_dict(nested, indent + 4, false),
        };
        lines.push(format!("{inner}'{key}': {value},"));
    }

    lines.push(if is_root {
        format!("{outer}}})")
    } else {
        format!("{outer}}}")
    });

    lines.join("\n")
}

/// Fenced code block with the schema of `info`.
pub fn feature_information(info: &DatasetInfo) -> String {
    let rendered = pprint_features_dict(&info.features, 0);
    format!("```python\n{rendered}\n```\n")
}
