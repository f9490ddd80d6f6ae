//! schema.org `Dataset` records in JSON-LD, for dataset search engines.
//!
//! Markup reference: <https://developers.google.com/search/docs/data-types/dataset>

use super::entry::default_info;
use crate::error::Result;
use crate::registry::{BuilderDescriptor, DatasetInfo, Registry};
use crate::utils::size_str;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonLdDataset<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<&'a str>,
    size: String,
}

/// JSON-LD for `builder` described by `info`.
pub fn schema_org_record(builder: &BuilderDescriptor, info: &DatasetInfo) -> Result<String> {
    let record = JsonLdDataset {
        context: "https://schema.org/",
        kind: "Dataset",
        name: &builder.name,
        description: &info.description,
        url: info.primary_url(),
        size: size_str(info.size_in_bytes),
    };
    Ok(serde_json::to_string_pretty(&record)?)
}

/// JSON-LD for the registered builder `name`.
///
/// Builders with configurations are described by their first configuration.
///
/// # Errors
///
/// Fails when the builder (or its default configuration) cannot be resolved.
pub fn schema_org<R: Registry + ?Sized>(registry: &R, name: &str) -> Result<String> {
    let builder = registry.resolve_builder(name, None)?;
    let info = default_info(registry, &builder)?;
    schema_org_record(&builder, &info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SnapshotRegistry;

    const SNAPSHOT: &str = r#"{"builders": [
        {"name": "mnist", "module": "tensorflow_datasets.image.mnist", "class_name": "MNIST",
         "info": {"description": "Handwritten \"digits\"", "version": "1.0.0",
                  "urls": ["http://yann.lecun.com/exdb/mnist/"], "size_in_bytes": 11596411}},
        {"name": "bare", "module": "tensorflow_datasets.text.bare", "class_name": "Bare",
         "info": {"version": "1.0.0"}}
    ]}"#;

    #[test]
    fn test_record_fields() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();
        let json = schema_org(&registry, "mnist").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["@context"], "https://schema.org/");
        assert_eq!(value["@type"], "Dataset");
        assert_eq!(value["name"], "mnist");
        assert_eq!(value["description"], "Handwritten \"digits\"");
        assert_eq!(value["url"], "http://yann.lecun.com/exdb/mnist/");
        assert_eq!(value["size"], "11.06 MiB");
    }

    #[test]
    fn test_url_omitted_when_unknown() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();
        let json = schema_org(&registry, "bare").unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("url").is_none());
        assert_eq!(value["size"], "?? GiB");
    }

    #[test]
    fn test_unknown_builder() {
        let registry = SnapshotRegistry::from_json(SNAPSHOT).unwrap();
        assert!(schema_org(&registry, "nope").is_err());
    }
}
