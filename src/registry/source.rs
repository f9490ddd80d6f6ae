//! Mapping from builder module paths to display names and source links.

use crate::config::DocsConfig;

/// Resolves module paths to repository URLs and shortened display paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLinker {
    /// Repository URL of the root package directory
    pub base_url: String,
    /// Root package segment stripped from module paths
    pub root: String,
    /// Alias shown in place of the root segment
    pub display_root: String,
    /// File extension of implementation files
    pub extension: String,
}

impl SourceLinker {
    pub fn from_config(config: &DocsConfig) -> Self {
        Self {
            base_url: config.source_base_url.trim_end_matches('/').to_owned(),
            root: config.root_package.clone(),
            display_root: config.display_root.clone(),
            extension: config.source_extension.clone(),
        }
    }

    fn relative_segments<'a>(&self, module: &'a str) -> Vec<&'a str> {
        let mut segments: Vec<&str> = module.split('.').collect();
        if segments.first().is_some_and(|s| *s == self.root) {
            segments.remove(0);
        }
        segments
    }

    /// Absolute link to the file implementing `module`.
    pub fn source_url(&self, module: &str) -> String {
        let path = self.relative_segments(module).join("/");
        if self.extension.is_empty() {
            format!("{}/{path}", self.base_url)
        } else {
            format!("{}/{path}.{}", self.base_url, self.extension)
        }
    }

    /// Module path with the root segment replaced by the display alias.
    pub fn display_module(&self, module: &str) -> String {
        let rest = self.relative_segments(module);
        if rest.len() == module.split('.').count() {
            return module.to_owned();
        }
        std::iter::once(self.display_root.as_str())
            .chain(rest)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Default for SourceLinker {
    fn default() -> Self {
        Self::from_config(&DocsConfig::default())
    }
}
