//! Reader configuration, loadable from YAML or JSON.

use serde::Deserialize;

/// Configuration for a multi-source reader.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReaderConfig {
    /// Sources, in reading order
    #[serde(default)]
    pub sources: Vec<SourceConfig>,
    /// Record format: "plaintext", "json", "yaml" or "csv"
    #[serde(default)]
    pub format: Option<String>,
    /// Character encoding label, e.g. "utf-8" or "iso-8859-1"
    #[serde(default)]
    pub encoding: Option<String>,
    /// Behavior on an empty source list: "fail" or "ignore"
    #[serde(default)]
    pub empty_sources: Option<String>,
}

/// Configuration for a single source.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Unique identifier for this source
    pub id: String,
    /// Kind of source: "file", "stdin" or "inline"
    pub kind: String,
    /// File path (for file sources)
    #[serde(default)]
    pub path: Option<String>,
    /// Literal content (for inline sources)
    #[serde(default)]
    pub content: Option<String>,
}

impl ReaderConfig {
    /// Create a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source configuration.
    pub fn add_source(mut self, source: SourceConfig) -> Self {
        self.sources.push(source);
        self
    }

    /// Set the record format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the encoding.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Set the empty sources policy.
    pub fn with_empty_sources(mut self, policy: impl Into<String>) -> Self {
        self.empty_sources = Some(policy.into());
        self
    }
}

impl SourceConfig {
    /// A file source.
    pub fn file(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "file".into(),
            path: Some(path.into()),
            content: None,
        }
    }

    /// An inline source holding `content`.
    pub fn inline(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "inline".into(),
            path: None,
            content: Some(content.into()),
        }
    }

    /// The stdin source.
    pub fn stdin() -> Self {
        Self {
            id: "-".into(),
            kind: "stdin".into(),
            path: None,
            content: None,
        }
    }
}
