//! CLI integration helpers.
//!
//! This module provides utilities to turn command-line arguments into a
//! [`MultiSourceBuilder`](crate::MultiSourceBuilder). With the `sarge`
//! feature, [`SourceArgs`] can be parsed directly by `sarge`.
//!
//! ```rust,ignore
//! let args = SourceArgs::new()
//!     .with_source("a.json")
//!     .with_source("b.json");
//!
//! let mut reader = MultiSourceBuilder::new()
//!     .with_source_args(&args)?
//!     .build::<serde_json::Value>()?;
//! ```

use crate::encoding::Encoding;
use crate::error::Result;
use crate::format::FormatKind;

/// Common source arguments for CLI applications.
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    /// Source tokens. Use "-" for stdin.
    pub sources: Vec<String>,
    /// Explicit record format (overrides extension detection).
    pub format: Option<String>,
    /// Character encoding label.
    pub encoding: Option<String>,
    /// Treat an empty source list as an empty stream.
    pub allow_empty: bool,
}

impl SourceArgs {
    /// Create new empty source arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source token.
    pub fn with_source(mut self, token: impl Into<String>) -> Self {
        self.sources.push(token.into());
        self
    }

    /// Set explicit format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the encoding label.
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Accept an empty source list.
    pub fn with_allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Parse the format string into FormatKind.
    pub fn format_kind(&self) -> Result<Option<FormatKind>> {
        self.format.as_deref().map(str::parse).transpose()
    }

    /// Parse the encoding label.
    pub fn encoding(&self) -> Result<Option<Encoding>> {
        self.encoding.as_deref().map(str::parse).transpose()
    }

    /// Check if reading from stdin.
    pub fn is_stdin(&self) -> bool {
        self.sources.iter().any(|s| s == "-")
    }

    /// Check if no sources were given.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Split a comma separated list of source tokens.
///
/// `stdin` is normalized to `-`. Inline tokens (`=...`) are kept whole, so
/// they may contain commas.
pub fn split_source_tokens(value: &str) -> Vec<String> {
    if value.starts_with('=') {
        return vec![value.to_string()];
    }

    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|token| {
            if token.eq_ignore_ascii_case("stdin") {
                "-".to_string()
            } else {
                token.to_string()
            }
        })
        .collect()
}

#[cfg(feature = "sarge")]
mod sarge;

#[cfg(feature = "sarge")]
pub use self::sarge::SourceTokens;
