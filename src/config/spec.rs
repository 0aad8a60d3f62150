//! Resolved source specifications.

use std::sync::Arc;

use crate::format::FormatKind;
use crate::io::InputProvider;

/// Specification for a single source.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    /// Raw argument or configuration id
    pub raw: String,
    /// The input provider implementation
    pub provider: Arc<dyn InputProvider>,
    /// Format inferred from the argument (e.g. a file extension)
    pub inferred_format: Option<FormatKind>,
}

impl SourceSpec {
    /// Create a new source specification.
    pub fn new(raw: impl Into<String>, provider: Arc<dyn InputProvider>) -> Self {
        Self {
            raw: raw.into(),
            provider,
            inferred_format: None,
        }
    }

    /// Set the inferred format.
    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.inferred_format = Some(format);
        self
    }
}
