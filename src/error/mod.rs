//! Error types for multi-source record reading.
//!
//! This module provides:
//! - `Stage`: Indicates which lifecycle step of a source failed
//! - `ReaderError`: The error returned by every reader in this crate
//! - `FormatError`: Low-level decoding errors produced by record streams

use std::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = ReaderError> = std::result::Result<T, E>;

/// Boxed error carried inside [`ReaderError`] variants.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Error while opening the source
    Open,
    /// Error while pulling bytes from the source
    Read,
    /// Error while releasing the source
    Close,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Open => write!(f, "Open"),
            Stage::Read => write!(f, "Read"),
            Stage::Close => write!(f, "Close"),
        }
    }
}

/// Errors surfaced by record readers.
///
/// Errors raised by a delegate reader travel through
/// [`MultiSourceReader`](crate::MultiSourceReader) untouched, so callers can
/// match on the variant produced by the concrete reader.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// A reader was configured with an unusable argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A source could not be opened, read or closed.
    #[error("[{stage}] {source_id}: {error}")]
    SourceAccess {
        /// Stage where the error occurred
        stage: Stage,
        /// Identifier of the source (file path, "-" for stdin, etc.)
        source_id: String,
        /// The underlying error
        #[source]
        error: BoxError,
    },

    /// A record could not be decoded.
    #[error("Malformed record #{record} in {source_id}: {error}")]
    RecordFormat {
        /// Identifier of the source
        source_id: String,
        /// Number of the offending record within its source, starting at 1
        record: u64,
        /// The underlying error
        #[source]
        error: BoxError,
    },

    /// `open` was called on a reader with no sources.
    #[error("No source to open: the source sequence is empty")]
    NoSources,
}

impl ReaderError {
    /// Build a `SourceAccess` error.
    pub fn access(stage: Stage, source_id: impl Into<String>, error: impl Into<BoxError>) -> Self {
        ReaderError::SourceAccess {
            stage,
            source_id: source_id.into(),
            error: error.into(),
        }
    }

    /// Build an `InvalidArgument` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ReaderError::InvalidArgument(message.into())
    }

    /// The stage of a `SourceAccess` error.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            ReaderError::SourceAccess { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// The source a delegate error refers to, if any.
    pub fn source_id(&self) -> Option<&str> {
        match self {
            ReaderError::SourceAccess { source_id, .. }
            | ReaderError::RecordFormat { source_id, .. } => Some(source_id),
            _ => None,
        }
    }
}

/// Errors that can occur while decoding a record stream.
#[derive(Debug, Error)]
pub enum FormatError {
    /// I/O error while pulling bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Deserialization error
    #[error("Serde error: {0}")]
    Serde(BoxError),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
