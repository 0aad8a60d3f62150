//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{BoxError, ReaderError};

/// A diagnostic wrapper for reader errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ReaderDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<BoxError>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<ReaderError> for ReaderDiagnostic {
    fn from(e: ReaderError) -> Self {
        match e {
            ReaderError::InvalidArgument(message) => ReaderDiagnostic {
                message,
                source: None,
                help: Some("Check the source arguments, format and encoding".into()),
                severity: Severity::Error,
            },
            ReaderError::SourceAccess {
                stage,
                source_id,
                error,
            } => ReaderDiagnostic {
                message: format!("[{stage}] on '{source_id}'"),
                source: Some(error),
                help: Some("Make sure the source exists and is readable".into()),
                severity: Severity::Error,
            },
            ReaderError::RecordFormat {
                source_id,
                record,
                error,
            } => ReaderDiagnostic {
                message: format!("malformed record #{record} in '{source_id}'"),
                source: Some(error),
                help: Some("All sources must share the same record format".into()),
                severity: Severity::Error,
            },
            ReaderError::NoSources => ReaderDiagnostic {
                message: "no sources to read".into(),
                source: None,
                help: Some("Pass at least one source, or allow empty source lists".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<ReaderError> for miette::Report {
    fn from(e: ReaderError) -> Self {
        miette::Report::new(ReaderDiagnostic::from(e))
    }
}
