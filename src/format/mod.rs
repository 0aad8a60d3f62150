//! Record formats and the single-source readers built on them.
//!
//! This module provides:
//! - `FormatKind`: Enum representing the supported record formats
//! - Streaming helpers turning a `Read` into an iterator of records
//! - `FormatReader`: A `RecordReader` over one `InputProvider`
//! - `FormatReaderFactory`: The `ReaderFactory` creating `FormatReader`s

use std::io::BufRead;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::error::{FormatError, ReaderError};

#[cfg(feature = "csv")]
mod csv;
#[cfg(feature = "json")]
mod json;
#[cfg(feature = "plaintext")]
mod plaintext;
mod reader;
#[cfg(feature = "yaml")]
mod yaml;

#[cfg(feature = "csv")]
pub use self::csv::deserialize_csv_stream;
#[cfg(feature = "json")]
pub use json::deserialize_json_stream;
#[cfg(feature = "plaintext")]
pub use plaintext::deserialize_plaintext_stream;
pub use reader::{
    FormatReader, FormatReaderFactory, MultiFileReader, MultiInputReader, multi_file_reader,
};
#[cfg(feature = "yaml")]
pub use yaml::deserialize_yaml_stream;

/// Boxed iterator of decoded records.
pub type RecordStream<T> = Box<dyn Iterator<Item = Result<T, FormatError>>>;

/// Represents the supported record formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    /// One record per line
    Plaintext,
    /// A sequence of JSON values (NDJSON or concatenated)
    Json,
    /// A stream of `---` separated YAML documents
    Yaml,
    /// One record per row, with a header row
    Csv,
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatKind::Plaintext => write!(f, "plaintext"),
            FormatKind::Json => write!(f, "json"),
            FormatKind::Yaml => write!(f, "yaml"),
            FormatKind::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for FormatKind {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plaintext" | "text" | "txt" | "lines" => Ok(FormatKind::Plaintext),
            "json" | "ndjson" | "jsonl" => Ok(FormatKind::Json),
            "yaml" | "yml" => Ok(FormatKind::Yaml),
            "csv" => Ok(FormatKind::Csv),
            _ => Err(ReaderError::invalid(format!("unknown format: {s}"))),
        }
    }
}

impl FormatKind {
    /// All formats, in detection order.
    pub const ALL: [FormatKind; 4] = [
        FormatKind::Json,
        FormatKind::Yaml,
        FormatKind::Csv,
        FormatKind::Plaintext,
    ];

    /// Get file extensions for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FormatKind::Plaintext => &["txt", "text", "log"],
            FormatKind::Json => &["json", "ndjson", "jsonl"],
            FormatKind::Yaml => &["yaml", "yml"],
            FormatKind::Csv => &["csv"],
        }
    }

    /// Get the format associated with a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Check if this format is available (feature enabled).
    pub fn is_available(&self) -> bool {
        match self {
            FormatKind::Plaintext => cfg!(feature = "plaintext"),
            FormatKind::Json => cfg!(feature = "json"),
            FormatKind::Yaml => cfg!(feature = "yaml"),
            FormatKind::Csv => cfg!(feature = "csv"),
        }
    }
}

/// Start the record stream of `kind` over an already decoded reader.
pub fn stream_records<T, R>(kind: FormatKind, reader: R) -> Result<RecordStream<T>, ReaderError>
where
    T: DeserializeOwned + 'static,
    R: BufRead + 'static,
{
    match kind {
        #[cfg(feature = "plaintext")]
        FormatKind::Plaintext => Ok(Box::new(deserialize_plaintext_stream::<T, R>(reader))),

        #[cfg(feature = "json")]
        FormatKind::Json => Ok(Box::new(deserialize_json_stream::<T, R>(reader))),

        #[cfg(feature = "yaml")]
        FormatKind::Yaml => Ok(Box::new(deserialize_yaml_stream::<T, R>(reader))),

        #[cfg(feature = "csv")]
        FormatKind::Csv => Ok(Box::new(deserialize_csv_stream::<T, R>(reader))),

        #[allow(unreachable_patterns)]
        _ => {
            let _ = reader;
            Err(ReaderError::invalid(format!(
                "format '{kind}' is not enabled, enable the corresponding feature"
            )))
        }
    }
}
