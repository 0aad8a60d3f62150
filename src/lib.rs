//! # multisource
//!
//! Read a homogeneous stream of records spread across many sources as if it
//! were a single one.
//!
//! ## Overview
//!
//! multisource provides:
//! - **Source chaining**: `MultiSourceReader` opens one source at a time, in
//!   order, and moves to the next one as soon as the current one runs out
//! - **Pluggable readers**: implement `RecordReader` and `ReaderFactory` (or
//!   pass a closure) to read any record format
//! - **Built-in formats**: line-based plaintext, JSON, YAML and CSV records
//!   deserialized with serde
//! - **Encodings**: UTF-8 and ISO-8859-1 sources
//! - **Configuration**: build readers from CLI-style arguments or from a
//!   YAML/JSON `ReaderConfig`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use multisource::{FormatKind, multi_file_reader};
//!
//! fn main() -> Result<(), multisource::ReaderError> {
//!     let mut reader = multi_file_reader::<String>(
//!         vec!["part-1.txt".into(), "part-2.txt".into()],
//!         FormatKind::Plaintext,
//!     );
//!
//!     reader.open()?;
//!     while let Some(record) = reader.read_record()? {
//!         println!("{}#{}: {}", record.header.source, record.header.number, record.payload);
//!     }
//!     reader.close()
//! }
//! ```
//!
//! ## Lifecycle & semantics
//!
//! - `open` binds to the first source. With no sources at all it fails with
//!   `ReaderError::NoSources`, unless `EmptySourcesPolicy::Ignore` is set.
//! - `read_record` returns `Ok(None)` only once every source is exhausted.
//!   Empty sources in the middle are skipped silently.
//! - Errors raised by a source are returned as is, after that source has been
//!   closed. The stream ends there.
//! - `close` releases the source currently open and can be called any number
//!   of times.
//!
//! ## Features
//!
//! - `plaintext` - Line-based records (enabled by default)
//! - `json` - JSON records (enabled by default)
//! - `yaml` - YAML document records
//! - `csv` - CSV row records
//! - `miette` - Pretty error reporting with miette
//! - `sarge` - CLI argument parsing and the `multisource_cat` binary

// Core modules
pub mod builder;
pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod format;
pub mod io;
pub mod reader;
pub mod record;

// Re-exports for convenience
pub use builder::MultiSourceBuilder;
pub use config::{EmptySourcesPolicy, ReaderConfig, SourceConfig, SourceSpec};
pub use encoding::Encoding;
pub use error::{FormatError, ReaderError, Result, Stage};
pub use format::{
    FormatKind, FormatReader, FormatReaderFactory, MultiFileReader, MultiInputReader,
    multi_file_reader,
};
pub use io::{FileInput, InMemorySource, InputProvider, StdinInput};
pub use reader::{MultiSourceReader, ReaderFactory, RecordReader, Records};
pub use record::{Header, Record};

/// Build a reader from a `ReaderConfig`, deserializing records into `T`.
pub fn build_reader_from_config<T>(config: ReaderConfig) -> Result<MultiInputReader<T>>
where
    T: serde::de::DeserializeOwned + 'static,
{
    MultiSourceBuilder::from_config(config)?.build()
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::ReaderDiagnostic;
