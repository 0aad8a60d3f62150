//! Configuration types for multi-source readers.
//!
//! This module provides:
//! - `SourceSpec`: Specification for a single resolved source
//! - `ReaderConfig`: Serde-friendly configuration of a whole reader
//! - `SourceConfig`: Configuration entry for a single source

mod reader_config;
mod spec;

pub use crate::reader::EmptySourcesPolicy;
pub use reader_config::{ReaderConfig, SourceConfig};
pub use spec::SourceSpec;
