//! I/O abstractions for record sources.
//!
//! This module provides:
//! - `InputProvider`: Trait for byte sources a record reader can open
//! - Standard implementations for files and stdin
//! - An in-memory implementation for testing

mod input;
mod memory;
mod std_io;

pub use input::InputProvider;
pub use memory::InMemorySource;
pub use std_io::{FileInput, StdinInput};
