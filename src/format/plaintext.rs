//! Plaintext format: one record per line.

use std::io::{BufRead, ErrorKind};

use serde::de::DeserializeOwned;
use serde::de::value::{Error as ValueError, StringDeserializer};

use crate::error::FormatError;

/// Stream lines from a reader, deserializing each one into `T`.
///
/// Line terminators (`\n` or `\r\n`) are stripped. Bytes that are not valid
/// UTF-8 make the line a format error rather than an I/O error.
pub fn deserialize_plaintext_stream<T, R>(reader: R) -> impl Iterator<Item = Result<T, FormatError>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    reader.lines().map(|line| {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => FormatError::Serde(Box::new(e)),
            _ => FormatError::Io(e),
        })?;
        T::deserialize(StringDeserializer::<ValueError>::new(line))
            .map_err(|e| FormatError::Serde(Box::new(e)))
    })
}
