//! CSV format: one record per row.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::FormatError;

/// Stream CSV rows from a reader. The first row holds the headers.
pub fn deserialize_csv_stream<T, R>(reader: R) -> impl Iterator<Item = Result<T, FormatError>>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader)
        .into_deserialize::<T>()
        .map(|res| {
            res.map_err(|e| {
                if e.is_io_error() {
                    FormatError::Io(e.into())
                } else {
                    FormatError::Serde(Box::new(e))
                }
            })
        })
}
