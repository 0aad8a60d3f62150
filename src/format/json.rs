//! JSON format: a stream of JSON values.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::FormatError;

/// Stream consecutive JSON values (NDJSON or whitespace separated) from a
/// reader.
pub fn deserialize_json_stream<T, R>(reader: R) -> impl Iterator<Item = Result<T, FormatError>>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<T>()
        .map(|res| {
            res.map_err(|e| {
                if e.is_io() {
                    FormatError::Io(e.into())
                } else {
                    FormatError::Serde(Box::new(e))
                }
            })
        })
}
