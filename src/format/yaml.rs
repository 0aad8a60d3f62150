//! YAML format: a stream of documents.

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::FormatError;

/// Stream `---` separated YAML documents from a reader.
///
/// `serde_yaml` loads the whole input before splitting it into documents, so
/// memory use is proportional to the size of one source.
pub fn deserialize_yaml_stream<'de, T, R>(
    reader: R,
) -> impl Iterator<Item = Result<T, FormatError>> + 'de
where
    T: DeserializeOwned + 'de,
    R: Read + 'de,
{
    serde_yaml::Deserializer::from_reader(reader)
        .map(|document| T::deserialize(document).map_err(|e| FormatError::Serde(Box::new(e))))
}
