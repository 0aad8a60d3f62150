//! Single-source readers for the built-in formats.

use std::fmt;
use std::io::BufReader;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::trace;

use super::{FormatKind, RecordStream, stream_records};
use crate::encoding::Encoding;
use crate::error::{FormatError, ReaderError, Result, Stage};
use crate::io::{FileInput, InputProvider};
use crate::reader::{MultiSourceReader, ReaderFactory, RecordReader};
use crate::record::Record;

/// A multi-source reader over files.
pub type MultiFileReader<T> = MultiSourceReader<PathBuf, FormatReaderFactory<T>>;

/// A multi-source reader over arbitrary input providers.
pub type MultiInputReader<T> = MultiSourceReader<Arc<dyn InputProvider>, FormatReaderFactory<T>>;

/// Create a reader chaining the records of `paths`, all in format `kind`.
pub fn multi_file_reader<T>(paths: Vec<PathBuf>, kind: FormatKind) -> MultiFileReader<T>
where
    T: DeserializeOwned + 'static,
{
    MultiSourceReader::new(paths, FormatReaderFactory::new(kind))
}

/// Reads the records of one source in a given format.
///
/// Records are numbered from 1 and tagged with the provider id.
pub struct FormatReader<T> {
    kind: FormatKind,
    provider: Arc<dyn InputProvider>,
    encoding: Encoding,
    stream: Option<RecordStream<T>>,
    number: u64,
}

impl<T> FormatReader<T> {
    /// Create an unopened reader.
    pub fn new(kind: FormatKind, provider: Arc<dyn InputProvider>, encoding: Encoding) -> Self {
        Self {
            kind,
            provider,
            encoding,
            stream: None,
            number: 0,
        }
    }

    /// Get the format.
    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    /// Get the identifier of the source.
    pub fn source_id(&self) -> &str {
        self.provider.id()
    }

    /// Number of records read so far.
    pub fn records_read(&self) -> u64 {
        self.number
    }
}

impl<T: DeserializeOwned + 'static> RecordReader for FormatReader<T> {
    type Payload = T;

    fn open(&mut self) -> Result<()> {
        let raw = self
            .provider
            .open()
            .map_err(|e| ReaderError::access(Stage::Open, self.provider.id(), e))?;
        let decoded = BufReader::new(self.encoding.decode_reader(raw));

        self.stream = Some(stream_records::<T, _>(self.kind, decoded)?);
        self.number = 0;
        trace!(source = self.provider.id(), format = %self.kind, "source opened");
        Ok(())
    }

    fn read_record(&mut self) -> Result<Option<Record<T>>> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(ReaderError::access(
                Stage::Read,
                self.provider.id(),
                "source is not open",
            ));
        };

        match stream.next() {
            None => Ok(None),
            Some(Ok(payload)) => {
                self.number += 1;
                Ok(Some(Record::new(self.number, self.provider.id(), payload)))
            }
            Some(Err(FormatError::Io(e))) => {
                Err(ReaderError::access(Stage::Read, self.provider.id(), e))
            }
            Some(Err(FormatError::Serde(error))) => Err(ReaderError::RecordFormat {
                source_id: self.provider.id().to_string(),
                record: self.number + 1,
                error,
            }),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.stream = None;
        Ok(())
    }
}

impl<T> fmt::Debug for FormatReader<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatReader")
            .field("kind", &self.kind)
            .field("source", &self.provider.id())
            .field("encoding", &self.encoding)
            .field("open", &self.stream.is_some())
            .field("number", &self.number)
            .finish()
    }
}

/// Creates a [`FormatReader`] for each source.
pub struct FormatReaderFactory<T> {
    kind: FormatKind,
    _payload: PhantomData<fn() -> T>,
}

impl<T> FormatReaderFactory<T> {
    pub fn new(kind: FormatKind) -> Self {
        Self {
            kind,
            _payload: PhantomData,
        }
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }
}

impl<T> Clone for FormatReaderFactory<T> {
    fn clone(&self) -> Self {
        Self::new(self.kind)
    }
}

impl<T> fmt::Debug for FormatReaderFactory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatReaderFactory")
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T: DeserializeOwned + 'static> ReaderFactory<PathBuf> for FormatReaderFactory<T> {
    type Reader = FormatReader<T>;

    fn create_reader(&self, source: &PathBuf, encoding: Encoding) -> Result<Self::Reader> {
        let provider: Arc<dyn InputProvider> = Arc::new(FileInput::new(source.clone()));
        Ok(FormatReader::new(self.kind, provider, encoding))
    }
}

impl<T: DeserializeOwned + 'static> ReaderFactory<Arc<dyn InputProvider>>
    for FormatReaderFactory<T>
{
    type Reader = FormatReader<T>;

    fn create_reader(
        &self,
        source: &Arc<dyn InputProvider>,
        encoding: Encoding,
    ) -> Result<Self::Reader> {
        Ok(FormatReader::new(self.kind, Arc::clone(source), encoding))
    }
}
