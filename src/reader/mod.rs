//! Record reader abstractions.
//!
//! This module provides:
//! - `RecordReader`: The open/read/close contract of a single-source reader
//! - `ReaderFactory`: The hook that builds a reader bound to one source
//! - `MultiSourceReader`: Chains readers over an ordered list of sources

mod multi;

pub use multi::{EmptySourcesPolicy, MultiSourceReader, Records};

use crate::encoding::Encoding;
use crate::error::Result;
use crate::record::Record;

/// A reader producing records from one source.
///
/// `read_record` returns `Ok(None)` once the source is exhausted.
pub trait RecordReader {
    /// Payload type of the produced records.
    type Payload;

    /// Acquire the resources needed to read the source.
    fn open(&mut self) -> Result<()>;

    /// Read the next record, or `None` when there are no more records.
    fn read_record(&mut self) -> Result<Option<Record<Self::Payload>>>;

    /// Release the resources held by the reader.
    fn close(&mut self) -> Result<()>;
}

impl<R: RecordReader + ?Sized> RecordReader for Box<R> {
    type Payload = R::Payload;

    fn open(&mut self) -> Result<()> {
        (**self).open()
    }

    fn read_record(&mut self) -> Result<Option<Record<Self::Payload>>> {
        (**self).read_record()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Builds an unopened reader bound to one source.
///
/// Closures of the shape `Fn(&S, Encoding) -> Result<R>` implement this
/// trait, so ad-hoc formats need no dedicated type.
pub trait ReaderFactory<S> {
    type Reader: RecordReader;

    fn create_reader(&self, source: &S, encoding: Encoding) -> Result<Self::Reader>;
}

impl<S, R, F> ReaderFactory<S> for F
where
    F: Fn(&S, Encoding) -> Result<R>,
    R: RecordReader,
{
    type Reader = R;

    fn create_reader(&self, source: &S, encoding: Encoding) -> Result<R> {
        self(source, encoding)
    }
}
