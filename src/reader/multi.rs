//! Reader chaining records across an ordered list of sources.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use super::{ReaderFactory, RecordReader};
use crate::encoding::Encoding;
use crate::error::{ReaderError, Result};
use crate::record::Record;

type Payload<S, F> = <<F as ReaderFactory<S>>::Reader as RecordReader>::Payload;

/// What `open` does when there are no sources at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySourcesPolicy {
    /// Fail with [`ReaderError::NoSources`]
    #[default]
    Fail,
    /// Open as an already exhausted stream
    Ignore,
}

impl FromStr for EmptySourcesPolicy {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "fail" | "error" => Ok(EmptySourcesPolicy::Fail),
            "ignore" | "allow" => Ok(EmptySourcesPolicy::Ignore),
            other => Err(ReaderError::invalid(format!(
                "unknown empty sources policy: {other}"
            ))),
        }
    }
}

enum State<R> {
    Unopened,
    Active { index: usize, delegate: R },
    Exhausted,
}

/// Reads a homogeneous stream of records spread across several sources.
///
/// Sources are read strictly in order, one at a time. The delegate for a
/// source is created through the [`ReaderFactory`] only when the previous
/// source is exhausted, and closed as soon as it reports no more records.
/// Empty sources are skipped without the caller noticing.
///
/// ```rust,ignore
/// let mut reader = MultiSourceReader::new(paths, FormatReaderFactory::<String>::new(FormatKind::Plaintext));
/// reader.open()?;
/// while let Some(record) = reader.read_record()? {
///     println!("{}: {}", record.header.source, record.payload);
/// }
/// reader.close()?;
/// ```
pub struct MultiSourceReader<S, F: ReaderFactory<S>> {
    sources: Vec<S>,
    factory: F,
    encoding: Encoding,
    empty_sources: EmptySourcesPolicy,
    state: State<F::Reader>,
}

impl<S, F: ReaderFactory<S>> MultiSourceReader<S, F> {
    /// Create a reader over `sources` using the default encoding.
    pub fn new(sources: Vec<S>, factory: F) -> Self {
        Self {
            sources,
            factory,
            encoding: Encoding::default(),
            empty_sources: EmptySourcesPolicy::default(),
            state: State::Unopened,
        }
    }

    /// Set the encoding handed to every delegate.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the behavior of `open` on an empty source list.
    pub fn with_empty_sources_policy(mut self, policy: EmptySourcesPolicy) -> Self {
        self.empty_sources = policy;
        self
    }

    /// Get the sources.
    pub fn sources(&self) -> &[S] {
        &self.sources
    }

    /// Get the encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Get the empty sources policy.
    pub fn empty_sources_policy(&self) -> EmptySourcesPolicy {
        self.empty_sources
    }

    /// Index of the source currently being read.
    pub fn current_index(&self) -> Option<usize> {
        match &self.state {
            State::Active { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The source currently being read, if a delegate is open.
    pub fn current_source(&self) -> Option<&S> {
        self.current_index().map(|i| &self.sources[i])
    }

    /// Whether a delegate is currently open.
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// Bind to the first source and open it.
    ///
    /// Calling `open` again restarts from the first source, closing the
    /// delegate that is currently open.
    pub fn open(&mut self) -> Result<()> {
        self.close()?;
        self.state = State::Exhausted;

        if self.sources.is_empty() {
            return match self.empty_sources {
                EmptySourcesPolicy::Fail => Err(ReaderError::NoSources),
                EmptySourcesPolicy::Ignore => {
                    debug!("no sources to read");
                    Ok(())
                }
            };
        }

        self.bind(0)
    }

    /// Read the next record, moving on to the following sources as needed.
    ///
    /// Returns `None` once every source is exhausted. Errors from the
    /// delegates are returned unchanged, after the failing delegate has been
    /// closed; the stream is over at that point.
    pub fn read_record(&mut self) -> Result<Option<Record<Payload<S, F>>>> {
        loop {
            let State::Active { index, delegate } = &mut self.state else {
                return Ok(None);
            };
            let index = *index;

            match delegate.read_record() {
                Ok(Some(record)) => return Ok(Some(record)),
                Ok(None) => {
                    self.close()?;
                    let next = index + 1;
                    if next == self.sources.len() {
                        debug!(sources = self.sources.len(), "all sources exhausted");
                        return Ok(None);
                    }
                    trace!(index, next, "source exhausted, moving on");
                    self.bind(next)?;
                }
                Err(e) => {
                    self.abort();
                    return Err(e);
                }
            }
        }
    }

    /// Close the delegate that is currently open, if any.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, State::Exhausted) {
            State::Active {
                index,
                mut delegate,
            } => {
                trace!(index, "closing source");
                delegate.close()
            }
            State::Unopened => {
                self.state = State::Unopened;
                Ok(())
            }
            State::Exhausted => Ok(()),
        }
    }

    /// Iterate over the remaining records.
    ///
    /// The reader must have been opened; the iterator stops after the last
    /// record or after the first error.
    pub fn records(&mut self) -> Records<'_, S, F> {
        Records {
            reader: self,
            done: false,
        }
    }

    fn bind(&mut self, index: usize) -> Result<()> {
        let mut delegate = self
            .factory
            .create_reader(&self.sources[index], self.encoding)?;

        if let Err(e) = delegate.open() {
            if let Err(close_err) = delegate.close() {
                warn!(index, error = %close_err, "failed to close source after open error");
            }
            return Err(e);
        }

        debug!(index, encoding = %self.encoding, "opened source");
        self.state = State::Active { index, delegate };
        Ok(())
    }

    fn abort(&mut self) {
        if let State::Active {
            index,
            mut delegate,
        } = std::mem::replace(&mut self.state, State::Exhausted)
            && let Err(e) = delegate.close()
        {
            warn!(index, error = %e, "failed to close source after read error");
        }
    }
}

impl<S: fmt::Debug, F: ReaderFactory<S>> fmt::Debug for MultiSourceReader<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiSourceReader")
            .field("sources", &self.sources)
            .field("encoding", &self.encoding)
            .field("empty_sources", &self.empty_sources)
            .field("current_index", &self.current_index())
            .finish()
    }
}

/// Iterator over the records of a [`MultiSourceReader`].
pub struct Records<'a, S, F: ReaderFactory<S>> {
    reader: &'a mut MultiSourceReader<S, F>,
    done: bool,
}

impl<S, F: ReaderFactory<S>> Iterator for Records<'_, S, F> {
    type Item = Result<Record<Payload<S, F>>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
