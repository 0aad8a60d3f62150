//! Record and header types.

use serde::Serialize;

/// Metadata attached to every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Position of the record within its source, starting at 1.
    pub number: u64,
    /// Identifier of the source the record was read from.
    pub source: String,
}

/// A single record read from a source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record<P> {
    pub header: Header,
    pub payload: P,
}

impl<P> Record<P> {
    /// Create a new record.
    pub fn new(number: u64, source: impl Into<String>, payload: P) -> Self {
        Self {
            header: Header {
                number,
                source: source.into(),
            },
            payload,
        }
    }

    /// Get the record payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consume the record and return its payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Transform the payload, keeping the header.
    pub fn map<Q>(self, f: impl FnOnce(P) -> Q) -> Record<Q> {
        Record {
            header: self.header,
            payload: f(self.payload),
        }
    }
}
