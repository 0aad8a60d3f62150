//! Character encodings for text-based sources.
//!
//! Every concrete reader receives an [`Encoding`] and wraps its raw byte
//! stream with [`Encoding::decode_reader`], so record parsers only ever see
//! UTF-8.

use std::fmt;
use std::io::{self, Read};
use std::str::FromStr;

use crate::error::ReaderError;

const DECODE_CHUNK: usize = 8 * 1024;

/// Character encoding of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8, the default for text in Rust
    #[default]
    Utf8,
    /// ISO-8859-1: every byte maps to the code point of the same value
    Latin1,
}

impl Encoding {
    /// Canonical label of this encoding.
    pub fn label(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Latin1 => "iso-8859-1",
        }
    }

    /// Parse an encoding label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" | "unicode-1-1-utf-8" => Some(Encoding::Utf8),
            "iso-8859-1" | "iso8859-1" | "iso_8859-1" | "latin1" | "latin-1" | "l1" => {
                Some(Encoding::Latin1)
            }
            _ => None,
        }
    }

    /// Wrap a byte stream so that it yields UTF-8.
    ///
    /// UTF-8 streams are returned as is; invalid sequences are left for the
    /// record parser to reject.
    pub fn decode_reader<'a>(&self, inner: Box<dyn Read + Send + 'a>) -> Box<dyn Read + Send + 'a> {
        match self {
            Encoding::Utf8 => inner,
            Encoding::Latin1 => Box::new(Latin1Decoder::new(inner)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Encoding {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Encoding::from_label(s)
            .ok_or_else(|| ReaderError::invalid(format!("unknown encoding: {s}")))
    }
}

/// Transcodes ISO-8859-1 bytes into UTF-8 on the fly.
struct Latin1Decoder<R> {
    inner: R,
    raw: Vec<u8>,
    out: Vec<u8>,
    pos: usize,
}

impl<R: Read> Latin1Decoder<R> {
    fn new(inner: R) -> Self {
        Self {
            inner,
            raw: vec![0; DECODE_CHUNK],
            out: Vec::with_capacity(DECODE_CHUNK * 2),
            pos: 0,
        }
    }

    fn fill(&mut self) -> io::Result<usize> {
        let n = self.inner.read(&mut self.raw)?;
        self.out.clear();
        self.pos = 0;
        let mut utf8 = [0u8; 2];
        for &byte in &self.raw[..n] {
            let encoded = char::from(byte).encode_utf8(&mut utf8);
            self.out.extend_from_slice(encoded.as_bytes());
        }
        Ok(n)
    }
}

impl<R: Read> Read for Latin1Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if self.pos == self.out.len() && self.fill()? == 0 {
            return Ok(0);
        }
        let n = buf.len().min(self.out.len() - self.pos);
        buf[..n].copy_from_slice(&self.out[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
