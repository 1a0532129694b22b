use alloc::vec::Vec;
use std::io::{self, Read};

use super::StreamCursor;

const DEFAULT_READ_SIZE: usize = 8192;

/// A cursor decoding UTF-8 from any [`Read`] implementation.
///
/// A multi-byte sequence split across two reads is held back until the rest
/// arrives. Invalid sequences decode to U+FFFD.
///
/// `WouldBlock` from the reader becomes a zero-length pull on a live stream.
/// `Interrupted` is retried. Any other I/O error is recorded, after which the
/// cursor drains what it has and reports exhaustion; inspect it with
/// [`error`](Self::error).
#[derive(Debug)]
pub struct ReaderCursor<R> {
    reader: R,
    bytes: Vec<u8>,
    // Offset of the first undecoded byte in `bytes`.
    decoded: usize,
    delivered: usize,
    read_size: usize,
    eof: bool,
    error: Option<io::Error>,
}

impl<R: Read> ReaderCursor<R> {
    /// Wraps `reader`, reading 8 KiB at a time.
    pub fn new(reader: R) -> Self {
        Self::with_read_size(reader, DEFAULT_READ_SIZE)
    }

    /// Wraps `reader`, reading at most `read_size` bytes per call (at least 1).
    pub fn with_read_size(reader: R, read_size: usize) -> Self {
        Self {
            reader,
            bytes: Vec::new(),
            decoded: 0,
            delivered: 0,
            read_size: read_size.max(1),
            eof: false,
            error: None,
        }
    }

    /// The I/O error that ended the stream, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Takes the recorded I/O error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// A reference to the wrapped reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Unwraps the reader. Undecoded bytes are lost.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Decodes up to `limit` characters from the byte buffer into `out`.
    fn decode(&mut self, limit: usize, out: &mut Vec<char>) {
        let mut emitted = 0;
        while emitted < limit {
            let rest = &self.bytes[self.decoded..];
            if rest.is_empty() {
                break;
            }
            let (ch, len) = bstr::decode_utf8(rest);
            match ch {
                Some(ch) => out.push(ch),
                // The whole tail may be the start of a sequence whose
                // remaining bytes have not been read yet.
                None if len == rest.len() && !self.eof => break,
                None => out.push('\u{FFFD}'),
            }
            self.decoded += len.max(1);
            emitted += 1;
        }
    }

    /// Reads one chunk. Returns `false` when the reader would block.
    fn fill(&mut self) -> bool {
        if self.decoded > 0 {
            self.bytes.drain(..self.decoded);
            self.decoded = 0;
        }
        let old = self.bytes.len();
        self.bytes.resize(old + self.read_size, 0);
        match self.reader.read(&mut self.bytes[old..]) {
            Ok(n) => {
                self.bytes.truncate(old + n);
                if n == 0 {
                    self.eof = true;
                }
                true
            }
            Err(err) => {
                self.bytes.truncate(old);
                match err.kind() {
                    io::ErrorKind::Interrupted => true,
                    io::ErrorKind::WouldBlock => false,
                    _ => {
                        tracing::debug!(error = %err, "reader failed; ending stream");
                        self.error = Some(err);
                        self.eof = true;
                        true
                    }
                }
            }
        }
    }
}

impl<R: Read> StreamCursor for ReaderCursor<R> {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        let start = out.len();
        while out.len() - start < max {
            self.decode(max - (out.len() - start), out);
            if out.len() > start || self.is_exhausted() {
                break;
            }
            if !self.fill() {
                break;
            }
        }
        let n = out.len() - start;
        self.delivered += n;
        n
    }

    fn is_exhausted(&self) -> bool {
        self.eof && self.decoded == self.bytes.len()
    }

    fn position(&self) -> usize {
        self.delivered
    }
}
