#![allow(missing_docs, dead_code)]

use std::io::{self, Read};

/// A request/response transcript in the shape an HTTP/1.1 client would see.
pub const TRANSCRIPT: &str = "HTTP/1.1 200 OK\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
Content-Length: 27\r\n\
X-Note: überall ✓\r\n\
\r\n\
streamed body, not buffered";

/// A reader that hands out at most `chunk` bytes per call, splitting UTF-8
/// sequences wherever the boundary happens to fall.
pub struct Trickle<'a> {
    bytes: &'a [u8],
    chunk: usize,
}

impl<'a> Trickle<'a> {
    pub fn new(text: &'a str, chunk: usize) -> Self {
        Self {
            bytes: text.as_bytes(),
            chunk: chunk.max(1),
        }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.bytes.len());
        buf[..n].copy_from_slice(&self.bytes[..n]);
        self.bytes = &self.bytes[n..];
        Ok(n)
    }
}
