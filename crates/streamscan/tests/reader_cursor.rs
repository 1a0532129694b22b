#![allow(missing_docs)]

mod common;

use std::io::{self, Read};

use common::{TRANSCRIPT, Trickle};
use rstest::rstest;
use streamscan::{CharScanner, ReaderCursor, ScanError, StreamScanner};

#[derive(Debug, PartialEq)]
struct Response {
    status: u64,
    headers: Vec<(String, String)>,
    body: String,
}

fn parse_response<S: CharScanner>(scanner: &mut S) -> Result<Response, ScanError> {
    assert!(scanner.scan_str("HTTP/1.1 ", false)?);
    let status = scanner.scan_unsigned()?.expect("status code");
    scanner.read_line()?;
    scanner.discard_readahead();

    let mut headers = Vec::new();
    loop {
        let line = scanner.read_line()?.expect("header line");
        scanner.discard_readahead();
        if line.is_empty() {
            break;
        }
        let (name, value) = line.split_once(':').expect("header separator");
        headers.push((name.to_owned(), value.trim().to_owned()));
    }

    let body = scanner.scan_while(|_| true)?;
    Ok(Response {
        status,
        headers,
        body,
    })
}

#[rstest]
#[case::byte_at_a_time(1, 1)]
#[case::split_sequences(3, 5)]
#[case::small_reads(7, 16)]
#[case::one_read(4096, 4096)]
fn parses_response_over_trickling_reader(#[case] read_chunk: usize, #[case] buffer_length: usize) {
    let cursor = ReaderCursor::with_read_size(Trickle::new(TRANSCRIPT, read_chunk), read_chunk);
    let mut scanner = StreamScanner::with_buffer_length(cursor, buffer_length);

    let response = parse_response(&mut scanner).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.headers.len(), 3);
    assert_eq!(response.headers[2], ("X-Note".to_owned(), "überall ✓".to_owned()));
    assert_eq!(response.body, "streamed body, not buffered");
    assert_eq!(response.body.chars().count(), 27);

    // Only the body remains retained after the header discards.
    assert_eq!(scanner.buffered_len(), 27);
    assert!(scanner.is_at_end().unwrap());
    assert!(scanner.data_stream_cursor().error().is_none());
}

/// Delivers its data, then fails instead of reporting EOF.
struct Truncated<'a> {
    data: &'a [u8],
}

impl Read for Truncated<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::ConnectionReset, "peer went away"));
        }
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn transport_error_surfaces_as_end_of_stream_with_cause() {
    let cursor = ReaderCursor::new(Truncated { data: b"partial" });
    let mut scanner = StreamScanner::new(cursor);
    assert_eq!(scanner.scan_while(char::is_alphabetic).unwrap(), "partial");
    assert_eq!(scanner.peek(), Err(ScanError::EndOfStream { position: 7 }));
    let err = scanner.data_stream_cursor().error().expect("recorded error");
    assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
}
