//! A lookahead character scanner over pull-based, incrementally arriving
//! streams.
//!
//! [`StreamScanner`] sits between a [`StreamCursor`] (anything that can hand
//! out decoded characters on request) and a tokenizer or parser. It pulls
//! characters lazily into a readahead buffer, lets the consumer peek ahead and
//! backtrack without re-fetching, and frees the scanned prefix only when the
//! consumer asks with [`CharScanner::discard_readahead`].
//!
//! ```rust
//! use streamscan::{CharScanner, StrCursor, StreamScanner};
//!
//! // A source that never delivers more than 3 characters per pull.
//! let cursor = StrCursor::chunked("GET /index.html HTTP/1.1\r\n", 3);
//! let mut scanner = StreamScanner::with_buffer_length(cursor, 8);
//!
//! let start = scanner.mark();
//! assert!(!scanner.scan_str("POST", false).unwrap());
//! assert!(scanner.scan_str("get", true).unwrap());
//! scanner.rewind(start).unwrap();
//!
//! let line = scanner.read_line().unwrap().unwrap();
//! assert_eq!(line, "GET /index.html HTTP/1.1");
//! assert_eq!(scanner.discard_readahead(), 26);
//! assert!(scanner.is_at_end().unwrap());
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod cursor;
mod error;
mod options;
mod readahead;
mod scanner;

#[cfg(test)]
mod tests;

#[cfg(feature = "std")]
pub use cursor::ReaderCursor;
pub use cursor::{FeedCursor, StrCursor, StreamCursor};
pub use error::ScanError;
pub use options::{DEFAULT_BUFFER_LENGTH, EmptyPullPolicy, ScannerOptions};
pub use scanner::{CharScanner, Mark, StreamScanner, StringScanner};
