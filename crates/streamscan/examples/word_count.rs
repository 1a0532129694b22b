//! Counts lines, words and characters on stdin without reading it all into
//! memory.
//!
//! ```sh
//! cargo run --example word_count < some_file.txt
//! ```
#![allow(missing_docs)]

use std::io;

use streamscan::{CharScanner, ReaderCursor, ScanError, StreamScanner};

#[derive(Debug, Default)]
struct Counts {
    lines: usize,
    words: usize,
    chars: usize,
}

fn count(scanner: &mut impl CharScanner) -> Result<Counts, ScanError> {
    let mut counts = Counts::default();
    while let Some(line) = scanner.read_line()? {
        counts.lines += 1;
        counts.words += line.split_whitespace().count();
        // Each line is independent; nothing before it is needed again.
        scanner.discard_readahead();
    }
    counts.chars = scanner.scan_location();
    Ok(counts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin().lock();
    let mut scanner = StreamScanner::new(ReaderCursor::new(stdin));
    let counts = count(&mut scanner)?;
    if let Some(err) = scanner.data_stream_cursor().error() {
        return Err(io::Error::new(err.kind(), err.to_string()).into());
    }
    println!("{:>8} {:>8} {:>8}", counts.lines, counts.words, counts.chars);
    Ok(())
}
