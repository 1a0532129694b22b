#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use streamscan::{CharScanner, ScanError, ScannerOptions, StrCursor, StreamScanner};

#[derive(Debug, Arbitrary)]
enum Op {
    Peek(u8),
    Advance(u8),
    Backtrack(u16),
    Discard,
    ScanWord,
    ReadLine,
}

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    chunk: u8,
    min_read: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let chars: Vec<char> = input.text.chars().collect();
    let cursor = StrCursor::chunked(&input.text, usize::from(input.chunk).max(1));
    let mut scanner = StreamScanner::with_options(
        cursor,
        ScannerOptions {
            minimum_read_length: usize::from(input.min_read),
            initial_capacity: 0,
            ..Default::default()
        },
    );
    let mut start = 0;

    for op in input.ops {
        let pos = scanner.scan_location();
        match op {
            Op::Peek(k) => {
                let k = usize::from(k);
                match scanner.peek_at(k) {
                    Ok(ch) => assert_eq!(Some(&ch), chars.get(pos + k)),
                    Err(ScanError::EndOfStream { .. }) => assert!(pos + k >= chars.len()),
                    Err(err) => panic!("unexpected {err}"),
                }
            }
            Op::Advance(k) => {
                let k = usize::from(k);
                match scanner.advance(k) {
                    Ok(()) => assert!(pos + k <= chars.len()),
                    Err(ScanError::EndOfStream { .. }) => {
                        assert!(pos + k > chars.len());
                        assert_eq!(scanner.scan_location(), pos);
                    }
                    Err(err) => panic!("unexpected {err}"),
                }
            }
            Op::Backtrack(target) => {
                let target = usize::from(target);
                let valid = start <= target && target <= scanner.buffered_end();
                assert_eq!(scanner.backtrack(target).is_ok(), valid);
            }
            Op::Discard => {
                scanner.discard_readahead();
                start = pos;
            }
            Op::ScanWord => {
                let word = scanner.scan_while(char::is_alphanumeric).unwrap();
                let expected: String = chars[pos..]
                    .iter()
                    .take_while(|ch| ch.is_alphanumeric())
                    .collect();
                assert_eq!(word, expected);
            }
            Op::ReadLine => {
                let line = scanner.read_line().unwrap();
                assert_eq!(line.is_none(), pos == chars.len());
            }
        }

        let end = scanner.buffered_end();
        assert!(start <= scanner.scan_location() && scanner.scan_location() <= end);
        assert_eq!(scanner.start_offset(), start);
        assert_eq!(scanner.buffered(), &chars[start..end]);
    }
});
