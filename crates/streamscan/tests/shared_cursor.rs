#![allow(missing_docs)]

use std::{cell::RefCell, rc::Rc};

use streamscan::{
    CharScanner, EmptyPullPolicy, FeedCursor, ScanError, ScannerOptions, StrCursor, StreamScanner,
};

#[test]
fn fork_continues_where_the_first_scanner_stopped() {
    let cursor = Rc::new(RefCell::new(StrCursor::new("header|payload")));
    let mut header = StreamScanner::with_buffer_length(Rc::clone(&cursor), 7);
    assert_eq!(header.scan_up_to(|ch| ch == '|').unwrap(), "header");
    assert_eq!(header.buffered_end(), 7);

    // Hand the rest of the stream to a second scanner.
    let mut payload = StreamScanner::new(Rc::clone(&cursor));
    assert_eq!(payload.scan_location(), 7);
    assert_eq!(payload.scan_while(|_| true).unwrap(), "payload");

    // The first scanner can still revisit what it had buffered ...
    header.backtrack(0).unwrap();
    assert_eq!(header.scan_while(|ch| ch != '|').unwrap(), "header");
    assert_eq!(header.next_char(), Ok('|'));
    // ... and reports the stream as ended, since the cursor is exhausted.
    assert!(header.is_at_end().unwrap());
}

#[test]
fn interleaved_pulls_are_rejected() {
    let cursor = Rc::new(RefCell::new(StrCursor::chunked("0123456789", 2)));
    let mut a = StreamScanner::with_buffer_length(Rc::clone(&cursor), 2);
    let mut b = StreamScanner::with_buffer_length(Rc::clone(&cursor), 2);
    assert_eq!(a.next_char(), Ok('0'));
    assert_eq!(
        b.peek(),
        Err(ScanError::CursorDesynchronized {
            expected: 0,
            actual: 2,
        })
    );
}

#[test]
fn producer_and_consumer_share_a_feed() {
    let feed = Rc::new(RefCell::new(FeedCursor::new()));
    let mut scanner = StreamScanner::with_options(
        Rc::clone(&feed),
        ScannerOptions {
            minimum_read_length: 16,
            empty_pull: EmptyPullPolicy::Report,
            ..Default::default()
        },
    );

    let mut words = Vec::new();
    for chunk in ["alp", "ha be", "ta", " gam", "ma "] {
        feed.borrow_mut().feed(chunk);
        loop {
            let start = scanner.mark();
            let word = scanner
                .skip_while(char::is_whitespace)
                .and_then(|_| scanner.scan_while(char::is_alphabetic));
            match word {
                Ok(word) if !word.is_empty() && scanner.peek().is_ok() => {
                    words.push(word);
                    scanner.discard_readahead();
                }
                Ok(_) | Err(ScanError::Pending { .. }) => {
                    // Word may continue in the next chunk.
                    scanner.rewind(start).unwrap();
                    break;
                }
                Err(err) => panic!("unexpected {err}"),
            }
        }
    }
    assert_eq!(words, ["alpha", "beta", "gamma"]);
    assert_eq!(feed.borrow().queued(), 0);
}
