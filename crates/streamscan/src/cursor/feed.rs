use alloc::{collections::VecDeque, vec::Vec};

use super::StreamCursor;

/// An append-only cursor fed by a producer.
///
/// Text handed to [`feed`](Self::feed) becomes available to the next pull.
/// Until [`finish`](Self::finish) is called an empty queue yields zero-length
/// pulls without reporting exhaustion, so a scanner that reached the end can
/// resume once more text arrives.
///
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
/// use streamscan::{CharScanner, EmptyPullPolicy, FeedCursor, ScannerOptions, StreamScanner};
///
/// let feed = Rc::new(RefCell::new(FeedCursor::new()));
/// let options = ScannerOptions { empty_pull: EmptyPullPolicy::Report, ..Default::default() };
/// let mut scanner = StreamScanner::with_options(Rc::clone(&feed), options);
///
/// feed.borrow_mut().feed("ab");
/// assert_eq!(scanner.next_char(), Ok('a'));
/// assert_eq!(scanner.next_char(), Ok('b'));
/// assert!(scanner.peek().unwrap_err().is_pending());
///
/// feed.borrow_mut().feed("c");
/// feed.borrow_mut().finish();
/// assert_eq!(scanner.next_char(), Ok('c'));
/// assert!(scanner.peek().unwrap_err().is_end_of_stream());
/// ```
#[derive(Debug, Default)]
pub struct FeedCursor {
    pending: VecDeque<char>,
    delivered: usize,
    finished: bool,
}

impl FeedCursor {
    /// Creates an empty, live cursor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `text` for delivery.
    ///
    /// # Panics
    ///
    /// Panics if called after [`finish`](Self::finish).
    pub fn feed(&mut self, text: &str) {
        assert!(!self.finished, "feed() called after finish()");
        // Byte length is an upper bound on the number of chars.
        self.pending.reserve(text.len());
        self.pending.extend(text.chars());
    }

    /// Marks the end of input. Queued text is still delivered.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Whether [`finish`](Self::finish) has been called.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Characters queued but not yet pulled.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.pending.len()
    }
}

impl StreamCursor for FeedCursor {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        let n = max.min(self.pending.len());
        out.extend(self.pending.drain(..n));
        self.delivered += n;
        n
    }

    fn is_exhausted(&self) -> bool {
        self.finished && self.pending.is_empty()
    }

    fn position(&self) -> usize {
        self.delivered
    }
}
