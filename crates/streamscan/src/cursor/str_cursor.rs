use alloc::vec::Vec;
use core::str::Chars;

use super::StreamCursor;

/// A cursor over in-memory text.
///
/// Each pull delivers at most `max_chunk` characters, which makes it useful
/// for exercising consumers against small, uneven deliveries.
#[derive(Debug, Clone)]
pub struct StrCursor<'src> {
    chars: Chars<'src>,
    delivered: usize,
    max_chunk: usize,
}

impl<'src> StrCursor<'src> {
    /// Creates a cursor that satisfies every pull in full.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self::chunked(text, usize::MAX)
    }

    /// Creates a cursor that delivers at most `max_chunk` characters per pull.
    ///
    /// # Panics
    ///
    /// Panics if `max_chunk` is zero, since such a cursor could never make
    /// progress.
    #[must_use]
    pub fn chunked(text: &'src str, max_chunk: usize) -> Self {
        assert!(max_chunk > 0, "max_chunk must be non-zero");
        Self {
            chars: text.chars(),
            delivered: 0,
            max_chunk,
        }
    }

    /// The text not yet delivered.
    #[must_use]
    pub fn remaining(&self) -> &'src str {
        self.chars.as_str()
    }
}

impl StreamCursor for StrCursor<'_> {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        let before = out.len();
        out.extend(self.chars.by_ref().take(max.min(self.max_chunk)));
        let n = out.len() - before;
        self.delivered += n;
        n
    }

    fn is_exhausted(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn position(&self) -> usize {
        self.delivered
    }
}
