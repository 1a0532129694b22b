//! Readahead buffer: the window of characters pulled from a stream cursor
//! that have not been discarded yet.
//!
//! Positions handed in and out of this module are absolute stream offsets.
//! [`ReadaheadBuffer::index_of`] is the only place that turns one into an
//! index into `data`.
//!
//! Invariants
//! - `data[i]` is the character at stream offset `start_offset + i`.
//! - Characters are only ever appended by pulls or removed as a prefix by
//!   [`ReadaheadBuffer::discard_through`]; nothing in between is rewritten.
//! - `start_offset + data.len()` equals the cursor's delivered position as
//!   long as nobody else pulls from the same cursor.

use alloc::vec::Vec;

use crate::{EmptyPullPolicy, ScanError, ScannerOptions, cursor::StreamCursor};

// After a discard, capacity beyond this multiple of what is still needed is
// given back to the allocator.
const SHRINK_FACTOR: usize = 4;

#[derive(Debug)]
pub(crate) struct ReadaheadBuffer {
    data: Vec<char>,
    start_offset: usize,
    minimum_read_length: usize,
    empty_pull: EmptyPullPolicy,
}

impl ReadaheadBuffer {
    pub(crate) fn new(start_offset: usize, options: ScannerOptions) -> Self {
        Self {
            data: Vec::with_capacity(options.initial_capacity),
            start_offset,
            minimum_read_length: options.minimum_read_length.max(1),
            empty_pull: options.empty_pull,
        }
    }

    #[inline]
    pub(crate) fn start_offset(&self) -> usize {
        self.start_offset
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.data.capacity()
    }

    #[inline]
    pub(crate) fn minimum_read_length(&self) -> usize {
        self.minimum_read_length
    }

    /// Absolute offset one past the last buffered character.
    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.start_offset + self.data.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[char] {
        &self.data
    }

    /// Maps an absolute position in `[start_offset, end]` to a buffer index.
    #[inline]
    pub(crate) fn index_of(&self, position: usize) -> Option<usize> {
        let index = position.checked_sub(self.start_offset)?;
        (index <= self.data.len()).then_some(index)
    }

    /// The buffered character at absolute `position`, if any.
    #[inline]
    pub(crate) fn get(&self, position: usize) -> Option<char> {
        self.data.get(self.index_of(position)?).copied()
    }

    /// Makes `[position, position + count)` buffered as far as the stream
    /// allows and returns how many of those characters are now available.
    ///
    /// Exhaustion is asked of the cursor on every call, so a stream that grows
    /// after reporting its end is picked up again.
    pub(crate) fn ensure_available<C: StreamCursor + ?Sized>(
        &mut self,
        cursor: &mut C,
        position: usize,
        count: usize,
    ) -> Result<usize, ScanError> {
        debug_assert!(position >= self.start_offset, "position already discarded");
        let target = position.saturating_add(count);

        while self.end() < target {
            if cursor.is_exhausted() {
                break;
            }
            let actual = cursor.position();
            if actual != self.end() {
                return Err(ScanError::CursorDesynchronized {
                    expected: self.end(),
                    actual,
                });
            }

            let request = (target - self.end()).max(self.minimum_read_length);
            // Reserve at most one minimum read; `pull` extends the vector for
            // anything larger the cursor actually delivers.
            let spare = self.data.capacity() - self.data.len();
            let reserve = request.min(self.minimum_read_length.max(spare));
            if spare < reserve {
                self.grow(reserve - spare);
            }

            let before = self.data.len();
            cursor.pull(request, &mut self.data);
            let returned = self.data.len() - before;
            debug_assert!(returned <= request, "cursor returned more than requested");
            tracing::trace!(requested = request, returned, end = self.end(), "pulled");

            if returned == 0 && !cursor.is_exhausted() {
                tracing::trace!(end = self.end(), "stream live but empty");
                if self.empty_pull == EmptyPullPolicy::Report {
                    return Err(ScanError::Pending {
                        position: self.end(),
                    });
                }
            }
        }

        Ok(self.end().min(target).saturating_sub(position))
    }

    /// Reserves room for at least `min_extra` more characters, at least
    /// doubling the capacity. Existing characters keep their indices.
    pub(crate) fn grow(&mut self, min_extra: usize) {
        let old = self.data.capacity();
        let len = self.data.len();
        let wanted = old.saturating_mul(2).max(len.saturating_add(min_extra));
        self.data.reserve_exact(wanted - len);
        tracing::debug!(old, new = self.data.capacity(), "grew readahead buffer");
    }

    /// Drops every character before `position`, making it the new start
    /// offset. Returns how many characters were dropped.
    pub(crate) fn discard_through(&mut self, position: usize) -> usize {
        let Some(count) = self.index_of(position) else {
            debug_assert!(false, "discard position outside buffered window");
            return 0;
        };
        if count == 0 {
            return 0;
        }
        self.data.drain(..count);
        self.start_offset = position;

        let keep = self.data.len().max(self.minimum_read_length);
        if self.data.capacity() > keep.saturating_mul(SHRINK_FACTOR) {
            self.data.shrink_to(keep * 2);
        }
        tracing::debug!(
            dropped = count,
            start_offset = self.start_offset,
            capacity = self.data.capacity(),
            "discarded readahead"
        );
        count
    }
}
