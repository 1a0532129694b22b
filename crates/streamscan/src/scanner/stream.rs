use super::CharScanner;
use crate::{ScanError, ScannerOptions, cursor::StreamCursor, readahead::ReadaheadBuffer};

/// A [`CharScanner`] over a [`StreamCursor`].
///
/// Characters are pulled lazily, at least
/// [`minimum_read_length`](ScannerOptions::minimum_read_length) at a time,
/// when a peek or advance reaches past what is buffered. Everything pulled
/// stays buffered, so any position back to [`start_offset`](Self::start_offset)
/// can be revisited, until the consumer calls
/// [`discard_readahead`](CharScanner::discard_readahead).
///
/// The scanner starts at the cursor's current
/// [`position`](StreamCursor::position). If anyone else pulls from the same
/// cursor while this scanner is in use, its next refill fails with
/// [`ScanError::CursorDesynchronized`].
///
/// ```rust
/// use streamscan::{CharScanner, ScanError, StrCursor, StreamScanner};
///
/// let mut scanner = StreamScanner::with_buffer_length(StrCursor::new("key=value"), 4);
/// let key = scanner.scan_up_to(|ch| ch == '=').unwrap();
/// assert_eq!(key, "key");
/// scanner.skip_char().unwrap();
/// scanner.discard_readahead();
///
/// assert_eq!(scanner.scan_while(|_| true).unwrap(), "value");
/// assert!(matches!(scanner.backtrack(0), Err(ScanError::InvalidBacktrack { .. })));
/// ```
#[derive(Debug)]
pub struct StreamScanner<C> {
    cursor: C,
    buffer: ReadaheadBuffer,
    position: usize,
}

impl<C: StreamCursor> StreamScanner<C> {
    /// Creates a scanner with default options.
    pub fn new(cursor: C) -> Self {
        Self::with_options(cursor, ScannerOptions::default())
    }

    /// Creates a scanner that reads `buffer_length` characters at a time and
    /// reserves that much up front.
    pub fn with_buffer_length(cursor: C, buffer_length: usize) -> Self {
        Self::with_options(cursor, ScannerOptions::with_buffer_length(buffer_length))
    }

    /// Creates a scanner with explicit options.
    pub fn with_options(cursor: C, options: ScannerOptions) -> Self {
        let start = cursor.position();
        Self {
            cursor,
            buffer: ReadaheadBuffer::new(start, options),
            position: start,
        }
    }

    /// The underlying cursor.
    ///
    /// Pulling from it (through another handle) while this scanner is still
    /// in use desynchronizes the two; see [`ScanError::CursorDesynchronized`].
    pub fn data_stream_cursor(&self) -> &C {
        &self.cursor
    }

    /// Gives the cursor back. Buffered characters are dropped.
    pub fn into_cursor(self) -> C {
        self.cursor
    }

    /// Lowest position that can still be revisited.
    pub fn start_offset(&self) -> usize {
        self.buffer.start_offset()
    }

    /// End of buffered data; equals the cursor position when in sync.
    pub fn buffered_end(&self) -> usize {
        self.buffer.end()
    }

    /// Number of characters held in the readahead buffer.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Allocated size of the readahead buffer, in characters.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Minimum number of characters requested per pull.
    pub fn minimum_read_length(&self) -> usize {
        self.buffer.minimum_read_length()
    }

    /// The retained window, from [`start_offset`](Self::start_offset) to
    /// [`buffered_end`](Self::buffered_end).
    pub fn buffered(&self) -> &[char] {
        self.buffer.as_slice()
    }

    /// Pulls until `count` characters from the scan location are buffered or
    /// the stream ends. Returns how many of them are available.
    ///
    /// # Errors
    ///
    /// [`ScanError::Pending`] or [`ScanError::CursorDesynchronized`]; never
    /// [`ScanError::EndOfStream`], a shortfall is reported in the count.
    pub fn ensure_available(&mut self, count: usize) -> Result<usize, ScanError> {
        self.buffer
            .ensure_available(&mut self.cursor, self.position, count)
    }
}

impl<C: StreamCursor> CharScanner for StreamScanner<C> {
    #[inline]
    fn scan_location(&self) -> usize {
        self.position
    }

    fn peek_at(&mut self, offset: usize) -> Result<char, ScanError> {
        let target = self.position.saturating_add(offset);
        if let Some(ch) = self.buffer.get(target) {
            return Ok(ch);
        }
        self.buffer.ensure_available(&mut self.cursor, target, 1)?;
        self.buffer.get(target).ok_or(ScanError::EndOfStream {
            position: self.buffer.end(),
        })
    }

    fn advance(&mut self, n: usize) -> Result<(), ScanError> {
        let available = self
            .buffer
            .ensure_available(&mut self.cursor, self.position, n)?;
        if available < n {
            return Err(ScanError::EndOfStream {
                position: self.buffer.end(),
            });
        }
        self.position += n;
        Ok(())
    }

    fn backtrack(&mut self, position: usize) -> Result<(), ScanError> {
        if self.buffer.index_of(position).is_none() {
            return Err(ScanError::InvalidBacktrack {
                requested: position,
                start: self.buffer.start_offset(),
                end: self.buffer.end(),
            });
        }
        self.position = position;
        Ok(())
    }

    fn discard_readahead(&mut self) -> usize {
        self.buffer.discard_through(self.position)
    }
}
