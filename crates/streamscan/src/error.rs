use thiserror::Error;

/// Outcome of a scan operation that could not be satisfied.
///
/// Every variant is recoverable: the scanner stays usable after returning any
/// of them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The stream cursor confirmed exhaustion before `position` was reached.
    #[error("end of stream at position {position}")]
    EndOfStream {
        /// Absolute position of the first character that does not exist.
        position: usize,
    },
    /// The target lies outside the retained window `[start, end]`.
    #[error("cannot backtrack to {requested}: retained window is {start}..={end}")]
    InvalidBacktrack {
        /// The position that was asked for.
        requested: usize,
        /// Lowest position still buffered.
        start: usize,
        /// End of the buffered data.
        end: usize,
    },
    /// The source had no data right now but is not exhausted.
    ///
    /// Only reported under [`EmptyPullPolicy::Report`](crate::EmptyPullPolicy).
    #[error("no data available yet at position {position}")]
    Pending {
        /// Absolute position of the first character that is not available.
        position: usize,
    },
    /// Someone else pulled from the shared cursor.
    #[error("stream cursor desynchronized: expected position {expected}, found {actual}")]
    CursorDesynchronized {
        /// Where this scanner's buffered data ends.
        expected: usize,
        /// Where the cursor actually is.
        actual: usize,
    },
}

impl ScanError {
    /// Returns `true` for [`ScanError::EndOfStream`].
    #[must_use]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ScanError::EndOfStream { .. })
    }

    /// Returns `true` for [`ScanError::Pending`].
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, ScanError::Pending { .. })
    }
}
