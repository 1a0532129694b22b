/// Buffer length used when none is supplied, in characters.
pub const DEFAULT_BUFFER_LENGTH: usize = 8192;

/// What a scanner does when a pull returns nothing but the stream is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyPullPolicy {
    /// Pull again until data arrives or the cursor reports exhaustion.
    ///
    /// Suited to blocking cursors, which only return zero characters once
    /// they are exhausted.
    #[default]
    Retry,
    /// Return [`ScanError::Pending`](crate::ScanError::Pending) to the caller.
    ///
    /// Suited to non-blocking cursors fed by another task, such as
    /// [`FeedCursor`](crate::FeedCursor).
    Report,
}

/// Configuration for a [`StreamScanner`](crate::StreamScanner).
///
/// # Examples
///
/// ```rust
/// use streamscan::{EmptyPullPolicy, ScannerOptions, StrCursor, StreamScanner};
///
/// let options = ScannerOptions {
///     minimum_read_length: 64,
///     empty_pull: EmptyPullPolicy::Report,
///     ..Default::default()
/// };
/// let scanner = StreamScanner::with_options(StrCursor::new("abc"), options);
/// assert_eq!(scanner.minimum_read_length(), 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Minimum number of characters requested from the cursor per pull.
    ///
    /// Larger values amortize the cost of pull calls. Zero is treated as one.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BUFFER_LENGTH`]
    pub minimum_read_length: usize,

    /// Capacity reserved for the readahead buffer at construction.
    ///
    /// # Default
    ///
    /// [`DEFAULT_BUFFER_LENGTH`]
    pub initial_capacity: usize,

    /// Behavior on a zero-length pull from a live stream.
    ///
    /// # Default
    ///
    /// [`EmptyPullPolicy::Retry`]
    pub empty_pull: EmptyPullPolicy,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        Self {
            minimum_read_length: DEFAULT_BUFFER_LENGTH,
            initial_capacity: DEFAULT_BUFFER_LENGTH,
            empty_pull: EmptyPullPolicy::Retry,
        }
    }
}

impl ScannerOptions {
    /// Options with both the minimum read length and the initial capacity set
    /// to `buffer_length`.
    #[must_use]
    pub fn with_buffer_length(buffer_length: usize) -> Self {
        Self {
            minimum_read_length: buffer_length,
            initial_capacity: buffer_length,
            ..Self::default()
        }
    }
}
