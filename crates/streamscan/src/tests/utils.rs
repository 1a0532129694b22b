use alloc::vec::Vec;
use core::ops::Range;

use crate::StreamCursor;

/// In-memory cursor that records every pull it receives.
///
/// Deliveries can be capped per pull, and chosen pulls (by zero-based call
/// index) can be made to return nothing while the stream stays live.
#[derive(Debug, Clone)]
pub(crate) struct RecordingCursor {
    chars: Vec<char>,
    delivered: usize,
    max_chunk: usize,
    empty_pulls: Vec<usize>,
    requests: Vec<usize>,
    deliveries: Vec<Range<usize>>,
}

impl RecordingCursor {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            delivered: 0,
            max_chunk: usize::MAX,
            empty_pulls: Vec::new(),
            requests: Vec::new(),
            deliveries: Vec::new(),
        }
    }

    pub(crate) fn with_max_chunk(mut self, max_chunk: usize) -> Self {
        self.max_chunk = max_chunk.max(1);
        self
    }

    pub(crate) fn with_empty_pulls(mut self, calls: &[usize]) -> Self {
        self.empty_pulls = calls.to_vec();
        self
    }

    /// The `max` argument of every pull so far.
    pub(crate) fn requests(&self) -> &[usize] {
        &self.requests
    }

    /// The stream range handed out by every non-empty pull.
    pub(crate) fn deliveries(&self) -> &[Range<usize>] {
        &self.deliveries
    }

    /// Whether the deliveries tile the stream from offset zero without gaps
    /// or overlaps.
    pub(crate) fn deliveries_are_contiguous(&self) -> bool {
        let mut next = 0;
        for range in &self.deliveries {
            if range.start != next {
                return false;
            }
            next = range.end;
        }
        next == self.delivered
    }
}

impl StreamCursor for RecordingCursor {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        let call = self.requests.len();
        self.requests.push(max);
        if self.empty_pulls.contains(&call) {
            return 0;
        }
        let n = max
            .min(self.max_chunk)
            .min(self.chars.len() - self.delivered);
        if n == 0 {
            return 0;
        }
        let range = self.delivered..self.delivered + n;
        out.extend_from_slice(&self.chars[range.clone()]);
        self.deliveries.push(range);
        self.delivered += n;
        n
    }

    fn is_exhausted(&self) -> bool {
        self.delivered == self.chars.len()
    }

    fn position(&self) -> usize {
        self.delivered
    }
}
