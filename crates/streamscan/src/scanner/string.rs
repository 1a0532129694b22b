use alloc::vec::Vec;

use super::CharScanner;
use crate::ScanError;

/// A [`CharScanner`] over text held entirely in memory.
///
/// Every position from zero to the end of the text can be revisited.
///
/// ```rust
/// use streamscan::{CharScanner, StringScanner};
///
/// let mut scanner = StringScanner::new("let x = 42;");
/// assert!(scanner.scan_str("let", false).unwrap());
/// scanner.skip_while(char::is_whitespace).unwrap();
/// assert_eq!(scanner.scan_while(char::is_alphanumeric).unwrap(), "x");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringScanner {
    chars: Vec<char>,
    position: usize,
}

impl StringScanner {
    /// Creates a scanner at the start of `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            position: 0,
        }
    }

    /// Total number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters from the scan location to the end.
    #[must_use]
    pub fn remaining(&self) -> &[char] {
        &self.chars[self.position..]
    }
}

impl From<&str> for StringScanner {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl CharScanner for StringScanner {
    #[inline]
    fn scan_location(&self) -> usize {
        self.position
    }

    fn peek_at(&mut self, offset: usize) -> Result<char, ScanError> {
        let target = self.position.saturating_add(offset);
        self.chars
            .get(target)
            .copied()
            .ok_or(ScanError::EndOfStream {
                position: self.chars.len(),
            })
    }

    fn advance(&mut self, n: usize) -> Result<(), ScanError> {
        if n > self.chars.len() - self.position {
            return Err(ScanError::EndOfStream {
                position: self.chars.len(),
            });
        }
        self.position += n;
        Ok(())
    }

    fn backtrack(&mut self, position: usize) -> Result<(), ScanError> {
        if position > self.chars.len() {
            return Err(ScanError::InvalidBacktrack {
                requested: position,
                start: 0,
                end: self.chars.len(),
            });
        }
        self.position = position;
        Ok(())
    }
}
