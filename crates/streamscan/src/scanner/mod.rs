//! Character scanning over any source.
//!
//! [`CharScanner`] is the consumer-facing capability: look at characters
//! ahead of the scan location, move forward, move back. Two implementations
//! exist:
//!
//! - [`StringScanner`] over text that is entirely in memory.
//! - [`StreamScanner`] over a [`StreamCursor`](crate::StreamCursor), pulling
//!   characters lazily into a readahead buffer.
//!
//! Everything else on the trait (matching literals, collecting runs, reading
//! lines and numbers) is provided in terms of those four primitives, so a
//! tokenizer written against `CharScanner` runs unchanged on either.
//!
//! End of stream inside a provided helper just ends the helper. Any other
//! error is returned with the scan location restored to where the helper
//! started, so the call can be retried.

use alloc::string::String;

use crate::ScanError;

mod stream;
mod string;

pub use stream::StreamScanner;
pub use string::StringScanner;

/// A saved scan location.
///
/// Produced by [`CharScanner::mark`] and consumed by [`CharScanner::rewind`].
/// A mark stays valid until readahead at or past it is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mark(usize);

impl Mark {
    /// The absolute position this mark refers to.
    #[must_use]
    pub fn position(self) -> usize {
        self.0
    }
}

/// Cursor-style access to a sequence of characters.
///
/// Positions are absolute character offsets from the start of the source.
pub trait CharScanner {
    /// The current absolute scan position.
    fn scan_location(&self) -> usize;

    /// The character `offset` places past the scan location, without moving.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfStream`] if the source ends first.
    fn peek_at(&mut self, offset: usize) -> Result<char, ScanError>;

    /// Moves the scan location forward by `n` characters.
    ///
    /// Either all `n` characters exist and the move happens, or nothing
    /// moves.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfStream`] if fewer than `n` characters remain.
    fn advance(&mut self, n: usize) -> Result<(), ScanError>;

    /// Moves the scan location to `position`, which must still be retained.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidBacktrack`] if `position` was discarded or lies
    /// beyond the data seen so far.
    fn backtrack(&mut self, position: usize) -> Result<(), ScanError>;

    /// Forgets everything before the scan location. Returns how many
    /// characters were released.
    ///
    /// In-memory sources have nothing to release.
    fn discard_readahead(&mut self) -> usize {
        0
    }

    /// The character at the scan location.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfStream`] at the end of the source.
    fn peek(&mut self) -> Result<char, ScanError> {
        self.peek_at(0)
    }

    /// Like [`peek_at`](Self::peek_at), with end of stream as `None`.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`].
    fn try_peek_at(&mut self, offset: usize) -> Result<Option<char>, ScanError> {
        match self.peek_at(offset) {
            Ok(ch) => Ok(Some(ch)),
            Err(ScanError::EndOfStream { .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Like [`peek`](Self::peek), with end of stream as `None`.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`].
    fn try_peek(&mut self) -> Result<Option<char>, ScanError> {
        self.try_peek_at(0)
    }

    /// Returns the character at the scan location and moves past it.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfStream`] at the end of the source.
    fn next_char(&mut self) -> Result<char, ScanError> {
        let ch = self.peek()?;
        self.advance(1)?;
        Ok(ch)
    }

    /// Moves past one character.
    ///
    /// # Errors
    ///
    /// [`ScanError::EndOfStream`] at the end of the source.
    fn skip_char(&mut self) -> Result<(), ScanError> {
        self.advance(1)
    }

    /// Whether the scan location sits at the end of the source.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`].
    fn is_at_end(&mut self) -> Result<bool, ScanError> {
        Ok(self.try_peek()?.is_none())
    }

    /// Saves the scan location.
    fn mark(&self) -> Mark {
        Mark(self.scan_location())
    }

    /// Returns to a saved scan location.
    ///
    /// # Errors
    ///
    /// [`ScanError::InvalidBacktrack`] if the mark was discarded.
    fn rewind(&mut self, mark: Mark) -> Result<(), ScanError> {
        self.backtrack(mark.0)
    }

    /// Consumes `expected` if it is the next character.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`].
    fn scan_char(&mut self, expected: char) -> Result<bool, ScanError> {
        if self.try_peek()? == Some(expected) {
            self.advance(1)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes `literal` if the upcoming characters match it.
    ///
    /// With `case_insensitive`, characters are compared by their lowercase
    /// mappings. Nothing moves on a mismatch.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`].
    fn scan_str(&mut self, literal: &str, case_insensitive: bool) -> Result<bool, ScanError> {
        let mut count = 0;
        for expected in literal.chars() {
            let Some(ch) = self.try_peek_at(count)? else {
                return Ok(false);
            };
            let matches = ch == expected
                || (case_insensitive && ch.to_lowercase().eq(expected.to_lowercase()));
            if !matches {
                return Ok(false);
            }
            count += 1;
        }
        self.advance(count)?;
        Ok(true)
    }

    /// Moves past characters while `pred` holds. Returns how many.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`]; the scan location is
    /// restored first.
    fn skip_while(&mut self, mut pred: impl FnMut(char) -> bool) -> Result<usize, ScanError> {
        let start = self.scan_location();
        let mut count = 0;
        loop {
            match self.try_peek() {
                Ok(Some(ch)) if pred(ch) => {
                    self.advance(1)?;
                    count += 1;
                }
                Ok(_) => return Ok(count),
                Err(err) => {
                    self.backtrack(start)?;
                    return Err(err);
                }
            }
        }
    }

    /// Collects characters while `pred` holds.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`]; the scan location is
    /// restored first.
    fn scan_while(&mut self, mut pred: impl FnMut(char) -> bool) -> Result<String, ScanError> {
        let start = self.scan_location();
        let mut out = String::new();
        loop {
            match self.try_peek() {
                Ok(Some(ch)) if pred(ch) => {
                    self.advance(1)?;
                    out.push(ch);
                }
                Ok(_) => return Ok(out),
                Err(err) => {
                    self.backtrack(start)?;
                    return Err(err);
                }
            }
        }
    }

    /// Collects characters up to, not including, the first one matching
    /// `stop`, or to the end of the source.
    ///
    /// # Errors
    ///
    /// As [`scan_while`](Self::scan_while).
    fn scan_up_to(&mut self, mut stop: impl FnMut(char) -> bool) -> Result<String, ScanError> {
        self.scan_while(|ch| !stop(ch))
    }

    /// Reads one line and consumes its terminator (`\n`, `\r\n` or `\r`).
    ///
    /// Returns `None` when already at the end of the source. The last line
    /// need not be terminated.
    ///
    /// # Errors
    ///
    /// Errors other than [`ScanError::EndOfStream`]; the scan location is
    /// restored first.
    fn read_line(&mut self) -> Result<Option<String>, ScanError> {
        let start = self.scan_location();
        if self.try_peek()?.is_none() {
            return Ok(None);
        }
        let line = self.scan_up_to(|ch| ch == '\n' || ch == '\r')?;
        // After `\r` the `\n` is optional; otherwise it is next or we are at
        // the end.
        let terminated = self.scan_char('\r').and_then(|_| self.scan_char('\n'));
        if let Err(err) = terminated {
            self.backtrack(start)?;
            return Err(err);
        }
        Ok(Some(line))
    }

    /// Reads a run of ASCII decimal digits as a number.
    ///
    /// Returns `None`, without moving, if no digit is next. Values too large
    /// for `u64` saturate.
    ///
    /// # Errors
    ///
    /// As [`skip_while`](Self::skip_while).
    fn scan_unsigned(&mut self) -> Result<Option<u64>, ScanError> {
        let mut value: u64 = 0;
        let digits = self.skip_while(|ch| match ch.to_digit(10) {
            Some(d) => {
                value = value.saturating_mul(10).saturating_add(u64::from(d));
                true
            }
            None => false,
        })?;
        Ok((digits > 0).then_some(value))
    }
}
