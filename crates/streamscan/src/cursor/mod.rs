//! Pull-based character sources.
//!
//! A [`StreamCursor`] hands out decoded characters on request. It decides
//! whether a pull blocks; the scanner only decides how much to ask for and
//! when.
//!
//! The scanner never owns the cursor's lifecycle in a meaningful way: it can
//! be handed `&mut C`, `Box<C>` or `Rc<RefCell<C>>`, all of which implement
//! [`StreamCursor`] by forwarding.

use alloc::{boxed::Box, rc::Rc, vec::Vec};
use core::cell::RefCell;

mod feed;
#[cfg(feature = "std")]
mod reader;
mod str_cursor;

pub use feed::FeedCursor;
#[cfg(feature = "std")]
pub use reader::ReaderCursor;
pub use str_cursor::StrCursor;

/// A pull-based supplier of decoded characters.
pub trait StreamCursor {
    /// Appends at most `max` characters to `out` and returns how many were
    /// appended.
    ///
    /// Returning fewer than `max`, including zero, does not mean the stream
    /// ended; only [`is_exhausted`](Self::is_exhausted) says that.
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize;

    /// Returns `true` once no further characters will ever be delivered.
    fn is_exhausted(&self) -> bool;

    /// Number of characters delivered by [`pull`](Self::pull) so far.
    fn position(&self) -> usize;
}

impl<C: StreamCursor + ?Sized> StreamCursor for &mut C {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        (**self).pull(max, out)
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }

    fn position(&self) -> usize {
        (**self).position()
    }
}

impl<C: StreamCursor + ?Sized> StreamCursor for Box<C> {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        (**self).pull(max, out)
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }

    fn position(&self) -> usize {
        (**self).position()
    }
}

/// Shared handle: several scanners (or a scanner and a producer) may hold the
/// same cursor. Borrows are short and never overlap within one call.
impl<C: StreamCursor + ?Sized> StreamCursor for Rc<RefCell<C>> {
    fn pull(&mut self, max: usize, out: &mut Vec<char>) -> usize {
        self.borrow_mut().pull(max, out)
    }

    fn is_exhausted(&self) -> bool {
        self.borrow().is_exhausted()
    }

    fn position(&self) -> usize {
        self.borrow().position()
    }
}
