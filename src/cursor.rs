//! Bounded forward-only byte cursor.
//!
//! [`Cursor`] is the sole input to a [`Reader`](crate::Reader): a window
//! over a finite byte sequence supporting peek, consume-by-n, and
//! end-of-input detection. It never allocates and has no side effects
//! beyond position advancement.

use crate::error::{Error, Result};

/// A forward-only cursor over a byte slice.
///
/// # Examples
///
/// ```rust
/// use serde_tob::cursor::Cursor;
///
/// let mut cursor = Cursor::new(&[0x01, 0x02, 0x03]);
/// assert_eq!(cursor.peek(), Some(0x01));
/// assert_eq!(cursor.consume(2).unwrap(), &[0x01, 0x02]);
/// assert_eq!(cursor.remaining(), 1);
/// assert!(cursor.consume(2).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a [u8]) -> Self {
        Cursor { input, position: 0 }
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }

    /// Returns `true` if no bytes remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Returns the absolute offset of the cursor from the start of the input.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.position
    }

    /// Returns the next byte without consuming it, or `None` at end of input.
    #[must_use]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.position).copied()
    }

    /// Advances the cursor by `n` bytes and returns the consumed slice.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnexpectedEnd`] if fewer than `n` bytes remain;
    /// the cursor is not advanced in that case.
    pub fn consume(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::unexpected_end(self.position, "more input"));
        }
        let slice = &self.input[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_and_remaining() {
        let mut cursor = Cursor::new(b"abcd");
        assert_eq!(cursor.remaining(), 4);
        assert_eq!(cursor.consume(1).unwrap(), b"a");
        assert_eq!(cursor.consume(3).unwrap(), b"bcd");
        assert!(cursor.is_empty());
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_consume_past_end_does_not_advance() {
        let mut cursor = Cursor::new(b"ab");
        assert!(cursor.consume(3).is_err());
        assert_eq!(cursor.remaining(), 2);
        assert_eq!(cursor.consume(2).unwrap(), b"ab");
    }

    #[test]
    fn test_empty_input() {
        let mut cursor = Cursor::new(&[]);
        assert!(cursor.is_empty());
        assert_eq!(cursor.consume(0).unwrap(), &[] as &[u8]);
        assert!(cursor.consume(1).is_err());
    }
}
