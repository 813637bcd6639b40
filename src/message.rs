//! Fixed-capacity buffer the report phase composes its message into.

use core::fmt::{self, Write};

use crate::config::MESSAGE_CAPACITY;

/// String writer backed by an inline byte array.
///
/// Writes past the capacity are truncated at the last complete character and
/// never fail, so a long label can shorten a message but not lose it.
#[derive(Clone)]
pub struct MessageBuffer<const N: usize = MESSAGE_CAPACITY> {
    buffer: [u8; N],
    pos: usize,
}

impl<const N: usize> MessageBuffer<N> {
    pub const fn new() -> Self {
        Self {
            buffer: [0; N],
            pos: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        // Only whole characters are ever copied in.
        core::str::from_utf8(&self.buffer[..self.pos]).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    pub fn is_full(&self) -> bool {
        self.pos == N
    }

    pub fn clear(&mut self) {
        self.pos = 0;
    }
}

impl<const N: usize> Write for MessageBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let remaining = N - self.pos;
        let mut to_copy = core::cmp::min(s.len(), remaining);
        while !s.is_char_boundary(to_copy) {
            to_copy -= 1;
        }

        if to_copy > 0 {
            self.buffer[self.pos..self.pos + to_copy].copy_from_slice(&s.as_bytes()[..to_copy]);
            self.pos += to_copy;
        }

        Ok(())
    }
}

impl<const N: usize> Default for MessageBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for MessageBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}
