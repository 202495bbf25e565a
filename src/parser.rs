//! The input-side companion state block.
//!
//! Scanning and event assembly live outside this crate; the parser state is
//! defined here so allocation-size reporting covers both halves of the
//! stream state, and so the read buffer's lifecycle mirrors the emitter's
//! output buffer.

use crate::types::Mark;

/// Default read-buffer capacity, matching the output side.
const INPUT_BUFFER_CAPACITY: usize = 16 * 1024;

/// Input-side state block: the fixed-capacity read buffer, the consumption
/// cursor into it, and the position mark of the next unread character.
pub struct Parser {
    buffer: Vec<u8>,
    offset: usize,
    mark: Mark,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(INPUT_BUFFER_CAPACITY),
            offset: 0,
            mark: Mark::default(),
        }
    }

    /// Position of the next unread character.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Unconsumed bytes currently buffered.
    pub fn buffered(&self) -> usize {
        self.buffer.len() - self.offset
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
