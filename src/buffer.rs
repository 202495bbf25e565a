//! The buffered writer at the core of the emitter: a fixed-capacity byte
//! region with a write cursor, line/column bookkeeping, and a
//! flush-on-near-full policy.
//!
//! Every byte enters through [`OutputBuffer::put`] or shares its
//! headroom-then-write pattern. The ordering inside each primitive is a
//! correctness invariant, not style: check headroom, then write, then update
//! the counters. Counters move only after the write has landed, so a sink
//! failure leaves them describing exactly what was emitted.

use log::trace;

use crate::error::EmitError;
use crate::traits::Sink;
use crate::types::BreakStyle;

/// Minimum free bytes required before any put proceeds. Sized to cover the
/// worst single put (the two-byte CRLF sequence) with margin, so no put ever
/// splits across a flush boundary.
pub(crate) const FLUSH_HEADROOM: usize = 5;

/// Fixed-capacity output buffer with line/column bookkeeping.
///
/// Capacity never changes after construction: a flush makes room by handing
/// the used region to the sink and resetting the cursor to the start, never
/// by growing the region.
#[derive(Debug)]
pub(crate) struct OutputBuffer {
    bytes: Vec<u8>,
    capacity: usize,
    break_style: BreakStyle,
    column: usize,
    line: usize,
}

impl OutputBuffer {
    pub(crate) fn new(capacity: usize, break_style: BreakStyle) -> Self {
        // A capacity at or below the threshold could never accept a byte.
        let capacity = capacity.max(FLUSH_HEADROOM + 1);
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
            break_style,
            column: 0,
            line: 0,
        }
    }

    /// Bytes emitted since the last line break.
    pub(crate) fn column(&self) -> usize {
        self.column
    }

    /// Line breaks emitted so far.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn break_style(&self) -> BreakStyle {
        self.break_style
    }

    /// Bytes currently buffered and not yet flushed.
    pub(crate) fn buffered(&self) -> usize {
        self.bytes.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    fn headroom(&self) -> usize {
        self.capacity - self.bytes.len()
    }

    /// Guarantees at least the threshold of free space, flushing the used
    /// region to the sink when it has run out. On sink failure the buffer is
    /// left unflushed and unchanged.
    fn ensure_headroom(&mut self, sink: &mut dyn Sink) -> Result<(), EmitError> {
        if self.headroom() > FLUSH_HEADROOM {
            return Ok(());
        }
        self.flush(sink)
    }

    /// Hands the buffered run to the sink and resets the write cursor.
    pub(crate) fn flush(&mut self, sink: &mut dyn Sink) -> Result<(), EmitError> {
        if !self.bytes.is_empty() {
            trace!("flushing {} buffered bytes to sink", self.bytes.len());
            sink.write_chunk(&self.bytes)?;
            self.bytes.clear();
        }
        Ok(())
    }

    /// Places one byte in the buffer. The sole primitive through which bytes
    /// enter; fails without writing when the flush fails.
    pub(crate) fn put(&mut self, sink: &mut dyn Sink, byte: u8) -> Result<(), EmitError> {
        self.ensure_headroom(sink)?;
        self.bytes.push(byte);
        self.column += 1;
        Ok(())
    }

    /// Writes the configured break sequence atomically. The single up-front
    /// headroom check covers the two-byte CRLF case, so the pair never
    /// straddles a flush.
    pub(crate) fn put_break(&mut self, sink: &mut dyn Sink) -> Result<(), EmitError> {
        self.ensure_headroom(sink)?;
        self.bytes.extend_from_slice(self.break_style.as_bytes());
        self.column = 0;
        self.line += 1;
        Ok(())
    }

    /// Emits spaces until the column reaches `target`. No effect when the
    /// column is already there; on sink failure the column reflects however
    /// many spaces landed before the failure.
    pub(crate) fn pad_to(&mut self, sink: &mut dyn Sink, target: usize) -> Result<(), EmitError> {
        while self.column < target {
            self.put(sink, b' ')?;
        }
        Ok(())
    }
}
