//! The emitter state block and its public operation surface.

use crate::buffer::OutputBuffer;
use crate::error::EmitError;
use crate::traits::Sink;
use crate::types::{BreakStyle, EmitterOptions};

/// Output-side state block: the fixed-capacity buffer, its line/column
/// counters, the configured break style, and the sink the buffer drains into.
///
/// All mutation goes through the operations below; no field is exposed, so
/// the buffer invariants hold for the emitter's whole lifetime. One emitter
/// serves one logical caller: operations take `&mut self` and never suspend,
/// so concurrent use from several threads has to be serialized by the caller.
///
/// The sink is held as a trait object rather than a type parameter so the
/// state block has one concrete size, which [`state_sizes`](crate::state_sizes)
/// reports to foreign allocators.
pub struct Emitter {
    sink: Box<dyn Sink>,
    buffer: OutputBuffer,
}

impl Emitter {
    /// Creates an emitter draining into `sink`, configured by `options`.
    pub fn new(sink: Box<dyn Sink>, options: EmitterOptions) -> Self {
        Self {
            sink,
            buffer: OutputBuffer::new(options.buffer_capacity, options.break_style),
        }
    }

    /// Places one byte in the output stream.
    ///
    /// Flushes to the sink first when buffer headroom has run out; on a sink
    /// failure nothing is written and the counters do not move.
    pub fn put(&mut self, byte: u8) -> Result<(), EmitError> {
        self.buffer.put(self.sink.as_mut(), byte)
    }

    /// Emits one logical line break in the configured [`BreakStyle`],
    /// resetting the column and advancing the line count.
    pub fn put_break(&mut self) -> Result<(), EmitError> {
        self.buffer.put_break(self.sink.as_mut())
    }

    /// Pads with spaces until the column reaches `target`. Does nothing when
    /// the column is already at or past it.
    pub fn pad_to(&mut self, target: usize) -> Result<(), EmitError> {
        self.buffer.pad_to(self.sink.as_mut(), target)
    }

    /// Drains any buffered bytes to the sink.
    pub fn flush(&mut self) -> Result<(), EmitError> {
        self.buffer.flush(self.sink.as_mut())
    }

    /// Flushes the tail of the stream and hands back the sink.
    pub fn finish(mut self) -> Result<Box<dyn Sink>, EmitError> {
        self.flush()?;
        Ok(self.sink)
    }

    /// Bytes emitted since the last line break.
    pub fn column(&self) -> usize {
        self.buffer.column()
    }

    /// Line breaks emitted so far.
    pub fn line(&self) -> usize {
        self.buffer.line()
    }

    /// The configured line-break encoding.
    pub fn break_style(&self) -> BreakStyle {
        self.buffer.break_style()
    }

    /// Bytes currently buffered and not yet handed to the sink.
    pub fn buffered(&self) -> usize {
        self.buffer.buffered()
    }

    /// Fixed capacity of the output buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    /// Sink backed by a shared buffer, so tests keep a handle to the output
    /// after the emitter takes ownership of the box.
    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl SharedSink {
        fn bytes(&self) -> Vec<u8> {
            self.0.borrow().clone()
        }
    }

    impl Sink for SharedSink {
        fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
            self.0.borrow_mut().extend_from_slice(chunk);
            Ok(())
        }
    }

    fn emitter_with_capacity(capacity: usize, break_style: BreakStyle) -> (Emitter, SharedSink) {
        let sink = SharedSink::default();
        let emitter = Emitter::new(
            Box::new(sink.clone()),
            EmitterOptions { break_style, buffer_capacity: capacity },
        );
        (emitter, sink)
    }

    #[test]
    fn test_counters_track_puts_and_breaks() {
        let (mut emitter, _) = emitter_with_capacity(64, BreakStyle::Lf);
        emitter.put(b'k').unwrap();
        emitter.put(b':').unwrap();
        assert_eq!(emitter.column(), 2);
        assert_eq!(emitter.line(), 0);
        emitter.put_break().unwrap();
        assert_eq!(emitter.column(), 0);
        assert_eq!(emitter.line(), 1);
    }

    #[test]
    fn test_pad_then_put_reaches_target_column() {
        let (mut emitter, _) = emitter_with_capacity(64, BreakStyle::Lf);
        emitter.pad_to(4).unwrap();
        emitter.put(b'-').unwrap();
        assert_eq!(emitter.column(), 5);
        assert_eq!(emitter.buffered(), 5);
    }

    #[test]
    fn test_break_style_is_read_back() {
        let (emitter, _) = emitter_with_capacity(64, BreakStyle::CrLf);
        assert_eq!(emitter.break_style(), BreakStyle::CrLf);
    }

    #[test]
    fn test_finish_flushes_tail() {
        let (mut emitter, sink) = emitter_with_capacity(64, BreakStyle::Lf);
        emitter.put(b'a').unwrap();
        emitter.put_break().unwrap();
        assert_eq!(emitter.buffered(), 2);
        emitter.finish().unwrap();
        assert_eq!(sink.bytes(), b"a\n");
    }
}
