//! The sink contract consumed by the buffered writer.

use std::io;

/// Destination for flushed output.
///
/// The emitter hands a sink whole buffered runs: a call either accepts the
/// entire chunk durably or reports failure. There is no partial-success
/// signal and the emitter never retries a failed chunk.
pub trait Sink {
    /// Accepts one contiguous run of bytes.
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
}

/// In-memory accumulation, the common case for tests and for hosts that
/// serialize into a string buffer.
impl Sink for Vec<u8> {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.extend_from_slice(chunk);
        Ok(())
    }
}

/// Adapter turning any [`io::Write`] (file, socket, `BufWriter`) into a
/// [`Sink`].
pub struct WriteSink<W: io::Write>(pub W);

impl<W: io::Write> WriteSink<W> {
    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<W: io::Write> Sink for WriteSink<W> {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.0.write_all(chunk)
    }
}
