use thiserror::Error;

/// Errors produced by the output subsystem.
///
/// There is exactly one failure class: the sink rejected a flushed chunk.
/// The buffer is fixed-size and pre-owned, so no allocation or validation
/// errors exist here. A sink failure is never retried internally; callers
/// should treat it as fatal for the current serialization attempt.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to flush output buffer to sink: {0}")]
    Sink(#[from] std::io::Error),
}
