//! Buffered output primitives for a streaming YAML emitter.
//!
//! This crate holds the output subsystem underneath a YAML-style document
//! serializer, plus the state-size query a foreign allocator needs to
//! reserve opaque storage for the stream state:
//! - [`Emitter`] — the output-side state block with its three primitives:
//!   put a byte, put an encoded line break, pad with spaces to a column
//! - [`Sink`] — the contract for the channel flushed output drains into
//! - [`Parser`] — the input-side companion state block
//! - [`state_sizes`] — byte sizes of the two state blocks
//!
//! The serialization decision logic (scalar styles, anchors, tags, layout)
//! lives in the layers above and drives these primitives.

mod buffer;
mod emitter;
mod error;
mod parser;
mod traits;
mod types;

pub use emitter::Emitter;
pub use error::EmitError;
pub use parser::Parser;
pub use traits::{Sink, WriteSink};
pub use types::{BreakStyle, EmitterOptions, Mark, StateSizes};

/// Reports the byte sizes of the two opaque state blocks.
///
/// Pure and constant per build; foreign allocators use it to reserve
/// correctly sized storage without seeing the type definitions.
pub fn state_sizes() -> StateSizes {
    StateSizes {
        parser: size_of::<Parser>(),
        emitter: size_of::<Emitter>(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_sizes_match_the_types() {
        let sizes = state_sizes();
        assert_eq!(sizes.parser, size_of::<Parser>());
        assert_eq!(sizes.emitter, size_of::<Emitter>());
        assert!(sizes.parser > 0);
        assert!(sizes.emitter > 0);
    }

    #[test]
    fn test_state_sizes_are_stable_within_a_build() {
        assert_eq!(state_sizes(), state_sizes());
    }
}
