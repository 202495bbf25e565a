//! Value types shared across the output subsystem: the line-break style,
//! emitter configuration, and stream position marks.

use serde::{Deserialize, Serialize};

/// Byte sequence written for one logical line break.
///
/// Configured once per emitter and read-only afterwards. The set is closed:
/// every emitter has exactly one of these three encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakStyle {
    /// A lone carriage return (`\r`), classic Mac OS.
    Cr,
    /// A lone line feed (`\n`), Unix.
    #[default]
    Lf,
    /// Carriage return followed by line feed (`\r\n`), DOS/Windows.
    CrLf,
}

impl BreakStyle {
    /// The concrete encoding, at most two bytes.
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            BreakStyle::Cr => b"\r",
            BreakStyle::Lf => b"\n",
            BreakStyle::CrLf => b"\r\n",
        }
    }
}

/// Configuration for a new [`Emitter`](crate::Emitter).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterOptions {
    /// Encoding used by `put_break`.
    pub break_style: BreakStyle,
    /// Capacity of the output buffer in bytes. Values too small to satisfy
    /// the flush threshold are raised to a workable floor at construction.
    pub buffer_capacity: usize,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            break_style: BreakStyle::default(),
            buffer_capacity: 16 * 1024,
        }
    }
}

/// A position in a character stream, used by the parser state block and by
/// higher layers when reporting where in the input something happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    /// Byte offset from the start of the stream.
    pub index: usize,
    /// Line number, counted from zero.
    pub line: usize,
    /// Column within the line, counted from zero.
    pub column: usize,
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Byte sizes of the two opaque state blocks, reported to foreign allocators
/// that reserve storage without seeing the type definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSizes {
    /// Size of the parser state block in bytes.
    pub parser: usize,
    /// Size of the emitter state block in bytes.
    pub emitter: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_break_style_encodings() {
        assert_eq!(BreakStyle::Cr.as_bytes(), b"\r");
        assert_eq!(BreakStyle::Lf.as_bytes(), b"\n");
        assert_eq!(BreakStyle::CrLf.as_bytes(), b"\r\n");
    }

    #[test]
    fn test_default_options() {
        let options = EmitterOptions::default();
        assert_eq!(options.break_style, BreakStyle::Lf);
        assert_eq!(options.buffer_capacity, 16 * 1024);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: EmitterOptions =
            serde_json::from_str(r#"{ "break_style": "cr-lf" }"#).unwrap();
        assert_eq!(options.break_style, BreakStyle::CrLf);
        assert_eq!(options.buffer_capacity, 16 * 1024);
    }

    #[test]
    fn test_mark_display() {
        let mark = Mark { index: 42, line: 3, column: 7 };
        assert_eq!(mark.to_string(), "line 3, column 7");
    }
}
