//! Error types for the 2PDA engine, plus a small helper for locating a byte
//! offset within a source buffer (used by the CLI to render a caret).

use thiserror::Error;

use crate::engine::StackOp;

/// Errors that can be produced while running a parse.
///
/// All variants are terminal: the engine never attempts recovery or
/// resynchronization after one is raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No transition exists for `(state, byte, stack top)`, nor for the
    /// wildcard-top fallback. This is the only error a well-formed
    /// transition table can ever raise on malformed input.
    #[error("no transition for byte {byte:#04x} at index {index} (state {state:?}, stack {stack:?})")]
    NoTransition {
        index: usize,
        state: String,
        byte: u8,
        stack: Vec<String>,
    },

    /// A transition named a stack operation the engine doesn't recognize.
    /// Unreachable for any table built by this crate; kept because the
    /// engine itself is generic and must not panic on a malformed table.
    #[error("transition at index {index} (state {state:?}) names an unrecognized stack operation {op:?}")]
    UnknownOp {
        index: usize,
        state: String,
        op: StackOp,
    },

    /// The stack grew past [`crate::engine::MAX_STACK_DEPTH`]. Guards
    /// against unbounded memory use on deeply (or infinitely, for
    /// malformed tables) nested constructs.
    #[error("stack depth exceeded {limit} symbols at index {index} (state {state:?})")]
    StackOverflow {
        index: usize,
        state: String,
        limit: usize,
    },
}

/// A located line/column pair within a source buffer, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: usize,
    /// 0-based column within `line_text`.
    pub column: usize,
    /// The raw bytes of the offending line (excluding its terminator),
    /// decoded lossily for display.
    pub line_text: String,
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = format!("[line {}] ", self.line);
        writeln!(f, "{prefix}{}", self.line_text)?;
        write!(f, "{}{}^", " ".repeat(prefix.len()), "-".repeat(self.column))
    }
}

/// Locate byte index `index` within `bytes`, returning its 1-based line
/// number, 0-based column, and the line's text.
///
/// Mirrors the original recognizer's `_print_nice_indicator` helper: the
/// line is the span between the nearest preceding `\n` (exclusive) and the
/// next `\n` (exclusive), and the column is the offset of `index` within
/// that span.
pub fn locate(bytes: &[u8], index: usize) -> SourceLocation {
    let index = index.min(bytes.len());
    let line_start = bytes[..index]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |p| p + 1);
    let line_end = bytes[index..]
        .iter()
        .position(|&b| b == b'\n')
        .map_or(bytes.len(), |p| index + p);
    let line = bytes[..index].iter().filter(|&&b| b == b'\n').count() + 1;
    let column = index - line_start;
    let line_text = String::from_utf8_lossy(&bytes[line_start..line_end]).into_owned();
    SourceLocation {
        line,
        column,
        line_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_first_line() {
        let loc = locate(b"abc\ndef", 1);
        assert_eq!(loc.line, 1);
        assert_eq!(loc.column, 1);
        assert_eq!(loc.line_text, "abc");
    }

    #[test]
    fn locates_second_line() {
        let loc = locate(b"abc\ndef", 5);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 1);
        assert_eq!(loc.line_text, "def");
    }

    #[test]
    fn renders_caret() {
        let loc = locate(b"a = 1\nb = ?\n", 10);
        let rendered = format!("{loc}");
        assert!(rendered.contains("[line 2] b = ?"));
        assert!(rendered.ends_with('^'));
    }
}
