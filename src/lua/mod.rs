//! The Lua 5.3 grammar, expressed as a 2PDA transition table.
//!
//! This module is a one-time *construction*: [`automaton`] builds the
//! table exactly once (behind a [`once_cell::sync::Lazy`]) by calling each
//! subsystem's `wire` function in turn, then hands the finished
//! [`crate::engine::TwoPda`] to every caller. Nothing here is mutated
//! after that first build, so concurrent calls to [`parse_chunk`] share
//! one table without locking.
//!
//! The subsystem split mirrors `spec.md` §4: each submodule is a
//! self-contained grammatical construct (whitespace/comments, long
//! brackets, names, strings, l-/r-values, expressions, table
//! constructors, function bodies, statements), wired together by
//! `wire()` below in the same order the original construction used.

pub mod builder;
pub mod charset;
pub mod expr;
pub mod func_body;
pub mod long_bracket;
pub mod lvalue;
pub mod names;
pub mod statement;
pub mod strings;
pub mod table_ctor;
pub mod whitespace;

use once_cell::sync::Lazy;

use crate::engine::{Transitions, TwoPda};
use crate::error::ParseError;

fn wire(b: &mut builder::TableBuilder) {
    long_bracket::wire(b);
    long_bracket::wire_comments(b);
    names::wire(b);
    names::wire_name_list(b);
    strings::wire(b);
    lvalue::wire(b);
    expr::wire(b);
    table_ctor::wire(b);
    func_body::wire(b);
    statement::wire(b);
}

fn build_transitions() -> Transitions {
    let mut b = builder::TableBuilder::new();
    wire(&mut b);
    b.build()
}

static LUA_2PDA: Lazy<TwoPda> = Lazy::new(|| TwoPda::new("Lua", "start", build_transitions()));

/// The built-once Lua 5.3 recognizer. Safe to share across concurrent
/// parses; building it is not free (tens of thousands of transitions),
/// so this is done once per process and cached.
pub fn automaton() -> &'static TwoPda {
    &LUA_2PDA
}

/// Parse `bytes` as a Lua 5.3 chunk, with tracing disabled.
pub fn parse_chunk(bytes: &[u8]) -> Result<(), ParseError> {
    automaton().parse(bytes)
}

/// Parse `bytes` as a Lua 5.3 chunk, with the engine's debug tracing set
/// to `debug_level` (0..3; see `spec.md` §6's debug interface).
pub fn parse_chunk_with_debug(bytes: &[u8], debug_level: u8) -> Result<(), ParseError> {
    automaton().parse_with_debug(bytes, debug_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_nonempty_table() {
        let stats = automaton().stats();
        assert!(stats.transitions > 1000, "expected a large transition table, got {stats:?}");
        assert!(stats.states > 100, "expected many states, got {stats:?}");
    }

    #[test]
    fn accepts_do_end() {
        assert!(parse_chunk(b"do end").is_ok());
    }

    #[test]
    fn rejects_empty_garbage() {
        assert!(parse_chunk(b"@").is_err());
    }
}
