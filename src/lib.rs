//! A recognizer for the Lua 5.3 source language, implemented as a
//! deterministic two-way pushdown automaton (2PDA).
//!
//! Given a byte sequence, [`lua::parse_chunk`] accepts it iff it is a
//! syntactically well-formed Lua 5.3 chunk; otherwise it returns a
//! structured [`error::ParseError`] naming the offending byte offset, the
//! automaton state at the point of failure, and the stack contents. This
//! crate produces no parse tree — acceptance or rejection is the only
//! output.
//!
//! ```
//! use lua_2pda::lua::parse_chunk;
//!
//! assert!(parse_chunk(b"for i = 1, 10 do print(i) end").is_ok());
//! assert!(parse_chunk(b"123abc = 1").is_err());
//! ```
//!
//! ## Layout
//!
//! - [`engine`] is the generic 2PDA executor: state, stack, cursor, and
//!   the step function that looks up `(state, byte, stack-top)` in a
//!   transition table. It knows nothing about Lua.
//! - [`lua`] builds the Lua-specific transition table, once, by composing
//!   parametric subsystems (whitespace/comments, long brackets, names and
//!   keywords, strings, numerals, l-/r-values, expressions, table
//!   constructors, function bodies, statements) that mirror the grammar's
//!   own structure.
//! - [`error`] carries the failure taxonomy plus a small helper for
//!   rendering a byte offset as a `[line N]`/caret-indicator pair, used
//!   by the `lua-pda` CLI binary.
//!
//! ## Non-goals
//!
//! This crate does not build an AST, evaluate or compile Lua, preserve
//! source positions beyond the failure index, support Lua versions other
//! than 5.3, or recognize shebang lines past the first logical line.

pub mod engine;
pub mod error;
pub mod lua;
