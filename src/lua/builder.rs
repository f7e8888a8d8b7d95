//! The mutable table-under-construction, shared by every subsystem in
//! [`crate::lua`], plus the small combinators subsystems use to wire
//! transitions.

use crate::engine::{Direction, StackOp, Transition, Transitions};
use crate::lua::charset::ALL;

/// The transition table as it's being built. Subsystems take `&mut
/// TableBuilder` and insert into it; nothing is read back out until the
/// whole table is handed to [`crate::engine::TwoPda`].
pub struct TableBuilder {
    pub transitions: Transitions,
}

impl TableBuilder {
    pub fn new() -> Self {
        TableBuilder {
            transitions: Transitions::new(),
        }
    }

    /// Insert (or overwrite) the transition taken from `state` on `byte`
    /// when the stack top matches `top` (`None` = wildcard, matching any
    /// top including an empty stack).
    pub fn set(&mut self, state: &str, byte: u8, top: Option<&str>, transition: Transition) {
        self.transitions.insert(
            (state.to_string(), byte, top.map(str::to_string)),
            transition,
        );
    }

    /// `set` for every byte in `bytes`, with the same destination
    /// transition (cloned per byte).
    pub fn set_many(
        &mut self,
        state: &str,
        bytes: impl IntoIterator<Item = u8>,
        top: Option<&str>,
        transition: Transition,
    ) {
        for b in bytes {
            self.set(state, b, top, transition.clone());
        }
    }

    /// `set_many` over every byte value (0..=255).
    pub fn set_all(&mut self, state: &str, top: Option<&str>, transition: Transition) {
        self.set_many(state, ALL, top, transition);
    }

    pub fn build(self) -> Transitions {
        self.transitions
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A transition that routes to a dead state with no outgoing transitions
/// of its own, so that the *next* byte read there raises a no-transition
/// error. Used everywhere the original source uses `FAIL_TRANSITION`: a
/// caller-supplied continuation for "this isn't actually possible here."
pub fn fail() -> Transition {
    Transition::new("FAIL", Direction::Stay, StackOp::Read, None)
}

/// Build a per-caller sentinel name by suffixing a subsystem-local prefix
/// with the caller's start state, guaranteeing namespace separation across
/// re-uses of the same subsystem (`spec.md` §3's stack-discipline
/// invariant).
pub fn sentinel(prefix: &str, caller_state: &str) -> String {
    format!("{prefix}__{caller_state}")
}
