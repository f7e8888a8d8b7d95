//! The generic two-way pushdown automaton (2PDA).
//!
//! This is deliberately small and grammar-agnostic: everything about Lua
//! lives in [`crate::lua`], which builds a [`Transitions`] table that this
//! module merely executes.

use std::collections::HashMap;

use log::{log_enabled, trace, Level};

use crate::error::ParseError;

/// Whether the cursor advances after a transition is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Stay,
}

/// What to do to the stack when a transition is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    Push,
    Pop,
    Read,
    Replace,
}

/// A control state. Kept as an owned string for readability, matching the
/// original construction; nothing about the engine requires this, so a
/// caller chasing raw throughput could intern these as small integers
/// without changing observable behavior.
pub type State = String;

/// A stack symbol.
pub type Symbol = String;

/// One entry of the transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next_state: State,
    pub direction: Direction,
    pub op: StackOp,
    pub value: Option<Symbol>,
}

impl Transition {
    pub fn new(next_state: &str, direction: Direction, op: StackOp, value: Option<Symbol>) -> Self {
        Transition {
            next_state: next_state.to_string(),
            direction,
            op,
            value,
        }
    }
}

/// Key into the transition table: `(state, byte, stack-top-or-wildcard)`.
/// A `top` of `None` is the wildcard entry, which also matches an empty
/// stack. Per the determinism invariant, a specific-top key always takes
/// precedence over the wildcard key when both match.
pub type TransitionKey = (State, u8, Option<Symbol>);

/// The immutable, built-once transition table.
pub type Transitions = HashMap<TransitionKey, Transition>;

/// Upper bound on stack depth for any single parse. Nested Lua constructs
/// (blocks, parenthesized expressions, table constructors...) each push a
/// bounded number of sentinels per nesting level, so this is generous
/// enough for any real program while still turning a pathological or
/// adversarial input into a clean error instead of unbounded growth.
pub const MAX_STACK_DEPTH: usize = 1 << 20;

/// Aggregate counts over a transition table, per the statistics interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub states: usize,
    pub stack_symbols: usize,
    pub transitions: usize,
}

/// An immutable automaton definition: a transition table, an initial
/// state, and a name. Built once; safe to share read-only across
/// concurrently running parses.
pub struct TwoPda {
    pub name: String,
    pub initial_state: State,
    pub transitions: Transitions,
}

impl TwoPda {
    pub fn new(name: impl Into<String>, initial_state: impl Into<State>, transitions: Transitions) -> Self {
        TwoPda {
            name: name.into(),
            initial_state: initial_state.into(),
            transitions,
        }
    }

    /// Parse `input` from the initial state. Returns `Ok(())` if the
    /// cursor reaches end-of-input without ever failing to find a
    /// transition; the engine has no notion of an "accept state" beyond
    /// this (see `spec.md` §4.1).
    pub fn parse(&self, input: &[u8]) -> Result<(), ParseError> {
        self.parse_with_debug(input, 0)
    }

    /// Same as [`TwoPda::parse`], but with `debug_level` (0..3) controlling
    /// how much the engine traces via the `log` crate:
    /// - 0: silent
    /// - 1: nothing extra (reserved for caller-level error printing)
    /// - 2: one line per consumed byte, showing state and stack
    /// - 3: also logs each transition key that was matched
    pub fn parse_with_debug(&self, input: &[u8], debug_level: u8) -> Result<(), ParseError> {
        let mut runtime = Runtime::new(&self.initial_state);
        if debug_level >= 2 {
            trace!(
                "starting to parse {} bytes starting with {:?}",
                input.len(),
                String::from_utf8_lossy(&input[..input.len().min(60)])
            );
        }

        let mut i = 0usize;
        while i < input.len() {
            let direction = runtime.consume(&self.transitions, input, i, debug_level)?;
            if direction == Direction::Right {
                i += 1;
            }
        }
        Ok(())
    }

    /// Count distinct states, stack symbols, and transitions in the table.
    pub fn stats(&self) -> TableStats {
        let mut states = std::collections::HashSet::new();
        let mut stack_symbols = std::collections::HashSet::new();
        for ((state, _byte, top), transition) in &self.transitions {
            states.insert(state.clone());
            states.insert(transition.next_state.clone());
            if let Some(t) = top {
                stack_symbols.insert(t.clone());
            }
            if let Some(v) = &transition.value {
                stack_symbols.insert(v.clone());
            }
        }
        TableStats {
            states: states.len(),
            stack_symbols: stack_symbols.len(),
            transitions: self.transitions.len(),
        }
    }
}

/// The mutable `(state, stack, cursor)` triple owned by a single parse.
struct Runtime {
    state: State,
    stack: Vec<Symbol>,
}

impl Runtime {
    fn new(initial_state: &str) -> Self {
        Runtime {
            state: initial_state.to_string(),
            stack: Vec::new(),
        }
    }

    fn consume(
        &mut self,
        transitions: &Transitions,
        input: &[u8],
        index: usize,
        debug_level: u8,
    ) -> Result<Direction, ParseError> {
        let byte = input[index];
        let top = self.stack.last().cloned();

        let transition = top
            .as_ref()
            .and_then(|t| transitions.get(&(self.state.clone(), byte, Some(t.clone()))))
            .or_else(|| transitions.get(&(self.state.clone(), byte, None)))
            .ok_or_else(|| ParseError::NoTransition {
                index,
                state: self.state.clone(),
                byte,
                stack: self.stack.clone(),
            })?;

        if debug_level >= 3 && log_enabled!(Level::Trace) {
            trace!(
                "{index}: ({:?}, {:#04x}) -> ({:?}, {:?}, {:?}, {:?})",
                self.state, byte, transition.next_state, transition.direction, transition.op, transition.value
            );
        }

        match transition.op {
            StackOp::Push => {
                let value = transition.value.clone().ok_or_else(|| ParseError::UnknownOp {
                    index,
                    state: self.state.clone(),
                    op: transition.op,
                })?;
                self.stack.push(value);
                if self.stack.len() > MAX_STACK_DEPTH {
                    return Err(ParseError::StackOverflow {
                        index,
                        state: self.state.clone(),
                        limit: MAX_STACK_DEPTH,
                    });
                }
            }
            StackOp::Pop => {
                self.stack.pop();
            }
            StackOp::Read => {}
            StackOp::Replace => {
                let value = transition.value.clone().ok_or_else(|| ParseError::UnknownOp {
                    index,
                    state: self.state.clone(),
                    op: transition.op,
                })?;
                match self.stack.last_mut() {
                    Some(slot) => *slot = value,
                    None => self.stack.push(value),
                }
            }
        }

        self.state = transition.next_state.clone();

        if debug_level >= 2 {
            trace!(
                "{:?} ({index}) stack={:?} state={:?}",
                byte as char, self.stack, self.state
            );
        }

        Ok(transition.direction)
    }
}
