//! Whitespace and comment skipping.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::{sentinel, TableBuilder};
use crate::lua::charset::{all_except, matching};

/// Read whitespace, including any comments. Remains on `start_state`,
/// except while actually inside a comment.
///
/// Callers must not add their own transition on `-` away from
/// `start_state`; route that through `minus_transition` instead, since at
/// that point a `-` has already been consumed and can't be un-consumed.
///
/// When `minus_transition` is taken, the stack is exactly as it was when
/// whitespace reading began.
pub fn read_whitespace(
    b: &mut TableBuilder,
    start_state: &str,
    minus_transition: Transition,
    required_stack_value: Option<&str>,
) {
    let this_stack_value = sentinel("comment", start_state);

    for c in matching(crate::lua::charset::is_lisspace) {
        b.set(
            start_state,
            c,
            required_stack_value,
            Transition::new(start_state, Direction::Right, StackOp::Read, None),
        );
    }

    b.set(
        start_state,
        b'-',
        required_stack_value,
        Transition::new(
            "possible_comment_-",
            Direction::Right,
            StackOp::Push,
            Some(this_stack_value.clone()),
        ),
    );

    let intermediate_state = sentinel("possible_comment_-", start_state);
    for c in all_except(b"-") {
        b.set(
            "possible_comment_-",
            c,
            Some(&this_stack_value),
            Transition::new(&intermediate_state, Direction::Stay, StackOp::Pop, None),
        );
        b.set(&intermediate_state, c, None, minus_transition.clone());
    }

    b.set(
        "comment_single_line",
        b'\r',
        Some(&this_stack_value),
        Transition::new(start_state, Direction::Right, StackOp::Pop, None),
    );
    b.set(
        "comment_single_line",
        b'\n',
        Some(&this_stack_value),
        Transition::new(start_state, Direction::Right, StackOp::Pop, None),
    );

    b.set(
        "comment_multiline_end",
        b']',
        Some(&this_stack_value),
        Transition::new(start_state, Direction::Right, StackOp::Pop, None),
    );
}
