//! The long-bracket subsystem shared by long comments, long string
//! literals, and long-bracket function-call arguments.
//!
//! To enter: push something you can use to later return, then transition
//! to `multiline_comment_or_long_string_start` *before* consuming the
//! leading `[` (or to `multiline_comment_or_long_string_start_2` *after*
//! consuming it, e.g. when the caller already had to peek at it to
//! distinguish a long bracket from something else).
//!
//! To exit: wire a transition from `multiline_comment_or_long_string_end`
//! back to your own state, consuming the closing `]` and checking for
//! your own stack value below it, then popping it.
//!
//! Counting `=`s between the brackets is the one thing a 2PDA can't do in
//! general (there's no way to compare an unbounded count against itself
//! later), so this hardcodes support up to [`EQUALS_TO_SUPPORT`] and
//! treats anything longer as if it were exactly that many — long enough
//! that no real Lua source trips the cap.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::TableBuilder;
use crate::lua::charset::all_except;

pub const MCOLS: &str = "multiline_comment_or_long_string";
const EQUALS_TO_SUPPORT: usize = 10;

fn eq(n: usize) -> String {
    "=".repeat(n)
}

pub fn wire(b: &mut TableBuilder) {
    let start = format!("{MCOLS}_start");
    let end_opening_fail = format!("{MCOLS}_end_opening_fail");
    let start_bracket = format!("{MCOLS}_start_[");

    for c in crate::lua::charset::ALL {
        b.set(
            &start,
            c,
            None,
            Transition::new(&end_opening_fail, Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        &start,
        b'[',
        None,
        Transition::new(&start_bracket, Direction::Right, StackOp::Push, Some(String::new())),
    );

    let start2 = format!("{MCOLS}_start_2");
    for c in crate::lua::charset::ALL {
        b.set(
            &start2,
            c,
            None,
            Transition::new(&end_opening_fail, Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        &start2,
        b'[',
        None,
        Transition::new(&start_bracket, Direction::Stay, StackOp::Push, Some(String::new())),
    );
    b.set(
        &start2,
        b'=',
        None,
        Transition::new(&start_bracket, Direction::Stay, StackOp::Push, Some(String::new())),
    );

    for c in all_except(b"=") {
        b.set(
            &start_bracket,
            c,
            None,
            Transition::new(&end_opening_fail, Direction::Stay, StackOp::Pop, None),
        );
    }
    for i in 1..=EQUALS_TO_SUPPORT {
        b.set(
            &start_bracket,
            b'=',
            Some(&eq(i - 1)),
            Transition::new(&start_bracket, Direction::Right, StackOp::Replace, Some(eq(i))),
        );
    }
    b.set(
        &start_bracket,
        b'=',
        None,
        Transition::new(&start_bracket, Direction::Right, StackOp::Read, None),
    );
    b.set(
        &start_bracket,
        b'[',
        None,
        Transition::new(MCOLS, Direction::Right, StackOp::Read, None),
    );

    for c in crate::lua::charset::ALL {
        b.set(MCOLS, c, None, Transition::new(MCOLS, Direction::Right, StackOp::Read, None));
    }

    let possible_end = format!("{MCOLS}_possible_end");
    b.set(
        MCOLS,
        b']',
        None,
        Transition::new(&possible_end, Direction::Right, StackOp::Push, Some(String::new())),
    );

    for c in all_except(b"=]") {
        b.set(&possible_end, c, None, Transition::new(MCOLS, Direction::Right, StackOp::Pop, None));
    }
    for i in 1..=EQUALS_TO_SUPPORT {
        b.set(
            &possible_end,
            b'=',
            Some(&eq(i - 1)),
            Transition::new(&possible_end, Direction::Right, StackOp::Replace, Some(eq(i))),
        );
    }
    b.set(
        &possible_end,
        b'=',
        None,
        Transition::new(&possible_end, Direction::Right, StackOp::Read, None),
    );

    let possible_end_2 = format!("{MCOLS}_possible_end_2");
    b.set(
        &possible_end,
        b']',
        None,
        Transition::new(&possible_end_2, Direction::Stay, StackOp::Read, None),
    );

    let end = format!("{MCOLS}_end");
    for i in 0..=EQUALS_TO_SUPPORT {
        let checked = format!("{MCOLS}_possible_end_{}", eq(i));
        b.set(
            &possible_end_2,
            b']',
            Some(&eq(i)),
            Transition::new(&checked, Direction::Stay, StackOp::Pop, None),
        );
        b.set(&checked, b']', Some(&eq(i)), Transition::new(&end, Direction::Stay, StackOp::Pop, None));
        b.set(
            &checked,
            b']',
            None,
            Transition::new(&possible_end, Direction::Right, StackOp::Push, Some(String::new())),
        );
    }
}

/// Wires `--` vs `--[=*[` disambiguation and the two comment bodies
/// (single-line, multi-line) into the long-bracket subsystem above.
/// Depends on [`crate::lua::whitespace::read_whitespace`] having already
/// wired `possible_comment_-` to land here on a second `-`.
pub fn wire_comments(b: &mut TableBuilder) {
    b.set(
        "possible_comment_-",
        b'-',
        None,
        Transition::new("comment_start", Direction::Right, StackOp::Read, None),
    );

    for c in crate::lua::charset::ALL {
        b.set(
            "comment_start",
            c,
            None,
            Transition::new("comment_single_line", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "comment_start",
        b'[',
        None,
        Transition::new(
            "multiline_comment_or_long_string_start",
            Direction::Stay,
            StackOp::Push,
            Some("multiline_comment".to_string()),
        ),
    );

    for c in all_except(b"\r\n") {
        b.set(
            "comment_single_line",
            c,
            None,
            Transition::new("comment_single_line", Direction::Right, StackOp::Read, None),
        );
    }

    b.set(
        "multiline_comment_or_long_string_end",
        b']',
        Some("multiline_comment"),
        Transition::new("comment_multiline_end", Direction::Stay, StackOp::Pop, None),
    );
    for c in crate::lua::charset::ALL {
        b.set(
            "multiline_comment_or_long_string_end_opening_fail",
            c,
            Some("multiline_comment"),
            Transition::new("comment_single_line", Direction::Stay, StackOp::Pop, None),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::lua::parse_chunk;

    fn ok(src: &str) {
        assert!(parse_chunk(src.as_bytes()).is_ok(), "expected {src:?} to parse");
    }

    fn check_closed(equals: &str) -> String {
        let other = if equals == "====" { "==" } else { "====" };
        format!("  --[{other}[ ]{equals}] ]{other}]")
    }

    #[test]
    fn level_exactly_at_the_cap_closes() {
        ok(&("a = [==========[ten equals]==========]".to_string()));
    }

    // Past EQUALS_TO_SUPPORT the level stops growing, so an opening run
    // longer than the cap is indistinguishable from one at the cap.
    #[test]
    fn opening_run_past_the_cap_is_treated_as_the_cap() {
        ok(&("--[==========[multiline\rcomment\n]]===========]".to_string()
            + &check_closed("==========")));
    }
}
