//! Function bodies: `( parlist ) block end`.
//!
//! To enter: push something you can use to later return, then transition
//! to `func_body_start` (leading whitespace is handled for you). To exit:
//! wire a transition from `func_body_end` back to your own state,
//! checking for your stack value and popping it — this will fire right
//! after `end` is parsed.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::{fail, TableBuilder};
use crate::lua::names::read_name_or_keyword;
use crate::lua::whitespace::read_whitespace;

pub fn wire(b: &mut TableBuilder) {
    read_whitespace(b, "func_body_start", fail(), None);

    b.set(
        "func_body_start",
        b'(',
        None,
        Transition::new("parlist_start", Direction::Right, StackOp::Read, None),
    );
    read_whitespace(b, "parlist_start", fail(), None);

    read_name_or_keyword(
        b,
        "parlist_start",
        Transition::new("parlist_after_name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    read_whitespace(b, "parlist_after_name", fail(), None);

    b.set(
        "parlist_after_name",
        b',',
        None,
        Transition::new("parlist_after_comma", Direction::Right, StackOp::Read, None),
    );
    read_whitespace(b, "parlist_after_comma", fail(), None);

    read_name_or_keyword(
        b,
        "parlist_after_comma",
        Transition::new("parlist_after_name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );

    b.set(
        "parlist_start",
        b'.',
        None,
        Transition::new("parlist_.", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "parlist_after_comma",
        b'.',
        None,
        Transition::new("parlist_.", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "parlist_.",
        b'.',
        None,
        Transition::new("parlist_..", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "parlist_..",
        b'.',
        None,
        Transition::new("parlist_...", Direction::Right, StackOp::Read, None),
    );
    read_whitespace(b, "parlist_...", fail(), None);

    for start in ["parlist_start", "parlist_after_name", "parlist_..."] {
        b.set(
            start,
            b')',
            None,
            Transition::new("statement", Direction::Right, StackOp::Push, Some("func_body".to_string())),
        );
    }
}
