//! Table constructors: `{ [exp] = exp, Name = exp, exp, ... }`.
//!
//! To enter: push something you can use to later return, then transition
//! to `table_constructor_start`. To exit: wire a transition from
//! `table_constructor_end` back to your own state, checking for your
//! stack value and popping it. Leading/trailing whitespace is not handled
//! here.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::{fail, TableBuilder};
use crate::lua::charset::{all_except, ALL};
use crate::lua::expr::read_expression;
use crate::lua::whitespace::read_whitespace;

pub fn wire(b: &mut TableBuilder) {
    b.set(
        "table_constructor_start",
        b'{',
        None,
        Transition::new(
            "table_constructor_whitespace_before_field",
            Direction::Right,
            StackOp::Read,
            None,
        ),
    );

    for c in ALL {
        b.set(
            "table_constructor_whitespace_before_field",
            c,
            None,
            Transition::new("table_constructor_before_field", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(
        b,
        "table_constructor_whitespace_before_field",
        Transition::new("table_constructor_before_field_-", Direction::Stay, StackOp::Read, None),
        None,
    );

    // field ::= [ exp ] = exp   (peek past "[" to rule out a long-string expression)
    for c in ALL {
        b.set(
            "table_constructor_before_field",
            c,
            None,
            Transition::new("table_constructor_field_[", Direction::Right, StackOp::Read, None),
        );
    }
    for c in all_except(b"[=") {
        b.set(
            "table_constructor_field_[",
            c,
            None,
            Transition::new("table_constructor_field_[_before_exp", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "table_constructor_field_[",
        b'[',
        None,
        Transition::new("table_constructor_field_[[_or_[=", Direction::Stay, StackOp::Read, None),
    );
    b.set(
        "table_constructor_field_[",
        b'=',
        None,
        Transition::new("table_constructor_field_[[_or_[=", Direction::Stay, StackOp::Read, None),
    );

    // field ::= exp   where exp is a long-form string literal
    for byte in [b'[', b'='] {
        b.set(
            "table_constructor_field_[[_or_[=",
            byte,
            None,
            Transition::new(
                "multiline_comment_or_long_string_start_2",
                Direction::Stay,
                StackOp::Push,
                Some("table_constructor_long_string_field_exp".to_string()),
            ),
        );
    }
    b.set(
        "multiline_comment_or_long_string_end",
        b']',
        Some("table_constructor_long_string_field_exp"),
        Transition::new(
            "table_constructor_field_after_name_or_exp_before_whitespace",
            Direction::Right,
            StackOp::Push,
            Some("not_only_name".to_string()),
        ),
    );
    for c in ALL {
        b.set(
            "table_constructor_field_after_name_or_exp_before_whitespace",
            c,
            None,
            Transition::new("table_constructor_field_after_name_or_exp", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(b, "table_constructor_field_after_name_or_exp_before_whitespace", fail(), None);

    // field ::= [ exp ] = exp
    read_expression(
        b,
        "table_constructor_field_[_before_exp",
        Transition::new("table_constructor_field_[_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "table_constructor_field_[_exp",
        b']',
        None,
        Transition::new("table_constructor_field_[_exp_]", Direction::Right, StackOp::Read, None),
    );
    read_whitespace(b, "table_constructor_field_[_exp_]", fail(), None);
    b.set(
        "table_constructor_field_[_exp_]",
        b'=',
        None,
        Transition::new("table_constructor_field_[_exp_]_=", Direction::Right, StackOp::Read, None),
    );
    read_expression(
        b,
        "table_constructor_field_[_exp_]_=",
        Transition::new("table_constructor_field_[_exp_]_=_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "table_constructor_field_[_exp_]_=_exp",
        b',',
        None,
        Transition::new("table_constructor_whitespace_before_field", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "table_constructor_field_[_exp_]_=_exp",
        b';',
        None,
        Transition::new("table_constructor_whitespace_before_field", Direction::Right, StackOp::Read, None),
    );

    // field ::= Name = exp   AND   field ::= exp
    for c in all_except(b"[") {
        b.set(
            "table_constructor_before_field",
            c,
            None,
            Transition::new(
                "table_constructor_field_name_or_exp",
                Direction::Stay,
                StackOp::Push,
                Some("did_not_have_minus".to_string()),
            ),
        );
        b.set(
            "table_constructor_before_field_-",
            c,
            None,
            Transition::new(
                "table_constructor_field_name_or_exp",
                Direction::Stay,
                StackOp::Push,
                Some("had_minus".to_string()),
            ),
        );
    }

    read_expression(
        b,
        "table_constructor_field_name_or_exp",
        Transition::new("table_constructor_field_after_name_or_exp", Direction::Stay, StackOp::Read, None),
        crate::lua::expr::ExprExits {
            equals: Transition::new("table_constructor_field_after_name_or_exp_=_(1)", Direction::Stay, StackOp::Read, None),
            check_if_only_name: true,
            ..Default::default()
        },
    );

    for c in ALL {
        b.set(
            "table_constructor_field_after_name_or_exp_=_(1)",
            c,
            Some("only_name"),
            Transition::new("table_constructor_field_name_=_(2)", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "table_constructor_field_name_=_(2)",
            c,
            Some("did_not_have_minus"),
            Transition::new("table_constructor_field_name_=_(3)", Direction::Stay, StackOp::Pop, None),
        );
    }
    read_expression(
        b,
        "table_constructor_field_name_=_(3)",
        Transition::new("table_constructor_field_name_=_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "table_constructor_field_name_=_exp",
        b',',
        None,
        Transition::new("table_constructor_whitespace_before_field", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "table_constructor_field_name_=_exp",
        b';',
        None,
        Transition::new("table_constructor_whitespace_before_field", Direction::Right, StackOp::Read, None),
    );

    b.set(
        "table_constructor_field_after_name_or_exp",
        b',',
        None,
        Transition::new("table_constructor_field_after_exp", Direction::Stay, StackOp::Pop, None),
    );
    b.set(
        "table_constructor_field_after_exp",
        b',',
        None,
        Transition::new("table_constructor_whitespace_before_field", Direction::Right, StackOp::Pop, None),
    );
    b.set(
        "table_constructor_field_after_name_or_exp",
        b';',
        None,
        Transition::new("table_constructor_field_after_exp", Direction::Stay, StackOp::Pop, None),
    );
    b.set(
        "table_constructor_field_after_exp",
        b';',
        None,
        Transition::new("table_constructor_whitespace_before_field", Direction::Right, StackOp::Pop, None),
    );

    b.set(
        "table_constructor_whitespace_before_field",
        b'}',
        None,
        Transition::new("table_constructor_end", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "table_constructor_field_[_exp_]_=_exp",
        b'}',
        None,
        Transition::new("table_constructor_end", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "table_constructor_field_name_=_exp",
        b'}',
        None,
        Transition::new("table_constructor_end", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "table_constructor_field_after_name_or_exp",
        b'}',
        None,
        Transition::new("table_constructor_field_after_exp_}", Direction::Stay, StackOp::Pop, None),
    );
    b.set(
        "table_constructor_field_after_exp_}",
        b'}',
        None,
        Transition::new("table_constructor_end", Direction::Right, StackOp::Pop, None),
    );
}
