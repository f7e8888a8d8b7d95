//! Expressions and expression lists.
//!
//! `read_expression` handles leading and trailing whitespace
//! automatically (except when it exits via one of the keyword/punctuation
//! fast paths below, so a caller can fail quickly without consuming
//! whitespace it didn't ask for). Never call
//! [`crate::lua::whitespace::read_whitespace`] on the same state passed
//! as `start_state` here — both check for a leading `-` and would
//! conflict.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::{fail, sentinel, TableBuilder};
use crate::lua::charset::{all_except, matching, not_matching, ALL};
use crate::lua::lvalue::read_lvalue_or_rvalue;
use crate::lua::whitespace::read_whitespace;

const CHECK_IF_ONLY_NAME_STACK_SYMBOLS: [&str; 3] = ["beginning", "only_name", "not_only_name"];
const DIGITS: &[u8] = b"0123456789";
const ONLY_HEX_DIGITS: &[u8] = b"abcdefABCDEF";

/// The keyword/punctuation fast-path exits `read_expression` offers
/// beyond its primary `transition`, mirrored from the return-statement
/// and function-call-argument callers that need them. Transitions left
/// unset fail immediately (see [`crate::lua::builder::fail`]).
pub struct ExprExits {
    pub end: Transition,
    pub elseif: Transition,
    pub else_: Transition,
    pub until: Transition,
    pub semicolon: Transition,
    pub rparen: Transition,
    pub equals: Transition,
    pub trailing_name: Transition,
    pub colon: Transition,
    pub required_stack_value: Option<String>,
    pub check_if_only_name: bool,
}

impl Default for ExprExits {
    fn default() -> Self {
        ExprExits {
            end: fail(),
            elseif: fail(),
            else_: fail(),
            until: fail(),
            semicolon: fail(),
            rparen: fail(),
            equals: fail(),
            trailing_name: fail(),
            colon: fail(),
            required_stack_value: None,
            check_if_only_name: false,
        }
    }
}

pub struct ExprListExits {
    pub end: Transition,
    pub elseif: Transition,
    pub else_: Transition,
    pub until: Transition,
    pub semicolon: Transition,
    pub rparen: Transition,
    pub trailing_name: Transition,
    pub colon: Transition,
    pub required_stack_value: Option<String>,
}

impl Default for ExprListExits {
    fn default() -> Self {
        ExprListExits {
            end: fail(),
            elseif: fail(),
            else_: fail(),
            until: fail(),
            semicolon: fail(),
            rparen: fail(),
            trailing_name: fail(),
            colon: fail(),
            required_stack_value: None,
        }
    }
}

pub fn read_expression(b: &mut TableBuilder, start_state: &str, transition: Transition, exits: ExprExits) {
    let this_stack_value = sentinel("expression", start_state);

    for c in ALL {
        b.set(
            start_state,
            c,
            exits.required_stack_value.as_deref(),
            Transition::new("expression_start", Direction::Stay, StackOp::Push, Some(this_stack_value.clone())),
        );
        b.set(
            "expression_start",
            c,
            None,
            Transition::new("expression", Direction::Stay, StackOp::Push, Some("beginning".to_string())),
        );
    }
    read_whitespace(
        b,
        "expression_start",
        Transition::new("expression_start", Direction::Stay, StackOp::Read, None),
        None,
    );

    for (kind, this_transition) in [
        ("", &transition),
        ("_=", &exits.equals),
        ("_trailing_name", &exits.trailing_name),
        ("_:", &exits.colon),
    ] {
        let intermediate_state_2 = format!("expression_exit{kind}_from__{start_state}");
        for c in ALL {
            for symb in CHECK_IF_ONLY_NAME_STACK_SYMBOLS {
                let intermediate_state_1 = format!("expression_exit{kind}_with__{symb}");
                b.set(
                    &format!("expression_exit{kind}"),
                    c,
                    Some(symb),
                    Transition::new(&intermediate_state_1, Direction::Stay, StackOp::Pop, None),
                );

                if exits.check_if_only_name {
                    b.set(
                        &intermediate_state_1,
                        c,
                        Some(&this_stack_value),
                        Transition::new(&intermediate_state_2, Direction::Stay, StackOp::Replace, Some(symb.to_string())),
                    );
                } else {
                    b.set(
                        &intermediate_state_1,
                        c,
                        Some(&this_stack_value),
                        Transition::new(&intermediate_state_2, Direction::Stay, StackOp::Pop, None),
                    );
                }
            }
            b.set(&intermediate_state_2, c, None, this_transition.clone());
        }
    }

    for (k, special_transition) in [
        ("end", &exits.end),
        ("elseif", &exits.elseif),
        ("else", &exits.else_),
        ("until", &exits.until),
        (";", &exits.semicolon),
        (")", &exits.rparen),
    ] {
        let intermediate_state = format!("expression_exit_{k}_from__{start_state}");
        for c in ALL {
            b.set(
                &format!("expression_exit_{k}"),
                c,
                None,
                Transition::new(&format!("expression_exit_{k}_1"), Direction::Stay, StackOp::Pop, None),
            );
            b.set(
                &format!("expression_exit_{k}_1"),
                c,
                Some(&this_stack_value),
                Transition::new(&intermediate_state, Direction::Stay, StackOp::Pop, None),
            );
            b.set(&intermediate_state, c, None, special_transition.clone());
        }
    }
}

pub fn read_expression_list(b: &mut TableBuilder, start_state: &str, transition: Transition, exits: ExprListExits) {
    let this_stack_value = sentinel("expression_list", start_state);

    for c in ALL {
        b.set(
            start_state,
            c,
            exits.required_stack_value.as_deref(),
            Transition::new("expression_list_start", Direction::Stay, StackOp::Push, Some(this_stack_value.clone())),
        );
    }

    let exit_from = format!("expression_list_exit_from__{start_state}");
    for c in ALL {
        b.set(
            "expression_list_exit",
            c,
            Some(&this_stack_value),
            Transition::new(&exit_from, Direction::Stay, StackOp::Pop, None),
        );
        b.set(&exit_from, c, None, transition.clone());
    }

    for (k, trans) in [
        ("end", &exits.end),
        ("elseif", &exits.elseif),
        ("else", &exits.else_),
        ("until", &exits.until),
        (";", &exits.semicolon),
        (")", &exits.rparen),
        ("trailing_name", &exits.trailing_name),
        (":", &exits.colon),
    ] {
        let intermediate_state = format!("expression_list_exit_{k}_from__{start_state}");
        for c in ALL {
            b.set(
                &format!("expression_list_exit_{k}"),
                c,
                Some(&this_stack_value),
                Transition::new(&intermediate_state, Direction::Stay, StackOp::Pop, None),
            );
            b.set(&intermediate_state, c, None, trans.clone());
        }
    }
}

pub fn wire(b: &mut TableBuilder) {
    for c in ALL {
        b.set(
            "expression_binop-or-end_with_not_only_name",
            c,
            None,
            Transition::new("expression_binop-or-end", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
        b.set(
            "expression_restart",
            c,
            None,
            Transition::new("expression", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(
        b,
        "expression_restart",
        Transition::new("expression_restart", Direction::Stay, StackOp::Read, None),
        None,
    );

    // Binary operators
    for c in ALL {
        b.set(
            "expression_binop-or-end",
            c,
            None,
            Transition::new("expression_exit", Direction::Stay, StackOp::Read, None),
        );
    }

    const ONE_CHAR_BINOPS: &[u8] = b"+-*/^%&~|<>";
    const TWO_CHAR_BINOPS: [(u8, u8); 8] =
        [(b'/', b'/'), (b'>', b'>'), (b'<', b'<'), (b'.', b'.'), (b'<', b'='), (b'>', b'='), (b'=', b'='), (b'~', b'=')];

    for &c in ONE_CHAR_BINOPS {
        b.set(
            "expression_binop-or-end",
            c,
            None,
            Transition::new("expression_restart", Direction::Right, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }

    for (c1, c2) in TWO_CHAR_BINOPS {
        let state1 = format!("expression_binop_{}", c1 as char);
        b.set(
            "expression_binop-or-end",
            c1,
            None,
            Transition::new(&state1, Direction::Right, StackOp::Read, None),
        );
        b.set(
            &state1,
            c2,
            None,
            Transition::new("expression_restart", Direction::Right, StackOp::Replace, Some("not_only_name".to_string())),
        );

        if ONE_CHAR_BINOPS.contains(&c1) {
            let other_c2s: Vec<u8> =
                TWO_CHAR_BINOPS.iter().filter(|(bc1, _)| *bc1 == c1).map(|(_, bc2)| *bc2).collect();
            for c in all_except(&other_c2s) {
                b.set(
                    &state1,
                    c,
                    None,
                    Transition::new("expression_restart", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
                );
            }
        }
    }

    for c in all_except(b"=") {
        b.set(
            "expression_binop_=",
            c,
            None,
            Transition::new("expression_exit_=", Direction::Stay, StackOp::Read, None),
        );
    }

    // "and" / "or"
    b.set(
        "expression_binop-or-end",
        b'a',
        None,
        Transition::new("expression_binop_andoror", Direction::Stay, StackOp::Read, None),
    );
    b.set(
        "expression_binop-or-end",
        b'o',
        None,
        Transition::new("expression_binop_andoror", Direction::Stay, StackOp::Read, None),
    );
    crate::lua::names::read_name_or_keyword(
        b,
        "expression_binop_andoror",
        Transition::new("expression_exit_trailing_name", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_binop_andoror_keyword", Direction::Stay, StackOp::Read, None),
        None,
    );
    for c in ALL {
        b.set(
            "expression_binop_andoror_keyword",
            c,
            Some("and"),
            Transition::new("expression_binop_and", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "expression_binop_and",
            c,
            None,
            Transition::new("expression_restart", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
        b.set(
            "expression_binop_andoror_keyword",
            c,
            Some("or"),
            Transition::new("expression_binop_or", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "expression_binop_or",
            c,
            None,
            Transition::new("expression_restart", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }

    read_whitespace(
        b,
        "expression_binop-or-end",
        Transition::new("expression_restart", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        None,
    );

    // Expressions that start with a name or keyword
    crate::lua::names::read_name_or_keyword(
        b,
        "expression",
        Transition::new("expression_starting_with_name", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_starting_with_keyword", Direction::Stay, StackOp::Read, None),
        None,
    );

    read_lvalue_or_rvalue(
        b,
        "expression_starting_with_name",
        true,
        Transition::new("expression_after_lrvalue", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_after_lrvalue_-", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_after_lrvalue_.", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_after_lrvalue_:", Direction::Stay, StackOp::Read, None),
        fail(),
        true,
        false,
    );

    for c in ALL {
        for has_colon in [false, true] {
            let ealrv = if has_colon { "expression_after_lrvalue_:".to_string() } else { "expression_after_lrvalue".to_string() };
            let ealrv2 = format!("{ealrv}_2");

            b.set(&ealrv, c, None, Transition::new(&ealrv2, Direction::Stay, StackOp::Pop, None));

            let ealrv_only = format!("{ealrv}__only_name");
            let ealrv_not_only = format!("{ealrv}__not_only_name");
            b.set(&ealrv2, c, Some("only_name"), Transition::new(&ealrv_only, Direction::Stay, StackOp::Pop, None));
            b.set(&ealrv2, c, Some("not_only_name"), Transition::new(&ealrv_not_only, Direction::Stay, StackOp::Pop, None));

            let target = if has_colon { "expression_exit_:" } else { "expression_binop-or-end" };
            b.set(&ealrv_only, c, Some("beginning"), Transition::new(target, Direction::Stay, StackOp::Replace, Some("only_name".to_string())));
            b.set(&ealrv_only, c, None, Transition::new(target, Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())));
            b.set(&ealrv_not_only, c, None, Transition::new(target, Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())));
        }

        for modifier in ["_-", "_."] {
            let ealrv = format!("expression_after_lrvalue{modifier}");
            let ealrv2 = format!("{ealrv}_2");
            let ealrv3 = format!("{ealrv}_3");
            b.set(&ealrv, c, None, Transition::new(&ealrv2, Direction::Stay, StackOp::Pop, None));
            b.set(&ealrv2, c, None, Transition::new(&ealrv3, Direction::Stay, StackOp::Pop, None));
        }

        b.set(
            "expression_after_lrvalue_-_3",
            c,
            None,
            Transition::new("expression_restart", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }
    b.set(
        "expression_after_lrvalue_._3",
        b'.',
        None,
        Transition::new("expression_restart", Direction::Right, StackOp::Replace, Some("not_only_name".to_string())),
    );

    // Expressions that start with a keyword
    for c in not_matching(crate::lua::charset::is_lislalnum) {
        for kw in ["nil", "false", "true"] {
            b.set(
                "expression_starting_with_keyword",
                c,
                Some(kw),
                Transition::new("expression_binop-or-end_with_not_only_name", Direction::Stay, StackOp::Pop, None),
            );
        }
        for (kw, dest) in [("end", "expression_exit_end"), ("elseif", "expression_exit_elseif"), ("else", "expression_exit_else"), ("until", "expression_exit_until")] {
            b.set(
                "expression_starting_with_keyword",
                c,
                Some(kw),
                Transition::new(dest, Direction::Stay, StackOp::Pop, None),
            );
        }
        b.set(
            "expression_starting_with_keyword",
            c,
            Some("function"),
            Transition::new("func_body_start", Direction::Stay, StackOp::Replace, Some("expression_function".to_string())),
        );
        b.set(
            "expression_starting_with_keyword",
            c,
            Some("not"),
            Transition::new("expression_not", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "expression_not",
            c,
            None,
            Transition::new("expression_restart", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }

    // Punctuation-led expressions
    b.set(
        "expression",
        b';',
        Some("beginning"),
        Transition::new("expression_exit_;", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "expression",
        b')',
        Some("beginning"),
        Transition::new("expression_exit_)", Direction::Right, StackOp::Read, None),
    );

    b.set(
        "expression",
        b'.',
        None,
        Transition::new("expression_.", Direction::Right, StackOp::Replace, Some("not_only_name".to_string())),
    );
    b.set(
        "expression_.",
        b'.',
        None,
        Transition::new("expression_..", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "expression_..",
        b'.',
        None,
        Transition::new("expression_binop-or-end", Direction::Right, StackOp::Read, None),
    );
    for &d in DIGITS {
        b.set(
            "expression_.",
            d,
            None,
            Transition::new("expression_numeric_after_.", Direction::Right, StackOp::Push, Some("number_dec".to_string())),
        );
    }

    b.set(
        "expression",
        b'{',
        None,
        Transition::new("table_constructor_start", Direction::Stay, StackOp::Push, Some("expression_table_constructor".to_string())),
    );
    for c in ALL {
        b.set(
            "table_constructor_end",
            c,
            Some("expression_table_constructor"),
            Transition::new("expression_table_constructor_end", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "expression_table_constructor_end",
            c,
            None,
            Transition::new("expression_binop-or-end", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }

    b.set(
        "expression",
        b'(',
        None,
        Transition::new("expression_(", Direction::Stay, StackOp::Read, None),
    );
    read_lvalue_or_rvalue(
        b,
        "expression_(",
        false,
        Transition::new("expression_after_lrvalue", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_after_lrvalue_-", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_after_lrvalue_.", Direction::Stay, StackOp::Read, None),
        Transition::new("expression_after_lrvalue_:", Direction::Stay, StackOp::Read, None),
        fail(),
        true,
        false,
    );

    for &unop in b"-#~" {
        b.set(
            "expression",
            unop,
            None,
            Transition::new("expression_restart", Direction::Right, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }

    // Numerals
    for &c in DIGITS {
        b.set(
            "expression",
            c,
            None,
            Transition::new("expression_starting_with_digit", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
        b.set(
            "expression_starting_with_digit",
            c,
            None,
            Transition::new("expression_numeric", Direction::Right, StackOp::Push, Some("number_dec".to_string())),
        );
    }
    b.set(
        "expression_starting_with_digit",
        b'0',
        None,
        Transition::new("expression_0", Direction::Right, StackOp::Push, Some("number_dec".to_string())),
    );

    b.set(
        "expression_0",
        b'x',
        None,
        Transition::new("expression_0x", Direction::Right, StackOp::Replace, Some("number_hex".to_string())),
    );
    b.set(
        "expression_0",
        b'X',
        None,
        Transition::new("expression_0x", Direction::Right, StackOp::Replace, Some("number_hex".to_string())),
    );
    for &c in b"0123456789abcdefABCDEF" {
        b.set("expression_0x", c, None, Transition::new("expression_numeric", Direction::Right, StackOp::Read, None));
    }

    for &c in DIGITS {
        b.set("expression_0", c, None, Transition::new("expression_numeric", Direction::Right, StackOp::Read, None));
    }

    for &c in DIGITS {
        b.set("expression_numeric", c, None, Transition::new("expression_numeric", Direction::Right, StackOp::Read, None));
    }
    for &c in ONLY_HEX_DIGITS {
        b.set(
            "expression_numeric",
            c,
            Some("number_hex"),
            Transition::new("expression_numeric", Direction::Right, StackOp::Read, None),
        );
    }

    for pre_state in ["expression_0", "expression_0x", "expression_numeric"] {
        b.set(pre_state, b'.', None, Transition::new("expression_numeric_after_.", Direction::Right, StackOp::Read, None));
    }
    for &c in DIGITS {
        b.set(
            "expression_numeric_after_.",
            c,
            None,
            Transition::new("expression_numeric_after_.", Direction::Right, StackOp::Read, None),
        );
    }
    for &c in ONLY_HEX_DIGITS {
        b.set(
            "expression_numeric_after_.",
            c,
            Some("number_hex"),
            Transition::new("expression_numeric_after_.", Direction::Right, StackOp::Read, None),
        );
    }

    for pre_state in ["expression_0", "expression_numeric", "expression_numeric_after_."] {
        b.set(pre_state, b'e', Some("number_dec"), Transition::new("expression_numeric_exp", Direction::Right, StackOp::Read, None));
        b.set(pre_state, b'E', Some("number_dec"), Transition::new("expression_numeric_exp", Direction::Right, StackOp::Read, None));
        b.set(pre_state, b'p', Some("number_hex"), Transition::new("expression_numeric_exp", Direction::Right, StackOp::Read, None));
        b.set(pre_state, b'P', Some("number_hex"), Transition::new("expression_numeric_exp", Direction::Right, StackOp::Read, None));
    }

    b.set(
        "expression_numeric_exp",
        b'+',
        None,
        Transition::new("expression_numeric_exp_+-", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "expression_numeric_exp",
        b'-',
        None,
        Transition::new("expression_numeric_exp_+-", Direction::Right, StackOp::Read, None),
    );

    for &c in DIGITS {
        b.set(
            "expression_numeric_exp",
            c,
            None,
            Transition::new("expression_numeric_exp_value", Direction::Right, StackOp::Read, None),
        );
        b.set(
            "expression_numeric_exp_+-",
            c,
            None,
            Transition::new("expression_numeric_exp_value", Direction::Right, StackOp::Read, None),
        );
    }
    for &c in DIGITS {
        b.set(
            "expression_numeric_exp_value",
            c,
            None,
            Transition::new("expression_numeric_exp_value", Direction::Right, StackOp::Read, None),
        );
    }

    for state_to_exit_from in ["expression_0", "expression_numeric", "expression_numeric_after_.", "expression_numeric_exp_value"] {
        for c in not_matching(crate::lua::charset::is_lislalnum) {
            if c == b'.' {
                continue;
            }
            b.set(
                state_to_exit_from,
                c,
                None,
                Transition::new("expression_binop-or-end", Direction::Stay, StackOp::Pop, None),
            );
        }
    }

    // Short literal strings
    for quote in [b'\'', b'"'] {
        b.set(
            "expression",
            quote,
            None,
            Transition::new("expression_starting_with_quote", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
        b.set(
            "expression_starting_with_quote",
            quote,
            None,
            Transition::new("short_string_start", Direction::Stay, StackOp::Push, Some("expression_short_string".to_string())),
        );
    }
    for c in ALL {
        b.set(
            "short_string_end",
            c,
            Some("expression_short_string"),
            Transition::new("expression_binop-or-end", Direction::Stay, StackOp::Pop, None),
        );
    }

    // Long strings
    b.set(
        "expression",
        b'[',
        None,
        Transition::new("expression_starting_with_[", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
    );
    b.set(
        "expression_starting_with_[",
        b'[',
        None,
        Transition::new("multiline_comment_or_long_string_start", Direction::Stay, StackOp::Push, Some("long_string".to_string())),
    );
    b.set(
        "multiline_comment_or_long_string_end",
        b']',
        Some("long_string"),
        Transition::new("expression_binop-or-end", Direction::Right, StackOp::Pop, None),
    );

    // Function expressions
    for c in ALL {
        b.set(
            "func_body_end",
            c,
            Some("expression_function"),
            Transition::new("expression_after_func_body", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "expression_after_func_body",
            c,
            None,
            Transition::new("expression_binop-or-end", Direction::Stay, StackOp::Replace, Some("not_only_name".to_string())),
        );
    }

    wire_expression_list(b);
}

fn wire_expression_list(b: &mut TableBuilder) {
    read_expression(
        b,
        "expression_list_start",
        Transition::new("expression_list_entry_end", Direction::Stay, StackOp::Read, None),
        ExprExits {
            end: Transition::new("expression_list_exit_end", Direction::Stay, StackOp::Read, None),
            elseif: Transition::new("expression_list_exit_elseif", Direction::Stay, StackOp::Read, None),
            else_: Transition::new("expression_list_exit_else", Direction::Stay, StackOp::Read, None),
            until: Transition::new("expression_list_exit_until", Direction::Stay, StackOp::Read, None),
            semicolon: Transition::new("expression_list_exit_;", Direction::Stay, StackOp::Read, None),
            rparen: Transition::new("expression_list_exit_)", Direction::Stay, StackOp::Read, None),
            trailing_name: Transition::new("expression_list_exit_trailing_name", Direction::Stay, StackOp::Read, None),
            colon: Transition::new("expression_list_exit_:", Direction::Stay, StackOp::Read, None),
            ..Default::default()
        },
    );

    for c in ALL {
        b.set(
            "expression_list_entry_end",
            c,
            None,
            Transition::new("expression_list_exit", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "expression_list_entry_end",
        b',',
        None,
        Transition::new("expression_list_start_2", Direction::Right, StackOp::Read, None),
    );

    read_expression(
        b,
        "expression_list_start_2",
        Transition::new("expression_list_entry_end", Direction::Stay, StackOp::Read, None),
        ExprExits {
            trailing_name: Transition::new("expression_list_exit_trailing_name", Direction::Stay, StackOp::Read, None),
            ..Default::default()
        },
    );
}
