//! Statements, blocks, and the chunk entrypoint.
//!
//! A block is just "push something to mark where we are, then read
//! statements until the keyword that closes this construct pops it back
//! off". `STACK_VALUES_POPPED_BY_END_KEYWORD` is the table consulted both
//! by the `end` keyword and, since `return` must itself be followed by
//! one of `end`/`elseif`/`else`/`until`/EOF, by `return` too.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::fail;
use crate::lua::builder::TableBuilder;
use crate::lua::charset::{is_lislalnum, matching, not_matching, ALL};
use crate::lua::expr::{read_expression, read_expression_list, ExprExits, ExprListExits};
use crate::lua::lvalue::read_lvalue_or_rvalue;
use crate::lua::names::{read_name_list, read_name_or_keyword};
use crate::lua::whitespace::read_whitespace;

/// Stack value left by a block-opening construct, and the state `end`
/// should resume in once that value is popped.
const STACK_VALUES_POPPED_BY_END_KEYWORD: [(&str, &str); 5] = [
    ("statement_do", "statement"),
    ("statement_while", "statement"),
    ("statement_if", "statement"),
    ("statement_for", "statement"),
    ("func_body", "func_body_end"),
];

pub fn wire(b: &mut TableBuilder) {
    for c in ALL {
        b.set("block", c, None, Transition::new("statement", Direction::Stay, StackOp::Push, Some("block".to_string())));
    }

    read_whitespace(b, "statement", fail(), None);

    wire_punctuation_statements(b);
    wire_name_statements(b);
    wire_keyword_dispatch(b);
    wire_if(b);
    wire_while(b);
    wire_for(b);
    wire_repeat(b);
    wire_function(b);
    wire_local(b);
    wire_return(b);
    wire_goto(b);
    wire_end(b);
    wire_start(b);
}

fn wire_punctuation_statements(b: &mut TableBuilder) {
    b.set("statement", b';', None, Transition::new("statement", Direction::Right, StackOp::Read, None));

    b.set("statement", b':', None, Transition::new("statement_dbcolon_:", Direction::Right, StackOp::Read, None));
    b.set("statement_dbcolon_:", b':', None, Transition::new("statement_dbcolon_::", Direction::Right, StackOp::Read, None));
    read_whitespace(b, "statement_dbcolon_::", fail(), None);
    read_name_or_keyword(
        b,
        "statement_dbcolon_::",
        Transition::new("statement_dbcolon_::NAME", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    read_whitespace(b, "statement_dbcolon_::NAME", fail(), None);
    b.set(
        "statement_dbcolon_::NAME",
        b':',
        None,
        Transition::new("statement_dbcolon_::NAME:", Direction::Right, StackOp::Read, None),
    );
    b.set("statement_dbcolon_::NAME:", b':', None, Transition::new("statement", Direction::Right, StackOp::Read, None));

    b.set("statement", b'(', None, Transition::new("statement_(", Direction::Stay, StackOp::Read, None));
    read_lvalue_or_rvalue(
        b,
        "statement_(",
        false,
        Transition::new("statement_read_lvalue_hopefully", Direction::Stay, StackOp::Read, None),
        fail(),
        fail(),
        fail(),
        fail(),
        false,
        true,
    );
}

fn wire_name_statements(b: &mut TableBuilder) {
    read_name_or_keyword(
        b,
        "statement",
        Transition::new("statement_starting_with_name", Direction::Stay, StackOp::Read, None),
        Transition::new("statement_starting_with_keyword", Direction::Stay, StackOp::Read, None),
        None,
    );
    read_whitespace(b, "statement_starting_with_name", fail(), None);

    b.set(
        "statement_starting_with_name",
        b',',
        None,
        Transition::new("statement_assign_varlist", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_starting_with_name",
        b'=',
        None,
        Transition::new("statement_assign_rightside", Direction::Right, StackOp::Read, None),
    );

    read_lvalue_or_rvalue(
        b,
        "statement_starting_with_name",
        true,
        Transition::new("statement_read_lvalue_hopefully", Direction::Stay, StackOp::Read, None),
        fail(),
        fail(),
        Transition::new("statement_read_lvalue_hopefully_:", Direction::Stay, StackOp::Read, None),
        fail(),
        false,
        true,
    );

    b.set(
        "statement_read_lvalue_hopefully",
        b',',
        Some("lvalue_or_rvalue"),
        Transition::new("statement_read_lvalue", Direction::Stay, StackOp::Pop, None),
    );
    b.set(
        "statement_read_lvalue_hopefully",
        b'=',
        Some("lvalue_or_rvalue"),
        Transition::new("statement_read_lvalue", Direction::Stay, StackOp::Pop, None),
    );
    b.set(
        "statement_read_lvalue",
        b',',
        None,
        Transition::new("statement_assign_varlist", Direction::Right, StackOp::Pop, None),
    );
    b.set(
        "statement_read_lvalue",
        b'=',
        None,
        Transition::new("statement_assign_rightside", Direction::Right, StackOp::Pop, None),
    );

    for c in ALL {
        b.set(
            "statement_read_lvalue_hopefully",
            c,
            Some("rvalue"),
            Transition::new("statement_function_call_maybe", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_function_call_maybe",
            c,
            Some("function_call"),
            Transition::new("statement", Direction::Stay, StackOp::Pop, None),
        );
    }

    b.set(
        "statement_read_lvalue_hopefully_:",
        b':',
        Some("rvalue"),
        Transition::new("statement_function_call_maybe_:", Direction::Stay, StackOp::Pop, None),
    );
    b.set(
        "statement_function_call_maybe_:",
        b':',
        Some("function_call"),
        Transition::new("statement_dbcolon_:", Direction::Stay, StackOp::Pop, None),
    );

    for c in ALL {
        b.set(
            "statement_assign_varlist",
            c,
            None,
            Transition::new("statement_assign_varlist_2", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(b, "statement_assign_varlist", fail(), None);
    read_lvalue_or_rvalue(
        b,
        "statement_assign_varlist_2",
        false,
        Transition::new("statement_assign_read_another_lvalue_hopefully", Direction::Stay, StackOp::Read, None),
        fail(),
        fail(),
        fail(),
        fail(),
        false,
        false,
    );
    b.set(
        "statement_assign_read_another_lvalue_hopefully",
        b',',
        Some("lvalue_or_rvalue"),
        Transition::new("statement_assign_varlist", Direction::Right, StackOp::Pop, None),
    );
    b.set(
        "statement_assign_read_another_lvalue_hopefully",
        b'=',
        Some("lvalue_or_rvalue"),
        Transition::new("statement_assign_rightside", Direction::Right, StackOp::Pop, None),
    );

    read_expression_list(
        b,
        "statement_assign_rightside",
        Transition::new("statement", Direction::Stay, StackOp::Read, None),
        ExprListExits {
            trailing_name: Transition::new("statement_starting_with_name", Direction::Stay, StackOp::Read, None),
            colon: Transition::new("statement_dbcolon_:", Direction::Stay, StackOp::Read, None),
            ..Default::default()
        },
    );
}

fn wire_keyword_dispatch(b: &mut TableBuilder) {
    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("if"),
            Transition::new("statement_if", Direction::Stay, StackOp::Replace, Some("statement_if".to_string())),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("elseif"),
            Transition::new("statement_elseif", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("else"),
            Transition::new("statement_else", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("while"),
            Transition::new("statement_while", Direction::Stay, StackOp::Replace, Some("statement_while".to_string())),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("do"),
            Transition::new("statement", Direction::Stay, StackOp::Replace, Some("statement_do".to_string())),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("for"),
            Transition::new("statement_for", Direction::Stay, StackOp::Replace, Some("statement_for".to_string())),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("repeat"),
            Transition::new("statement", Direction::Stay, StackOp::Replace, Some("statement_repeat".to_string())),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("until"),
            Transition::new("statement_until", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("function"),
            Transition::new("statement_function", Direction::Stay, StackOp::Replace, Some("statement_function".to_string())),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("local"),
            Transition::new("statement_local", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("return"),
            Transition::new("statement_return", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("break"),
            Transition::new("statement", Direction::Stay, StackOp::Pop, None),
        );
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("goto"),
            Transition::new("statement_goto", Direction::Stay, StackOp::Pop, None),
        );
    }
}

fn wire_if(b: &mut TableBuilder) {
    read_expression(
        b,
        "statement_if",
        Transition::new("statement_if_after_expression", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "statement_if_after_expression",
        b't',
        None,
        Transition::new("statement_if_after_expression_t", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_if_after_expression_t",
        b'h',
        None,
        Transition::new("statement_if_after_expression_th", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_if_after_expression_th",
        b'e',
        None,
        Transition::new("statement_if_after_expression_the", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_if_after_expression_the",
        b'n',
        None,
        Transition::new("statement", Direction::Right, StackOp::Read, None),
    );

    read_expression(
        b,
        "statement_elseif",
        Transition::new("statement_if_after_expression", Direction::Stay, StackOp::Read, None),
        ExprExits { required_stack_value: Some("statement_if".to_string()), ..Default::default() },
    );

    for c in ALL {
        b.set("statement_else", c, Some("statement_if"), Transition::new("statement", Direction::Stay, StackOp::Read, None));
    }
}

fn wire_while(b: &mut TableBuilder) {
    read_expression(
        b,
        "statement_while",
        Transition::new("statement_while_after_expression", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "statement_while_after_expression",
        b'd',
        None,
        Transition::new("statement_while_after_expression_d", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_while_after_expression_d",
        b'o',
        None,
        Transition::new("statement", Direction::Right, StackOp::Read, None),
    );
}

fn wire_for(b: &mut TableBuilder) {
    read_whitespace(b, "statement_for", fail(), None);
    read_name_or_keyword(
        b,
        "statement_for",
        Transition::new("statement_for_name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    read_whitespace(b, "statement_for_name", fail(), None);

    // Numerical for-loop.
    b.set("statement_for_name", b'=', None, Transition::new("statement_numfor_=", Direction::Right, StackOp::Read, None));
    read_expression(
        b,
        "statement_numfor_=",
        Transition::new("statement_numfor_=_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "statement_numfor_=_exp",
        b',',
        None,
        Transition::new("statement_numfor_=_exp_,", Direction::Right, StackOp::Read, None),
    );
    read_expression(
        b,
        "statement_numfor_=_exp_,",
        Transition::new("statement_numfor_=_exp_,_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "statement_numfor_=_exp_,_exp",
        b'd',
        None,
        Transition::new("statement_numfor_=_exp_,_exp_,_exp_d", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_numfor_=_exp_,_exp",
        b',',
        None,
        Transition::new("statement_numfor_=_exp_,_exp_,", Direction::Right, StackOp::Read, None),
    );
    read_expression(
        b,
        "statement_numfor_=_exp_,_exp_,",
        Transition::new("statement_numfor_=_exp_,_exp_,_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "statement_numfor_=_exp_,_exp_,_exp",
        b'd',
        None,
        Transition::new("statement_numfor_=_exp_,_exp_,_exp_d", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_numfor_=_exp_,_exp_,_exp_d",
        b'o',
        None,
        Transition::new("statement", Direction::Right, StackOp::Read, None),
    );

    // Generic for-loop.
    b.set(
        "statement_for_name",
        b',',
        None,
        Transition::new("statement_genfor_namelist_,", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_for_name",
        b'i',
        None,
        Transition::new("statement_genfor_namelist_i", Direction::Right, StackOp::Read, None),
    );
    for c in ALL {
        b.set(
            "statement_genfor_namelist_,",
            c,
            None,
            Transition::new("statement_genfor_namelist_,_whitespace", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(b, "statement_genfor_namelist_,", fail(), None);
    read_name_list(
        b,
        "statement_genfor_namelist_,_whitespace",
        Transition::new("statement_genfor_namelist", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    b.set(
        "statement_genfor_namelist",
        b'i',
        None,
        Transition::new("statement_genfor_namelist_i", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_genfor_namelist_i",
        b'n',
        None,
        Transition::new("statement_genfor_namelist_in", Direction::Right, StackOp::Read, None),
    );
    read_expression_list(
        b,
        "statement_genfor_namelist_in",
        Transition::new("statement_genfor_namelist_in_explist", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    b.set(
        "statement_genfor_namelist_in_explist",
        b'd',
        None,
        Transition::new("statement_genfor_namelist_in_explist_d", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_genfor_namelist_in_explist_d",
        b'o',
        None,
        Transition::new("statement", Direction::Right, StackOp::Read, None),
    );
}

fn wire_repeat(b: &mut TableBuilder) {
    read_expression(
        b,
        "statement_until",
        Transition::new("statement", Direction::Stay, StackOp::Pop, None),
        ExprExits {
            trailing_name: Transition::new("statement_starting_with_name", Direction::Stay, StackOp::Pop, None),
            colon: Transition::new("statement_dbcolon_:", Direction::Stay, StackOp::Pop, None),
            required_stack_value: Some("statement_repeat".to_string()),
            ..Default::default()
        },
    );
}

fn wire_function(b: &mut TableBuilder) {
    read_whitespace(b, "statement_function", fail(), None);

    for c in matching(is_lislalnum) {
        b.set("statement_function", c, None, Transition::new("func_name_.", Direction::Stay, StackOp::Read, None));
    }

    read_whitespace(b, "func_name_.", fail(), None);
    read_name_or_keyword(b, "func_name_.", Transition::new("func_name", Direction::Stay, StackOp::Read, None), fail(), None);

    read_whitespace(b, "func_name", fail(), None);
    b.set("func_name", b'.', None, Transition::new("func_name_.", Direction::Right, StackOp::Read, None));

    b.set("func_name", b':', None, Transition::new("func_name_:", Direction::Right, StackOp::Read, None));
    read_whitespace(b, "func_name_:", fail(), None);
    read_name_or_keyword(
        b,
        "func_name_:",
        Transition::new("func_name_:name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    read_whitespace(b, "func_name_:name", fail(), None);

    b.set("func_name", b'(', None, Transition::new("func_body_start", Direction::Stay, StackOp::Read, None));
    b.set("func_name_:name", b'(', None, Transition::new("func_body_start", Direction::Stay, StackOp::Read, None));

    for c in ALL {
        b.set(
            "func_body_end",
            c,
            Some("statement_function"),
            Transition::new("statement", Direction::Stay, StackOp::Pop, None),
        );
    }
}

fn wire_local(b: &mut TableBuilder) {
    for c in ALL {
        b.set(
            "statement_local",
            c,
            None,
            Transition::new("statement_local_after_whitespace", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(b, "statement_local", fail(), None);

    read_name_list(
        b,
        "statement_local_after_whitespace",
        Transition::new("statement_local_after_name_list", Direction::Stay, StackOp::Read, None),
        Transition::new("statement_local_read_keyword", Direction::Stay, StackOp::Read, None),
        None,
    );

    b.set(
        "statement_local_after_name_list",
        b'=',
        None,
        Transition::new("statement_assign_rightside", Direction::Right, StackOp::Read, None),
    );
    for c in crate::lua::charset::all_except(b"=") {
        b.set("statement_local_after_name_list", c, None, Transition::new("statement", Direction::Stay, StackOp::Read, None));
    }

    for c in ALL {
        b.set(
            "statement_local_read_keyword",
            c,
            Some("function"),
            Transition::new("statement_local_function", Direction::Stay, StackOp::Pop, None),
        );
    }
    read_whitespace(b, "statement_local_function", fail(), None);
    read_name_or_keyword(
        b,
        "statement_local_function",
        Transition::new("statement_local_function_read_name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    read_whitespace(b, "statement_local_function_read_name", fail(), None);
    b.set(
        "statement_local_function_read_name",
        b'(',
        None,
        Transition::new("func_body_start", Direction::Stay, StackOp::Push, Some("statement_local_function".to_string())),
    );
    for c in ALL {
        b.set(
            "func_body_end",
            c,
            Some("statement_local_function"),
            Transition::new("statement", Direction::Stay, StackOp::Pop, None),
        );
    }
}

fn wire_return(b: &mut TableBuilder) {
    read_expression_list(
        b,
        "statement_return",
        Transition::new("statement_return_after_expression", Direction::Stay, StackOp::Read, None),
        ExprListExits {
            end: Transition::new("statement_return_end", Direction::Stay, StackOp::Read, None),
            elseif: Transition::new("statement_return_elseif", Direction::Stay, StackOp::Read, None),
            else_: Transition::new("statement_return_else", Direction::Stay, StackOp::Read, None),
            until: Transition::new("statement_return_until", Direction::Stay, StackOp::Read, None),
            semicolon: Transition::new("statement_return_after_expression_;", Direction::Stay, StackOp::Read, None),
            ..Default::default()
        },
    );

    read_whitespace(b, "statement_return_after_expression", fail(), None);
    b.set(
        "statement_return_after_expression",
        b';',
        None,
        Transition::new("statement_return_after_expression_;", Direction::Right, StackOp::Read, None),
    );
    read_whitespace(b, "statement_return_after_expression_;", fail(), None);

    for from in ["statement_return_after_expression", "statement_return_after_expression_;"] {
        b.set(from, b'e', None, Transition::new("statement_return_after_expression_;e", Direction::Right, StackOp::Read, None));
    }
    b.set(
        "statement_return_after_expression_;e",
        b'l',
        None,
        Transition::new("statement_return_after_expression_;el", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;el",
        b's',
        None,
        Transition::new("statement_return_after_expression_;els", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;els",
        b'e',
        None,
        Transition::new("statement_return_after_expression_;else", Direction::Right, StackOp::Read, None),
    );
    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_return_after_expression_;else",
            c,
            None,
            Transition::new("statement_return_else", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "statement_return_after_expression_;else",
        b'i',
        None,
        Transition::new("statement_return_after_expression_;elsei", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;elsei",
        b'f',
        None,
        Transition::new("statement_return_after_expression_;elseif", Direction::Right, StackOp::Read, None),
    );
    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_return_after_expression_;elseif",
            c,
            None,
            Transition::new("statement_return_elseif", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "statement_return_after_expression_;e",
        b'n',
        None,
        Transition::new("statement_return_after_expression_;en", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;en",
        b'd',
        None,
        Transition::new("statement_return_after_expression_;end", Direction::Right, StackOp::Read, None),
    );
    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_return_after_expression_;end",
            c,
            None,
            Transition::new("statement_return_end", Direction::Stay, StackOp::Read, None),
        );
    }

    for from in ["statement_return_after_expression", "statement_return_after_expression_;"] {
        b.set(from, b'u', None, Transition::new("statement_return_after_expression_;u", Direction::Right, StackOp::Read, None));
    }
    b.set(
        "statement_return_after_expression_;u",
        b'n',
        None,
        Transition::new("statement_return_after_expression_;un", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;un",
        b't',
        None,
        Transition::new("statement_return_after_expression_;unt", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;unt",
        b'i',
        None,
        Transition::new("statement_return_after_expression_;unti", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "statement_return_after_expression_;unti",
        b'l',
        None,
        Transition::new("statement_return_after_expression_;until", Direction::Right, StackOp::Read, None),
    );
    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_return_after_expression_;until",
            c,
            None,
            Transition::new("statement_return_until", Direction::Stay, StackOp::Read, None),
        );
    }

    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_return_else",
            c,
            Some("statement_if"),
            Transition::new("statement_else", Direction::Stay, StackOp::Read, None),
        );
        b.set(
            "statement_return_elseif",
            c,
            Some("statement_if"),
            Transition::new("statement_elseif", Direction::Stay, StackOp::Read, None),
        );
        b.set(
            "statement_return_until",
            c,
            Some("statement_repeat"),
            Transition::new("statement_until", Direction::Stay, StackOp::Read, None),
        );
    }

    for (required_stack_value, dest) in STACK_VALUES_POPPED_BY_END_KEYWORD {
        for c in not_matching(is_lislalnum) {
            b.set(
                "statement_return_end",
                c,
                Some(required_stack_value),
                Transition::new(dest, Direction::Stay, StackOp::Pop, None),
            );
        }
    }
}

fn wire_goto(b: &mut TableBuilder) {
    read_whitespace(b, "statement_goto", fail(), None);
    read_name_or_keyword(b, "statement_goto", Transition::new("statement", Direction::Stay, StackOp::Read, None), fail(), None);
}

fn wire_end(b: &mut TableBuilder) {
    for c in not_matching(is_lislalnum) {
        b.set(
            "statement_starting_with_keyword",
            c,
            Some("end"),
            Transition::new("statement_end", Direction::Stay, StackOp::Pop, None),
        );
    }
    for (required_stack_value, dest) in STACK_VALUES_POPPED_BY_END_KEYWORD {
        for c in not_matching(is_lislalnum) {
            b.set("statement_end", c, Some(required_stack_value), Transition::new(dest, Direction::Stay, StackOp::Pop, None));
        }
    }
}

fn wire_start(b: &mut TableBuilder) {
    for c in ALL {
        b.set("start", c, None, Transition::new("statement", Direction::Stay, StackOp::Read, None));
    }
    b.set("start", b'#', None, Transition::new("start_#", Direction::Right, StackOp::Read, None));
    for c in ALL {
        b.set("start_#", c, None, Transition::new("start_#", Direction::Right, StackOp::Read, None));
    }
    for &c in b"\r\n" {
        b.set("start_#", c, None, Transition::new("statement", Direction::Right, StackOp::Read, None));
    }
}
