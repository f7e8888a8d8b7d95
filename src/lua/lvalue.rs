//! L-values and r-values (the `var` and `prefixexp` grammar rules):
//! names, indexing, and function/method calls chained off them.
//!
//! `read_lvalue_or_rvalue` leaves one of `"rvalue"` or
//! `"lvalue_or_rvalue"` on top of the stack on exit, letting the caller
//! tell whether what was read could still serve as an assignment target
//! or only as a value. Optionally it also leaves whether the whole thing
//! was a bare name (`"only_name"` / `"not_only_name"`) and/or whether it
//! ended in a function call (`"function_call"` / `"not_function_call"`),
//! stacked in that order above the lvalue-or-rvalue tag.
//!
//! Handles trailing whitespace automatically; does not handle leading
//! whitespace.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::{fail, sentinel, TableBuilder};
use crate::lua::charset::{all_except, ALL};
use crate::lua::expr::{read_expression, read_expression_list};
use crate::lua::names::read_name_or_keyword;
use crate::lua::whitespace::read_whitespace;

#[allow(clippy::too_many_arguments)]
pub fn read_lvalue_or_rvalue(
    b: &mut TableBuilder,
    start_state: &str,
    already_read_name: bool,
    transition: Transition,
    minus_transition: Transition,
    period_transition: Transition,
    colon_transition: Transition,
    keyword_transition: Transition,
    check_if_only_name: bool,
    check_if_function_call: bool,
) {
    let this_stack_value = sentinel("lrvalue", start_state);
    let entry_point = if already_read_name { "2" } else { "1" };

    for c in ALL {
        b.set(
            start_state,
            c,
            None,
            Transition::new(
                &format!("lrvalue_start_{entry_point}"),
                Direction::Stay,
                StackOp::Push,
                Some(this_stack_value.clone()),
            ),
        );
    }

    for (modifier, this_transition) in [
        ("", &transition),
        ("_-", &minus_transition),
        ("_.", &period_transition),
        ("_:", &colon_transition),
    ] {
        for exit_option_1 in ["lvalue_or_rvalue", "rvalue"] {
            for exit_option_2 in ["only_name", "not_only_name"] {
                for exit_option_3 in ["function_call", "not_function_call"] {
                    let state_stack_value = format!("{exit_option_1}__{exit_option_2}__{exit_option_3}");
                    let intermediate_state_1 = format!("lrvalue_exit{modifier}_with__{state_stack_value}");
                    let extra_intermediate_state =
                        format!("lrvalue_exit{modifier}_from__{this_stack_value}__with__{state_stack_value}");

                    let mut to_push = Vec::new();
                    if check_if_function_call {
                        to_push.push(exit_option_3);
                    }
                    if check_if_only_name {
                        to_push.push(exit_option_2);
                    }
                    to_push.push(exit_option_1);

                    for c in ALL {
                        b.set(
                            &format!("lrvalue{modifier}_exit"),
                            c,
                            Some(&state_stack_value),
                            Transition::new(&intermediate_state_1, Direction::Stay, StackOp::Pop, None),
                        );

                        let mut current_state = intermediate_state_1.clone();
                        let mut next_num = 1;
                        let mut op = StackOp::Replace;
                        let mut check_against = Some(this_stack_value.clone());

                        for tp in &to_push {
                            let next_state = format!("{extra_intermediate_state}__{next_num}");
                            b.set(
                                &current_state,
                                c,
                                check_against.as_deref(),
                                Transition::new(&next_state, Direction::Stay, op, Some(tp.to_string())),
                            );
                            op = StackOp::Push;
                            check_against = None;
                            current_state = next_state;
                            next_num += 1;
                        }

                        b.set(&current_state, c, None, this_transition.clone());
                    }
                }
            }
        }
    }

    for keyword in crate::lua::charset::KEYWORDS {
        let intermediate_state_1 = format!("lrvalue_exit_keyword_with__{keyword}");
        let intermediate_state_2 = format!("lrvalue_exit_keyword_from__{start_state}__with__{keyword}");
        for c in ALL {
            b.set(
                "lrvalue_exit",
                c,
                Some(keyword),
                Transition::new(&intermediate_state_1, Direction::Stay, StackOp::Pop, None),
            );
            b.set(
                &intermediate_state_1,
                c,
                Some(&this_stack_value),
                Transition::new(&intermediate_state_2, Direction::Stay, StackOp::Replace, Some(keyword.to_string())),
            );
            b.set(&intermediate_state_2, c, None, keyword_transition.clone());
        }
    }
}

fn init_stack_state_and_read_next_part(
    b: &mut TableBuilder,
    start_state: &str,
    chars: impl IntoIterator<Item = u8>,
    direction: Direction,
    lvalue_or_rvalue_vs_rvalue: &str,
    only_name_vs_not_only_name: &str,
    function_call_vs_not_function_call: &str,
) {
    let stack_value =
        format!("{lvalue_or_rvalue_vs_rvalue}__{only_name_vs_not_only_name}__{function_call_vs_not_function_call}");
    for c in chars {
        b.set(
            start_state,
            c,
            None,
            Transition::new("lrvalue_read_next_part", direction, StackOp::Push, Some(stack_value.clone())),
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn set_stack_state_and_read_next_part(
    b: &mut TableBuilder,
    start_state: &str,
    chars: impl IntoIterator<Item = u8>,
    direction: Direction,
    lvalue_or_rvalue_vs_rvalue: &str,
    only_name_vs_not_only_name: &str,
    function_call_vs_not_function_call: &str,
    is_colon_version: bool,
) {
    let target_state = if is_colon_version { "lrvalue_read_next_part_:" } else { "lrvalue_read_next_part" };
    let stack_value =
        format!("{lvalue_or_rvalue_vs_rvalue}__{only_name_vs_not_only_name}__{function_call_vs_not_function_call}");
    for c in chars {
        b.set(
            start_state,
            c,
            None,
            Transition::new(target_state, direction, StackOp::Replace, Some(stack_value.clone())),
        );
    }
}

pub fn wire(b: &mut TableBuilder) {
    for c in crate::lua::charset::matching(crate::lua::charset::is_lislalpha) {
        b.set(
            "lrvalue_start_1",
            c,
            None,
            Transition::new("lrvalue_start_1_name_or_keyword", Direction::Stay, StackOp::Read, None),
        );
    }

    b.set(
        "lrvalue_start_1",
        b'(',
        None,
        Transition::new("lrvalue_start_1_expression", Direction::Right, StackOp::Read, None),
    );
    read_expression(
        b,
        "lrvalue_start_1_expression",
        Transition::new("lrvalue_start_1_expression_end", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    init_stack_state_and_read_next_part(
        b,
        "lrvalue_start_1_expression_end",
        [b')'],
        Direction::Right,
        "rvalue",
        "not_only_name",
        "not_function_call",
    );

    read_name_or_keyword(
        b,
        "lrvalue_start_1_name_or_keyword",
        Transition::new("lrvalue_start_1_name", Direction::Stay, StackOp::Read, None),
        Transition::new("lrvalue_exit_keyword", Direction::Stay, StackOp::Read, None),
        None,
    );

    init_stack_state_and_read_next_part(
        b,
        "lrvalue_start_1_name",
        ALL,
        Direction::Stay,
        "lvalue_or_rvalue",
        "only_name",
        "not_function_call",
    );

    init_stack_state_and_read_next_part(
        b,
        "lrvalue_start_2",
        ALL,
        Direction::Stay,
        "lvalue_or_rvalue",
        "only_name",
        "not_function_call",
    );

    for c in ALL {
        b.set(
            "lrvalue_read_next_part",
            c,
            None,
            Transition::new("lrvalue_exit", Direction::Stay, StackOp::Read, None),
        );
    }
    read_whitespace(
        b,
        "lrvalue_read_next_part",
        Transition::new("lrvalue_-_exit", Direction::Stay, StackOp::Read, None),
        None,
    );
    read_whitespace(b, "lrvalue_read_next_part_:", fail(), None);

    b.set(
        "lrvalue_read_next_part",
        b'(',
        None,
        Transition::new("lrvalue_read_func_args_(", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_next_part_:",
        b'(',
        None,
        Transition::new("lrvalue_read_func_args_(", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_next_part",
        b'{',
        None,
        Transition::new("lrvalue_read_func_args_{", Direction::Stay, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_next_part_:",
        b'{',
        None,
        Transition::new("lrvalue_read_func_args_{", Direction::Stay, StackOp::Read, None),
    );
    for quote in [b'\'', b'"'] {
        b.set(
            "lrvalue_read_next_part",
            quote,
            None,
            Transition::new("lrvalue_read_func_args_\"", Direction::Stay, StackOp::Read, None),
        );
        b.set(
            "lrvalue_read_next_part_:",
            quote,
            None,
            Transition::new("lrvalue_read_func_args_\"", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "lrvalue_read_next_part",
        b'[',
        None,
        Transition::new("lrvalue_read_[", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_next_part_:",
        b'[',
        None,
        Transition::new("lrvalue_read_[_after_:", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_next_part",
        b'.',
        None,
        Transition::new("lrvalue_read_.", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_next_part",
        b':',
        None,
        Transition::new("lrvalue_read_:", Direction::Right, StackOp::Read, None),
    );

    // Function arguments: ( explist )
    read_expression_list(
        b,
        "lrvalue_read_func_args_(",
        Transition::new("lrvalue_read_func_args_(_)", Direction::Right, StackOp::Read, None),
        crate::lua::expr::ExprListExits {
            rparen: Transition::new("lrvalue_read_func_args_(_)", Direction::Stay, StackOp::Read, None),
            ..Default::default()
        },
    );
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_func_args_(_)",
        ALL,
        Direction::Stay,
        "rvalue",
        "not_only_name",
        "function_call",
        false,
    );

    // Function arguments: { tablector }
    b.set(
        "lrvalue_read_func_args_{",
        b'{',
        None,
        Transition::new(
            "table_constructor_start",
            Direction::Stay,
            StackOp::Push,
            Some("lrvalue_read_func_args_{}".to_string()),
        ),
    );
    for c in ALL {
        b.set(
            "table_constructor_end",
            c,
            Some("lrvalue_read_func_args_{}"),
            Transition::new("lrvalue_read_func_args_{_}", Direction::Stay, StackOp::Pop, None),
        );
    }
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_func_args_{_}",
        ALL,
        Direction::Stay,
        "rvalue",
        "not_only_name",
        "function_call",
        false,
    );

    // Function arguments: a bare short string literal
    for quote in [b'\'', b'"'] {
        b.set(
            "lrvalue_read_func_args_\"",
            quote,
            None,
            Transition::new("short_string_start", Direction::Stay, StackOp::Push, Some("lrvalue_short_string".to_string())),
        );
    }
    for c in ALL {
        b.set(
            "short_string_end",
            c,
            Some("lrvalue_short_string"),
            Transition::new("lrvalue_read_func_args_\"_\"", Direction::Stay, StackOp::Pop, None),
        );
    }
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_func_args_\"_\"",
        ALL,
        Direction::Stay,
        "rvalue",
        "not_only_name",
        "function_call",
        false,
    );

    // "[": either table indexing, or (only via "[[" / "[=") a long-string function argument.
    for c in all_except(b"[=") {
        b.set(
            "lrvalue_read_[",
            c,
            None,
            Transition::new("lrvalue_read_[_membership", Direction::Stay, StackOp::Replace, Some("lvalue_or_rvalue".to_string())),
        );
    }
    b.set(
        "lrvalue_read_[",
        b'[',
        None,
        Transition::new("lrvalue_read_[[_func_args", Direction::Stay, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_[_after_:",
        b'[',
        None,
        Transition::new("lrvalue_read_[[_func_args", Direction::Stay, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_[",
        b'=',
        None,
        Transition::new("lrvalue_read_[[_func_args", Direction::Stay, StackOp::Read, None),
    );
    b.set(
        "lrvalue_read_[_after_:",
        b'=',
        None,
        Transition::new("lrvalue_read_[[_func_args", Direction::Stay, StackOp::Read, None),
    );

    for byte in [b'[', b'='] {
        b.set(
            "lrvalue_read_[[_func_args",
            byte,
            None,
            Transition::new(
                "multiline_comment_or_long_string_start_2",
                Direction::Stay,
                StackOp::Push,
                Some("lrvalue_long_string_func_args".to_string()),
            ),
        );
    }
    b.set(
        "multiline_comment_or_long_string_end",
        b']',
        Some("lrvalue_long_string_func_args"),
        Transition::new("lrvalue_read_[[_func_args_]]", Direction::Stay, StackOp::Pop, None),
    );
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_[[_func_args_]]",
        [b']'],
        Direction::Right,
        "rvalue",
        "not_only_name",
        "function_call",
        false,
    );

    read_expression(
        b,
        "lrvalue_read_[_membership",
        Transition::new("lrvalue_read_[_membership_exp", Direction::Stay, StackOp::Read, None),
        Default::default(),
    );
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_[_membership_exp",
        [b']'],
        Direction::Right,
        "lvalue_or_rvalue",
        "not_only_name",
        "not_function_call",
        false,
    );

    // "."
    for c in ALL {
        b.set(
            "lrvalue_read_.",
            c,
            None,
            Transition::new("lrvalue_read_._after_whitespace", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "lrvalue_read_.",
        b'.',
        None,
        Transition::new("lrvalue_._exit", Direction::Stay, StackOp::Read, None),
    );
    read_whitespace(b, "lrvalue_read_.", fail(), None);
    read_name_or_keyword(
        b,
        "lrvalue_read_._after_whitespace",
        Transition::new("lrvalue_read_._name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_._name",
        ALL,
        Direction::Stay,
        "lvalue_or_rvalue",
        "not_only_name",
        "not_function_call",
        false,
    );

    // ":" — like ".", but the name must be followed by a function call.
    for c in ALL {
        b.set(
            "lrvalue_read_:",
            c,
            None,
            Transition::new("lrvalue_read_:_after_whitespace", Direction::Stay, StackOp::Read, None),
        );
    }
    b.set(
        "lrvalue_read_:",
        b':',
        None,
        Transition::new("lrvalue_:_exit", Direction::Stay, StackOp::Read, None),
    );
    read_whitespace(b, "lrvalue_read_:", fail(), None);
    read_name_or_keyword(
        b,
        "lrvalue_read_:_after_whitespace",
        Transition::new("lrvalue_read_:_name", Direction::Stay, StackOp::Read, None),
        fail(),
        None,
    );
    set_stack_state_and_read_next_part(
        b,
        "lrvalue_read_:_name",
        ALL,
        Direction::Stay,
        "rvalue",
        "not_only_name",
        "function_call",
        true,
    );
}
