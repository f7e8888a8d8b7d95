//! Reading `Name` tokens and reserved words, and name lists.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::{sentinel, TableBuilder};
use crate::lua::charset::{is_lislalnum, is_lislalpha, matching, not_matching, ALL, KEYWORDS};

/// Read a Lua `Name`: a run of letters/digits/underscore not starting
/// with a digit and not equal to a reserved word.
///
/// `start_state` must already be positioned on the first (alphabetic)
/// character. `name_transition` is taken once a non-alphanumeric
/// character is read after a name that is not a keyword (with nothing
/// extra left on the stack); `keyword_transition` is taken the same way
/// after a full keyword, with the keyword itself left on top of stack.
pub fn read_name_or_keyword(
    b: &mut TableBuilder,
    start_state: &str,
    name_transition: Transition,
    keyword_transition: Transition,
    required_stack_value: Option<&str>,
) {
    let this_stack_value = sentinel("name_or_keyword", start_state);

    for c in matching(is_lislalpha) {
        b.set(
            start_state,
            c,
            required_stack_value,
            Transition::new("name_or_keyword", Direction::Stay, StackOp::Push, Some(this_stack_value.clone())),
        );
    }

    let name_from = sentinel("name_from", start_state);
    for c in not_matching(is_lislalnum) {
        b.set(
            "name",
            c,
            Some(&this_stack_value),
            Transition::new(&name_from, Direction::Stay, StackOp::Pop, None),
        );
        b.set(&name_from, c, None, name_transition.clone());
    }

    for keyword in KEYWORDS {
        let intermediate_state = format!("keyword_{keyword}_from__{start_state}");
        for c in not_matching(is_lislalnum) {
            b.set(
                &format!("keyword_{keyword}"),
                c,
                Some(&this_stack_value),
                Transition::new(&intermediate_state, Direction::Stay, StackOp::Replace, Some(keyword.to_string())),
            );
            b.set(&intermediate_state, c, None, keyword_transition.clone());
        }
    }
}

/// Wires the shared `name` and `name_or_keyword` core states. Called
/// once; every call to [`read_name_or_keyword`] reuses these.
pub fn wire(b: &mut TableBuilder) {
    for c in matching(is_lislalnum) {
        b.set("name", c, None, Transition::new("name", Direction::Right, StackOp::Read, None));
    }

    for c in matching(is_lislalnum) {
        b.set("name_or_keyword", c, None, Transition::new("name", Direction::Stay, StackOp::Read, None));
    }

    for keyword in KEYWORDS {
        for c in ALL {
            let mut keyword_so_far = String::new();
            for k in keyword.chars() {
                keyword_so_far.push(k);
                b.set(
                    "name_or_keyword",
                    c,
                    Some(&keyword_so_far),
                    Transition::new("name", Direction::Stay, StackOp::Pop, None),
                );
            }
        }
    }

    for keyword in KEYWORDS {
        for c in not_matching(is_lislalnum) {
            b.set(
                "name_or_keyword",
                c,
                Some(keyword),
                Transition::new(&format!("keyword_{keyword}"), Direction::Stay, StackOp::Pop, None),
            );
        }

        let bytes: Vec<u8> = keyword.bytes().collect();
        b.set(
            "name_or_keyword",
            bytes[0],
            None,
            Transition::new(
                "name_or_keyword",
                Direction::Right,
                StackOp::Push,
                Some((bytes[0] as char).to_string()),
            ),
        );

        let mut keyword_so_far = (bytes[0] as char).to_string();
        for &c in &bytes[1..] {
            let next = format!("{keyword_so_far}{}", c as char);
            b.set(
                "name_or_keyword",
                c,
                Some(&keyword_so_far),
                Transition::new("name_or_keyword", Direction::Right, StackOp::Replace, Some(next.clone())),
            );
            keyword_so_far = next;
        }
    }
}

/// Read a comma-separated list of one or more names. Unlike
/// [`read_name_or_keyword`], this consumes whitespace (including
/// comments) trailing each name, since it must look past it to tell
/// whether the list continues. It does not consume leading whitespace.
///
/// A name list closed by a trailing `-` isn't supported (comments would
/// make that ambiguous, and no grammar production needs it).
pub fn read_name_list(
    b: &mut TableBuilder,
    start_state: &str,
    name_transition: Transition,
    keyword_transition: Transition,
    required_stack_value: Option<&str>,
) {
    let this_stack_value = sentinel("name_list", start_state);

    for c in ALL {
        b.set(
            start_state,
            c,
            required_stack_value,
            Transition::new("name_list_start", Direction::Stay, StackOp::Push, Some(this_stack_value.clone())),
        );
    }

    let exit_name_from = format!("name_list_exit_name_from__{start_state}");
    for c in ALL {
        b.set(
            "name_list_exit_name",
            c,
            Some(&this_stack_value),
            Transition::new(&exit_name_from, Direction::Stay, StackOp::Pop, None),
        );
        b.set(&exit_name_from, c, None, name_transition.clone());
    }

    for c in ALL {
        for k in KEYWORDS {
            let intermediate_1 = format!("name_list_exit_keyword__{k}");
            let intermediate_2 = format!("name_list_exit_keyword__{k}__from__{start_state}");
            let intermediate_3 = format!("name_list_exit_keyword_from__{start_state}");
            b.set(
                "name_list_exit_keyword",
                c,
                Some(k),
                Transition::new(&intermediate_1, Direction::Stay, StackOp::Pop, None),
            );
            b.set(
                &intermediate_1,
                c,
                Some(&this_stack_value),
                Transition::new(&intermediate_2, Direction::Stay, StackOp::Pop, None),
            );
            b.set(
                &intermediate_2,
                c,
                None,
                Transition::new(&intermediate_3, Direction::Stay, StackOp::Push, Some(k.to_string())),
            );
            b.set(&intermediate_3, c, None, keyword_transition.clone());
        }
    }
}

/// Wires the concrete name-list entrypoint used by every caller: read one
/// name, then loop on `, name` for as long as that keeps working.
pub fn wire_name_list(b: &mut TableBuilder) {
    read_name_or_keyword(
        b,
        "name_list_start",
        Transition::new("name_list_entry_end", Direction::Stay, StackOp::Read, None),
        Transition::new("name_list_exit_keyword", Direction::Stay, StackOp::Read, None),
        None,
    );

    for c in ALL {
        b.set(
            "name_list_entry_end",
            c,
            None,
            Transition::new("name_list_exit_name", Direction::Stay, StackOp::Read, None),
        );
    }
    crate::lua::whitespace::read_whitespace(b, "name_list_entry_end", crate::lua::builder::fail(), None);
    b.set(
        "name_list_entry_end",
        b',',
        None,
        Transition::new("name_list_start_2", Direction::Right, StackOp::Read, None),
    );
    crate::lua::whitespace::read_whitespace(b, "name_list_start_2", crate::lua::builder::fail(), None);

    read_name_or_keyword(
        b,
        "name_list_start_2",
        Transition::new("name_list_entry_end", Direction::Stay, StackOp::Read, None),
        crate::lua::builder::fail(),
        None,
    );
}
