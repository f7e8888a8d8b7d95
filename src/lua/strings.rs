//! Short string literals (`'...'` / `"..."`) and their escape sequences.
//!
//! To enter: push something you can use to later return, then transition
//! to `short_string_start`. To exit: wire a transition from
//! `short_string_end` back to your own state, checking for your stack
//! value and popping it. Leading/trailing whitespace is not handled here.

use crate::engine::{Direction, StackOp, Transition};
use crate::lua::builder::TableBuilder;
use crate::lua::charset::{all_except, is_lisspace, matching, not_matching};

const DIGITS: &[u8] = b"0123456789";
const ONLY_HEX_DIGITS: &[u8] = b"abcdefABCDEF";
const HEX_DIGITS: &[u8] = b"0123456789abcdefABCDEF";

pub fn wire(b: &mut TableBuilder) {
    b.set(
        "short_string_start",
        b'\'',
        None,
        Transition::new("short_string", Direction::Right, StackOp::Push, Some("'".to_string())),
    );
    b.set(
        "short_string_start",
        b'"',
        None,
        Transition::new("short_string", Direction::Right, StackOp::Push, Some("\"".to_string())),
    );

    for c in all_except(b"\r\n\\") {
        b.set("short_string", c, None, Transition::new("short_string", Direction::Right, StackOp::Read, None));
    }

    b.set(
        "short_string",
        b'"',
        Some("'"),
        Transition::new("short_string", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "short_string",
        b'\'',
        Some("\""),
        Transition::new("short_string", Direction::Right, StackOp::Read, None),
    );

    b.set(
        "short_string",
        b'\\',
        None,
        Transition::new("short_string_esc_seq", Direction::Right, StackOp::Read, None),
    );

    for &c in b"abfnrtv\\\"'\n" {
        b.set(
            "short_string_esc_seq",
            c,
            None,
            Transition::new("short_string", Direction::Right, StackOp::Read, None),
        );
    }

    // \z: skip all following raw whitespace (not read_whitespace — comments don't apply here).
    b.set(
        "short_string_esc_seq",
        b'z',
        None,
        Transition::new("short_string_esc_seq_z", Direction::Right, StackOp::Read, None),
    );
    for c in matching(is_lisspace) {
        b.set(
            "short_string_esc_seq_z",
            c,
            None,
            Transition::new("short_string_esc_seq_z", Direction::Right, StackOp::Read, None),
        );
    }
    for c in not_matching(is_lisspace) {
        b.set(
            "short_string_esc_seq_z",
            c,
            None,
            Transition::new("short_string", Direction::Stay, StackOp::Read, None),
        );
    }

    // \xXX
    b.set(
        "short_string_esc_seq",
        b'x',
        None,
        Transition::new("short_string_esc_seq_x", Direction::Right, StackOp::Read, None),
    );
    for &c in HEX_DIGITS {
        b.set(
            "short_string_esc_seq_x",
            c,
            None,
            Transition::new("short_string_esc_seq_x_X", Direction::Right, StackOp::Read, None),
        );
        b.set(
            "short_string_esc_seq_x_X",
            c,
            None,
            Transition::new("short_string", Direction::Right, StackOp::Read, None),
        );
    }

    // \d, \dd, \ddd — reject overflow (>= 256) while only ever looking one digit ahead.
    for &d in b"01" {
        b.set(
            "short_string_esc_seq",
            d,
            None,
            Transition::new("short_string_esc_seq_01", Direction::Right, StackOp::Read, None),
        );
    }
    for &d in DIGITS {
        b.set(
            "short_string_esc_seq_01",
            d,
            None,
            Transition::new("short_string_esc_seq_01_*", Direction::Right, StackOp::Read, None),
        );
        b.set(
            "short_string_esc_seq_01_*",
            d,
            None,
            Transition::new("short_string", Direction::Right, StackOp::Read, None),
        );
    }
    for c in all_except(DIGITS) {
        b.set("short_string_esc_seq_01", c, None, Transition::new("short_string", Direction::Stay, StackOp::Read, None));
        b.set(
            "short_string_esc_seq_01_*",
            c,
            None,
            Transition::new("short_string", Direction::Stay, StackOp::Read, None),
        );
    }

    for &d in b"3456789" {
        b.set(
            "short_string_esc_seq",
            d,
            None,
            Transition::new("short_string_esc_seq_3-9", Direction::Right, StackOp::Read, None),
        );
    }
    for &d in DIGITS {
        b.set(
            "short_string_esc_seq_3-9",
            d,
            None,
            Transition::new("short_string_esc_seq_3-9_*", Direction::Right, StackOp::Read, None),
        );
    }
    for c in all_except(DIGITS) {
        b.set("short_string_esc_seq_3-9", c, None, Transition::new("short_string", Direction::Stay, StackOp::Read, None));
        b.set(
            "short_string_esc_seq_3-9_*",
            c,
            None,
            Transition::new("short_string", Direction::Stay, StackOp::Read, None),
        );
    }

    b.set(
        "short_string_esc_seq",
        b'2',
        None,
        Transition::new("short_string_esc_seq_2", Direction::Right, StackOp::Read, None),
    );
    for &d in b"01234" {
        b.set(
            "short_string_esc_seq_2",
            d,
            None,
            Transition::new("short_string_esc_seq_2_0-4", Direction::Right, StackOp::Read, None),
        );
    }
    b.set(
        "short_string_esc_seq_2",
        b'5',
        None,
        Transition::new("short_string_esc_seq_2_5", Direction::Right, StackOp::Read, None),
    );
    for &d in b"6789" {
        b.set(
            "short_string_esc_seq_2",
            d,
            None,
            Transition::new("short_string_esc_seq_2_6-9", Direction::Right, StackOp::Read, None),
        );
    }
    for c in all_except(DIGITS) {
        b.set("short_string_esc_seq_2", c, None, Transition::new("short_string", Direction::Stay, StackOp::Read, None));
    }

    for &d in DIGITS {
        b.set(
            "short_string_esc_seq_2_0-4",
            d,
            None,
            Transition::new("short_string", Direction::Right, StackOp::Read, None),
        );
    }
    for c in all_except(DIGITS) {
        b.set(
            "short_string_esc_seq_2_0-4",
            c,
            None,
            Transition::new("short_string", Direction::Stay, StackOp::Read, None),
        );
        b.set(
            "short_string_esc_seq_2_6-9",
            c,
            None,
            Transition::new("short_string", Direction::Stay, StackOp::Read, None),
        );
    }

    for &d in b"012345" {
        b.set(
            "short_string_esc_seq_2_5",
            d,
            None,
            Transition::new("short_string", Direction::Right, StackOp::Read, None),
        );
    }
    for c in all_except(DIGITS) {
        b.set("short_string_esc_seq_2_5", c, None, Transition::new("short_string", Direction::Stay, StackOp::Read, None));
    }

    // \u{H+}: values above 0x7FFFFFFF are forbidden. The first nonzero hex
    // digit after any leading zeros decides whether up to 7 or up to 6
    // more digits are allowed before that bound is hit.
    b.set(
        "short_string_esc_seq",
        b'u',
        None,
        Transition::new("short_string_esc_seq_u", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "short_string_esc_seq_u",
        b'{',
        None,
        Transition::new("short_string_esc_seq_u{", Direction::Right, StackOp::Read, None),
    );

    b.set(
        "short_string_esc_seq_u{",
        b'0',
        None,
        Transition::new("short_string_esc_seq_u{_0", Direction::Right, StackOp::Read, None),
    );
    b.set(
        "short_string_esc_seq_u{_0",
        b'0',
        None,
        Transition::new("short_string_esc_seq_u{_0", Direction::Right, StackOp::Read, None),
    );

    for &d in b"1234567" {
        b.set(
            "short_string_esc_seq_u{",
            d,
            None,
            Transition::new("short_string_esc_seq_u{_1-7", Direction::Right, StackOp::Read, None),
        );
        b.set(
            "short_string_esc_seq_u{_0",
            d,
            None,
            Transition::new("short_string_esc_seq_u{_1-7", Direction::Right, StackOp::Read, None),
        );
    }
    for &d in b"89" {
        b.set(
            "short_string_esc_seq_u{",
            d,
            None,
            Transition::new("short_string_esc_seq_u{_8-F", Direction::Right, StackOp::Read, None),
        );
        b.set(
            "short_string_esc_seq_u{_0",
            d,
            None,
            Transition::new("short_string_esc_seq_u{_8-F", Direction::Right, StackOp::Read, None),
        );
    }
    for &d in ONLY_HEX_DIGITS {
        b.set(
            "short_string_esc_seq_u{",
            d,
            None,
            Transition::new("short_string_esc_seq_u{_8-F", Direction::Right, StackOp::Read, None),
        );
        b.set(
            "short_string_esc_seq_u{_0",
            d,
            None,
            Transition::new("short_string_esc_seq_u{_8-F", Direction::Right, StackOp::Read, None),
        );
    }

    let mut state_1_7 = "short_string_esc_seq_u{_1-7".to_string();
    for i in 1..=7 {
        let next = format!("short_string_esc_seq_u{{_1-7_+{i}");
        for &d in HEX_DIGITS {
            b.set(&state_1_7, d, None, Transition::new(&next, Direction::Right, StackOp::Read, None));
        }
        state_1_7 = next;
    }
    let mut state_8_f = "short_string_esc_seq_u{_8-F".to_string();
    for i in 1..=6 {
        let next = format!("short_string_esc_seq_u{{_8-F_+{i}");
        for &d in HEX_DIGITS {
            b.set(&state_8_f, d, None, Transition::new(&next, Direction::Right, StackOp::Read, None));
        }
        state_8_f = next;
    }

    let closeable_states = [
        "short_string_esc_seq_u{_0".to_string(),
        "short_string_esc_seq_u{_1-7".to_string(),
        "short_string_esc_seq_u{_1-7_+1".to_string(),
        "short_string_esc_seq_u{_1-7_+2".to_string(),
        "short_string_esc_seq_u{_1-7_+3".to_string(),
        "short_string_esc_seq_u{_1-7_+4".to_string(),
        "short_string_esc_seq_u{_1-7_+5".to_string(),
        "short_string_esc_seq_u{_1-7_+6".to_string(),
        "short_string_esc_seq_u{_1-7_+7".to_string(),
        "short_string_esc_seq_u{_8-F".to_string(),
        "short_string_esc_seq_u{_8-F_+1".to_string(),
        "short_string_esc_seq_u{_8-F_+2".to_string(),
        "short_string_esc_seq_u{_8-F_+3".to_string(),
        "short_string_esc_seq_u{_8-F_+4".to_string(),
        "short_string_esc_seq_u{_8-F_+5".to_string(),
        "short_string_esc_seq_u{_8-F_+6".to_string(),
    ];
    for state in &closeable_states {
        b.set(state, b'}', None, Transition::new("short_string", Direction::Right, StackOp::Read, None));
    }

    b.set(
        "short_string",
        b'\'',
        Some("'"),
        Transition::new("short_string_end", Direction::Right, StackOp::Pop, None),
    );
    b.set(
        "short_string",
        b'"',
        Some("\""),
        Transition::new("short_string_end", Direction::Right, StackOp::Pop, None),
    );
}

#[cfg(test)]
mod tests {
    use crate::lua::parse_chunk;

    fn ok(src: &str) {
        assert!(parse_chunk(src.as_bytes()).is_ok(), "expected {src:?} to parse");
    }

    fn fails(src: &str) {
        assert!(parse_chunk(src.as_bytes()).is_err(), "expected {src:?} to fail to parse");
    }

    // \ddd is read one digit ahead of time, so the only way to keep it
    // under 256 without backtracking is to cap how many digits follow
    // each possible leading digit.
    #[test]
    fn decimal_escape_stays_under_256() {
        ok(r#"a = "\000""#);
        ok(r#"a = "\199""#);
        ok(r#"a = "\255""#);
        ok(r#"a = "\09""#); // two digits, leading 0, always safe
        ok(r#"a = "\99""#); // leading digit 9: only two digits allowed
    }

    #[test]
    fn decimal_escape_rejects_overflow() {
        fails(r#"a = "\256" ; "#);
        fails(r#"a = "\299" ; "#);
        fails(r#"a = "\999" ; "#);
    }

    #[test]
    fn unicode_escape_respects_digit_count_bound() {
        ok(r"a = '\u{0}'");
        ok(r"a = '\u{7FFFFFF}'"); // leading digit 1-7: up to 7 more digits
        ok(r"a = '\u{FFFFFF}'"); // leading digit 8-F: up to 6 more digits
        ok(r"a = '\u{000000000001}'"); // leading zeros never count against the bound
    }
}
