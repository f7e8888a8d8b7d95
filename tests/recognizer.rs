//! Black-box tests against the public `lua::parse_chunk` API, covering
//! the concrete scenarios from `spec.md` §8.

use lua_2pda::lua::parse_chunk;

fn ok(src: &str) {
    assert!(parse_chunk(src.as_bytes()).is_ok(), "expected {src:?} to parse");
}

fn fails(src: &str) {
    assert!(parse_chunk(src.as_bytes()).is_err(), "expected {src:?} to fail to parse");
}

#[test]
fn empty_do_block() {
    ok("do end");
}

#[test]
fn empty_chunk() {
    ok("");
    ok("   \n\t  ");
    ok("-- just a comment\n");
}

#[test]
fn assignment_and_bad_name() {
    ok("a = 1;");
    fails("123abc = 1;");
}

#[test]
fn numerical_for_requires_limit() {
    ok("for a = 1, 10, 2 do end");
    ok("for a = 1, 10 do end");
    fails("for a = 1 do end");
}

#[test]
fn generic_for() {
    ok("for k, v in pairs(t) do end");
    ok("for k in next, t do end");
}

#[test]
fn return_must_end_the_block() {
    ok("function x() return nil end do end");
    fails("return nil end end");
}

#[test]
fn return_with_trailing_semicolon() {
    ok("do return 1, 2; end");
    ok("do return; end");
    ok("do return end");
}

/// Appends a comment of the form `--[other[ ]equals] ]other]`, where
/// `other` is some different run of `=`s. If the preceding long bracket
/// had already been closed, this is just another well-formed comment; if
/// it hadn't, this closes it early and leaves unparseable `]other]`
/// garbage behind, so the whole chunk fails instead.
fn check_closed(equals: &str) -> String {
    let other = if equals == "====" { "==" } else { "====" };
    format!("  --[{other}[ ]{equals}] ]{other}]")
}

#[test]
fn long_bracket_levels() {
    ok(&("--[[multiline\rcomment\n]not yet]]".to_string() + &check_closed("")));
    ok(&("--[====[multiline\rcomment\n]=not yet]====]".to_string() + &check_closed("====")));
    fails(&("--[[multiline\rcomment\n]=]".to_string() + &check_closed("")));
    fails(&("--[=[multiline\rcomment\n]]".to_string() + &check_closed("=")));
    fails(&("--[=[multiline\rcomment\n]==]".to_string() + &check_closed("=")));
}

#[test]
fn long_bracket_level_mismatch_keeps_scanning() {
    ok(&("--[====[multiline\rcomment\n]]====]".to_string() + &check_closed("====")));
}

#[test]
fn long_string_literal() {
    ok("a = [[hello\nworld]]");
    ok("a = [==[ has ]] inside ]==]");
}

#[test]
fn numerals() {
    ok("a = 0xFFp-2");
    ok("a = 3.14");
    ok("a = .5");
    ok("a = 5.");
    ok("a = 1e10");
    // A trailing " ; " forces the failure to land on a concrete byte
    // instead of relying on running out of input mid-numeral.
    fails("a = 0x ; ");
    fails("a = 12e ; ");
    fails("a = . ; ");
    fails("a = 0x34p ; ");
    fails("a = 0xe- ; ");
}

#[test]
fn method_call_vs_method_assignment() {
    fails("a:b = 1");
    ok("a:b()");
}

#[test]
fn and_or_word_boundary() {
    ok("local a = 5 and z");
    ok("local a = 5 andz(nil,nil)");
    // "and" confirmed as the keyword, then "(nil, nil)" attempted as its
    // right operand: a parenthesized expression may only hold one
    // expression, so this fails on the comma, not on "and" itself.
    fails("local a = 5 and (nil, nil);");
    ok("local a = 5 or z");
    fails("local a = 5 or (nil, nil);");
}

#[test]
fn table_constructor_field_forms() {
    ok("local t = { 1, 2, [3] = 4, five = 5; 6 }");
    ok("local t = {}");
    ok("local t = { [\"key\"] = 1 }");
    ok("local t = { -1, -2 }");
}

#[test]
fn short_string_escapes() {
    ok(r#"a = "hello\tworld\n""#);
    ok(r"a = 'it\'s \x41 \065 \u{48}'");
    // A raw, unescaped newline inside a short string has no transition
    // and fails well before end of input (unlike a string that simply
    // never finds its closing quote, which the automaton can't
    // distinguish from having run out of input to read).
    fails("a = \"raw\nnewline\" ; ");
}

#[test]
fn shebang_is_skipped() {
    ok("#!/usr/bin/env lua\nprint(1)\n");
}

#[test]
fn labels_and_goto() {
    ok("::top:: goto top");
    ok("do ::continue:: end");
}

#[test]
fn local_function_and_function_statement() {
    ok("local function f(a, b, ...) return a + b end");
    ok("function M.f(self) end");
    ok("function M:f(x) return x end");
}

#[test]
fn repeat_until() {
    ok("local i = 0 repeat i = i + 1 until i > 10");
}

#[test]
fn nested_function_calls_and_indexing() {
    ok("a.b.c:d(1, 2)[3] = 4");
    ok("print((f())())");
}

#[test]
fn whitespace_and_comments_are_insertable() {
    let base = "local a = 1 + 2";
    ok(base);
    ok("local   a   =   1   +   2");
    ok("local --[[c]] a = 1 --[[c]] + --[[c]] 2");
    ok("local a = 1 + -- trailing line comment\n2");
}

#[test]
fn error_reports_index_state_and_stack() {
    let err = parse_chunk(b"123abc = 1;").unwrap_err();
    match err {
        lua_2pda::error::ParseError::NoTransition { index, .. } => assert!(index > 0),
        other => panic!("expected NoTransition, got {other:?}"),
    }
}
