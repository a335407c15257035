use std::io::Cursor;

use arrowlang::{
    config::InterpreterConfig,
    error::{Error, ErrorKind, SyntaxError},
    run,
};

fn run_with(src: &str, input: &str, config: InterpreterConfig) -> (Result<(), Error>, String) {
    let mut output = Vec::new();
    let result = run(src, &mut Cursor::new(input.to_string()), &mut output, config);
    (result, String::from_utf8(output).expect("output is valid UTF-8"))
}

fn assert_output(src: &str, expected: &str) {
    match run_with(src, "", InterpreterConfig::default()) {
        (Ok(()), output) => assert_eq!(output, expected, "unexpected output for:\n{src}"),
        (Err(e), _) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> (Error, String) {
    match run_with(src, "", InterpreterConfig::default()) {
        (Ok(()), _) => panic!("Script succeeded but was expected to fail:\n{src}"),
        (Err(e), output) => {
            assert_eq!(e.kind(), kind, "wrong error kind ({e}) for:\n{src}");
            (e, output)
        },
    }
}

#[test]
fn precedence_matches_standard_arithmetic() {
    let cases = [("2 + 3 * 4", "14"),
                 ("2 * 3 + 4", "10"),
                 ("10 - 2 - 3", "5"),
                 ("1 - 2 + 3", "2"),
                 ("2 * 3 * 4 - 5 * 6 + 7", "1"),
                 ("100 / 10 / 2", "5.0"),
                 ("8 / 4 * 2", "4.0"),
                 ("6 - 4 / 2", "4.0"),
                 ("1 + 2 * 3 - 4 / 8", "6.5")];

    for (expr, expected) in cases {
        assert_output(&format!("print({expr})"), &format!("{expected}\n"));
    }
}

#[test]
fn assignment_then_print() {
    assert_output("x -> 2 + 3 * 4\nprint(x)", "14\n");
}

#[test]
fn string_concatenation() {
    assert_output("a -> \"foo\"\nb -> \"bar\"\nprint(a + b)", "foobar\n");
    assert_output("n -> 4\nprint(\"n = \" + n)", "n = 4\n");
    assert_output("print(0.5 + \"!\")", "0.5!\n");
}

#[test]
fn division_is_never_truncating() {
    assert_output("print(7 / 2)", "3.5\n");
    assert_output("print(6 / 3)", "2.0\n");
    assert_output("print(3. + 1)", "4.0\n");
}

#[test]
fn division_by_zero_aborts_without_output() {
    let (_, output) = assert_failure("print(5 / 0)", ErrorKind::Arithmetic);
    assert!(output.is_empty());

    assert_failure("x -> 1.5 / 0.0", ErrorKind::Arithmetic);
}

#[test]
fn text_only_supports_plus() {
    assert_failure("print(\"a\" - 1)", ErrorKind::Arithmetic);
    assert_failure("print(\"a\" * 2)", ErrorKind::Arithmetic);
    assert_failure("print(4 / \"2\")", ErrorKind::Arithmetic);
}

#[test]
fn integer_overflow_is_error() {
    assert_failure("print(9223372036854775807 + 1)", ErrorKind::Arithmetic);
    assert_failure("print(4611686018427387904 * 2)", ErrorKind::Arithmetic);
}

#[test]
fn large_integers_promote_to_real() {
    assert_output("print(10000000000000000 / 4)", "2500000000000000.0\n");
    assert_output("print(9007199254740993 + 0.5)", "9007199254740992.0\n");
    assert_output("print(9223372036854775807 * 1.0)", "9223372036854775808.0\n");
}

#[test]
fn show_is_not_an_output_statement() {
    assert_failure("show(1)", ErrorKind::FunctionNotFound);
    assert_output("function show(v) { print(v) }\nshow(1)", "1\n");
}

#[test]
fn unbound_identifier_stops_before_output() {
    let (e, output) = assert_failure("x -> 1\nprint(x)\nprint(y + 1)", ErrorKind::UndefinedVariable);
    assert_eq!(output, "1\n");
    assert_eq!(e.line(), 3);
    assert!(e.to_string().starts_with("Error on line 3"));
}

#[test]
fn wrong_arity_does_not_run_body() {
    let (_, output) = assert_failure("function f(a, b) { print(\"body\") }\nf(1)",
                                     ErrorKind::Arity);
    assert!(output.is_empty());

    assert_failure("function f() { print(1) }\nf(1, 2)", ErrorKind::Arity);
}

#[test]
fn unknown_function_is_error() {
    assert_failure("nope(1)", ErrorKind::FunctionNotFound);
}

#[test]
fn function_bindings_do_not_leak() {
    assert_output("x -> 1\nfunction f(v) { x -> v print(x) }\nf(2)\nprint(x)",
                  "2\n1\n");
    assert_output("function f(p) { q -> p }\nf(1)\nprint(\"done\")", "done\n");
    assert_failure("function f(p) { q -> p }\nf(1)\nprint(q)",
                   ErrorKind::UndefinedVariable);
    assert_failure("function f(p) { print(p) }\nf(1)\nprint(p)",
                   ErrorKind::UndefinedVariable);
}

#[test]
fn functions_cannot_see_globals() {
    assert_failure("g -> 1\nfunction f() { print(g) }\nf()",
                   ErrorKind::UndefinedVariable);
}

#[test]
fn arguments_are_evaluated_in_the_caller() {
    assert_output("a -> 20\nfunction show(a, b) { print(a + b) }\nshow(a + 1, a * 2)",
                  "61\n");
}

#[test]
fn functions_can_be_called_before_their_definition() {
    assert_output("f(1)\nfunction f(a) { print(a) }", "1\n");
}

#[test]
fn later_definition_replaces_earlier() {
    assert_output("function f() { print(1) }\nfunction f() { print(2) }\nf()", "2\n");
}

#[test]
fn calls_nest() {
    assert_output("function inner(x) { print(x * 2) }\nfunction outer(x) { inner(x + 1) print(x) }\nouter(1)",
                  "4\n1\n");
}

#[test]
fn recursion_is_bounded() {
    let src = "function count(n) { print(n) count(n + 1) }\ncount(1)";
    let config = InterpreterConfig::default().with_max_call_depth(5);

    let (result, output) = run_with(src, "", config);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::CallDepth);
    assert_eq!(output, "1\n2\n3\n4\n5\n");
}

#[test]
fn default_depth_limit_stops_infinite_recursion() {
    assert_failure("function f() { f() }\nf()", ErrorKind::CallDepth);
}

#[test]
fn input_binds_raw_text() {
    let src = "input(\"Age?\")\nprint(input_value + 1)";
    let (result, output) = run_with(src, "41\r\n", InterpreterConfig::default());
    result.unwrap();
    assert_eq!(output, "Age? 411\n");
}

#[test]
fn input_overwrites_previous_value() {
    let src = "input_value -> 0\ninput(\"a\")\ninput(\"b\")\nprint(input_value)";
    let (result, output) = run_with(src, "first\nsecond\n", InterpreterConfig::default());
    result.unwrap();
    assert_eq!(output, "a b second\n");
}

#[test]
fn input_inside_function_binds_locally() {
    let src = "function ask() { input(\"?\") print(input_value) }\nask()\nprint(input_value)";
    let (result, output) = run_with(src, "yes\n", InterpreterConfig::default());
    assert_eq!(result.unwrap_err().kind(), ErrorKind::UndefinedVariable);
    assert_eq!(output, "? yes\n");
}

#[test]
fn exhausted_input_is_error() {
    let (e, output) = assert_failure("input(\"x?\")", ErrorKind::Io);
    assert_eq!(output, "x? ");
    assert_eq!(e.line(), 1);
}

#[test]
fn line_breaks_are_not_separators() {
    assert_output("print(\n1 +\n2\n)", "3\n");
    assert_output("x -> 1 y -> x + 1 print(x + y)", "3\n");
}

#[test]
fn string_contents_are_kept_as_written() {
    assert_output(r#"print("a\"b")"#, "a\\\"b\n");
    assert_output(r#"print("say \"hi\"")"#, "say \\\"hi\\\"\n");
    assert_output(r#"print("back\\slash")"#, "back\\\\slash\n");
    assert_output(r#"print("a\nb")"#, "a\\nb\n");
}

#[test]
fn syntax_errors_prevent_any_output() {
    let (_, output) = assert_failure("print(1)\nprint(2", ErrorKind::Syntax);
    assert!(output.is_empty());
}

#[test]
fn missing_delimiters_are_named() {
    for (src, expected) in [("print(1", ')'),
                            ("input(\"x\"", ')'),
                            ("f(1, 2", ')'),
                            ("function f(a, b", ')'),
                            ("function f() { print(1)", '}'),
                            ("function f() { function g() { print(1) }", '}')]
    {
        let (e, _) = assert_failure(src, ErrorKind::Syntax);
        assert!(matches!(e, Error::Syntax(SyntaxError::MissingDelimiter { delimiter, .. }) if delimiter == expected),
                "{src}: {e:?}");
    }
}

#[test]
fn reserved_keywords_are_rejected() {
    for src in ["when -> 1", "x -> 1 when", "otherwise", "print(fallback)", "print(1 + when)"] {
        let (e, _) = assert_failure(src, ErrorKind::Syntax);
        assert!(matches!(e, Error::Syntax(SyntaxError::ReservedKeyword { .. })), "{src}: {e:?}");
    }
}

#[test]
fn comparisons_and_grouping_have_no_meaning() {
    for src in ["print(1 > 0)", "x -> 2 <= 3", "print((1 + 2))", "x -> 1 + { 2 }"] {
        let (e, _) = assert_failure(src, ErrorKind::Syntax);
        assert!(matches!(e, Error::Syntax(SyntaxError::Unsupported { .. })), "{src}: {e:?}");
    }
}

#[test]
fn malformed_statements_are_syntax_errors() {
    assert_failure("print()", ErrorKind::Syntax);
    assert_failure("x ->", ErrorKind::Syntax);
    assert_failure("x -> -1", ErrorKind::Syntax);
    assert_failure("x -> 1 +", ErrorKind::Syntax);
    assert_failure("x -> 1 2", ErrorKind::Syntax);
    assert_failure("f(1,)", ErrorKind::Syntax);
    assert_failure("f(, 1)", ErrorKind::Syntax);
    assert_failure("input(42)", ErrorKind::Syntax);
    assert_failure("input(\"a\", \"b\")", ErrorKind::Syntax);
    assert_failure("print 1", ErrorKind::Syntax);
    assert_failure("function (a) { }", ErrorKind::Syntax);
    assert_failure("function f(a b) { }", ErrorKind::Syntax);
    assert_failure("function f() print(1)", ErrorKind::Syntax);
    assert_failure("42", ErrorKind::Syntax);
    assert_failure("}", ErrorKind::Syntax);
    assert_failure("x", ErrorKind::Syntax);
    assert_failure("x + 1", ErrorKind::Syntax);
}

#[test]
fn assignment_swallows_a_following_call() {
    // The assignment's expression only ends at another assignment or a
    // keyword, so the call becomes part of it.
    assert_failure("function f(a) { print(a) }\nx -> 1\nf(x)", ErrorKind::Syntax);
    assert_output("function f(a) { print(a) }\nx -> 1\nprint(x)\nf(x)", "1\n1\n");
}

#[test]
fn unknown_characters_are_lex_errors() {
    assert_failure("x -> 1 ; print(x)", ErrorKind::Lex);
    assert_failure("x -> \"unterminated", ErrorKind::Lex);
    assert_failure("x -> 99999999999999999999", ErrorKind::Lex);
}

#[test]
fn empty_program_does_nothing() {
    assert_output("", "");
    assert_output("  \n\t\n", "");
    assert_output("function unused() { print(1) }", "");
}
