use basil::{Error, Interpreter, interpreter::host::BufferedHost};

fn fail(src: &str) -> Error {
    match Interpreter::with_host(BufferedHost::new()).run("demo", src) {
        Ok(value) => panic!("Script succeeded with {value}"),
        Err(e) => e,
    }
}

#[test]
fn illegal_character_is_reported_under_the_character() {
    assert_eq!(fail("VAR a = 1 $").render(),
               "Illegal Character: '$'\nFile demo, line 1, col 11\n\nVAR a = 1 $\n          ^");
}

#[test]
fn lone_bang_expects_equals() {
    assert_eq!(fail("1 ! 2").render(),
               "Expected Character: '=' (after '!')\nFile demo, line 1, col 3\n\n1 ! 2\n  ^");
}

#[test]
fn unterminated_string() {
    let error = fail("PRINT(\"hi");
    assert_eq!(error.to_string(), "Expected Character: '\"' to close string literal");
    assert_eq!(error.span().start.column, 6);
}

#[test]
fn oversized_integer_literal() {
    assert!(fail("99999999999999999999").to_string().starts_with("Literal Too Large"));
}

#[test]
fn invalid_syntax_points_at_the_unexpected_token() {
    assert_eq!(fail("VAR = 1").render(),
               "Invalid Syntax: Expected identifier\nFile demo, line 1, col 5\n\nVAR = 1\n    ^");
}

#[test]
fn syntax_error_messages() {
    assert_eq!(fail("FUN f(a, ) -> a").to_string(), "Invalid Syntax: Expected identifier");
    assert_eq!(fail("FUN f(a b) -> a").to_string(), "Invalid Syntax: Expected ',' or ')'");
    assert_eq!(fail("FUN f(a) a").to_string(), "Invalid Syntax: Expected '->' or NEWLINE");
    assert_eq!(fail("FOR i = 0 THEN i").to_string(), "Invalid Syntax: Expected 'TO'");
    assert_eq!(fail("IF 1 2").to_string(), "Invalid Syntax: Expected 'THEN'");
    assert_eq!(fail("IF 1 THEN\n  2\n").to_string(),
               "Invalid Syntax: Expected 'END', 'ELIF' or 'ELSE'");
    assert_eq!(fail("WHILE 1 THEN\n  2\n").to_string(), "Invalid Syntax: Expected 'END'");
    assert_eq!(fail("1 2").to_string(),
               "Invalid Syntax: Token cannot appear after previous tokens");
}

#[test]
fn syntax_errors_are_reported_on_their_line() {
    let error = fail("VAR a = 1\nVAR b = 2\nVAR = 3");
    assert!(error.render().contains("File demo, line 3, col 5"));
}

#[test]
fn division_by_zero_points_at_the_divisor() {
    assert_eq!(fail("VAR x = 10 / 0").render(),
               "Traceback (most recent call last):\n  File demo, line 1, in <program>\nRuntime \
                Error: Division by zero\nFile demo, line 1, col 14\n\nVAR x = 10 / 0\n             ^");
}

#[test]
fn illegal_operation_spans_both_operands() {
    assert_eq!(fail("1 + \"a\"").render(),
               "Traceback (most recent call last):\n  File demo, line 1, in <program>\nRuntime \
                Error: Illegal operation\nFile demo, line 1, col 1\n\n1 + \"a\"\n^^^^^^^");
}

#[test]
fn traceback_lists_every_call_outermost_first() {
    assert_eq!(fail("FUN f(x) -> x + y\nf(1)").render(),
               "Traceback (most recent call last):\n  File demo, line 2, in <program>\n  File \
                demo, line 1, in f\nRuntime Error: 'y' is not defined\nFile demo, line 1, col \
                17\n\nFUN f(x) -> x + y\n                ^");
}

#[test]
fn nested_calls_add_one_frame_each() {
    let src = "FUN inner() -> 1 / 0\nFUN outer()\n  RETURN inner()\nEND\nouter()";
    let rendered = fail(src).render();

    assert!(rendered.starts_with("Traceback (most recent call last):\n  File demo, line 5, in \
                                  <program>\n  File demo, line 3, in outer\n  File demo, line \
                                  1, in inner\nRuntime Error: Division by zero"));
}

#[test]
fn builtin_errors_span_the_call() {
    assert_eq!(fail("APPEND(1, 2)").render(),
               "Traceback (most recent call last):\n  File demo, line 1, in <program>\n  File \
                demo, line 1, in append\nRuntime Error: First argument must be list\nFile demo, \
                line 1, col 1\n\nAPPEND(1, 2)\n^^^^^^^^^^^^");
}

#[test]
fn tabs_keep_carets_aligned() {
    let rendered = fail("\tVAR x = y").render();
    assert!(rendered.ends_with(" VAR x = y\n         ^"), "{rendered}");
}

#[test]
fn arity_messages() {
    assert_eq!(fail("FUN f(a) -> a\nf()").to_string(),
               "Runtime Error: 1 too few args passed into <function f>");
    assert_eq!(fail("FUN (a) -> a\n(FUN (a) -> a)(1, 2, 3)").to_string(),
               "Runtime Error: 2 too many args passed into <function <anonymous>>");
}

#[test]
fn index_messages() {
    assert_eq!(fail("[1] / 5").to_string(),
               "Runtime Error: Element at this index could not be retrieved from list because \
                index is out of bounds");
    assert_eq!(fail("[1] - 5").to_string(),
               "Runtime Error: Element at this index could not be removed from list because \
                index is out of bounds");
}

#[test]
fn loop_control_messages() {
    assert_eq!(fail("BREAK").to_string(), "Runtime Error: 'BREAK' used outside of a loop");
    assert_eq!(fail("FUN f()\n  CONTINUE\nEND\nf()").to_string(),
               "Runtime Error: 'CONTINUE' used outside of a loop");
}

#[test]
fn failed_scripts_are_wrapped_at_the_call_site() {
    let host = BufferedHost::new().with_script("bad.bsl", "1 / 0");
    let error = Interpreter::with_host(host).run("demo", "VAR a = 1\nRUN(\"bad.bsl\")")
                                            .unwrap_err();

    let rendered = error.render();
    assert!(rendered.contains("Runtime Error: Failed to finish executing script \"bad.bsl\"\n\
                               Traceback (most recent call last):\n  File bad.bsl, line 1, in \
                               <program>\nRuntime Error: Division by zero\nFile bad.bsl, line 1, \
                               col 5\n\n1 / 0\n    ^"),
            "{rendered}");
    assert!(rendered.ends_with("File demo, line 2, col 1\n\nRUN(\"bad.bsl\")\n^^^^^^^^^^^^^^"));
}

#[test]
fn missing_scripts_report_the_load_failure() {
    assert_eq!(fail("RUN(\"nowhere.bsl\")").to_string(),
               "Runtime Error: Failed to load script \"nowhere.bsl\"\nNo script named \
                'nowhere.bsl'");
}

#[test]
fn oversized_repetition_points_at_the_count() {
    assert_eq!(fail("\"ab\" * 9223372036854775807").render(),
               "Traceback (most recent call last):\n  File demo, line 1, in <program>\nRuntime \
                Error: Result is too large\nFile demo, line 1, col 8\n\n\"ab\" * \
                9223372036854775807\n       ^^^^^^^^^^^^^^^^^^^");
}
