use std::fs;

use basil::{
    Error, Interpreter,
    error::RuntimeErrorKind,
    interpreter::{host::BufferedHost, value::core::Value},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_basil_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("basil example {} in {:?} failed:\n{}\nError:\n{}",
                       i + 1,
                       path,
                       code,
                       e.render());
            }
        }
    }

    assert!(count > 0, "No basil examples found in book/src");
}

fn extract_basil_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```basil") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn run(src: &str) -> Result<Value, Error> {
    Interpreter::with_host(BufferedHost::new()).run("test", src)
}

fn assert_success(src: &str) {
    if let Err(e) = run(src) {
        panic!("Script failed:\n{}", e.render());
    }
}

fn assert_failure(src: &str) {
    if run(src).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Display form of the value of the script's last statement.
fn last(src: &str) -> String {
    match run(src) {
        Ok(Value::List(values)) => values.borrow()
                                         .last()
                                         .map(Value::repr)
                                         .unwrap_or_default(),
        Ok(other) => other.repr(),
        Err(e) => panic!("Script failed:\n{}", e.render()),
    }
}

fn runtime_kind(src: &str) -> RuntimeErrorKind {
    match run(src) {
        Err(Error::Runtime(e)) => e.kind,
        Err(Error::Syntax(e)) => panic!("Expected a runtime error, got:\n{}", e.render()),
        Ok(value) => panic!("Script succeeded with {value}"),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(last("VAR x = 1 + 2\nx"), "3");
    assert_eq!(last("VAR x = 7 * 9\nx"), "63");
    assert_eq!(last("VAR x = 8 - 5\nx"), "3");
    assert_eq!(last("VAR x = 10 / 2\nx"), "5.0");
    assert_eq!(last("VAR a = VAR b = 4\na + b"), "8");
}

#[test]
fn operator_precedence() {
    assert_eq!(last("1 + 2 * 3"), "7");
    assert_eq!(last("(1 + 2) * 3"), "9");
    assert_eq!(last("2 ^ 3 ^ 2"), "512");
    assert_eq!(last("-2 ^ 2"), "-4");
    assert_eq!(last("1 + 2 == 3 AND 2 < 3"), "1");
    assert_eq!(last("NOT 1 == 2"), "1");
}

#[test]
fn integers_and_floats() {
    assert_eq!(last("7 / 2"), "3.5");
    assert_eq!(last("7 % 3"), "1");
    assert_eq!(last("-7 % 3"), "2");
    assert_eq!(last("2 ^ -1"), "0.5");
    assert_eq!(last("1.5 + 1"), "2.5");
    assert_eq!(last("9223372036854775807 * 2 > 0"), "1");
    assert_eq!(last("1 == 1.0"), "1");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(runtime_kind("1 / 0"), RuntimeErrorKind::DivisionByZero);
    assert_eq!(runtime_kind("1 % 0"), RuntimeErrorKind::DivisionByZero);
    assert_eq!(runtime_kind("1.5 / 0.0"), RuntimeErrorKind::DivisionByZero);
    assert_eq!(runtime_kind("0 ^ -1"), RuntimeErrorKind::DivisionByZero);
}

#[test]
fn strings() {
    assert_eq!(last("\"ab\" + \"cd\""), "\"abcd\"");
    assert_eq!(last("\"ab\" * 3"), "\"ababab\"");
    assert_eq!(last("\"ab\" * -1"), "\"\"");
    assert_eq!(last("\"a\" == \"a\""), "1");
    assert_eq!(last("\"a\" != \"a\""), "0");
    assert_eq!(last("\"tab\\there\""), "\"tab\there\"");
    assert_eq!(runtime_kind("3 * \"ab\""), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("\"ab\" - 1"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("\"ab\" + 1"), RuntimeErrorKind::IllegalOperation);
}

#[test]
fn oversized_string_repetition_is_an_error() {
    assert_eq!(runtime_kind("\"ab\" * 9223372036854775807"), RuntimeErrorKind::TooLarge);
    assert_eq!(runtime_kind("\"a\" * 9223372036854775807"), RuntimeErrorKind::TooLarge);
    assert_eq!(last("\"\" * 9223372036854775807"), "\"\"");
}

#[test]
fn operators_reject_functions() {
    assert_eq!(runtime_kind("FUN f() -> 1\nf + 1"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("PRINT == PRINT"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("1 + PRINT"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("-LEN"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("[1] % 1"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("[1] < [2]"), RuntimeErrorKind::IllegalOperation);
}

#[test]
fn list_operators_copy() {
    assert_eq!(last("VAR xs = [1, 2]\nVAR ys = xs + 3\n[xs, ys]"), "[[1, 2], [1, 2, 3]]");
    assert_eq!(last("[1, 2, 3] - 0"), "[2, 3]");
    assert_eq!(last("[1, 2, 3] - -1"), "[1, 2]");
    assert_eq!(last("[1, 2] * [3]"), "[1, 2, 3]");
    assert_eq!(last("[1, 2] + [3]"), "[1, 2, [3]]");
    assert_eq!(last("[\"a\", \"b\"] / 1"), "\"b\"");
    assert_eq!(last("[10, 20, 30] / -3"), "10");
}

#[test]
fn list_index_errors() {
    assert_eq!(runtime_kind("[1, 2] / 2"),
               RuntimeErrorKind::IndexOutOfBounds { action: "retrieved from" });
    assert_eq!(runtime_kind("[] - 0"),
               RuntimeErrorKind::IndexOutOfBounds { action: "removed from" });
    assert_eq!(runtime_kind("[1, 2] / 1.0"), RuntimeErrorKind::IllegalOperation);
}

#[test]
fn truthiness() {
    assert_eq!(last("IF \"\" THEN 1 ELSE 2"), "2");
    assert_eq!(last("IF [] THEN 1 ELSE 2"), "2");
    assert_eq!(last("IF [0] THEN 1 ELSE 2"), "1");
    assert_eq!(last("IF 0.0 THEN 1 ELSE 2"), "2");
    assert_eq!(last("IF PRINT THEN 1 ELSE 2"), "1");
    assert_eq!(last("NOT \"\""), "1");
}

#[test]
fn logic_is_numeric_and_eager() {
    assert_eq!(last("2 AND 3"), "1");
    assert_eq!(last("0 OR 0.5"), "1");
    assert_eq!(runtime_kind("\"a\" AND 1"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("0 AND undefined_name"),
               RuntimeErrorKind::NotDefined("undefined_name".to_string()));
}

#[test]
fn conditionals() {
    assert_eq!(last("IF 0 THEN 1 ELIF 0 THEN 2 ELSE 3"), "3");
    assert_eq!(last("IF 0 THEN 1"), "0");
    assert_eq!(last("VAR x = 5\nIF x > 3 THEN\n  VAR y = 1\nELSE\n  VAR y = 2\nEND\ny"), "1");
    assert_eq!(last("IF 1 THEN\n  42\nEND"), "0");
    assert_failure("IF 1 THEN\n  42\n");
}

#[test]
fn for_loops() {
    assert_eq!(last("FOR i = 0 TO 5 STEP 2 THEN i"), "[0, 2, 4]");
    assert_eq!(last("FOR i = 5 TO 0 STEP -2 THEN i"), "[5, 3, 1]");
    assert_eq!(last("FOR i = 3 TO 3 THEN i"), "[]");
    assert_eq!(last("FOR i = 0 TO 1 STEP 0.25 THEN i"), "[0, 0.25, 0.5, 0.75]");
    assert_eq!(last("FOR i = 0 TO 3 THEN i\ni"), "2");
    assert_eq!(last("VAR total = 0\nFOR i = 1 TO 4 THEN\n  VAR total = total + i\nEND\ntotal"),
               "6");
    assert_eq!(last("FOR i = 0 TO 3 THEN\n  i\nEND"), "0");
    assert_eq!(runtime_kind("FOR i = \"a\" TO 3 THEN i"), RuntimeErrorKind::IllegalOperation);
}

#[test]
fn while_loops() {
    assert_eq!(last("VAR n = 0\nWHILE n < 3 THEN VAR n = n + 1"), "[1, 2, 3]");
    assert_eq!(last("WHILE 0 THEN 1"), "[]");
    assert_eq!(last("VAR n = 0\nWHILE 1 THEN\n  VAR n = n + 1\n  IF n == 10 THEN BREAK\nEND\nn"),
               "10");
}

#[test]
fn break_and_continue() {
    assert_eq!(last("FOR i = 0 TO 10 THEN IF i == 3 THEN BREAK ELSE i"), "[0, 1, 2]");
    assert_eq!(last("FOR i = 0 TO 5 THEN IF i % 2 == 0 THEN CONTINUE ELSE i"), "[1, 3]");
    assert_eq!(last("VAR n = 0\nWHILE n < 5 THEN\n  VAR n = n + 1\n  IF n == 2 THEN CONTINUE\n  \
                     IF n == 4 THEN BREAK\nEND\nn"),
               "4");
}

#[test]
fn break_inside_if_inside_loop_inside_function_only_ends_the_loop() {
    let src = "FUN f()\n  FOR i = 0 TO 10 THEN\n    IF i == 2 THEN\n      BREAK\n    END\n  END\n  \
               RETURN \"after\"\nEND\nf()";
    assert_eq!(last(src), "\"after\"");
}

#[test]
fn loop_control_outside_a_loop_is_an_error() {
    assert_eq!(runtime_kind("BREAK"), RuntimeErrorKind::OutsideLoop("BREAK"));
    assert_eq!(runtime_kind("CONTINUE"), RuntimeErrorKind::OutsideLoop("CONTINUE"));
    assert_eq!(runtime_kind("FUN f()\n  BREAK\nEND\nFOR i = 0 TO 3 THEN f()"),
               RuntimeErrorKind::OutsideLoop("BREAK"));
}

#[test]
fn functions_and_returns() {
    assert_eq!(last("FUN add(a, b) -> a + b\nadd(2, 3)"), "5");
    assert_eq!(last("FUN f()\n  1\nEND\nf()"), "0");
    assert_eq!(last("FUN f()\n  RETURN 7\n  99\nEND\nf()"), "7");
    assert_eq!(last("FUN f()\n  RETURN\nEND\nf()"), "0");
    assert_eq!(last("FUN (x) -> x * 2"), "<function <anonymous>>");
    assert_eq!(last("VAR double = FUN (x) -> x * 2\ndouble(21)"), "42");
    assert_eq!(last("FUN twice(f, x) -> f(f(x))\ntwice(FUN (n) -> n + 3, 1)"), "7");
    assert_eq!(last("FUN make()\n  RETURN FUN () -> 5\nEND\nmake()()"), "5");
}

#[test]
fn top_level_return_ends_the_program() {
    assert_eq!(run("1\nRETURN 2\n3").unwrap(), Value::int(2));
}

#[test]
fn recursion() {
    let src = "FUN fib(n)\n  IF n < 2 THEN RETURN n\n  RETURN fib(n - 1) + fib(n - 2)\nEND\nfib(15)";
    assert_eq!(last(src), "610");
}

#[test]
fn closures_capture_their_defining_scope() {
    assert_eq!(last("VAR x = 10\nFUN get() -> x\nget()"), "10");
    assert_eq!(last("VAR x = 10\nFUN get(x) -> x\nget(1)"), "1");
    assert_eq!(last("VAR x = 10\nFUN get() -> x\nVAR x = 20\nget()"), "20");
    let src = "FUN counter(start)\n  RETURN FUN (step) -> start + step\nEND\n\
               VAR from_ten = counter(10)\nfrom_ten(5)";
    assert_eq!(last(src), "15");
}

#[test]
fn assignments_inside_functions_stay_local() {
    assert_eq!(last("VAR x = 1\nFUN f()\n  VAR x = 2\nEND\nf()\nx"), "1");
}

#[test]
fn arity_errors_state_the_difference() {
    assert_eq!(runtime_kind("FUN f(a) -> a\nf(1, 2)"),
               RuntimeErrorKind::TooManyArgs { surplus:  1,
                                               function: "<function f>".to_string(), });
    assert_eq!(runtime_kind("FUN f(a, b, c) -> a\nf(1)"),
               RuntimeErrorKind::TooFewArgs { deficit:  2,
                                              function: "<function f>".to_string(), });
    assert_eq!(runtime_kind("LEN()"),
               RuntimeErrorKind::TooFewArgs { deficit:  1,
                                              function: "<built-in function len>".to_string(), });
}

#[test]
fn calling_a_non_function_is_illegal() {
    assert_eq!(runtime_kind("VAR x = 3\nx()"), RuntimeErrorKind::IllegalOperation);
    assert_eq!(runtime_kind("\"f\"(1)"), RuntimeErrorKind::IllegalOperation);
}

#[test]
fn undefined_names() {
    assert_eq!(runtime_kind("missing"), RuntimeErrorKind::NotDefined("missing".to_string()));
    assert_success("FUN f() -> missing");
}

#[test]
fn globals_are_predefined() {
    assert_eq!(last("[NULL, FALSE, TRUE]"), "[0, 0, 1]");
    assert_eq!(last("MATH_PI > 3.14 AND MATH_PI < 3.15"), "1");
    assert_eq!(last("PRINT"), "<built-in function print>");
    assert_eq!(runtime_kind("CLS == CLEAR"), RuntimeErrorKind::IllegalOperation);
}

#[test]
fn globals_can_be_shadowed() {
    assert_eq!(last("VAR TRUE = 0\nTRUE"), "0");
    assert_eq!(run("TRUE").unwrap().to_string(), "[1]");
}

#[test]
fn program_result_lists_every_statement() {
    assert_eq!(run("1\n\n2;3\n").unwrap().to_string(), "[1, 2, 3]");
}

#[test]
fn syntax_errors() {
    assert_failure("VAR = 1");
    assert_failure("1 +");
    assert_failure("(1 + 2");
    assert_failure("[1, 2");
    assert_failure("FUN f(a b) -> a");
    assert_failure("FOR i = 0 THEN i");
    assert_failure("1 2");
    assert_failure("\"unterminated");
    assert_failure("1 ! 2");
    assert_failure("VAR a = 1 $");
}
