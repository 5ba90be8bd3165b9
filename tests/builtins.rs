use std::io;

use basil::{
    Error, Interpreter,
    error::RuntimeErrorKind,
    interpreter::{
        host::{BufferedHost, Host},
        scope::Scope,
        value::core::Value,
    },
};

fn run_with(host: &BufferedHost, src: &str) -> Result<Value, Error> {
    Interpreter::with_host(host.clone()).run("test", src)
}

fn output_of(src: &str) -> Vec<String> {
    let host = BufferedHost::new();
    if let Err(e) = run_with(&host, src) {
        panic!("Script failed:\n{}", e.render());
    }
    host.output()
}

fn invalid_argument(src: &str) -> String {
    match run_with(&BufferedHost::new(), src) {
        Err(Error::Runtime(e)) => match e.kind {
            RuntimeErrorKind::InvalidArgument(message) => message,
            other => panic!("Unexpected error kind: {other}"),
        },
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn print_writes_display_forms() {
    assert_eq!(output_of("PRINT(1)\nPRINT(2.5)\nPRINT(\"text\")\nPRINT([1, \"a\", [2]])"),
               vec!["1", "2.5", "text", "[1, \"a\", [2]]"]);
    assert_eq!(output_of("FUN f() -> 1\nPRINT(f)\nPRINT(PRINT)"),
               vec!["<function f>", "<built-in function print>"]);
}

#[test]
fn print_returns_null_and_print_ret_returns_text() {
    let host = BufferedHost::new();
    let result = run_with(&host, "PRINT(5)\nPRINT_RET([1, \"a\"])").unwrap();

    assert_eq!(result.to_string(), "[0, \"[1, \"a\"]\"]");
    assert_eq!(host.output(), vec!["5"]);
}

#[test]
fn input_reads_lines_in_order() {
    let host = BufferedHost::with_input(["first", "second"]);
    let result = run_with(&host, "VAR a = INPUT()\nVAR b = INPUT()\nb + a").unwrap();

    assert_eq!(result.to_string(), "[\"first\", \"second\", \"secondfirst\"]");
}

#[test]
fn input_int_retries_until_an_integer() {
    let host = BufferedHost::with_input(["", "4.5", " 12 "]);
    let result = run_with(&host, "INPUT_INT() * 2").unwrap();

    assert_eq!(result.to_string(), "[24]");
    assert_eq!(host.output(),
               vec!["'' must be an integer. Try again!",
                    "'4.5' must be an integer. Try again!"]);
}

#[test]
fn exhausted_input_is_an_error() {
    let host = BufferedHost::with_input(["nope"]);

    let Err(Error::Runtime(error)) = run_with(&host, "INPUT_INT()") else {
        panic!("expected a runtime error");
    };
    assert_eq!(error.kind, RuntimeErrorKind::InputClosed);
}

#[test]
fn clear_and_cls_clear_the_screen() {
    let host = BufferedHost::new();
    run_with(&host, "CLEAR()\nCLS()").unwrap();

    assert_eq!(host.clears(), 2);
}

#[test]
fn type_predicates() {
    let host = BufferedHost::new();
    let result = run_with(&host,
                          "[IS_NUM(1), IS_NUM(1.5), IS_NUM(\"1\"), IS_STR(\"\"), IS_LIST([]), \
                           IS_FUN(IS_FUN), IS_FUN(FUN () -> 0), IS_FUN([])]").unwrap();

    assert_eq!(result.to_string(), "[[1, 1, 0, 1, 1, 1, 1, 0]]");
}

#[test]
fn list_builtins_mutate_in_place() {
    let host = BufferedHost::new();
    let src = "VAR xs = [1, 2, 3]\nAPPEND(xs, 4)\nVAR popped = POP(xs, 0)\n\
               EXTEND(xs, [5, 6])\n[xs, popped, LEN(xs)]";
    let result = run_with(&host, src).unwrap();

    let Value::List(values) = result else { panic!("expected a list") };
    assert_eq!(values.borrow().last().unwrap().to_string(), "[[2, 3, 4, 5, 6], 1, 5]");
}

#[test]
fn assignment_copies_lists() {
    let host = BufferedHost::new();
    let result = run_with(&host, "VAR a = [1, 2]\nVAR b = a\nAPPEND(b, 3)\n[a, b]").unwrap();

    let Value::List(values) = result else { panic!("expected a list") };
    assert_eq!(values.borrow().last().unwrap().to_string(), "[[1, 2], [1, 2, 3]]");
}

#[test]
fn user_functions_receive_list_copies() {
    let host = BufferedHost::new();
    let src = "VAR xs = [1]\nFUN grow(list)\n  APPEND(list, 2)\n  RETURN list\nEND\n[grow(xs), xs]";
    let result = run_with(&host, src).unwrap();

    let Value::List(values) = result else { panic!("expected a list") };
    assert_eq!(values.borrow().last().unwrap().to_string(), "[[1, 2], [1]]");
}

#[test]
fn pop_accepts_negative_indices() {
    let host = BufferedHost::new();
    let result = run_with(&host, "VAR xs = [1, 2, 3]\nPOP(xs, -1)\nxs").unwrap();

    assert_eq!(result.to_string(), "[[1, 2], 3, [1, 2]]");
}

#[test]
fn pop_out_of_range() {
    let Err(Error::Runtime(error)) = run_with(&BufferedHost::new(), "POP([1], 1)") else {
        panic!("expected a runtime error");
    };
    assert_eq!(error.kind, RuntimeErrorKind::IndexOutOfBounds { action: "removed from" });
}

#[test]
fn len_counts_characters_of_strings() {
    let host = BufferedHost::new();
    let result = run_with(&host, "[LEN(\"héllo\"), LEN([]), LEN([[1, 2]])]").unwrap();

    assert_eq!(result.to_string(), "[[5, 0, 1]]");
}

#[test]
fn argument_type_errors() {
    assert_eq!(invalid_argument("APPEND(1, 2)"), "First argument must be list");
    assert_eq!(invalid_argument("POP(1, 0)"), "First argument must be list");
    assert_eq!(invalid_argument("POP([1], \"0\")"), "Second argument must be number");
    assert_eq!(invalid_argument("EXTEND(1, [])"), "First argument must be list");
    assert_eq!(invalid_argument("EXTEND([], 1)"), "Second argument must be list");
    assert_eq!(invalid_argument("LEN(1)"), "Argument must be list");
    assert_eq!(invalid_argument("RUN(1)"), "Argument must be string");
}

#[test]
fn builtins_are_first_class() {
    let host = BufferedHost::new();
    run_with(&host, "VAR say = PRINT\nFUN apply(f, x) -> f(x)\napply(say, \"hi\")").unwrap();

    assert_eq!(host.output(), vec!["hi"]);
}

#[test]
fn run_sees_the_callers_top_level_variables() {
    let host = BufferedHost::new().with_script("lib.bsl", "PRINT(TRUE)\nPRINT(secret)");
    run_with(&host, "VAR secret = 42\nRUN(\"lib.bsl\")").unwrap();

    assert_eq!(host.output(), vec!["1", "42"]);
}

#[test]
fn run_from_a_function_sees_the_program_not_the_call() {
    let host = BufferedHost::new().with_script("lib.bsl", "PRINT(secret)\nPRINT(local)");
    let result = run_with(&host,
                          "VAR secret = 42\nFUN load()\n  VAR local = 1\n  RUN(\"lib.bsl\")\nEND\nload()");

    let Err(Error::Runtime(error)) = result else {
        panic!("the script should not see the function's variables");
    };
    assert!(matches!(error.kind, RuntimeErrorKind::ScriptFailed { .. }));
    assert_eq!(host.output(), vec!["42"]);
}

#[test]
fn run_shadows_without_overwriting() {
    let host = BufferedHost::new().with_script("lib.bsl", "VAR secret = 7\nPRINT(secret)");
    run_with(&host, "VAR secret = 42\nRUN(\"lib.bsl\")\nPRINT(secret)").unwrap();

    assert_eq!(host.output(), vec!["7", "42"]);
}

#[test]
fn run_leaves_no_bindings_behind() {
    let host = BufferedHost::new().with_script("lib.bsl", "VAR hidden = 1");

    let Err(Error::Runtime(error)) = run_with(&host, "RUN(\"lib.bsl\")\nhidden") else {
        panic!("expected a runtime error");
    };
    assert_eq!(error.kind, RuntimeErrorKind::NotDefined("hidden".to_string()));
}

#[test]
fn run_returns_null() {
    let host = BufferedHost::new().with_script("empty.bsl", "0");

    assert_eq!(run_with(&host, "RUN(\"empty.bsl\")").unwrap().to_string(), "[0]");
}

#[test]
fn persistent_scope_across_runs() {
    let mut interpreter = Interpreter::with_host(BufferedHost::new());
    let session = Scope::new_enclosed(interpreter.globals());

    interpreter.run_in("<stdin>", "FUN inc(n) -> n + 1", &session).unwrap();
    interpreter.run_in("<stdin>", "VAR x = inc(1)", &session).unwrap();
    let result = interpreter.run_in("<stdin>", "inc(x)", &session).unwrap();

    assert_eq!(result.to_string(), "[3]");
}

struct BrokenHost;

impl Host for BrokenHost {
    fn write_line(&mut self, _: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"))
    }

    fn clear(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn load(&mut self, name: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }
}

fn host_failure(src: &str) -> RuntimeErrorKind {
    match Interpreter::with_host(BrokenHost).run("test", src) {
        Err(Error::Runtime(e)) => e.kind,
        other => panic!("Expected a runtime error, got {other:?}"),
    }
}

#[test]
fn host_failures_keep_the_io_message() {
    assert_eq!(host_failure("INPUT()"), RuntimeErrorKind::InputFailed("not utf-8".to_string()));
    assert_eq!(host_failure("INPUT_INT()"), RuntimeErrorKind::InputFailed("not utf-8".to_string()));
    assert_eq!(host_failure("PRINT(1)"), RuntimeErrorKind::OutputFailed("pipe closed".to_string()));
    assert_eq!(host_failure("CLS()"), RuntimeErrorKind::OutputFailed("pipe closed".to_string()));
}

#[test]
fn read_failures_render_the_io_message() {
    let Err(error) = Interpreter::with_host(BrokenHost).run("test", "INPUT()") else {
        panic!("expected an error");
    };
    assert_eq!(error.to_string(), "Runtime Error: Failed to read input\nnot utf-8");
}
