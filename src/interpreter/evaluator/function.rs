/// Type predicates and the list built-ins.
///
/// `IS_NUM`, `IS_STR`, `IS_LIST`, `IS_FUN`, `APPEND`, `POP`, `EXTEND` and
/// `LEN`.
pub mod builtin;
/// Terminal built-ins.
///
/// Writes to and reads from the interpreter's host: `PRINT`, `PRINT_RET`,
/// `INPUT`, `INPUT_INT` and `CLEAR`.
pub mod print;
/// The `RUN` built-in.
///
/// Loads another script through the host and evaluates it.
pub mod run;

/// Calls, arity checks and the builtin table.
pub mod core;
