//! # basil
//!
//! basil is an interpreter for a small BASIC-flavoured scripting language
//! written in Rust. It lexes, parses and evaluates programs with variables,
//! numbers, strings, lists, first-class functions with closures, conditionals
//! and loops, and reports every failure with the exact source location and a
//! traceback.
//!
//! ```
//! let result = basil::run("demo", "FUN square(x) -> x ^ 2\nsquare(12)").unwrap();
//!
//! assert_eq!(result.to_string(), "[<function square>, 144]");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::value::core::Value;

/// Defines the structure of parsed code.
///
/// This module declares the `Node` type and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node kinds for all language constructs.
/// - Attaches the source span of every node for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating code, and renders them into the reports shown to users: the
/// error heading, its location, a source excerpt with carets and, for runtime
/// errors, a traceback.
///
/// # Responsibilities
/// - Defines error kinds for all failure modes (lexer, parser, evaluator).
/// - Attaches source spans and call contexts.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, scopes and the host the interpreter talks to. It exposes
/// the [`Interpreter`] for embedding.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for running programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities.
///
/// Numeric conversions shared by the evaluator and the source excerpts used by
/// diagnostics.
pub mod util;

pub use error::Error;
pub use interpreter::evaluator::core::Interpreter;

/// Runs a program with a fresh interpreter attached to the process's
/// terminal and filesystem.
///
/// # Parameters
/// - `name`: Display name of the source, used in diagnostics.
/// - `text`: The program.
///
/// # Returns
/// The list of the top-level statement values, or the first error.
///
/// # Examples
/// ```
/// use basil::run;
///
/// let result = run("demo", "VAR result = 2 + 2").unwrap();
/// assert_eq!(result.to_string(), "[4]");
///
/// // 'x' is not defined
/// let error = run("demo", "VAR y = x + 1").unwrap_err();
/// assert_eq!(error.to_string(), "Runtime Error: 'x' is not defined");
/// ```
pub fn run(name: &str, text: &str) -> Result<Value, Error> {
    Interpreter::new().run(name, text)
}
