/// Parser entry points and the token cursor.
///
/// Defines [`core::TokenStream`], the checkpointing cursor every rule works
/// on, the top-level [`core::parse`] function and the expression rule.
pub mod core;

/// Sign, power, call and atom parsing.
///
/// Handles the tightest-binding levels of the grammar, including list
/// literals and parenthesised expressions.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels from `AND`/`OR` down to multiplication,
/// including `NOT` at comparison level.
pub mod binary;

/// Keyword-introduced constructs.
///
/// Parses `IF`, `FOR`, `WHILE` and `FUN`, each in its inline and its
/// `END`-terminated block form.
pub mod block;

/// Helpers shared by the parsing rules.
///
/// Token expectations, generic error messages and comma-separated lists.
pub mod utils;

/// Statement parsing.
///
/// Statement sequences with their bounded backtracking, and the control
/// statements `RETURN`, `CONTINUE` and `BREAK`.
pub mod statement;
