/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// comparisons, logical operators and the string and list operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation, unary plus and logical `NOT`.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the [`Interpreter`](core::Interpreter), the evaluation frame, the
/// control-flow signals and the node dispatch.
pub mod core;

/// Evaluation of `FOR` loops.
///
/// Manages the counter variable, the step direction and the collection of
/// body values.
pub mod for_loop;

/// Evaluation of `WHILE` loops.
pub mod while_loop;

/// Utility functions for evaluation.
///
/// Provides statement sequences, list literals, conditionals and other
/// helpers shared by evaluation logic.
pub mod utils;

/// Function evaluation.
///
/// Handles user-defined and built-in function calls, argument checking, and
/// return value computation.
pub mod function;
