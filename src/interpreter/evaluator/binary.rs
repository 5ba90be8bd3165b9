/// Operator dispatch on the operand types.
pub mod core;
/// Arithmetic between numbers.
pub mod scalar;
/// Ordering and equality of numbers.
pub mod comparison;
/// `AND` and `OR`.
pub mod logic;
/// The list operators: append, remove, concatenate and index.
pub mod list;
/// Concatenation, repetition and equality of strings.
pub mod string;
