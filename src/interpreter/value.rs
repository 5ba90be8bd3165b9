/// Number representation.
///
/// Defines the `Number` type shared by integer and float values, with the
/// arithmetic the evaluator builds on: overflow-checked integer operations
/// that fall back to floats, true division, floored modulo and powers.
pub mod number;
/// User-defined functions.
///
/// A function value pairs its shared definition with the scope it was
/// defined in.
pub mod function;

/// The `Value` enum and its display, truthiness and equality rules.
pub mod core;
