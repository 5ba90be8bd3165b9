/// Numeric conversion helpers.
///
/// This module collects the small integer conversions the evaluator needs:
/// integer to float promotion, list index resolution (including negative
/// indices) and repetition counts. Use these helpers instead of bare `as`
/// casts so that sign and range handling stays in one place.
pub mod num;

/// Source excerpts for diagnostics.
///
/// Renders one line of source with a row of carets beneath the failing range.
/// The helper works on plain text and `(line, column)` pairs and knows nothing
/// about tokens or errors.
pub mod excerpt;
