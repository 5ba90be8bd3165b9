/// Largest integer magnitude exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: u64 = 9_007_199_254_740_991;

/// Converts an `i64` to `f64`.
///
/// Magnitudes above [`MAX_SAFE_INT`] round to the nearest representable
/// float, the same rounding integer literals get when mixed with floats.
///
/// # Example
/// ```
/// use basil::util::num::{MAX_SAFE_INT, i64_to_f64};
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-7), -7.0);
/// assert_eq!(i64_to_f64(MAX_SAFE_INT as i64), 9_007_199_254_740_991.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a collection length into an integer value.
///
/// Lengths never exceed `i64::MAX` in practice; larger values saturate.
///
/// # Example
/// ```
/// use basil::util::num::len_to_i64;
///
/// assert_eq!(len_to_i64(3), 3);
/// ```
#[must_use]
pub fn len_to_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

/// Resolves a possibly negative index against a collection of length `len`.
///
/// Non-negative indices count from the front, negative ones from the back
/// (`-1` is the last element).
///
/// # Parameters
/// - `index`: The index as written in the program.
/// - `len`: Number of elements in the collection.
///
/// # Returns
/// - `Some(usize)`: The resolved position if it lies inside the collection.
/// - `None`: If the index is out of bounds in either direction.
///
/// # Example
/// ```
/// use basil::util::num::resolve_index;
///
/// assert_eq!(resolve_index(0, 3), Some(0));
/// assert_eq!(resolve_index(-1, 3), Some(2));
/// assert_eq!(resolve_index(-3, 3), Some(0));
///
/// assert_eq!(resolve_index(3, 3), None);
/// assert_eq!(resolve_index(-4, 3), None);
/// assert_eq!(resolve_index(0, 0), None);
/// ```
#[must_use]
pub fn resolve_index(index: i64, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(usize::try_from(index.unsigned_abs()).ok()?)?
    } else {
        usize::try_from(index).ok()?
    };

    (resolved < len).then_some(resolved)
}

/// Converts a repetition count into a `usize`, treating negatives as zero.
///
/// # Example
/// ```
/// use basil::util::num::repeat_count;
///
/// assert_eq!(repeat_count(3), 3);
/// assert_eq!(repeat_count(0), 0);
/// assert_eq!(repeat_count(-5), 0);
/// ```
#[must_use]
pub fn repeat_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Repeats `text` `count` times, treating a negative count as zero.
///
/// # Returns
/// - `Some(String)`: The repeated text.
/// - `None`: If the result does not fit in memory.
///
/// # Example
/// ```
/// use basil::util::num::repeat_text;
///
/// assert_eq!(repeat_text("ab", 3).as_deref(), Some("ababab"));
/// assert_eq!(repeat_text("ab", -1).as_deref(), Some(""));
/// assert_eq!(repeat_text("", i64::MAX).as_deref(), Some(""));
/// assert_eq!(repeat_text("ab", i64::MAX), None);
/// ```
#[must_use]
pub fn repeat_text(text: &str, count: i64) -> Option<String> {
    if text.is_empty() {
        return Some(String::new());
    }

    let count = repeat_count(count);
    let mut repeated = String::new();
    repeated.try_reserve_exact(text.len().checked_mul(count)?).ok()?;
    repeated.extend(std::iter::repeat_n(text, count));

    Some(repeated)
}
