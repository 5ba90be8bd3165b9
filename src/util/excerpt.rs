/// Renders the source line containing `start` with carets under the span.
///
/// Positions are `(line, column)` pairs, both 0-based, with columns counted in
/// chars. Carets run from the start column to the end column. If the span
/// continues onto a later line, they run to the end of the start line
/// instead. At least one caret is always drawn, so an empty span at the end
/// of a line still points somewhere. Tabs are rendered as single spaces to
/// keep the carets aligned.
///
/// # Parameters
/// - `text`: The complete source text.
/// - `start`: First position of the span.
/// - `end`: Position just past the span.
///
/// # Returns
/// The line followed by a newline and the caret row.
///
/// # Example
/// ```
/// use basil::util::excerpt::excerpt;
///
/// let text = "VAR a = 1\nVAR b = a / 0";
/// let shown = excerpt(text, (1, 12), (1, 13));
///
/// assert_eq!(shown, "VAR b = a / 0\n            ^");
/// ```
#[must_use]
pub fn excerpt(text: &str, start: (usize, usize), end: (usize, usize)) -> String {
    let line = text.split('\n').nth(start.0).unwrap_or_default();
    let line = line.strip_suffix('\r').unwrap_or(line);
    let shown = line.replace('\t', " ");
    let width = shown.chars().count();

    let from = start.1.min(width);
    let to = if end.0 == start.0 { end.1.min(width) } else { width };
    let carets = to.saturating_sub(from).max(1);

    format!("{shown}\n{}{}", " ".repeat(from), "^".repeat(carets))
}
