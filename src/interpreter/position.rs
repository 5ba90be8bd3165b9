use std::{fmt, rc::Rc};

/// A named unit of source text.
///
/// Every [`Position`] produced while lexing a unit shares the same `Source`,
/// so diagnostics can always recover the file name and the offending line.
/// The table of line starts is computed once on construction.
pub struct Source {
    name:  String,
    text:  String,
    lines: Vec<LineStart>,
}

/// Offsets of the first character of a line, in bytes and in chars.
#[derive(Clone, Copy)]
struct LineStart {
    byte: usize,
    char: usize,
}

impl Source {
    /// Wraps a unit of source text together with its display name.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::position::Source;
    ///
    /// let source = Source::new("<stdin>", "VAR a = 1\nVAR b = 2");
    /// assert_eq!(source.name(), "<stdin>");
    /// assert_eq!(source.line(1), Some("VAR b = 2"));
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Rc<Self> {
        let text = text.into();

        let mut lines = vec![LineStart { byte: 0, char: 0 }];
        for (char_index, (byte_index, ch)) in text.char_indices().enumerate() {
            if ch == '\n' {
                lines.push(LineStart { byte: byte_index + 1,
                                       char: char_index + 1, });
            }
        }

        Rc::new(Self { name: name.into(),
                       text,
                       lines })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the text of the 0-based line `line`, without its newline.
    #[must_use]
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = self.lines.get(line)?.byte;
        let end = self.lines
                      .get(line + 1)
                      .map_or(self.text.len(), |next| next.byte - 1);
        self.text.get(start..end)
    }

    /// Resolves a byte offset into a full [`Position`].
    ///
    /// Offsets past the end of the text are clamped to the end.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::position::Source;
    ///
    /// let source = Source::new("demo", "1 +\n  2");
    /// let pos = Source::position(&source, 6);
    ///
    /// assert_eq!((pos.line, pos.column, pos.index), (1, 2, 6));
    /// ```
    #[must_use]
    pub fn position(this: &Rc<Self>, byte: usize) -> Position {
        let byte = byte.min(this.text.len());
        let line = this.lines.partition_point(|start| start.byte <= byte) - 1;
        let start = this.lines[line];
        let column = this.text
                         .get(start.byte..byte)
                         .map_or(0, |prefix| prefix.chars().count());

        Position { index: start.char + column,
                   line,
                   column,
                   source: Rc::clone(this) }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
         .field("name", &self.name)
         .field("lines", &self.lines.len())
         .finish()
    }
}

/// A location inside a [`Source`].
///
/// `index` counts chars from the start of the text. `line` and `column` are
/// 0-based and rendered 1-based in diagnostics.
#[derive(Clone)]
pub struct Position {
    pub index:  usize,
    pub line:   usize,
    pub column: usize,
    pub source: Rc<Source>,
}

impl Position {
    /// Returns the position right after `ch`.
    ///
    /// A newline moves to column 0 of the next line.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::position::Source;
    ///
    /// let source = Source::new("demo", "a\nb");
    /// let start = Source::position(&source, 0);
    ///
    /// let next = start.advance('a');
    /// assert_eq!((next.line, next.column), (0, 1));
    ///
    /// let wrapped = next.advance('\n');
    /// assert_eq!((wrapped.line, wrapped.column, wrapped.index), (1, 0, 2));
    /// ```
    #[must_use]
    pub fn advance(&self, ch: char) -> Self {
        let (line, column) = if ch == '\n' {
            (self.line + 1, 0)
        } else {
            (self.line, self.column + 1)
        };

        Self { index: self.index + 1,
               line,
               column,
               source: Rc::clone(&self.source) }
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && Rc::ptr_eq(&self.source, &other.source)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source.name, self.line + 1, self.column + 1)
    }
}

/// A half-open range of source, from `start` up to but excluding `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Joins two spans, keeping the start of `self` and the end of `other`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }
}
