use std::fmt;

use thiserror::Error;

use crate::{error::locate, interpreter::position::Span};

/// The category of a lexical or syntax error.
///
/// The `Display` form is the heading used in rendered reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    /// A character that starts no token.
    IllegalCharacter,
    /// A token that needs a specific follow-up character, such as `!=` or a
    /// closing quote.
    ExpectedCharacter,
    /// An integer literal that does not fit in 64 bits.
    LiteralTooLarge,
    /// A token sequence the grammar does not accept.
    InvalidSyntax,
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self {
            Self::IllegalCharacter => "Illegal Character",
            Self::ExpectedCharacter => "Expected Character",
            Self::LiteralTooLarge => "Literal Too Large",
            Self::InvalidSyntax => "Invalid Syntax",
        };
        f.write_str(heading)
    }
}

/// An error raised while lexing or parsing, before any code runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {details}")]
pub struct SyntaxError {
    pub kind:    SyntaxErrorKind,
    pub details: String,
    pub span:    Span,
}

impl SyntaxError {
    #[must_use]
    pub fn illegal_character(ch: char, span: Span) -> Self {
        Self { kind: SyntaxErrorKind::IllegalCharacter,
               details: format!("'{ch}'"),
               span }
    }

    #[must_use]
    pub fn expected_character(details: impl Into<String>, span: Span) -> Self {
        Self { kind: SyntaxErrorKind::ExpectedCharacter,
               details: details.into(),
               span }
    }

    #[must_use]
    pub fn literal_too_large(literal: &str, span: Span) -> Self {
        Self { kind: SyntaxErrorKind::LiteralTooLarge,
               details: format!("'{literal}' does not fit in a 64-bit integer"),
               span }
    }

    #[must_use]
    pub fn invalid_syntax(details: impl Into<String>, span: Span) -> Self {
        Self { kind: SyntaxErrorKind::InvalidSyntax,
               details: details.into(),
               span }
    }

    /// Renders the full report: heading, location and source excerpt.
    ///
    /// # Example
    /// ```
    /// use basil::{Error, run};
    ///
    /// let Err(Error::Syntax(err)) = run("demo", "VAR a = 1 $") else {
    ///     panic!("expected a syntax error");
    /// };
    ///
    /// assert_eq!(err.render(),
    ///            "Illegal Character: '$'\nFile demo, line 1, col 11\n\nVAR a = 1 $\n          ^");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        format!("{self}\n{}", locate(&self.span))
    }
}
