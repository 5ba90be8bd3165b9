use thiserror::Error;

use crate::{interpreter::position::Span, util::excerpt::excerpt};

/// Lexing and parsing errors.
///
/// Covers everything detected before evaluation starts: characters that
/// start no token, unterminated strings, oversized literals and token
/// sequences the grammar rejects. Every error carries the span it refers to.
pub mod syntax_error;
/// Runtime errors.
///
/// Errors raised during evaluation, such as undefined names, illegal
/// operations, division by zero, arity mismatches and failed `RUN` calls.
/// Each one also carries the call chain active at the time, for tracebacks.
pub mod runtime_error;

pub use runtime_error::{RuntimeError, RuntimeErrorKind};
pub use syntax_error::{SyntaxError, SyntaxErrorKind};

/// Any error a program run can end with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Renders the complete, human-readable report for this error.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Syntax(e) => e.render(),
            Self::Runtime(e) => e.render(),
        }
    }

    /// The span the error is attributed to.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Syntax(e) => &e.span,
            Self::Runtime(e) => &e.span,
        }
    }
}

/// Formats the `File ..., line ..., col ...` line followed by a blank line
/// and the source excerpt.
pub(crate) fn locate(span: &Span) -> String {
    let start = &span.start;
    let end = &span.end;

    format!("File {}, line {}, col {}\n\n{}",
            start.source.name(),
            start.line + 1,
            start.column + 1,
            excerpt(start.source.text(),
                    (start.line, start.column),
                    (end.line, end.column)))
}
