use std::rc::Rc;

use thiserror::Error;

use crate::{
    error::locate,
    interpreter::{context::CallContext, position::Span},
};

/// What went wrong while evaluating a program.
///
/// The `Display` text of each variant is the message shown after the
/// `Runtime Error:` heading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeErrorKind {
    /// A name was read before anything was bound to it.
    #[error("'{0}' is not defined")]
    NotDefined(String),
    /// An operator or call was applied to values that do not support it.
    #[error("Illegal operation")]
    IllegalOperation,
    /// A result too large to allocate, such as a string repeated too many
    /// times.
    #[error("Result is too large")]
    TooLarge,
    /// Division or modulo by zero, or zero raised to a negative power.
    #[error("Division by zero")]
    DivisionByZero,
    /// A function received more arguments than it declares.
    #[error("{surplus} too many args passed into {function}")]
    TooManyArgs {
        /// How many arguments were left over.
        surplus:  usize,
        /// Display form of the callee, e.g. `<function f>`.
        function: String,
    },
    /// A function received fewer arguments than it declares.
    #[error("{deficit} too few args passed into {function}")]
    TooFewArgs {
        /// How many arguments were missing.
        deficit:  usize,
        /// Display form of the callee, e.g. `<function f>`.
        function: String,
    },
    /// A list index fell outside the list. `action` is `retrieved from` or
    /// `removed from`.
    #[error("Element at this index could not be {action} list because index is out of bounds")]
    IndexOutOfBounds {
        /// The attempted access.
        action: &'static str,
    },
    /// A built-in rejected one of its arguments.
    #[error("{0}")]
    InvalidArgument(String),
    /// `BREAK` or `CONTINUE` escaped every enclosing loop.
    #[error("'{0}' used outside of a loop")]
    OutsideLoop(&'static str),
    /// `RUN` could not read the requested script.
    #[error("Failed to load script \"{name}\"\n{reason}")]
    ScriptLoad {
        /// The script name as passed to `RUN`.
        name:   String,
        /// The I/O failure.
        reason: String,
    },
    /// A script started by `RUN` failed.
    #[error("Failed to finish executing script \"{name}\"\n{report}")]
    ScriptFailed {
        /// The script name as passed to `RUN`.
        name:   String,
        /// The nested error, fully rendered.
        report: String,
    },
    /// The input stream ended while a built-in was waiting for a line.
    #[error("Input stream closed")]
    InputClosed,
    /// Reading the input stream failed.
    #[error("Failed to read input\n{0}")]
    InputFailed(String),
    /// Writing to the output stream failed.
    #[error("Failed to write output\n{0}")]
    OutputFailed(String),
}

/// A failure during evaluation, with the span it is attributed to and the
/// call chain that was active at the time.
#[derive(Debug, Clone, Error)]
#[error("Runtime Error: {kind}")]
pub struct RuntimeError {
    pub kind:    RuntimeErrorKind,
    pub span:    Span,
    pub context: Rc<CallContext>,
}

impl RuntimeError {
    #[must_use]
    pub const fn new(kind: RuntimeErrorKind, span: Span, context: Rc<CallContext>) -> Self {
        Self { kind, span, context }
    }

    /// Builds the `Traceback` block, outermost call first.
    ///
    /// The innermost frame reports the line of the error itself. Every other
    /// frame reports the line where its callee was entered.
    ///
    /// # Example
    /// ```
    /// use basil::{Error, run};
    ///
    /// let Err(Error::Runtime(err)) = run("demo", "FUN f() -> 1 / 0\nf()") else {
    ///     panic!("expected a runtime error");
    /// };
    ///
    /// assert_eq!(err.traceback(),
    ///            "Traceback (most recent call last):\n  File demo, line 2, in <program>\n  File demo, line 1, in f\n");
    /// ```
    #[must_use]
    pub fn traceback(&self) -> String {
        let mut frames = Vec::new();
        let mut pos = Some(&self.span.start);
        let mut ctx = Some(&self.context);

        while let Some(current) = ctx {
            if let Some(p) = pos {
                frames.push(format!("  File {}, line {}, in {}\n",
                                    p.source.name(),
                                    p.line + 1,
                                    current.display_name));
            }
            pos = current.entry.as_ref();
            ctx = current.parent.as_ref();
        }

        frames.reverse();
        format!("Traceback (most recent call last):\n{}", frames.concat())
    }

    /// Renders the traceback, heading, location and source excerpt.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}{self}\n{}", self.traceback(), locate(&self.span))
    }
}

impl PartialEq for RuntimeError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.span == other.span
    }
}
