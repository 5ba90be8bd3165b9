use std::rc::Rc;

use crate::interpreter::position::Position;

/// One frame of the active call chain, kept only for tracebacks.
///
/// The outermost context describes the program itself (`<program>`) and has
/// neither a parent nor an entry position. Every function call pushes a child
/// whose `entry` is the position of the call in its parent.
#[derive(Debug)]
pub struct CallContext {
    pub display_name: String,
    pub parent:       Option<Rc<Self>>,
    pub entry:        Option<Position>,
}

impl CallContext {
    /// Creates the root context of a program run.
    #[must_use]
    pub fn program() -> Rc<Self> {
        Rc::new(Self { display_name: "<program>".to_string(),
                       parent:       None,
                       entry:        None, })
    }

    /// Creates the context of a call made from `parent` at `entry`.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::{context::CallContext, position::Source};
    ///
    /// let source = Source::new("demo", "f()");
    /// let root = CallContext::program();
    /// let call = CallContext::call("f", &root, Source::position(&source, 0));
    ///
    /// assert_eq!(call.depth(), 2);
    /// assert_eq!(call.parent.as_ref().unwrap().display_name, "<program>");
    /// ```
    #[must_use]
    pub fn call(display_name: impl Into<String>, parent: &Rc<Self>, entry: Position) -> Rc<Self> {
        Rc::new(Self { display_name: display_name.into(),
                       parent:       Some(Rc::clone(parent)),
                       entry:        Some(entry), })
    }

    /// Number of contexts on the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        std::iter::successors(Some(self), |ctx| ctx.parent.as_deref()).count()
    }
}
