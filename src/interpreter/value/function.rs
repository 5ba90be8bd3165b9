use std::{fmt, rc::Rc};

use crate::{ast::FunctionDef, interpreter::scope::Scope};

/// A function defined in a program, together with the scope it closes over.
///
/// Calls create a fresh scope whose parent is `closure`, so the body sees the
/// bindings that were visible where the function was defined, not where it
/// is called.
pub struct UserFunction {
    pub definition: Rc<FunctionDef>,
    pub closure:    Scope,
}

impl UserFunction {
    #[must_use]
    pub const fn new(definition: Rc<FunctionDef>, closure: Scope) -> Self {
        Self { definition, closure }
    }

    /// The declared name, or `<anonymous>`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.definition.name.as_deref().unwrap_or("<anonymous>")
    }

    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.definition.params
    }
}

impl fmt::Display for UserFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name())
    }
}
