use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A name-to-value map linked to its enclosing scope.
///
/// `Scope` is a cheap handle: clones share the same bindings. Closures keep
/// the scope they were defined in alive through such a handle, so a function
/// stored in the scope it captures forms a reference cycle that lives until
/// the process ends.
#[derive(Clone, Default)]
pub struct Scope {
    inner: Rc<RefCell<ScopeData>>,
}

#[derive(Default)]
struct ScopeData {
    values: HashMap<String, Value>,
    parent: Option<Scope>,
}

impl Scope {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose lookups fall back to `parent`.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::{scope::Scope, value::core::Value};
    ///
    /// let globals = Scope::new();
    /// globals.define("x", Value::int(1));
    ///
    /// let local = Scope::new_enclosed(&globals);
    /// local.define("y", Value::int(2));
    ///
    /// assert_eq!(local.get("x"), Some(Value::int(1)));
    /// assert_eq!(local.get("y"), Some(Value::int(2)));
    /// assert_eq!(globals.get("y"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(parent: &Self) -> Self {
        Self { inner: Rc::new(RefCell::new(ScopeData { values: HashMap::new(),
                                                       parent: Some(parent.clone()), })), }
    }

    /// Binds `name` in this scope, shadowing any outer binding.
    ///
    /// Assignment never writes through to an enclosing scope.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.inner.borrow_mut().values.insert(name.into(), value);
    }

    /// Looks `name` up in this scope, then in each enclosing scope in turn.
    ///
    /// Lists come back as shared handles, so mutating the returned list
    /// mutates the bound one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let next = {
                let data = current.inner.borrow();
                if let Some(value) = data.values.get(name) {
                    return Some(value.clone());
                }
                data.parent.clone()?
            };
            current = next;
        }
    }
}
