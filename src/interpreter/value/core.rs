use std::{cell::RefCell, fmt, rc::Rc};

use crate::interpreter::{
    evaluator::function::core::BuiltinDef,
    value::{function::UserFunction, number::Number},
};

/// A shared, mutable list.
///
/// Reading a list from a variable hands out another handle to the same
/// storage, which is how `APPEND`, `POP` and `EXTEND` mutate in place.
/// Assigning it to a variable or passing it to a user function stores a
/// [`copied`](Value::copied) container instead.
pub type ListRef = Rc<RefCell<Vec<Value>>>;

/// Represents a runtime value.
///
/// Every expression evaluates to one of these variants. The set is closed:
/// operators match on it exhaustively and reject the combinations they do not
/// support.
#[derive(Clone)]
pub enum Value {
    /// An integer or float.
    Number(Number),
    /// An immutable string.
    String(String),
    /// A list shared by reference.
    List(ListRef),
    /// A function defined in the program.
    Function(Rc<UserFunction>),
    /// A function provided by the interpreter.
    BuiltIn(&'static BuiltinDef),
}

impl Value {
    /// The value used wherever nothing meaningful is produced: integer `0`.
    #[must_use]
    pub const fn null() -> Self {
        Self::Number(Number::Int(0))
    }

    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }

    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }

    /// `1` for `true`, `0` for `false`.
    #[must_use]
    pub fn from_bool(value: bool) -> Self {
        Self::int(i64::from(value))
    }

    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Wraps `elements` in a new, unshared list.
    #[must_use]
    pub fn list(elements: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(elements)))
    }

    /// The copy stored by an assignment or bound to a parameter.
    ///
    /// A list gets a new container holding the same elements, so later
    /// `APPEND`s to one variable leave the other alone. Every other value is
    /// cloned as is; functions keep sharing their captured scope.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::core::Value;
    ///
    /// let original = Value::list(vec![Value::int(1)]);
    /// let copy = original.copied();
    ///
    /// let Value::List(items) = &copy else { unreachable!() };
    /// items.borrow_mut().push(Value::int(2));
    ///
    /// assert_eq!(original.to_string(), "[1]");
    /// assert_eq!(copy.to_string(), "[1, 2]");
    /// ```
    #[must_use]
    pub fn copied(&self) -> Self {
        match self {
            Self::List(items) => Self::list(items.borrow().clone()),
            Self::Number(_) | Self::String(_) | Self::Function(_) | Self::BuiltIn(_) => self.clone(),
        }
    }

    /// Truthiness as used by `IF`, `WHILE`, `NOT`, `AND` and `OR`.
    ///
    /// Numbers are true when non-zero, strings and lists when non-empty, and
    /// functions always.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::core::Value;
    ///
    /// assert!(Value::int(3).is_true());
    /// assert!(!Value::float(0.0).is_true());
    /// assert!(!Value::string("").is_true());
    /// assert!(Value::list(vec![Value::null()]).is_true());
    /// assert!(!Value::list(vec![]).is_true());
    /// ```
    #[must_use]
    pub fn is_true(&self) -> bool {
        match self {
            Self::Number(n) => !n.is_zero(),
            Self::String(s) => !s.is_empty(),
            Self::List(items) => !items.borrow().is_empty(),
            Self::Function(_) | Self::BuiltIn(_) => true,
        }
    }

    /// The form used when the value appears inside a list or is echoed by
    /// the interactive prompt. Strings are quoted; everything else matches
    /// `Display`.
    ///
    /// # Example
    /// ```
    /// use basil::interpreter::value::core::Value;
    ///
    /// let list = Value::list(vec![Value::int(1), Value::string("two"), Value::float(3.0)]);
    ///
    /// assert_eq!(Value::string("two").to_string(), "two");
    /// assert_eq!(Value::string("two").repr(), "\"two\"");
    /// assert_eq!(list.to_string(), "[1, \"two\", 3.0]");
    /// ```
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
            Self::List(items) => {
                let shown = items.borrow()
                                 .iter()
                                 .map(Self::repr)
                                 .collect::<Vec<_>>()
                                 .join(", ");
                write!(f, "[{shown}]")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::BuiltIn(builtin) => write!(f, "<built-in function {}>", builtin.name),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

/// Structural equality for numbers, strings and lists; identity for
/// functions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::BuiltIn(a), Self::BuiltIn(b)) => a.name == b.name,
            _ => false,
        }
    }
}
