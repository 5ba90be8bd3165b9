use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::Interpreter,
        value::{core::Value, number::Number},
    },
    util::num::repeat_text,
};

impl Interpreter {
    /// Evaluates an operator whose left operand is a string.
    ///
    /// `+` concatenates two strings, `*` repeats a string an integer number
    /// of times (a negative count gives the empty string) and `==`/`!=`
    /// compare two strings. Any other combination is illegal, including a
    /// number on the left of `*`, which never reaches this function. A
    /// repetition too large to allocate is `TooLarge`.
    ///
    /// # Example
    /// ```
    /// use basil::{
    ///     Interpreter,
    ///     ast::BinaryOperator,
    ///     error::RuntimeErrorKind,
    ///     interpreter::value::core::Value,
    /// };
    ///
    /// let repeated = Interpreter::eval_string_op(BinaryOperator::Mul, "ab", &Value::int(3));
    /// assert_eq!(repeated, Ok(Value::string("ababab")));
    ///
    /// let same = Interpreter::eval_string_op(BinaryOperator::Equal, "ab", &Value::string("ab"));
    /// assert_eq!(same, Ok(Value::int(1)));
    ///
    /// let huge = Interpreter::eval_string_op(BinaryOperator::Mul, "ab", &Value::int(i64::MAX));
    /// assert_eq!(huge, Err(RuntimeErrorKind::TooLarge));
    /// ```
    pub fn eval_string_op(op: BinaryOperator,
                          text: &str,
                          right: &Value)
                          -> Result<Value, RuntimeErrorKind> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        let other = match right {
            Value::String(other) => Some(other.as_str()),
            Value::Number(_) | Value::List(_) | Value::Function(_) | Value::BuiltIn(_) => None,
        };

        match op {
            Add => other.map(|other| Value::string(format!("{text}{other}")))
                        .ok_or(RuntimeErrorKind::IllegalOperation),
            Mul => match right {
                Value::Number(Number::Int(count)) => {
                    repeat_text(text, *count).map(Value::string)
                                             .ok_or(RuntimeErrorKind::TooLarge)
                },
                Value::Number(Number::Float(_))
                | Value::String(_)
                | Value::List(_)
                | Value::Function(_)
                | Value::BuiltIn(_) => Err(RuntimeErrorKind::IllegalOperation),
            },
            Equal => other.map(|other| Value::from_bool(text == other))
                          .ok_or(RuntimeErrorKind::IllegalOperation),
            NotEqual => other.map(|other| Value::from_bool(text != other))
                             .ok_or(RuntimeErrorKind::IllegalOperation),
            Sub | Div | Mod | Pow | Less | Greater | LessEqual | GreaterEqual | And | Or => {
                Err(RuntimeErrorKind::IllegalOperation)
            },
        }
    }
}
