use crate::{
    ast::UnaryOperator,
    error::RuntimeErrorKind,
    interpreter::{evaluator::core::Interpreter, value::core::Value},
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation. Anything but a number is illegal.
    /// - `Plus`: returns the operand unchanged, whatever it is.
    /// - `Not`: `1` for a falsy operand, `0` otherwise.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    ///
    /// # Returns
    /// The computed value, or the kind of error to report over the whole
    /// operation.
    ///
    /// # Example
    /// ```
    /// use basil::{Interpreter, ast::UnaryOperator, interpreter::value::core::Value};
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::int(5)).unwrap();
    /// assert_eq!(v, Value::int(-5));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Not, &Value::string("")).unwrap();
    /// assert_eq!(v, Value::int(1));
    ///
    /// assert!(Interpreter::eval_unary(UnaryOperator::Negate, &Value::string("a")).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> Result<Value, RuntimeErrorKind> {
        match op {
            UnaryOperator::Negate => match value {
                Value::Number(n) => Ok(Value::Number(n.negate())),
                Value::String(_) | Value::List(_) | Value::Function(_) | Value::BuiltIn(_) => {
                    Err(RuntimeErrorKind::IllegalOperation)
                },
            },
            UnaryOperator::Plus => Ok(value.clone()),
            UnaryOperator::Not => Ok(Value::from_bool(!value.is_true())),
        }
    }
}
