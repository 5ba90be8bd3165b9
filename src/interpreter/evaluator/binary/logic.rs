use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::Interpreter,
        value::{core::Value, number::Number},
    },
};

impl Interpreter {
    /// Evaluates `AND` or `OR` between two numbers.
    ///
    /// Both operands have already been evaluated; there is no short-circuit.
    /// The result is `1` or `0`. Any other operator is `IllegalOperation`.
    ///
    /// # Example
    /// ```
    /// use basil::{
    ///     Interpreter,
    ///     ast::BinaryOperator,
    ///     interpreter::value::{core::Value, number::Number},
    /// };
    ///
    /// let and = Interpreter::eval_logic(BinaryOperator::And, Number::Int(2), Number::Int(0));
    /// let or = Interpreter::eval_logic(BinaryOperator::Or, Number::Int(2), Number::Int(0));
    ///
    /// assert_eq!(and, Ok(Value::int(0)));
    /// assert_eq!(or, Ok(Value::int(1)));
    /// ```
    pub fn eval_logic(op: BinaryOperator,
                      left: Number,
                      right: Number)
                      -> Result<Value, RuntimeErrorKind> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        let (left, right) = (!left.is_zero(), !right.is_zero());

        match op {
            And => Ok(Value::from_bool(left && right)),
            Or => Ok(Value::from_bool(left || right)),
            Add | Sub | Mul | Div | Mod | Pow | Equal | NotEqual | Less | Greater | LessEqual
            | GreaterEqual => Err(RuntimeErrorKind::IllegalOperation),
        }
    }
}
