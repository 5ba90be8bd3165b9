use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::{evaluator::core::Interpreter, value::number::Number},
};

impl Interpreter {
    /// Evaluates an arithmetic operation between two numbers.
    ///
    /// Integer operands stay integers while the result fits, otherwise the
    /// operation is repeated in floating point. Division always produces a
    /// float. Modulo is floored, so the result takes the sign of the divisor.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`, `Mod` or `Pow`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The computed number, `DivisionByZero` for `/` or `%` by zero and for
    /// zero raised to a negative power.
    ///
    /// # Example
    /// ```
    /// use basil::{
    ///     Interpreter,
    ///     ast::BinaryOperator,
    ///     error::RuntimeErrorKind,
    ///     interpreter::value::number::Number,
    /// };
    ///
    /// let q = Interpreter::eval_scalar_op(BinaryOperator::Div, Number::Int(7), Number::Int(2));
    /// assert_eq!(q, Ok(Number::Float(3.5)));
    ///
    /// let r = Interpreter::eval_scalar_op(BinaryOperator::Mod, Number::Int(-7), Number::Int(3));
    /// assert_eq!(r, Ok(Number::Int(2)));
    ///
    /// let z = Interpreter::eval_scalar_op(BinaryOperator::Mod, Number::Int(1), Number::Int(0));
    /// assert_eq!(z, Err(RuntimeErrorKind::DivisionByZero));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: Number,
                          right: Number)
                          -> Result<Number, RuntimeErrorKind> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        let result = match op {
            Add => Some(left.add(right)),
            Sub => Some(left.sub(right)),
            Mul => Some(left.mul(right)),
            Div => left.div(right),
            Mod => left.rem(right),
            Pow => left.pow(right),
            Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual | And | Or => {
                return Err(RuntimeErrorKind::IllegalOperation);
            },
        };

        result.ok_or(RuntimeErrorKind::DivisionByZero)
    }
}
