use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{Flow, Frame, Interpreter, value_of, EvalResult},
        value::core::Value,
    },
};

impl Interpreter {
    /// Evaluates both operands of a binary operation, then the operation.
    ///
    /// Operands are evaluated left to right. An illegal combination is
    /// reported over the whole operation; a zero divisor or a bad index is
    /// reported over the right operand, which is the part at fault.
    pub(crate) fn eval_binary_op(&mut self,
                                 node: &Node,
                                 left: &Node,
                                 op: BinaryOperator,
                                 right: &Node,
                                 frame: &Frame)
                                 -> EvalResult<Flow> {
        let lhs = value_of!(self.eval(left, frame));
        let rhs = value_of!(self.eval(right, frame));

        let value = Self::eval_binary(op, &lhs, &rhs).map_err(|kind| {
                                                          let span = match kind {
                                                              RuntimeErrorKind::IllegalOperation => &node.span,
                                                              _ => &right.span,
                                                          };
                                                          frame.error(kind, span)
                                                      })?;

        Ok(Flow::Value(value))
    }

    /// Evaluates a binary operation between two values.
    ///
    /// The operation is routed on the left operand: numbers go to the scalar,
    /// comparison and logic handlers, strings to `eval_string_op` and lists to
    /// `eval_list_op`. Functions support no operator at all.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// The result, or the kind of error to report. The caller attaches the
    /// position.
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
    /// let sum = Interpreter::eval_binary(BinaryOperator::Add, &Value::int(3), &Value::int(4));
    /// assert_eq!(sum, Ok(Value::int(7)));
    ///
    /// let mixed = Interpreter::eval_binary(BinaryOperator::Mul, &Value::int(3), &Value::string("ab"));
    /// assert_eq!(mixed, Err(RuntimeErrorKind::IllegalOperation));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value)
                       -> Result<Value, RuntimeErrorKind> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        match left {
            Value::Number(a) => match right {
                Value::Number(b) => match op {
                    Add | Sub | Mul | Div | Mod | Pow => {
                        Self::eval_scalar_op(op, *a, *b).map(Value::Number)
                    },
                    Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual => {
                        Self::eval_comparison(op, *a, *b).map(Value::from_bool)
                    },
                    And | Or => Self::eval_logic(op, *a, *b),
                },
                Value::String(_) | Value::List(_) | Value::Function(_) | Value::BuiltIn(_) => {
                    Err(RuntimeErrorKind::IllegalOperation)
                },
            },
            Value::String(text) => Self::eval_string_op(op, text, right),
            Value::List(list) => Self::eval_list_op(op, list, right),
            Value::Function(_) | Value::BuiltIn(_) => Err(RuntimeErrorKind::IllegalOperation),
        }
    }
}
