use crate::{
    ast::{BodyForm, ElseCase, IfCase, Node},
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Frame, Interpreter, value_of},
        value::{core::Value, number::Number},
    },
};

impl Interpreter {
    /// Evaluates a statement sequence.
    ///
    /// Statements run in order. The result is the list of every statement's
    /// value; the first control signal stops the sequence and travels on.
    ///
    /// # Example
    /// ```
    /// use basil::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let result = interpreter.run("demo", "1; 2 + 3; \"x\"").unwrap();
    ///
    /// assert_eq!(result.to_string(), "[1, 5, \"x\"]");
    /// ```
    pub(crate) fn eval_statements(&mut self, statements: &[Node], frame: &Frame) -> EvalResult<Flow> {
        let mut values = Vec::with_capacity(statements.len());
        for statement in statements {
            values.push(value_of!(self.eval(statement, frame)));
        }
        Ok(Flow::Value(Value::list(values)))
    }

    /// Evaluates the elements of a list literal, left to right.
    pub(crate) fn eval_list(&mut self, elements: &[Node], frame: &Frame) -> EvalResult<Flow> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(value_of!(self.eval(element, frame)));
        }
        Ok(Flow::Value(Value::list(values)))
    }

    /// Evaluates a conditional.
    ///
    /// Conditions are tried in order and the first truthy one selects its
    /// body. With no match the `ELSE` body runs, if any. A body written as an
    /// `END` block yields null instead of its value, and so does a
    /// conditional where nothing ran.
    ///
    /// # Example
    /// ```
    /// use basil::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let result = interpreter.run("demo", "IF 0 THEN 1 ELIF 2 THEN 3 ELSE 4").unwrap();
    ///
    /// assert_eq!(result.to_string(), "[3]");
    /// ```
    pub(crate) fn eval_if(&mut self,
                          cases: &[IfCase],
                          else_case: Option<&ElseCase>,
                          frame: &Frame)
                          -> EvalResult<Flow> {
        for case in cases {
            let condition = value_of!(self.eval(&case.condition, frame));
            if condition.is_true() {
                return self.eval_body(&case.body, case.form, frame);
            }
        }

        match else_case {
            Some(else_case) => self.eval_body(&else_case.body, else_case.form, frame),
            None => Ok(Flow::Value(Value::null())),
        }
    }

    /// Evaluates a body, discarding its value when it is a block.
    fn eval_body(&mut self, body: &Node, form: BodyForm, frame: &Frame) -> EvalResult<Flow> {
        let value = value_of!(self.eval(body, frame));
        Ok(Flow::Value(match form {
                           BodyForm::Inline => value,
                           BodyForm::Block => Value::null(),
                       }))
    }

    /// Evaluates `node` and requires a number, as loop bounds do.
    ///
    /// # Returns
    /// - `Ok(Ok(number))`: The number.
    /// - `Ok(Err(flow))`: A control signal raised while evaluating `node`.
    /// - `Err`: `node` produced something other than a number.
    pub(crate) fn eval_number(&mut self,
                              node: &Node,
                              frame: &Frame)
                              -> EvalResult<Result<Number, Flow>> {
        match self.eval(node, frame)? {
            Flow::Value(Value::Number(number)) => Ok(Ok(number)),
            Flow::Value(_) => Err(frame.error(RuntimeErrorKind::IllegalOperation, &node.span)),
            signal => Ok(Err(signal)),
        }
    }
}
