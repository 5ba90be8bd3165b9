use crate::{
    ast::{BodyForm, Node},
    interpreter::evaluator::{
        core::{EvalResult, Flow, Frame, Interpreter, value_of},
        for_loop::Iteration,
    },
};

impl Interpreter {
    /// Evaluates a `WHILE` loop.
    ///
    /// The condition is evaluated before every iteration and the loop ends as
    /// soon as it is falsy. `BREAK`, `CONTINUE` and the collected result work
    /// as for `FOR` loops.
    ///
    /// # Example
    /// ```
    /// use basil::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let result = interpreter.run("demo", "VAR n = 3\nWHILE n > 0 THEN VAR n = n - 1").unwrap();
    ///
    /// assert_eq!(result.to_string(), "[3, [2, 1, 0]]");
    /// ```
    pub(crate) fn eval_while(&mut self,
                             condition: &Node,
                             body: &Node,
                             form: BodyForm,
                             frame: &Frame)
                             -> EvalResult<Flow> {
        let mut values = Vec::new();

        loop {
            if !value_of!(self.eval(condition, frame)).is_true() {
                break;
            }

            match self.eval_iteration(body, form, &mut values, frame)? {
                Iteration::Next => {},
                Iteration::Stop => break,
                Iteration::Exit(signal) => return Ok(signal),
            }
        }

        Ok(Self::loop_result(form, values))
    }
}
