use log::trace;

use crate::{
    ast::{BodyForm, ForLoop, Node},
    interpreter::{
        evaluator::core::{EvalResult, Flow, Frame, Interpreter},
        value::{core::Value, number::Number},
    },
};

/// What a loop does after one run of its body.
pub(crate) enum Iteration {
    /// Go on with the next iteration.
    Next,
    /// `BREAK`: leave the loop normally.
    Stop,
    /// `RETURN`: leave the loop and hand the signal on.
    Exit(Flow),
}

impl Interpreter {
    /// Evaluates a `FOR` loop.
    ///
    /// The start, end and step expressions are evaluated once, in that
    /// order, and must all be numbers. The step defaults to `1`. Its sign
    /// fixes the direction: a non-negative step runs while the counter is
    /// below the end, a negative step while it is above. The end is never
    /// reached.
    ///
    /// The counter is bound in the current scope before every run of the
    /// body, so it is still visible after the loop.
    ///
    /// # Parameters
    /// - `header`: Loop variable, bounds, step and body.
    /// - `frame`: Scope and call context to evaluate in.
    ///
    /// # Returns
    /// For an inline body, the list of the values of every iteration that
    /// was not cut short by `CONTINUE`. For a block body, null.
    ///
    /// # Example
    /// ```
    /// use basil::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// let up = interpreter.run("demo", "FOR i = 0 TO 5 STEP 2 THEN i").unwrap();
    /// assert_eq!(up.to_string(), "[[0, 2, 4]]");
    ///
    /// let down = interpreter.run("demo", "FOR i = 3 TO 0 STEP -1 THEN i * 10").unwrap();
    /// assert_eq!(down.to_string(), "[[30, 20, 10]]");
    /// ```
    pub(crate) fn eval_for(&mut self, header: &ForLoop, frame: &Frame) -> EvalResult<Flow> {
        let start = match self.eval_number(&header.start, frame)? {
            Ok(number) => number,
            Err(signal) => return Ok(signal),
        };
        let end = match self.eval_number(&header.end, frame)? {
            Ok(number) => number,
            Err(signal) => return Ok(signal),
        };
        let step = match &header.step {
            Some(step) => match self.eval_number(step, frame)? {
                Ok(number) => number,
                Err(signal) => return Ok(signal),
            },
            None => Number::Int(1),
        };

        trace!("FOR {} = {start} TO {end} STEP {step}", header.var);

        let ascending = step.as_f64() >= 0.0;
        let in_range = |counter: Number| {
            if ascending {
                counter.compare(end).is_some_and(std::cmp::Ordering::is_lt)
            } else {
                counter.compare(end).is_some_and(std::cmp::Ordering::is_gt)
            }
        };

        let mut values = Vec::new();
        let mut counter = start;
        while in_range(counter) {
            frame.scope.define(header.var.as_str(), Value::Number(counter));
            counter = counter.add(step);

            match self.eval_iteration(&header.body, header.form, &mut values, frame)? {
                Iteration::Next => {},
                Iteration::Stop => break,
                Iteration::Exit(signal) => return Ok(signal),
            }
        }

        Ok(Self::loop_result(header.form, values))
    }

    /// Runs a loop body once, collecting its value for inline loops.
    pub(crate) fn eval_iteration(&mut self,
                                 body: &Node,
                                 form: BodyForm,
                                 values: &mut Vec<Value>,
                                 frame: &Frame)
                                 -> EvalResult<Iteration> {
        Ok(match self.eval(body, frame)? {
            Flow::Value(value) => {
                if form == BodyForm::Inline {
                    values.push(value);
                }
                Iteration::Next
            },
            Flow::Continue(_) => Iteration::Next,
            Flow::Break(_) => Iteration::Stop,
            signal @ Flow::Return(_) => Iteration::Exit(signal),
        })
    }

    /// The value of a finished loop.
    pub(crate) fn loop_result(form: BodyForm, values: Vec<Value>) -> Flow {
        Flow::Value(match form {
                        BodyForm::Inline => Value::list(values),
                        BodyForm::Block => Value::null(),
                    })
    }
}
