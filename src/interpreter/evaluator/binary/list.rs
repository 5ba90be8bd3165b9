use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::Interpreter,
        value::{
            core::{ListRef, Value},
            number::Number,
        },
    },
    util::num::resolve_index,
};

impl Interpreter {
    /// Evaluates an operator whose left operand is a list.
    ///
    /// None of the operators touch the original list; each one that produces
    /// a list produces a new one.
    ///
    /// | operator | right operand | result |
    /// |----------|---------------|--------|
    /// | `+`      | anything      | copy with the operand appended |
    /// | `-`      | integer       | copy with the element at that index removed |
    /// | `*`      | list          | concatenation |
    /// | `/`      | integer       | the element at that index |
    ///
    /// Negative indices count from the end.
    ///
    /// # Example
    /// ```
    /// use basil::{Interpreter, ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let list = Value::list(vec![Value::int(1), Value::int(2), Value::int(3)]);
    /// let Value::List(items) = &list else { unreachable!() };
    ///
    /// let last = Interpreter::eval_list_op(BinaryOperator::Div, items, &Value::int(-1));
    /// assert_eq!(last, Ok(Value::int(3)));
    ///
    /// let shorter = Interpreter::eval_list_op(BinaryOperator::Sub, items, &Value::int(0));
    /// assert_eq!(shorter, Ok(Value::list(vec![Value::int(2), Value::int(3)])));
    /// assert_eq!(items.borrow().len(), 3);
    /// ```
    pub fn eval_list_op(op: BinaryOperator,
                        list: &ListRef,
                        right: &Value)
                        -> Result<Value, RuntimeErrorKind> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        let index = match right {
            Value::Number(Number::Int(index)) => Some(*index),
            Value::Number(Number::Float(_))
            | Value::String(_)
            | Value::List(_)
            | Value::Function(_)
            | Value::BuiltIn(_) => None,
        };

        match op {
            Add => {
                let mut elements = list.borrow().clone();
                elements.push(right.clone());
                Ok(Value::list(elements))
            },
            Sub => {
                let index = index.ok_or(RuntimeErrorKind::IllegalOperation)?;
                let mut elements = list.borrow().clone();
                let index = resolve_index(index, elements.len())
                    .ok_or(RuntimeErrorKind::IndexOutOfBounds { action: "removed from" })?;
                elements.remove(index);
                Ok(Value::list(elements))
            },
            Mul => match right {
                Value::List(other) => {
                    let mut elements = list.borrow().clone();
                    elements.extend(other.borrow().iter().cloned());
                    Ok(Value::list(elements))
                },
                Value::Number(_) | Value::String(_) | Value::Function(_) | Value::BuiltIn(_) => {
                    Err(RuntimeErrorKind::IllegalOperation)
                },
            },
            Div => {
                let index = index.ok_or(RuntimeErrorKind::IllegalOperation)?;
                let elements = list.borrow();
                resolve_index(index, elements.len())
                    .map(|index| elements[index].clone())
                    .ok_or(RuntimeErrorKind::IndexOutOfBounds { action: "retrieved from" })
            },
            Mod | Pow | Equal | NotEqual | Less | Greater | LessEqual | GreaterEqual | And | Or => {
                Err(RuntimeErrorKind::IllegalOperation)
            },
        }
    }
}
