use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeErrorKind,
    interpreter::{evaluator::core::Interpreter, value::number::Number},
};

impl Interpreter {
    /// Compares two numbers.
    ///
    /// Integers and floats compare by value, so `1 == 1.0`. Every comparison
    /// involving NaN is false except `!=`. Operators that do not compare are
    /// `IllegalOperation`.
    ///
    /// # Example
    /// ```
    /// use basil::{Interpreter, ast::BinaryOperator, interpreter::value::number::Number};
    ///
    /// let equal = Interpreter::eval_comparison(BinaryOperator::Equal, Number::Int(1), Number::Float(1.0));
    /// let less = Interpreter::eval_comparison(BinaryOperator::Less, Number::Int(2), Number::Float(2.5));
    /// let nan = Interpreter::eval_comparison(BinaryOperator::GreaterEqual,
    ///                                        Number::Float(f64::NAN),
    ///                                        Number::Int(0));
    ///
    /// assert_eq!(equal, Ok(true));
    /// assert_eq!(less, Ok(true));
    /// assert_eq!(nan, Ok(false));
    /// ```
    pub fn eval_comparison(op: BinaryOperator,
                           left: Number,
                           right: Number)
                           -> Result<bool, RuntimeErrorKind> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };

        let ordering = left.compare(right);

        Ok(match op {
            Equal => ordering == Some(Ordering::Equal),
            NotEqual => ordering != Some(Ordering::Equal),
            Less => ordering == Some(Ordering::Less),
            Greater => ordering == Some(Ordering::Greater),
            LessEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
            GreaterEqual => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
            Add | Sub | Mul | Div | Mod | Pow | And | Or => {
                return Err(RuntimeErrorKind::IllegalOperation);
            },
        })
    }
}
