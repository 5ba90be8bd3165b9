use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::BuiltinCall,
        },
        value::{
            core::{ListRef, Value},
            number::Number,
        },
    },
    util::num::{len_to_i64, resolve_index},
};

/// Generates a type predicate builtin returning `1` or `0`.
macro_rules! type_predicate {
    ($fname:ident, $pattern:pat) => {
        pub fn $fname(_: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
            Ok(Value::from_bool(matches!(call.arg("value")?, $pattern)))
        }
    };
}

type_predicate!(is_number, Value::Number(_));
type_predicate!(is_string, Value::String(_));
type_predicate!(is_list, Value::List(_));
type_predicate!(is_function, Value::Function(_) | Value::BuiltIn(_));

/// Appends `value` to `list` in place and returns null.
///
/// # Example
/// ```
/// use basil::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// let result = interpreter.run("demo", "VAR xs = [1]\nAPPEND(xs, 2)\nxs").unwrap();
///
/// assert_eq!(result.to_string(), "[[1, 2], 0, [1, 2]]");
/// ```
pub fn append(_: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    let list = expect_list(call, "list", "First argument must be list")?;
    let value = call.arg("value")?;

    list.borrow_mut().push(value);
    Ok(Value::null())
}

/// Removes the element at `index` from `list` in place and returns it.
///
/// Negative indices count from the end.
pub fn pop(_: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    let list = expect_list(call, "list", "First argument must be list")?;
    let Value::Number(Number::Int(index)) = call.arg("index")? else {
        return Err(call.error(RuntimeErrorKind::InvalidArgument("Second argument must be number".to_string())));
    };

    let mut elements = list.borrow_mut();
    let index = resolve_index(index, elements.len())
        .ok_or_else(|| call.error(RuntimeErrorKind::IndexOutOfBounds { action: "removed from" }))?;
    Ok(elements.remove(index))
}

/// Appends every element of `listB` to `listA` in place and returns null.
///
/// Extending a list with itself doubles it.
///
/// # Example
/// ```
/// use basil::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// let result = interpreter.run("demo", "VAR xs = [1, 2]\nEXTEND(xs, xs)\nLEN(xs)").unwrap();
///
/// assert_eq!(result.to_string(), "[[1, 2, 1, 2], 0, 4]");
/// ```
pub fn extend(_: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    let target = expect_list(call, "listA", "First argument must be list")?;
    let source = expect_list(call, "listB", "Second argument must be list")?;

    let extra = source.borrow().clone();
    target.borrow_mut().extend(extra);
    Ok(Value::null())
}

/// Returns the number of elements of a list, or of characters of a string.
pub fn len(_: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    match call.arg("list")? {
        Value::List(list) => Ok(Value::int(len_to_i64(list.borrow().len()))),
        Value::String(text) => Ok(Value::int(len_to_i64(text.chars().count()))),
        _ => Err(call.error(RuntimeErrorKind::InvalidArgument("Argument must be list".to_string()))),
    }
}

fn expect_list(call: &BuiltinCall, param: &str, message: &str) -> EvalResult<ListRef> {
    match call.arg(param)? {
        Value::List(list) => Ok(list),
        _ => Err(call.error(RuntimeErrorKind::InvalidArgument(message.to_string()))),
    }
}
