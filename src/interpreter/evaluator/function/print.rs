use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::BuiltinCall,
        },
        value::core::Value,
    },
};

/// Writes the display form of `value` as a line and returns null.
///
/// Strings are written without quotes.
///
/// # Example
/// ```
/// use basil::{Interpreter, interpreter::host::BufferedHost};
///
/// let host = BufferedHost::new();
/// let mut interpreter = Interpreter::with_host(host.clone());
///
/// interpreter.run("demo", "PRINT(\"a\")\nPRINT([1, \"b\"])").unwrap();
///
/// assert_eq!(host.output(), vec!["a".to_string(), "[1, \"b\"]".to_string()]);
/// ```
pub fn print(interpreter: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    let value = call.arg("value")?;

    write_line(interpreter, call, &value.to_string())?;
    Ok(Value::null())
}

/// Returns the display form of `value` as a string instead of writing it.
pub fn print_ret(_: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    Ok(Value::string(call.arg("value")?.to_string()))
}

/// Reads one line from the host and returns it as a string.
pub fn input(interpreter: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    read_line(interpreter, call).map(Value::string)
}

/// Reads lines until one parses as an integer, and returns that integer.
///
/// Every rejected line is answered with a rebuke on the host.
///
/// # Example
/// ```
/// use basil::{Interpreter, interpreter::host::BufferedHost};
///
/// let host = BufferedHost::with_input(["ten", "10"]);
/// let mut interpreter = Interpreter::with_host(host.clone());
///
/// let result = interpreter.run("demo", "INPUT_INT() + 1").unwrap();
///
/// assert_eq!(result.to_string(), "[11]");
/// assert_eq!(host.output(), vec!["'ten' must be an integer. Try again!".to_string()]);
/// ```
pub fn input_int(interpreter: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    loop {
        let text = read_line(interpreter, call)?;
        match text.trim().parse::<i64>() {
            Ok(number) => return Ok(Value::int(number)),
            Err(_) => write_line(interpreter,
                                 call,
                                 &format!("'{text}' must be an integer. Try again!"))?,
        }
    }
}

/// Clears the screen and returns null.
pub fn clear(interpreter: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    interpreter.host
               .clear()
               .map_err(|error| call.error(RuntimeErrorKind::OutputFailed(error.to_string())))?;
    Ok(Value::null())
}

fn read_line(interpreter: &mut Interpreter, call: &BuiltinCall) -> EvalResult<String> {
    match interpreter.host.read_line() {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Err(call.error(RuntimeErrorKind::InputClosed)),
        Err(error) => Err(call.error(RuntimeErrorKind::InputFailed(error.to_string()))),
    }
}

fn write_line(interpreter: &mut Interpreter, call: &BuiltinCall, text: &str) -> EvalResult<()> {
    interpreter.host
               .write_line(text)
               .map_err(|error| call.error(RuntimeErrorKind::OutputFailed(error.to_string())))
}
