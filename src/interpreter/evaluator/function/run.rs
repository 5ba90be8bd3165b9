use log::debug;

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::BuiltinCall,
        },
        scope::Scope,
        value::core::Value,
    },
};

/// Loads the script named by `fn` through the host and runs it, returning
/// null.
///
/// The script gets a program scope of its own enclosed by the caller's
/// top-level scope. It sees the caller's top-level variables unless it
/// shadows them, and its own bindings are gone once it returns. A failure to
/// load or to finish the script is reported at the `RUN` call, with the
/// nested report embedded in the message.
///
/// # Example
/// ```
/// use basil::{Interpreter, interpreter::host::BufferedHost};
///
/// let host = BufferedHost::new().with_script("greet.bsl", "PRINT(\"hi\")");
/// let mut interpreter = Interpreter::with_host(host.clone());
///
/// interpreter.run("demo", "RUN(\"greet.bsl\")").unwrap();
/// assert_eq!(host.output(), vec!["hi".to_string()]);
///
/// let error = interpreter.run("demo", "RUN(\"missing.bsl\")").unwrap_err();
/// assert!(error.to_string().contains("Failed to load script \"missing.bsl\""));
/// ```
pub fn run(interpreter: &mut Interpreter, call: &BuiltinCall) -> EvalResult<Value> {
    let Value::String(name) = call.arg("fn")? else {
        return Err(call.error(RuntimeErrorKind::InvalidArgument("Argument must be string".to_string())));
    };

    let text = interpreter.host.load(&name).map_err(|error| {
                                                call.error(RuntimeErrorKind::ScriptLoad { name:   name.clone(),
                                                                                          reason: error.to_string(), })
                                            })?;
    debug!("loaded script {name} ({} bytes)", text.len());

    let scope = Scope::new_enclosed(call.program());
    interpreter.run_in(&name, &text, &scope)
               .map_err(|error| {
                   call.error(RuntimeErrorKind::ScriptFailed { name:   name.clone(),
                                                               report: error.render(), })
               })?;

    Ok(Value::null())
}
