use std::rc::Rc;

use log::debug;

use crate::{
    ast::{BodyForm, Node},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::CallContext,
        evaluator::{
            core::{EvalResult, Flow, Frame, Interpreter, value_of},
            function::{builtin, print, run},
        },
        position::Span,
        scope::Scope,
        value::{core::Value, function::UserFunction},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the interpreter, for host I/O and nested runs, and the
/// call it is handling, which gives access to the bound arguments.
pub type BuiltinFn = fn(&mut Interpreter, &BuiltinCall) -> EvalResult<Value>;

/// Defines builtin functions by generating their static table.
///
/// Each entry provides:
/// - the internal name, shown in tracebacks and in the function's display
///   form,
/// - the global names the function is installed under,
/// - the parameter names, which fix the arity,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (the metadata behind every built-in function value),
/// - `BUILTIN_TABLE` (static table the global scope is seeded from).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                globals: [$($global:literal),+ $(,)?],
                params: [$($param:literal),* $(,)?],
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A function provided by the interpreter.
        pub struct BuiltinDef {
            /// Internal name, e.g. `print`.
            pub name:    &'static str,
            /// Names the function is bound to in the global scope.
            pub globals: &'static [&'static str],
            /// Parameter names, bound in the call scope like a user
            /// function's.
            pub params:  &'static [&'static str],
            /// The implementation.
            pub func:    BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, globals: &[$($global),+], params: &[$($param),*], func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "print"       => { globals: ["PRINT"],         params: ["value"],            func: print::print },
    "print_ret"   => { globals: ["PRINT_RET"],     params: ["value"],            func: print::print_ret },
    "input"       => { globals: ["INPUT"],         params: [],                   func: print::input },
    "input_int"   => { globals: ["INPUT_INT"],     params: [],                   func: print::input_int },
    "clear"       => { globals: ["CLEAR", "CLS"],  params: [],                   func: print::clear },
    "is_number"   => { globals: ["IS_NUM"],        params: ["value"],            func: builtin::is_number },
    "is_string"   => { globals: ["IS_STR"],        params: ["value"],            func: builtin::is_string },
    "is_list"     => { globals: ["IS_LIST"],       params: ["value"],            func: builtin::is_list },
    "is_function" => { globals: ["IS_FUN"],        params: ["value"],            func: builtin::is_function },
    "append"      => { globals: ["APPEND"],        params: ["list", "value"],    func: builtin::append },
    "pop"         => { globals: ["POP"],           params: ["list", "index"],    func: builtin::pop },
    "extend"      => { globals: ["EXTEND"],        params: ["listA", "listB"],   func: builtin::extend },
    "len"         => { globals: ["LEN"],           params: ["list"],             func: builtin::len },
    "run"         => { globals: ["RUN"],           params: ["fn"],               func: run::run },
}

/// Binds every builtin into `globals` under each of its global names.
pub fn install_builtins(globals: &Scope) {
    for builtin in BUILTIN_TABLE {
        for name in builtin.globals {
            globals.define(*name, Value::BuiltIn(builtin));
        }
    }
}

/// A builtin invocation in progress.
///
/// The arguments are bound by parameter name in a scope of their own, and
/// errors raised through [`error`](Self::error) are attributed to the call
/// inside the builtin's own call context.
pub struct BuiltinCall {
    frame: Frame,
    span:  Span,
}

impl BuiltinCall {
    /// Reads the argument bound to the parameter `name`.
    pub fn arg(&self, name: &str) -> EvalResult<Value> {
        self.frame
            .scope
            .get(name)
            .ok_or_else(|| self.error(RuntimeErrorKind::NotDefined(name.to_string())))
    }

    /// The top-level scope of the program that made the call.
    #[must_use]
    pub const fn program(&self) -> &Scope {
        &self.frame.program
    }

    /// Builds an error spanning the call.
    #[must_use]
    pub fn error(&self, kind: RuntimeErrorKind) -> RuntimeError {
        self.frame.error(kind, &self.span)
    }
}

impl Interpreter {
    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first, then the arguments from left to right,
    /// all in the caller's frame. The callee must be a user-defined or a
    /// built-in function and the argument count must match its parameter
    /// list exactly.
    ///
    /// # Parameters
    /// - `node`: The whole call, used to position errors.
    /// - `callee`: Expression producing the function.
    /// - `args`: Argument expressions.
    /// - `frame`: The caller's frame.
    ///
    /// # Returns
    /// The value the function returned.
    ///
    /// # Example
    /// ```
    /// use basil::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// let error = interpreter.run("demo", "FUN add(a, b) -> a + b\nadd(1)").unwrap_err();
    ///
    /// assert_eq!(error.to_string(), "Runtime Error: 1 too few args passed into <function add>");
    /// ```
    pub(crate) fn eval_call(&mut self,
                            node: &Node,
                            callee: &Node,
                            args: &[Node],
                            frame: &Frame)
                            -> EvalResult<Flow> {
        let function = value_of!(self.eval(callee, frame));

        let mut values = Vec::with_capacity(args.len());
        for arg in args {
            values.push(value_of!(self.eval(arg, frame)));
        }

        let value = match &function {
            Value::Function(user) => {
                check_arity(&function, user.params().len(), values.len())
                    .map_err(|kind| frame.error(kind, &node.span))?;
                self.call_user_function(user, values, &node.span, frame)?
            },
            Value::BuiltIn(builtin) => {
                check_arity(&function, builtin.params.len(), values.len())
                    .map_err(|kind| frame.error(kind, &node.span))?;
                self.call_builtin(*builtin, values, &node.span, frame)?
            },
            Value::Number(_) | Value::String(_) | Value::List(_) => {
                return Err(frame.error(RuntimeErrorKind::IllegalOperation, &node.span));
            },
        };

        Ok(Flow::Value(value))
    }

    /// Executes a user-defined function.
    ///
    /// Parameters are bound in a new scope whose parent is the scope the
    /// function was defined in. Lists are bound as copies. An inline (`->`) body returns its value;
    /// a block body returns null unless it reaches a `RETURN`.
    fn call_user_function(&mut self,
                          function: &Rc<UserFunction>,
                          args: Vec<Value>,
                          span: &Span,
                          frame: &Frame)
                          -> EvalResult<Value> {
        let scope = Scope::new_enclosed(&function.closure);
        for (param, value) in function.params().iter().zip(args) {
            scope.define(param.as_str(), value.copied());
        }

        let context = CallContext::call(function.name(), &frame.context, span.start.clone());
        debug!("calling {} at depth {}", function.name(), context.depth());

        let inner = frame.call(scope, context);
        match self.eval(&function.definition.body, &inner)? {
            Flow::Return(value) => Ok(value),
            Flow::Value(value) => Ok(match function.definition.form {
                                      BodyForm::Inline => value,
                                      BodyForm::Block => Value::null(),
                                  }),
            Flow::Break(span) => Err(inner.error(RuntimeErrorKind::OutsideLoop("BREAK"), &span)),
            Flow::Continue(span) => {
                Err(inner.error(RuntimeErrorKind::OutsideLoop("CONTINUE"), &span))
            },
        }
    }

    /// Executes a builtin.
    ///
    /// Parameters are bound in a new scope enclosed by the global scope, so a
    /// builtin sees exactly its arguments and the globals.
    fn call_builtin(&mut self,
                    builtin: &'static BuiltinDef,
                    args: Vec<Value>,
                    span: &Span,
                    frame: &Frame)
                    -> EvalResult<Value> {
        let scope = Scope::new_enclosed(&self.globals);
        for (param, value) in builtin.params.iter().zip(args) {
            scope.define(*param, value);
        }

        let context = CallContext::call(builtin.name, &frame.context, span.start.clone());
        debug!("calling built-in {} at depth {}", builtin.name, context.depth());

        let call = BuiltinCall { frame: frame.call(scope, context),
                                 span:  span.clone(), };
        (builtin.func)(self, &call)
    }
}

/// Compares the number of arguments passed with the number of parameters.
///
/// # Returns
/// `TooManyArgs` or `TooFewArgs` naming the exact difference and the
/// function's display form.
fn check_arity(function: &Value, expected: usize, given: usize) -> Result<(), RuntimeErrorKind> {
    if given > expected {
        return Err(RuntimeErrorKind::TooManyArgs { surplus:  given - expected,
                                                   function: function.to_string(), });
    }
    if given < expected {
        return Err(RuntimeErrorKind::TooFewArgs { deficit:  expected - given,
                                                  function: function.to_string(), });
    }
    Ok(())
}
