use std::rc::Rc;

use log::trace;

use crate::{
    ast::{Node, NodeKind},
    error::{Error, RuntimeError, RuntimeErrorKind},
    interpreter::{
        context::CallContext,
        evaluator::function::core::install_builtins,
        host::{Host, StdHost},
        lexer::tokenize,
        parser::core::parse,
        position::{Source, Span},
        scope::Scope,
        value::{core::Value, function::UserFunction},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of evaluating one node.
///
/// Besides plain values, evaluation can produce the non-local signals of
/// `RETURN`, `BREAK` and `CONTINUE`. They travel up through every enclosing
/// node until a function call or a loop consumes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Normal completion.
    Value(Value),
    /// `RETURN`, carrying the returned value.
    Return(Value),
    /// `BREAK`, carrying its span in case no loop is there to catch it.
    Break(Span),
    /// `CONTINUE`, carrying its span in case no loop is there to catch it.
    Continue(Span),
}

/// Evaluates a node and unwraps its value, returning early from the
/// enclosing function with any control signal.
macro_rules! value_of {
    ($flow:expr) => {
        match $flow? {
            $crate::interpreter::evaluator::core::Flow::Value(value) => value,
            signal => return Ok(signal),
        }
    };
}
pub(crate) use value_of;

/// Where evaluation is currently happening: the scope names resolve in, the
/// top-level scope of the program being run and the call context errors are
/// attributed to.
#[derive(Clone)]
pub struct Frame {
    pub scope:   Scope,
    pub program: Scope,
    pub context: Rc<CallContext>,
}

impl Frame {
    /// A frame for a program run in `scope`.
    #[must_use]
    pub fn program(scope: Scope) -> Self {
        Self { program: scope.clone(),
               scope,
               context: CallContext::program() }
    }

    /// A frame for a call made from this one, evaluating in `scope`.
    #[must_use]
    pub fn call(&self, scope: Scope, context: Rc<CallContext>) -> Self {
        Self { scope,
               program: self.program.clone(),
               context }
    }

    /// Builds a runtime error attributed to `span` in this frame.
    #[must_use]
    pub fn error(&self, kind: RuntimeErrorKind, span: &Span) -> RuntimeError {
        RuntimeError::new(kind, span.clone(), Rc::clone(&self.context))
    }
}

/// Runs programs.
///
/// An `Interpreter` owns the global scope, seeded once with the constants
/// and built-in functions, and the [`Host`] built-ins perform their I/O
/// through. Every call to [`run`](Self::run) evaluates in a fresh program
/// scope whose parent is the global scope.
///
/// ## Usage
///
/// ```
/// use basil::{Interpreter, interpreter::value::core::Value};
///
/// let mut interpreter = Interpreter::new();
///
/// let result = interpreter.run("demo", "VAR x = 6\nx * 7").unwrap();
/// assert_eq!(result, Value::list(vec![Value::int(6), Value::int(42)]));
/// ```
pub struct Interpreter {
    pub(crate) globals: Scope,
    pub(crate) host:    Box<dyn Host>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter that talks to the process's stdin, stdout and
    /// filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(StdHost)
    }

    /// Creates an interpreter that performs all I/O through `host`.
    #[must_use]
    pub fn with_host(host: impl Host + 'static) -> Self {
        let globals = Scope::new();
        install_globals(&globals);

        Self { globals,
               host: Box::new(host) }
    }

    /// The global scope shared by every program run.
    #[must_use]
    pub const fn globals(&self) -> &Scope {
        &self.globals
    }

    /// Lexes, parses and evaluates `text` in a fresh program scope.
    ///
    /// # Parameters
    /// - `name`: Display name of the source, used in diagnostics.
    /// - `text`: The program.
    ///
    /// # Returns
    /// The list of top-level statement values, or the value of a top-level
    /// `RETURN`.
    pub fn run(&mut self, name: &str, text: &str) -> Result<Value, Error> {
        let scope = Scope::new_enclosed(&self.globals);
        self.run_in(name, text, &scope)
    }

    /// Like [`run`](Self::run), but evaluates in `scope`, so bindings persist
    /// across calls that share it.
    ///
    /// # Example
    /// ```
    /// use basil::{Interpreter, interpreter::scope::Scope};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let session = Scope::new_enclosed(interpreter.globals());
    ///
    /// interpreter.run_in("<stdin>", "VAR count = 41", &session).unwrap();
    /// let result = interpreter.run_in("<stdin>", "count + 1", &session).unwrap();
    ///
    /// assert_eq!(result.to_string(), "[42]");
    /// ```
    pub fn run_in(&mut self, name: &str, text: &str, scope: &Scope) -> Result<Value, Error> {
        let source = Source::new(name, text);

        trace!("lexing {name}");
        let tokens = tokenize(&source)?;

        trace!("parsing {} tokens from {name}", tokens.len());
        let program = parse(&tokens)?;

        trace!("evaluating {name}");
        let frame = Frame::program(scope.clone());
        Ok(self.execute(&program, &frame)?)
    }

    /// Evaluates a whole program, turning a top-level `RETURN` into its
    /// result and rejecting stray `BREAK`/`CONTINUE`.
    fn execute(&mut self, program: &Node, frame: &Frame) -> EvalResult<Value> {
        match self.eval(program, frame)? {
            Flow::Value(value) | Flow::Return(value) => Ok(value),
            Flow::Break(span) => Err(frame.error(RuntimeErrorKind::OutsideLoop("BREAK"), &span)),
            Flow::Continue(span) => {
                Err(frame.error(RuntimeErrorKind::OutsideLoop("CONTINUE"), &span))
            },
        }
    }

    /// Evaluates a node.
    ///
    /// This is the main entry point for evaluation. The evaluator dispatches
    /// on the node kind: literals, variables, operators, conditionals, loops,
    /// function definitions and calls, statement sequences and the control
    /// statements.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    /// - `frame`: Scope and call context to evaluate in.
    ///
    /// # Returns
    /// The node's value, or the control signal it raised.
    pub fn eval(&mut self, node: &Node, frame: &Frame) -> EvalResult<Flow> {
        let value = match &node.kind {
            NodeKind::Int(value) => Value::int(*value),
            NodeKind::Float(value) => Value::float(*value),
            NodeKind::Str(value) => Value::string(value.as_str()),
            NodeKind::List(elements) => return self.eval_list(elements, frame),
            NodeKind::VarAccess(name) => {
                frame.scope
                     .get(name)
                     .ok_or_else(|| frame.error(RuntimeErrorKind::NotDefined(name.clone()), &node.span))?
            },
            NodeKind::VarAssign { name, value } => {
                let value = value_of!(self.eval(value, frame)).copied();
                frame.scope.define(name.as_str(), value.clone());
                value
            },
            NodeKind::BinaryOp { left, op, right } => {
                return self.eval_binary_op(node, left, *op, right, frame);
            },
            NodeKind::UnaryOp { op, operand } => {
                let value = value_of!(self.eval(operand, frame));
                Self::eval_unary(*op, &value).map_err(|kind| frame.error(kind, &node.span))?
            },
            NodeKind::If { cases, else_case } => {
                return self.eval_if(cases, else_case.as_deref(), frame);
            },
            NodeKind::For(header) => return self.eval_for(header, frame),
            NodeKind::While { condition, body, form } => {
                return self.eval_while(condition, body, *form, frame);
            },
            NodeKind::FuncDef(definition) => {
                let function = Rc::new(UserFunction::new(Rc::clone(definition),
                                                         frame.scope.clone()));
                if let Some(name) = &definition.name {
                    frame.scope.define(name.as_str(), Value::Function(Rc::clone(&function)));
                }
                Value::Function(function)
            },
            NodeKind::Call { callee, args } => return self.eval_call(node, callee, args, frame),
            NodeKind::Statements(statements) => return self.eval_statements(statements, frame),
            NodeKind::Return(value) => {
                let value = match value {
                    Some(value) => value_of!(self.eval(value, frame)),
                    None => Value::null(),
                };
                return Ok(Flow::Return(value));
            },
            NodeKind::Continue => return Ok(Flow::Continue(node.span.clone())),
            NodeKind::Break => return Ok(Flow::Break(node.span.clone())),
        };

        Ok(Flow::Value(value))
    }
}

/// Seeds a global scope with the constants and every built-in function.
///
/// | name      | value |
/// |-----------|-------|
/// | `NULL`    | `0`   |
/// | `FALSE`   | `0`   |
/// | `TRUE`    | `1`   |
/// | `MATH_PI` | π     |
fn install_globals(globals: &Scope) {
    globals.define("NULL", Value::null());
    globals.define("FALSE", Value::from_bool(false));
    globals.define("TRUE", Value::from_bool(true));
    globals.define("MATH_PI", Value::float(std::f64::consts::PI));

    install_builtins(globals);
}
