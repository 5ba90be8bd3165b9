use std::rc::Rc;

use crate::interpreter::position::Span;

/// A node of the abstract syntax tree.
///
/// Every node carries the span of source it was parsed from. The span is
/// fixed when the node is built: the constructors below derive it from the
/// children so that the parser never has to track it by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// What the node is.
    pub kind: NodeKind,
    /// The source range covered by the node and all its children.
    pub span: Span,
}

/// An abstract syntax tree (AST) node kind.
///
/// `NodeKind` covers every construct of the language. Statements such as
/// `RETURN` or `BREAK` are nodes like any other, so a body is simply a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An integer literal.
    Int(i64),
    /// A float literal.
    Float(f64),
    /// A string literal with escapes already resolved.
    Str(String),
    /// A list literal, e.g. `[1, 2, 3]`.
    List(Vec<Node>),
    /// Reads a variable.
    VarAccess(String),
    /// `VAR name = value`.
    VarAssign {
        /// Name of the variable.
        name:  String,
        /// The assigned expression.
        value: Box<Node>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Node>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Node>,
    },
    /// A unary operation.
    UnaryOp {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Node>,
    },
    /// `IF ... THEN ... ELIF ... ELSE ... END`.
    If {
        /// Condition and body pairs, tried in order.
        cases:     Vec<IfCase>,
        /// Body used when no case matched.
        else_case: Option<Box<ElseCase>>,
    },
    /// `FOR var = start TO end STEP step THEN ...`.
    For(Box<ForLoop>),
    /// `WHILE condition THEN ...`.
    While {
        /// Re-evaluated before every iteration.
        condition: Box<Node>,
        /// The loop body.
        body:      Box<Node>,
        /// Inline loops collect their values, block loops yield null.
        form:      BodyForm,
    },
    /// `FUN name(params) -> body` or its block form.
    FuncDef(Rc<FunctionDef>),
    /// A call, e.g. `f(1, 2)`.
    Call {
        /// The expression producing the function.
        callee: Box<Node>,
        /// Arguments, evaluated left to right.
        args:   Vec<Node>,
    },
    /// A sequence of statements. Evaluates to the list of their values.
    Statements(Vec<Node>),
    /// `RETURN` with an optional value.
    Return(Option<Box<Node>>),
    /// `CONTINUE`
    Continue,
    /// `BREAK`
    Break,
}

/// Whether a body was written on the same line or as an `END`-terminated
/// block.
///
/// Inline bodies yield their value. Block bodies yield null, except that
/// functions with a block body still return what `RETURN` hands them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyForm {
    /// Same-line body, or `->` for functions.
    Inline,
    /// Body on following lines, closed by `END`.
    Block,
}

/// One `IF`/`ELIF` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfCase {
    pub condition: Node,
    pub body:      Node,
    pub form:      BodyForm,
}

/// The `ELSE` branch of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseCase {
    pub body: Node,
    pub form: BodyForm,
}

/// Header and body of a counted loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// The loop variable name.
    pub var:   String,
    /// First value of the loop variable.
    pub start: Node,
    /// Exclusive bound.
    pub end:   Node,
    /// Increment, `1` when omitted.
    pub step:  Option<Node>,
    /// The body evaluated for each iteration.
    pub body:  Node,
    /// Inline loops collect their values, block loops yield null.
    pub form:  BodyForm,
}

/// Represents a user-defined function definition.
///
/// Definitions are shared behind an `Rc` between the AST and every function
/// value created from them.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function, `None` for anonymous functions.
    pub name:   Option<String>,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body evaluated when the function is called.
    pub body:   Node,
    /// `Inline` for `->` bodies, which return their value automatically.
    pub form:   BodyForm,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`AND`)
    And,
    /// Logical or (`OR`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Unary plus (e.g. `+x`), returns its operand.
    Plus,
    /// Logical NOT (e.g. `NOT x`).
    Not,
}

impl Node {
    #[must_use]
    pub const fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Builds a binary operation spanning both operands.
    ///
    /// # Example
    /// ```
    /// use basil::{
    ///     ast::{BinaryOperator, Node, NodeKind},
    ///     interpreter::position::{Source, Span},
    /// };
    ///
    /// let source = Source::new("demo", "1 + 2");
    /// let at = |a, b| Span::new(Source::position(&source, a), Source::position(&source, b));
    ///
    /// let sum = Node::binary(Node::new(NodeKind::Int(1), at(0, 1)),
    ///                        BinaryOperator::Add,
    ///                        Node::new(NodeKind::Int(2), at(4, 5)));
    ///
    /// assert_eq!(sum.span, at(0, 5));
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        let span = left.span.to(&right.span);
        Self { kind: NodeKind::BinaryOp { left: Box::new(left),
                                          op,
                                          right: Box::new(right) },
               span }
    }

    /// Builds a unary operation spanning the operator and its operand.
    #[must_use]
    pub fn unary(op: UnaryOperator, op_span: &Span, operand: Self) -> Self {
        let span = op_span.to(&operand.span);
        Self { kind: NodeKind::UnaryOp { op,
                                         operand: Box::new(operand) },
               span }
    }

    /// Builds `VAR name = value`, spanning the name and the value.
    #[must_use]
    pub fn var_assign(name: String, name_span: &Span, value: Self) -> Self {
        let span = name_span.to(&value.span);
        Self { kind: NodeKind::VarAssign { name,
                                           value: Box::new(value) },
               span }
    }

    /// Builds a conditional spanning the `IF` keyword and the last body.
    #[must_use]
    pub fn if_chain(if_span: &Span, cases: Vec<IfCase>, else_case: Option<ElseCase>) -> Self {
        let last = else_case.as_ref()
                            .map(|e| &e.body.span)
                            .or_else(|| cases.last().map(|c| &c.body.span))
                            .unwrap_or(if_span);
        let span = if_span.to(last);

        Self { kind: NodeKind::If { cases,
                                    else_case: else_case.map(Box::new) },
               span }
    }

    /// Builds a counted loop spanning the variable name and the body.
    #[must_use]
    pub fn for_loop(var_span: &Span, header: ForLoop) -> Self {
        let span = var_span.to(&header.body.span);
        Self { kind: NodeKind::For(Box::new(header)),
               span }
    }

    /// Builds a while loop spanning the condition and the body.
    #[must_use]
    pub fn while_loop(condition: Self, body: Self, form: BodyForm) -> Self {
        let span = condition.span.to(&body.span);
        Self { kind: NodeKind::While { condition: Box::new(condition),
                                       body: Box::new(body),
                                       form },
               span }
    }

    /// Builds a call spanning the callee and the closing parenthesis.
    #[must_use]
    pub fn call(callee: Self, args: Vec<Self>, close_span: &Span) -> Self {
        let span = callee.span.to(close_span);
        Self { kind: NodeKind::Call { callee: Box::new(callee),
                                      args },
               span }
    }
}
