use crate::{
    ast::Node,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::parse_logical,
            statement::parse_statements,
            utils::{EXPECTED_EXPRESSION, expect, expect_identifier, or_expected},
        },
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// A cursor over a token slice with checkpoint and rewind support.
///
/// The slice must end with [`TokenKind::Eof`], as produced by
/// [`tokenize`](crate::interpreter::lexer::tokenize). Peeking past the end
/// keeps returning that final token, and it is never consumed.
pub struct TokenStream<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> TokenStream<'a> {
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, index: 0 }
    }

    /// The current token.
    #[must_use]
    pub fn peek(&self) -> &'a Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[self.index.min(last)]
    }

    #[must_use]
    pub fn kind(&self) -> &'a TokenKind {
        &self.peek().kind
    }

    /// Whether the current token is of kind `kind`, payload included.
    #[must_use]
    pub fn at(&self, kind: &TokenKind) -> bool {
        self.kind() == kind
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            self.index += 1;
        }
        token
    }

    /// Marks the current position for a later [`rewind`](Self::rewind) or
    /// [`consumed_since`](Self::consumed_since).
    #[must_use]
    pub const fn checkpoint(&self) -> usize {
        self.index
    }

    pub const fn rewind(&mut self, checkpoint: usize) {
        self.index = checkpoint;
    }

    /// Whether any token was consumed after `checkpoint` was taken.
    #[must_use]
    pub const fn consumed_since(&self, checkpoint: usize) -> bool {
        self.index > checkpoint
    }

    /// An `Invalid Syntax` error pointing at the current token.
    #[must_use]
    pub fn error_here(&self, message: &str) -> SyntaxError {
        SyntaxError::invalid_syntax(message, self.peek().span.clone())
    }
}

/// Parses a whole program.
///
/// The program is a statement sequence that must reach the end of input.
///
/// Grammar: `program := statements EOF`
///
/// # Parameters
/// - `tokens`: The full token sequence, ending with `Eof`.
///
/// # Returns
/// A `Statements` node holding every top-level statement.
///
/// # Errors
/// Returns the most specific syntax error found, or `Token cannot appear
/// after previous tokens` if something is left over after the last
/// statement.
///
/// # Example
/// ```
/// use basil::{
///     ast::NodeKind,
///     interpreter::{lexer::tokenize, parser::core::parse, position::Source},
/// };
///
/// let source = Source::new("demo", "VAR a = 1\nPRINT(a)\n");
/// let tokens = tokenize(&source).unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let NodeKind::Statements(statements) = program.kind else {
///     panic!("a program is a statement list");
/// };
/// assert_eq!(statements.len(), 2);
///
/// let source = Source::new("demo", "1 2");
/// let tokens = tokenize(&source).unwrap();
/// let err = parse(&tokens).unwrap_err();
/// assert_eq!(err.details, "Token cannot appear after previous tokens");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Node> {
    let mut stream = TokenStream::new(tokens);
    let program = parse_statements(&mut stream)?;

    if !stream.at(&TokenKind::Eof) {
        return Err(stream.error_here("Token cannot appear after previous tokens"));
    }

    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. A `VAR` assignment is
/// recognised first; anything else begins at the lowest-precedence level,
/// `AND`/`OR`, and recursively descends through the precedence hierarchy.
///
/// Grammar: `expr := "VAR" IDENT "=" expr | logical`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let checkpoint = tokens.checkpoint();

    if tokens.at(&TokenKind::Var) {
        tokens.advance();
        let (name, name_span) = expect_identifier(tokens, "Expected identifier")?;
        expect(tokens, &TokenKind::Equals, "Expected '='")?;
        let value = parse_expression(tokens)?;

        return Ok(Node::var_assign(name, &name_span, value));
    }

    let result = parse_logical(tokens);
    or_expected(tokens, checkpoint, result, EXPECTED_EXPRESSION)
}
