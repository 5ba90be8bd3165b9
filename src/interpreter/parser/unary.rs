use crate::{
    ast::{BinaryOperator, Node, NodeKind, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::{
            block::{parse_for, parse_function, parse_if, parse_while},
            core::{ParseResult, TokenStream, parse_expression},
            utils::{EXPECTED_ATOM, expect, parse_delimited},
        },
    },
};

/// Parses unary sign operators.
///
/// Signs sit between multiplication and exponentiation, so `-2 ^ 2` parses
/// as `-(2 ^ 2)`.
///
/// Grammar: `factor := ("+" | "-") factor | power`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A unary node, or the power-level node when no sign is present.
pub fn parse_factor(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let op = match tokens.kind() {
        TokenKind::Minus => UnaryOperator::Negate,
        TokenKind::Plus => UnaryOperator::Plus,
        _ => return parse_power(tokens),
    };

    let sign = tokens.advance();
    let operand = parse_factor(tokens)?;
    Ok(Node::unary(op, &sign.span, operand))
}

/// Parses exponentiation expressions.
///
/// The right operand is a full factor, which itself contains a power, so
/// `a ^ b ^ c` parses as `a ^ (b ^ c)`.
///
/// Grammar: `power := call ("^" factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut left = parse_call(tokens)?;
    while tokens.at(&TokenKind::Caret) {
        tokens.advance();
        let right = parse_factor(tokens)?;
        left = Node::binary(left, BinaryOperator::Pow, right);
    }
    Ok(left)
}

/// Parses an atom followed by any number of argument lists.
///
/// Grammar: `call := atom ("(" (expr ("," expr)*)? ")")*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// The atom, wrapped in one `Call` node per argument list.
pub fn parse_call(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut callee = parse_atom(tokens)?;

    while tokens.at(&TokenKind::LParen) {
        tokens.advance();
        let (args, close) = parse_delimited(tokens,
                                            &TokenKind::RParen,
                                            "Expected ')', 'VAR', 'IF', 'FOR', 'WHILE', 'FUN', \
                                             int, float, identifier, '+', '-', '(', '[' or 'NOT'",
                                            "Expected ',' or ')'")?;
        callee = Node::call(callee, args, &close);
    }

    Ok(callee)
}

/// Parses the smallest self-contained expressions.
///
/// Atoms are literals, variable reads, parenthesised expressions, list
/// literals and the keyword-introduced constructs `IF`, `FOR`, `WHILE` and
/// `FUN`.
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// The parsed atom.
///
/// # Errors
/// Fails without consuming anything if the current token cannot start an
/// atom.
pub fn parse_atom(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let token = tokens.peek();

    let kind = match &token.kind {
        TokenKind::Int(value) => NodeKind::Int(*value),
        TokenKind::Float(value) => NodeKind::Float(*value),
        TokenKind::Str(value) => NodeKind::Str(value.clone()),
        TokenKind::Identifier(name) => NodeKind::VarAccess(name.clone()),
        TokenKind::LParen => {
            tokens.advance();
            let inner = parse_expression(tokens)?;
            expect(tokens, &TokenKind::RParen, "Expected ')'")?;
            return Ok(inner);
        },
        TokenKind::LBracket => return parse_list(tokens),
        TokenKind::If => return parse_if(tokens),
        TokenKind::For => return parse_for(tokens),
        TokenKind::While => return parse_while(tokens),
        TokenKind::Fun => return parse_function(tokens),
        _ => return Err(tokens.error_here(EXPECTED_ATOM)),
    };

    tokens.advance();
    Ok(Node::new(kind, token.span.clone()))
}

/// Parses a list literal.
///
/// Grammar: `list := "[" (expr ("," expr)*)? "]"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at `[`.
///
/// # Returns
/// A `List` node spanning both brackets.
pub fn parse_list(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let open = expect(tokens, &TokenKind::LBracket, "Expected '['")?;
    let (elements, close) = parse_delimited(tokens,
                                            &TokenKind::RBracket,
                                            "Expected ']', 'VAR', 'IF', 'FOR', 'WHILE', 'FUN', \
                                             int, float, identifier, '+', '-', '(', '[' or 'NOT'",
                                            "Expected ',' or ']'")?;

    Ok(Node::new(NodeKind::List(elements), open.span.to(&close)))
}
