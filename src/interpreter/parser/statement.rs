use crate::{
    ast::{Node, NodeKind},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            utils::{EXPECTED_STATEMENT, or_expected, skip_newlines},
        },
    },
};

/// Parses a newline-separated sequence of statements.
///
/// At least one statement is required. After each run of separators one more
/// statement is attempted from a checkpoint: if the attempt fails without
/// consuming a token, the sequence simply ends there and the cursor rewinds.
/// A failure after consuming tokens is a real syntax error and is returned.
///
/// Grammar: `statements := NEWLINE* statement (NEWLINE+ statement)* NEWLINE*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement or newline.
///
/// # Returns
/// A `Statements` node spanning the first to the last statement.
pub fn parse_statements(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    skip_newlines(tokens);

    let mut statements = vec![parse_statement(tokens)?];

    while skip_newlines(tokens) > 0 {
        let checkpoint = tokens.checkpoint();
        match parse_statement(tokens) {
            Ok(statement) => statements.push(statement),
            Err(e) if tokens.consumed_since(checkpoint) => return Err(e),
            Err(_) => {
                tokens.rewind(checkpoint);
                break;
            },
        }
    }

    let span = match (statements.first(), statements.last()) {
        (Some(first), Some(last)) => first.span.to(&last.span),
        _ => tokens.peek().span.clone(),
    };

    Ok(Node::new(NodeKind::Statements(statements), span))
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - `RETURN` with an optional value,
/// - `CONTINUE`,
/// - `BREAK`,
/// - an expression.
///
/// The value after `RETURN` is optional: an expression that cannot even start
/// leaves the `RETURN` bare.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the statement.
///
/// # Returns
/// The parsed statement node.
pub fn parse_statement(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let checkpoint = tokens.checkpoint();
    let token = tokens.peek();

    match token.kind {
        TokenKind::Return => {
            tokens.advance();

            let value_checkpoint = tokens.checkpoint();
            let value = match parse_expression(tokens) {
                Ok(value) => Some(value),
                Err(e) if tokens.consumed_since(value_checkpoint) => return Err(e),
                Err(_) => None,
            };

            let span = value.as_ref()
                            .map_or_else(|| token.span.clone(), |v| token.span.to(&v.span));
            Ok(Node::new(NodeKind::Return(value.map(Box::new)), span))
        },
        TokenKind::Continue => {
            tokens.advance();
            Ok(Node::new(NodeKind::Continue, token.span.clone()))
        },
        TokenKind::Break => {
            tokens.advance();
            Ok(Node::new(NodeKind::Break, token.span.clone()))
        },
        _ => {
            let result = parse_expression(tokens);
            or_expected(tokens, checkpoint, result, EXPECTED_STATEMENT)
        },
    }
}
