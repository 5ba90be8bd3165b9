use crate::{
    ast::Node,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, TokenStream, parse_expression},
        position::Span,
    },
};

pub(in crate::interpreter::parser) const EXPECTED_STATEMENT: &str =
    "Expected 'RETURN', 'CONTINUE', 'BREAK', 'VAR', 'IF', 'FOR', 'WHILE', 'FUN', int, float, \
     identifier, '+', '-', '(', '[' or 'NOT'";
pub(in crate::interpreter::parser) const EXPECTED_EXPRESSION: &str =
    "Expected 'VAR', 'IF', 'FOR', 'WHILE', 'FUN', int, float, identifier, '+', '-', '(', '[' or \
     'NOT'";
pub(in crate::interpreter::parser) const EXPECTED_COMPARISON: &str =
    "Expected int, float, identifier, '+', '-', '(', '[', 'IF', 'FOR', 'WHILE', 'FUN' or 'NOT'";
pub(in crate::interpreter::parser) const EXPECTED_ATOM: &str =
    "Expected int, float, identifier, '+', '-', '(', '[', 'IF', 'FOR', 'WHILE' or 'FUN'";

/// Replaces an error with a generic expectation if nothing was consumed.
///
/// A rule that fails without consuming a token could not even start, so the
/// rule's own list of acceptable tokens says more than the inner error. Once
/// tokens were consumed, the inner error is the furthest and most specific one
/// and is kept as is.
///
/// # Parameters
/// - `tokens`: The stream the rule ran on.
/// - `checkpoint`: Position taken when the rule began.
/// - `result`: The rule's result.
/// - `message`: The rule's generic expectation.
pub(in crate::interpreter::parser) fn or_expected<T>(tokens: &TokenStream<'_>,
                                                     checkpoint: usize,
                                                     result: ParseResult<T>,
                                                     message: &str)
                                                     -> ParseResult<T> {
    match result {
        Err(_) if !tokens.consumed_since(checkpoint) => Err(tokens.error_here(message)),
        other => other,
    }
}

/// Consumes a token of kind `kind` or fails with `message`.
pub(in crate::interpreter::parser) fn expect<'a>(tokens: &mut TokenStream<'a>,
                                                 kind: &TokenKind,
                                                 message: &str)
                                                 -> ParseResult<&'a Token> {
    if tokens.at(kind) {
        Ok(tokens.advance())
    } else {
        Err(tokens.error_here(message))
    }
}

/// Consumes an identifier and returns its name and span, or fails with
/// `message`.
pub(in crate::interpreter::parser) fn expect_identifier(tokens: &mut TokenStream<'_>,
                                                        message: &str)
                                                        -> ParseResult<(String, Span)> {
    if let TokenKind::Identifier(name) = tokens.kind() {
        let token = tokens.advance();
        return Ok((name.clone(), token.span.clone()));
    }
    Err(tokens.error_here(message))
}

/// Consumes consecutive newline tokens and returns how many there were.
pub(in crate::interpreter::parser) fn skip_newlines(tokens: &mut TokenStream<'_>) -> usize {
    let mut count = 0;
    while tokens.at(&TokenKind::Newline) {
        tokens.advance();
        count += 1;
    }
    count
}

/// Parses a comma-separated list of expressions until a closing token.
///
/// This utility is shared by list literals and call arguments. The opening
/// delimiter has already been consumed. An immediately encountered closing
/// token produces an empty list.
///
/// Grammar (simplified): `list := (expr ("," expr)*)? closing`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening delimiter.
/// - `closing`: The token that terminates the list (`]` or `)`).
/// - `first_expected`: Message used when the first element cannot start.
/// - `separator_expected`: Message used when neither `,` nor `closing`
///   follows an element.
///
/// # Returns
/// The parsed elements and the span of the closing token.
pub(in crate::interpreter::parser) fn parse_delimited(tokens: &mut TokenStream<'_>,
                                                      closing: &TokenKind,
                                                      first_expected: &str,
                                                      separator_expected: &str)
                                                      -> ParseResult<(Vec<Node>, Span)> {
    let mut items = Vec::new();

    if tokens.at(closing) {
        let close = tokens.advance();
        return Ok((items, close.span.clone()));
    }

    let checkpoint = tokens.checkpoint();
    let first = parse_expression(tokens);
    items.push(or_expected(tokens, checkpoint, first, first_expected)?);

    while tokens.at(&TokenKind::Comma) {
        tokens.advance();
        items.push(parse_expression(tokens)?);
    }

    let close = expect(tokens, closing, separator_expected)?;
    Ok((items, close.span.clone()))
}
