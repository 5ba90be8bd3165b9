use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream},
            unary::parse_factor,
            utils::{EXPECTED_COMPARISON, or_expected},
        },
    },
};

/// Parses `AND`/`OR` chains.
///
/// Both operators share the lowest precedence and associate to the left.
///
/// The rule is: `logical := comparison (("AND" | "OR") comparison)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining comparison-level nodes.
pub fn parse_logical(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut left = parse_comparison(tokens)?;
    loop {
        if let Some(op) = token_to_binary_operator(tokens.kind())
           && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            tokens.advance();
            let right = parse_comparison(tokens)?;
            left = Node::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses comparisons and `NOT`.
///
/// `NOT` binds looser than every arithmetic operator, so `NOT a == b` negates
/// the whole comparison.
///
/// The rule is: `comparison := "NOT" comparison | additive (cmp additive)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A comparison tree, or a `NOT` node wrapping one.
pub fn parse_comparison(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let checkpoint = tokens.checkpoint();

    if tokens.at(&TokenKind::Not) {
        let op = tokens.advance();
        let operand = parse_comparison(tokens)?;
        return Ok(Node::unary(UnaryOperator::Not, &op.span, operand));
    }

    let result = parse_comparison_chain(tokens);
    or_expected(tokens, checkpoint, result, EXPECTED_COMPARISON)
}

fn parse_comparison_chain(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut left = parse_additive(tokens)?;
    loop {
        if let Some(op) = token_to_binary_operator(tokens.kind())
           && matches!(op,
                       BinaryOperator::Equal
                       | BinaryOperator::NotEqual
                       | BinaryOperator::Less
                       | BinaryOperator::Greater
                       | BinaryOperator::LessEqual
                       | BinaryOperator::GreaterEqual)
        {
            tokens.advance();
            let right = parse_additive(tokens)?;
            left = Node::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining multiplicative-level nodes.
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(op) = token_to_binary_operator(tokens.kind())
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.advance();
            let right = parse_multiplicative(tokens)?;
            left = Node::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let mut left = parse_factor(tokens)?;
    loop {
        if let Some(op) = token_to_binary_operator(tokens.kind())
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.advance();
            let right = parse_factor(tokens)?;
            left = Node::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to the binary operator it spells, if any.
///
/// # Example
/// ```
/// use basil::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Caret), Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&TokenKind::Or), Some(BinaryOperator::Or));
/// assert_eq!(token_to_binary_operator(&TokenKind::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &TokenKind) -> Option<BinaryOperator> {
    let op = match token {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Star => BinaryOperator::Mul,
        TokenKind::Slash => BinaryOperator::Div,
        TokenKind::Percent => BinaryOperator::Mod,
        TokenKind::Caret => BinaryOperator::Pow,
        TokenKind::EqualEqual => BinaryOperator::Equal,
        TokenKind::BangEqual => BinaryOperator::NotEqual,
        TokenKind::Less => BinaryOperator::Less,
        TokenKind::Greater => BinaryOperator::Greater,
        TokenKind::LessEqual => BinaryOperator::LessEqual,
        TokenKind::GreaterEqual => BinaryOperator::GreaterEqual,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        _ => return None,
    };
    Some(op)
}
