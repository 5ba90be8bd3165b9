use std::rc::Rc;

use crate::{
    ast::{BodyForm, ElseCase, ForLoop, FunctionDef, IfCase, Node, NodeKind},
    interpreter::{
        lexer::TokenKind,
        parser::{
            core::{ParseResult, TokenStream, parse_expression},
            statement::{parse_statement, parse_statements},
            utils::{expect, expect_identifier},
        },
    },
};

/// Parses the body that follows `THEN` or `ELSE`.
///
/// A newline right after the keyword selects block form: a statement
/// sequence, whose closing `END` is left for the caller to check. Anything
/// else is a single inline statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned right after `THEN` or `ELSE`.
///
/// # Returns
/// The body and the form it was written in.
fn parse_body(tokens: &mut TokenStream<'_>) -> ParseResult<(Node, BodyForm)> {
    if tokens.at(&TokenKind::Newline) {
        tokens.advance();
        Ok((parse_statements(tokens)?, BodyForm::Block))
    } else {
        Ok((parse_statement(tokens)?, BodyForm::Inline))
    }
}

/// Parses a loop body, requiring `END` after the block form.
fn parse_loop_body(tokens: &mut TokenStream<'_>) -> ParseResult<(Node, BodyForm)> {
    let (body, form) = parse_body(tokens)?;
    if form == BodyForm::Block {
        expect(tokens, &TokenKind::End, "Expected 'END'")?;
    }
    Ok((body, form))
}

/// Parses a conditional with any number of `ELIF` branches and an optional
/// `ELSE`.
///
/// Syntax:
/// ```text
///     IF <condition> THEN <statement> ELIF <condition> THEN <statement> ELSE <statement>
///
///     IF <condition> THEN
///         <statements>
///     ELIF <condition> THEN
///         <statements>
///     ELSE
///         <statements>
///     END
/// ```
/// After a block case, the next token must be `END`, `ELIF` or `ELSE`. A block
/// `ELSE` must be closed by `END`. Inline cases and an inline `ELSE` need no
/// `END`.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `IF`.
///
/// # Returns
/// An `If` node holding every case.
///
/// # Errors
/// - `Expected 'THEN'` after a condition.
/// - `Expected 'END', 'ELIF' or 'ELSE'` after a block case.
/// - `Expected 'END'` after a block `ELSE`.
/// - Propagates any errors from sub-expression parsing.
pub fn parse_if(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let if_token = expect(tokens, &TokenKind::If, "Expected 'IF'")?;
    let mut cases = Vec::new();

    let else_case = loop {
        let condition = parse_expression(tokens)?;
        expect(tokens, &TokenKind::Then, "Expected 'THEN'")?;
        let (body, form) = parse_body(tokens)?;
        cases.push(IfCase { condition, body, form });

        match (tokens.kind(), form) {
            (TokenKind::Elif, _) => {
                tokens.advance();
            },
            (TokenKind::Else, _) => {
                tokens.advance();
                break Some(parse_else(tokens)?);
            },
            (TokenKind::End, BodyForm::Block) => {
                tokens.advance();
                break None;
            },
            (_, BodyForm::Block) => {
                return Err(tokens.error_here("Expected 'END', 'ELIF' or 'ELSE'"));
            },
            (_, BodyForm::Inline) => break None,
        }
    };

    Ok(Node::if_chain(&if_token.span, cases, else_case))
}

fn parse_else(tokens: &mut TokenStream<'_>) -> ParseResult<ElseCase> {
    let (body, form) = parse_loop_body(tokens)?;
    Ok(ElseCase { body, form })
}

/// Parses a counted loop.
///
/// Syntax:
/// ```text
///     FOR <var> = <start> TO <end> [STEP <step>] THEN <statement>
///
///     FOR <var> = <start> TO <end> [STEP <step>] THEN
///         <statements>
///     END
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at `FOR`.
///
/// # Returns
/// A `For` node spanning the loop variable and the body.
pub fn parse_for(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    expect(tokens, &TokenKind::For, "Expected 'FOR'")?;
    let (var, var_span) = expect_identifier(tokens, "Expected identifier")?;
    expect(tokens, &TokenKind::Equals, "Expected '='")?;
    let start = parse_expression(tokens)?;
    expect(tokens, &TokenKind::To, "Expected 'TO'")?;
    let end = parse_expression(tokens)?;

    let step = if tokens.at(&TokenKind::Step) {
        tokens.advance();
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    expect(tokens, &TokenKind::Then, "Expected 'THEN'")?;
    let (body, form) = parse_loop_body(tokens)?;

    Ok(Node::for_loop(&var_span,
                      ForLoop { var,
                                start,
                                end,
                                step,
                                body,
                                form }))
}

/// Parses a conditional loop.
///
/// Syntax:
/// ```text
///     WHILE <condition> THEN <statement>
///
///     WHILE <condition> THEN
///         <statements>
///     END
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at `WHILE`.
///
/// # Returns
/// A `While` node spanning the condition and the body.
pub fn parse_while(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    expect(tokens, &TokenKind::While, "Expected 'WHILE'")?;
    let condition = parse_expression(tokens)?;
    expect(tokens, &TokenKind::Then, "Expected 'THEN'")?;
    let (body, form) = parse_loop_body(tokens)?;

    Ok(Node::while_loop(condition, body, form))
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     FUN [name](<params>) -> <expr>
///
///     FUN [name](<params>)
///         <statements>
///     END
/// ```
/// An arrow body returns its value automatically. A block body returns what
/// `RETURN` hands it, or null.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `FUN`.
///
/// # Returns
/// A `FuncDef` node spanning from `FUN` to the end of the body.
pub fn parse_function(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let fun = expect(tokens, &TokenKind::Fun, "Expected 'FUN'")?;

    let name = if let TokenKind::Identifier(name) = tokens.kind() {
        tokens.advance();
        expect(tokens, &TokenKind::LParen, "Expected '('")?;
        Some(name.clone())
    } else {
        expect(tokens, &TokenKind::LParen, "Expected identifier or '('")?;
        None
    };

    let mut params = Vec::new();
    if let TokenKind::Identifier(first) = tokens.kind() {
        tokens.advance();
        params.push(first.clone());
        while tokens.at(&TokenKind::Comma) {
            tokens.advance();
            params.push(expect_identifier(tokens, "Expected identifier")?.0);
        }
        expect(tokens, &TokenKind::RParen, "Expected ',' or ')'")?;
    } else {
        expect(tokens, &TokenKind::RParen, "Expected identifier or ')'")?;
    }

    let (body, form, end_span) = match tokens.kind() {
        TokenKind::Arrow => {
            tokens.advance();
            let body = parse_expression(tokens)?;
            let end_span = body.span.clone();
            (body, BodyForm::Inline, end_span)
        },
        TokenKind::Newline => {
            tokens.advance();
            let body = parse_statements(tokens)?;
            let end = expect(tokens, &TokenKind::End, "Expected 'END'")?;
            (body, BodyForm::Block, end.span.clone())
        },
        _ => return Err(tokens.error_here("Expected '->' or NEWLINE")),
    };

    let definition = FunctionDef { name,
                                   params,
                                   body,
                                   form };
    Ok(Node::new(NodeKind::FuncDef(Rc::new(definition)), fun.span.to(&end_span)))
}
