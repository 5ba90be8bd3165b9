use std::rc::Rc;

use logos::Logos;

use crate::{
    error::SyntaxError,
    interpreter::position::{Source, Span},
};

/// The kind of a lexical token, together with its payload.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Keywords are upper-case and reserved; anything else shaped like a word is
/// an [`TokenKind::Identifier`].
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum TokenKind {
    /// Floating-point literal tokens, such as `3.14` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_float)]
    Float(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Int(i64),
    /// String literal tokens, such as `"hello\n"`. The payload has its escape
    /// sequences already resolved.
    #[regex(r#""([^"\\]|\\(.|\n))*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// An opening quote that is never closed. Reported as an error by
    /// [`tokenize`].
    #[regex(r#""([^"\\]|\\(.|\n))*\\?"#, allow_greedy = true)]
    UnterminatedString,
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `VAR`
    #[token("VAR")]
    Var,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// `IF`
    #[token("IF")]
    If,
    /// `THEN`
    #[token("THEN")]
    Then,
    /// `ELIF`
    #[token("ELIF")]
    Elif,
    /// `ELSE`
    #[token("ELSE")]
    Else,
    /// `FOR`
    #[token("FOR")]
    For,
    /// `TO`
    #[token("TO")]
    To,
    /// `STEP`
    #[token("STEP")]
    Step,
    /// `WHILE`
    #[token("WHILE")]
    While,
    /// `FUN`
    #[token("FUN")]
    Fun,
    /// `END`
    #[token("END")]
    End,
    /// `RETURN`
    #[token("RETURN")]
    Return,
    /// `CONTINUE`
    #[token("CONTINUE")]
    Continue,
    /// `BREAK`
    #[token("BREAK")]
    Break,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `->`
    #[token("->")]
    Arrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// A lone `!`. Only valid as the start of `!=`, reported by [`tokenize`].
    #[token("!")]
    Bang,
    /// End of statement: a line break or `;`.
    #[token("\n")]
    #[token(";")]
    Newline,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End of input. Appended once by [`tokenize`], never matched.
    Eof,
}

/// A token together with the source range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Splits a unit of source into tokens, ending with a single
/// [`TokenKind::Eof`].
///
/// Lexing stops at the first problem:
/// - an unknown character is an `Illegal Character` error,
/// - a lone `!` or an unterminated string is an `Expected Character` error,
/// - an integer literal beyond 64 bits is a `Literal Too Large` error.
///
/// # Parameters
/// - `source`: The unit to tokenize.
///
/// # Returns
/// The token sequence, or the first lexical error.
///
/// # Example
/// ```
/// use basil::interpreter::{
///     lexer::{TokenKind, tokenize},
///     position::Source,
/// };
///
/// let source = Source::new("demo", "VAR x = 2.5 # comment");
/// let kinds = tokenize(&source).unwrap()
///                              .into_iter()
///                              .map(|t| t.kind)
///                              .collect::<Vec<_>>();
///
/// assert_eq!(kinds,
///            vec![TokenKind::Var,
///                 TokenKind::Identifier("x".into()),
///                 TokenKind::Equals,
///                 TokenKind::Float(2.5),
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &Rc<Source>) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = TokenKind::lexer(source.text());
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let start = Source::position(source, range.start);

        match result {
            Ok(TokenKind::Bang) => {
                let end = start.advance('!');
                return Err(SyntaxError::expected_character("'=' (after '!')",
                                                           Span::new(start, end)));
            },
            Ok(TokenKind::UnterminatedString) => {
                let end = Source::position(source, range.end);
                return Err(SyntaxError::expected_character("'\"' to close string literal",
                                                           Span::new(start, end)));
            },
            Ok(kind) => {
                let end = Source::position(source, range.end);
                tokens.push(Token { kind,
                                    span: Span::new(start, end) });
            },
            Err(()) => {
                let slice = lexer.slice();
                let Some(ch) = slice.chars().next() else {
                    continue;
                };
                if ch.is_ascii_digit() {
                    let end = Source::position(source, range.end);
                    return Err(SyntaxError::literal_too_large(slice, Span::new(start, end)));
                }
                let end = start.advance(ch);
                return Err(SyntaxError::illegal_character(ch, Span::new(start, end)));
            },
        }
    }

    let end = Source::position(source, source.text().len());
    tokens.push(Token { kind: TokenKind::Eof,
                        span: Span::new(end.clone(), end) });

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_float(lex: &logos::Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the literal does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<TokenKind>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Resolves the escape sequences of a string literal.
///
/// `\n` and `\t` become a newline and a tab; any other escaped character
/// stands for itself, so `\"` and `\\` work as expected.
fn parse_string(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    let body = &slice[1..slice.len() - 1];

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => {},
        }
    }
    out
}
