/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions and statements,
/// performs arithmetic, logic and list operations, manages scopes and
/// produces results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, loops and non-local control flow
///   (`RETURN`, `BREAK`, `CONTINUE`).
/// - Reports runtime errors such as division by zero or illegal operations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// strings, identifiers, keywords and operators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens with their source spans.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, keeping the most specific syntax error.
/// - Supports inline and `END`-terminated block forms.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements numeric arithmetic with integer-to-float fallback.
/// - Provides display, truthiness and equality rules.
pub mod value;
/// Source text and positions.
///
/// Every token, node and error points into a [`position::Source`] through
/// [`position::Position`] and [`position::Span`].
pub mod position;
/// Lexical scopes.
///
/// Name-to-value maps chained to their enclosing scope.
pub mod scope;
/// Call contexts for tracebacks.
pub mod context;
/// The interpreter's link to the terminal and the filesystem.
///
/// Defines the [`host::Host`] trait, the process-backed [`host::StdHost`] and
/// the in-memory [`host::BufferedHost`].
pub mod host;
