//! # sqlfront-core
//!
//! A SQL front end: a lexer that turns SQL text into tokens and a
//! recursive descent parser that turns tokens into a typed AST.
//!
//! The grammar covers SELECT (joins, subqueries, aggregates, GROUP BY,
//! HAVING, ORDER BY, LIMIT, OFFSET), INSERT, UPDATE, DELETE and
//! CREATE TABLE. Nothing is executed or validated against a schema.
//!
//! ```rust
//! use sqlfront_core::{parse_sql, Statement};
//!
//! let stmt = parse_sql("SELECT id, name FROM users WHERE age > 18").unwrap();
//! assert!(matches!(stmt, Statement::Select(_)));
//!
//! let err = parse_sql("SELECT * FROM users WHERE").unwrap_err();
//! assert!(err.starts_with("Parser error: "));
//! ```
//!
//! The two stages can also be driven separately:
//!
//! ```rust
//! use sqlfront_core::{parse_with_options, tokenize, ParserOptions};
//!
//! let tokens = tokenize("SELECT ((1))").unwrap();
//! let options = ParserOptions::new().max_depth(2);
//! assert!(parse_with_options(&tokens, &options).is_err());
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;

use tracing::{debug, trace};

pub use ast::{Expr, SelectItem, Statement, TableRef};
pub use error::Error;
pub use lexer::{LexError, Lexer, Span, Token, TokenKind};
pub use parser::{DEFAULT_MAX_DEPTH, ParseError, Parser, ParserOptions};

/// Converts SQL text into tokens, ending with a single
/// [`TokenKind::EndOfInput`].
///
/// # Errors
///
/// Returns the first `LexError` encountered.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    trace!(len = input.len(), "tokenizing");
    match Lexer::new(input).tokenize() {
        Ok(tokens) => {
            debug!(count = tokens.len(), "tokenized input");
            Ok(tokens)
        }
        Err(err) => {
            debug!(%err, "tokenize failed");
            Err(err)
        }
    }
}

/// Parses one statement from tokens using default options.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse(tokens: &[Token]) -> Result<Statement, ParseError> {
    parse_with_options(tokens, &ParserOptions::default())
}

/// Parses one statement from tokens.
///
/// # Errors
///
/// Returns the first `ParseError` encountered.
pub fn parse_with_options(
    tokens: &[Token],
    options: &ParserOptions,
) -> Result<Statement, ParseError> {
    debug!(
        tokens = tokens.len(),
        max_depth = options.max_depth,
        "parsing"
    );
    let statement = Parser::with_options(tokens, *options).parse()?;
    debug!(kind = statement.kind(), "parsed statement");
    Ok(statement)
}

/// Tokenizes and parses SQL text using default options.
///
/// # Errors
///
/// Returns [`Error::Lex`] or [`Error::Parse`] for the first failure.
pub fn try_parse_sql(input: &str) -> Result<Statement, Error> {
    try_parse_sql_with_options(input, &ParserOptions::default())
}

/// Tokenizes and parses SQL text.
///
/// # Errors
///
/// Returns [`Error::Lex`] or [`Error::Parse`] for the first failure.
pub fn try_parse_sql_with_options(
    input: &str,
    options: &ParserOptions,
) -> Result<Statement, Error> {
    let result = tokenize(input)
        .map_err(Error::from)
        .and_then(|tokens| parse_with_options(&tokens, options).map_err(Error::from));
    if let Err(err) = &result {
        debug!(%err, "parse_sql failed");
    }
    result
}

/// Tokenizes and parses SQL text, rendering any failure as a message
/// prefixed with `"Lexer error: "` or `"Parser error: "`.
///
/// # Errors
///
/// Returns the rendered message of the first failure.
pub fn parse_sql(input: &str) -> Result<Statement, String> {
    try_parse_sql(input).map_err(|err| err.to_string())
}
