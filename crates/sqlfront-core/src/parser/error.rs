//! Parser error types.

use crate::lexer::{Span, TokenKind};

/// A parse error. Parsing stops at the first one; there is no recovery.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message} at position {span}")]
pub struct ParseError {
    /// The error message.
    pub message: String,
    /// The location of the offending token in the source.
    pub span: Span,
    /// Index of the offending token in the token sequence.
    pub position: usize,
    /// Expected tokens (if applicable).
    pub expected: Option<String>,
    /// The actual token found.
    pub found: Option<TokenKind>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>, span: Span, position: usize) -> Self {
        Self {
            message: message.into(),
            span,
            position,
            expected: None,
            found: None,
        }
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected(
        expected: impl Into<String>,
        found: TokenKind,
        span: Span,
        position: usize,
    ) -> Self {
        let expected_str: String = expected.into();
        Self {
            message: format!("Unexpected token: expected {expected_str}, found {found}"),
            span,
            position,
            expected: Some(expected_str),
            found: Some(found),
        }
    }

    /// Creates an "unexpected end of input" error.
    #[must_use]
    pub fn unexpected_eof(expected: impl Into<String>, span: Span, position: usize) -> Self {
        let expected_str: String = expected.into();
        Self {
            message: format!("Unexpected end of input: expected {expected_str}"),
            span,
            position,
            expected: Some(expected_str),
            found: Some(TokenKind::EndOfInput),
        }
    }
}
