//! Crate-level error type.

use crate::lexer::LexError;
use crate::parser::ParseError;

/// Any failure while turning SQL text into a [`Statement`](crate::Statement).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The input could not be tokenized.
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),
    /// The tokens do not form a valid statement.
    #[error("Parser error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Returns the byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Lex(err) => err.position,
            Self::Parse(err) => err.span.start,
        }
    }
}
