//! Lexer error type.

/// A lexical error: the first character sequence that could not be
/// turned into a token. Tokenizing stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at position {position}")]
pub struct LexError {
    /// The error message.
    pub message: String,
    /// Byte offset of the offending input.
    pub position: usize,
}

impl LexError {
    /// Creates a new lex error.
    #[must_use]
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }

    /// Creates an "unexpected character" error.
    #[must_use]
    pub fn unexpected_char(c: char, position: usize) -> Self {
        Self::new(format!("Unexpected character '{c}'"), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = LexError::unexpected_char('#', 14);
        assert_eq!(err.to_string(), "Unexpected character '#' at position 14");
    }
}
