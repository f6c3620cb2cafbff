//! SQL Lexer/Tokenizer
//!
//! A hand-written single-pass lexer that turns SQL text into a flat
//! token sequence terminated by [`TokenKind::EndOfInput`].

mod error;
mod span;
mod token;
mod tokenizer;

pub use error::LexError;
pub use span::Span;
pub use token::{Keyword, Literal, Operator, Token, TokenKind};
pub use tokenizer::Lexer;
