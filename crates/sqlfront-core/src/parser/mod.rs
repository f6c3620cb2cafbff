//! SQL Parser
//!
//! A hand-written recursive descent parser over a token slice, with one
//! function per precedence layer of the expression grammar.

mod error;
mod operators;
mod options;
mod parser;

pub use error::ParseError;
pub use options::{ParserOptions, DEFAULT_MAX_DEPTH};
pub use parser::Parser;
