//! Token-to-operator tables for each precedence layer.
//!
//! From loosest to tightest binding the layers are `OR`, `AND`, `NOT`,
//! comparison (`= <> < > <= >=`, `LIKE`, `IN`, `BETWEEN`), `IS NULL`,
//! additive (`+ -`), multiplicative (`* /`), unary minus and primary.

use crate::lexer::{Keyword, Operator, TokenKind};

/// Returns the comparison operator for a token, including `LIKE`.
#[must_use]
pub const fn comparison_operator(kind: &TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Operator(op) if op.is_comparison() => Some(*op),
        TokenKind::Keyword(Keyword::Like) => Some(Operator::Like),
        _ => None,
    }
}

/// Returns the additive operator for a token.
#[must_use]
pub const fn additive_operator(kind: &TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Operator(Operator::Plus) => Some(Operator::Plus),
        TokenKind::Operator(Operator::Minus) => Some(Operator::Minus),
        _ => None,
    }
}

/// Returns the multiplicative operator for a token. A bare `*` is
/// multiplication here; elsewhere it is the wildcard.
#[must_use]
pub const fn multiplicative_operator(kind: &TokenKind) -> Option<Operator> {
    match kind {
        TokenKind::Star | TokenKind::Operator(Operator::Multiply) => Some(Operator::Multiply),
        TokenKind::Operator(Operator::Divide) => Some(Operator::Divide),
        _ => None,
    }
}

/// Returns true if the token can start a join clause.
#[must_use]
pub const fn is_join_start(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(
            Keyword::Join
                | Keyword::Inner
                | Keyword::Left
                | Keyword::Right
                | Keyword::Full
                | Keyword::Cross
        )
    )
}
