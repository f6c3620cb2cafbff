//! Tests for `tokenize`: token kinds, spans and lexical errors.

use sqlfront_core::lexer::{Keyword, Literal, Operator};
use sqlfront_core::{Span, TokenKind, tokenize};

fn kinds(sql: &str) -> Vec<TokenKind> {
    tokenize(sql)
        .unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e:?}"))
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn select_statement_tokens() {
    assert_eq!(
        kinds("SELECT id, name FROM users WHERE age >= 18;"),
        vec![
            TokenKind::Keyword(Keyword::Select),
            TokenKind::Identifier(String::from("id")),
            TokenKind::Comma,
            TokenKind::Identifier(String::from("name")),
            TokenKind::Keyword(Keyword::From),
            TokenKind::Identifier(String::from("users")),
            TokenKind::Keyword(Keyword::Where),
            TokenKind::Identifier(String::from("age")),
            TokenKind::Operator(Operator::GreaterOrEqual),
            TokenKind::Literal(Literal::Integer(18)),
            TokenKind::Semicolon,
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn end_of_input_appears_exactly_once() {
    for sql in ["", "SELECT", "a.b * (c)", "-- only a comment"] {
        let kinds = kinds(sql);
        let eof_count = kinds.iter().filter(|k| **k == TokenKind::EndOfInput).count();
        assert_eq!(eof_count, 1, "{sql}");
        assert_eq!(kinds.last(), Some(&TokenKind::EndOfInput), "{sql}");
    }
}

#[test]
fn star_is_distinct_from_multiply() {
    assert_eq!(
        kinds("*"),
        vec![TokenKind::Star, TokenKind::EndOfInput]
    );
}

#[test]
fn all_operators() {
    assert_eq!(
        kinds("= <> != < > <= >= + - /"),
        vec![
            TokenKind::Operator(Operator::Equals),
            TokenKind::Operator(Operator::NotEquals),
            TokenKind::Operator(Operator::NotEquals),
            TokenKind::Operator(Operator::LessThan),
            TokenKind::Operator(Operator::GreaterThan),
            TokenKind::Operator(Operator::LessOrEqual),
            TokenKind::Operator(Operator::GreaterOrEqual),
            TokenKind::Operator(Operator::Plus),
            TokenKind::Operator(Operator::Minus),
            TokenKind::Operator(Operator::Divide),
            TokenKind::EndOfInput,
        ]
    );
}

#[test]
fn spans_cover_token_text() {
    let sql = "SELECT name FROM users";
    let tokens = tokenize(sql).unwrap();
    let texts: Vec<&str> = tokens
        .iter()
        .filter_map(|t| t.span.slice(sql))
        .collect();
    assert_eq!(texts, vec!["SELECT", "name", "FROM", "users", ""]);
    assert_eq!(tokens[1].span, Span::new(7, 11));
}

#[test]
fn string_span_includes_quotes() {
    let tokens = tokenize("x = 'a''b'").unwrap();
    assert_eq!(tokens[2].span, Span::new(4, 10));
    assert_eq!(
        tokens[2].kind,
        TokenKind::Literal(Literal::String(String::from("a'b")))
    );
}

#[test]
fn tokenize_is_deterministic() {
    let sql = "SELECT COUNT(DISTINCT a) FROM t WHERE b NOT IN (1, 2.5, 'x') -- c";
    assert_eq!(tokenize(sql), tokenize(sql));
}

#[test]
fn unexpected_character_reports_position() {
    let err = tokenize("SELECT @x").unwrap_err();
    assert_eq!(err.position, 7);
    assert_eq!(err.to_string(), "Unexpected character '@' at position 7");
}

#[test]
fn lone_bang_is_error() {
    let err = tokenize("a ! b").unwrap_err();
    assert_eq!(err.position, 2);
}

#[test]
fn unterminated_string_reports_start() {
    let err = tokenize("SELECT 'abc").unwrap_err();
    assert_eq!(err.position, 7);
    assert_eq!(err.message, "Unterminated string literal");
}

#[test]
fn mismatched_quotes_do_not_terminate() {
    let err = tokenize("SELECT 'abc\"").unwrap_err();
    assert_eq!(err.message, "Unterminated string literal");
}

#[test]
fn integer_overflow_is_error() {
    let err = tokenize("99999999999999999999").unwrap_err();
    assert!(err.message.starts_with("Invalid integer literal"));
    assert_eq!(err.position, 0);
}

#[test]
fn largest_integer_is_accepted() {
    assert_eq!(
        kinds("9223372036854775807"),
        vec![
            TokenKind::Literal(Literal::Integer(i64::MAX)),
            TokenKind::EndOfInput
        ]
    );
}
