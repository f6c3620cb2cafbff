//! Tests for predicate expressions: IN, BETWEEN, LIKE, IS NULL and
//! literals.

mod common;
use common::*;

use sqlfront_core::ast::{Expr, Literal, Operator};

#[test]
fn in_list() {
    assert_eq!(
        parse_where("status IN ('active', 'pending')"),
        Expr::ident("status").in_list(vec![Expr::string("active"), Expr::string("pending")])
    );
}

#[test]
fn not_in_list() {
    assert_eq!(
        parse_where("id NOT IN (1, 2, 3)"),
        Expr::In {
            expr: Box::new(Expr::ident("id")),
            list: vec![Expr::integer(1), Expr::integer(2), Expr::integer(3)],
            negated: true,
        }
    );
}

#[test]
fn in_list_with_expressions() {
    assert_eq!(
        parse_where("x IN (a + 1, -2)"),
        Expr::ident("x").in_list(vec![
            Expr::ident("a").binary(Operator::Plus, Expr::integer(1)),
            Expr::integer(-2),
        ])
    );
}

#[test]
fn between() {
    assert_eq!(
        parse_where("age BETWEEN 18 AND 65"),
        Expr::ident("age").between(Expr::integer(18), Expr::integer(65))
    );
}

#[test]
fn not_between() {
    assert_eq!(
        parse_where("age NOT BETWEEN 18 AND 65"),
        Expr::Between {
            expr: Box::new(Expr::ident("age")),
            low: Box::new(Expr::integer(18)),
            high: Box::new(Expr::integer(65)),
            negated: true,
        }
    );
}

#[test]
fn between_followed_by_and() {
    // The first AND belongs to BETWEEN, the second joins the predicates.
    assert_eq!(
        parse_where("a BETWEEN 1 AND 2 AND b = 3"),
        Expr::ident("a")
            .between(Expr::integer(1), Expr::integer(2))
            .and(Expr::ident("b").eq(Expr::integer(3)))
    );
}

#[test]
fn between_with_arithmetic_bounds() {
    assert_eq!(
        parse_where("x BETWEEN a - 1 AND a + 1"),
        Expr::ident("x").between(
            Expr::ident("a").binary(Operator::Minus, Expr::integer(1)),
            Expr::ident("a").binary(Operator::Plus, Expr::integer(1)),
        )
    );
}

#[test]
fn like() {
    assert_eq!(
        parse_where("name LIKE 'J%'"),
        Expr::ident("name").binary(Operator::Like, Expr::string("J%"))
    );
}

#[test]
fn not_like() {
    assert_eq!(
        parse_where("name NOT LIKE 'J%'"),
        Expr::ident("name")
            .binary(Operator::Like, Expr::string("J%"))
            .negated()
    );
}

#[test]
fn is_null() {
    assert_eq!(
        parse_where("email IS NULL"),
        Expr::ident("email").is_null()
    );
}

#[test]
fn is_not_null() {
    assert_eq!(
        parse_where("email IS NOT NULL"),
        Expr::ident("email").is_not_null()
    );
}

#[test]
fn is_null_applies_to_additive_operand() {
    assert_eq!(
        parse_where("a + 1 IS NULL"),
        Expr::ident("a")
            .binary(Operator::Plus, Expr::integer(1))
            .is_null()
    );
}

#[test]
fn is_null_inside_and() {
    assert_eq!(
        parse_where("a IS NULL AND b IS NOT NULL"),
        Expr::ident("a").is_null().and(Expr::ident("b").is_not_null())
    );
}

#[test]
fn is_requires_null() {
    let err = parse_err("SELECT * FROM t WHERE a IS 1");
    assert_eq!(err.expected.as_deref(), Some("NULL"));
}

#[test]
fn literal_kinds() {
    assert_eq!(parse_where("a = 'text'"), Expr::ident("a").eq(Expr::string("text")));
    assert_eq!(parse_where("a = \"text\""), Expr::ident("a").eq(Expr::string("text")));
    assert_eq!(parse_where("a = 42"), Expr::ident("a").eq(Expr::integer(42)));
    assert_eq!(parse_where("a = 0.5"), Expr::ident("a").eq(Expr::float(0.5)));
    assert_eq!(
        parse_where("a = false"),
        Expr::ident("a").eq(Expr::Literal(Literal::Boolean(false)))
    );
}

#[test]
fn string_escapes_are_resolved() {
    assert_eq!(
        parse_where(r"a = 'it\'s'"),
        Expr::ident("a").eq(Expr::string("it's"))
    );
    assert_eq!(
        parse_where("a = 'it''s'"),
        Expr::ident("a").eq(Expr::string("it's"))
    );
    assert_eq!(
        parse_where(r"a = 'line\nbreak'"),
        Expr::ident("a").eq(Expr::string("line\nbreak"))
    );
}

#[test]
fn nested_parentheses() {
    assert_eq!(
        parse_where("((a = 1))"),
        Expr::ident("a").eq(Expr::integer(1))
    );
}

#[test]
fn qualified_identifiers_in_predicates() {
    assert_eq!(
        parse_where("t.a = u.b"),
        Expr::qualified("t", "a").eq(Expr::qualified("u", "b"))
    );
}

#[test]
fn aggregate_in_arithmetic() {
    let s = parse_select("SELECT SUM(a) / COUNT(*) FROM t");
    assert!(matches!(
        &s.columns[0],
        sqlfront_core::SelectItem::ProjectedExpr {
            expr: Expr::BinaryOp {
                op: Operator::Divide,
                ..
            },
            ..
        }
    ));
}
