//! Tests for SELECT clauses: WHERE, GROUP BY, HAVING, ORDER BY, LIMIT
//! and OFFSET.

mod common;
use common::*;

use sqlfront_core::ast::{AggregateFunc, Expr, OrderBy, OrderDirection};

#[test]
fn where_simple_comparison() {
    let s = parse_select("SELECT * FROM users WHERE age > 18");
    assert_eq!(s.where_clause, Some(Expr::ident("age").gt(Expr::integer(18))));
}

#[test]
fn where_equals_null_is_a_comparison() {
    // `= NULL` is not rewritten to IS NULL.
    let s = parse_select("SELECT * FROM users WHERE email = NULL");
    assert_eq!(s.where_clause, Some(Expr::ident("email").eq(Expr::null())));
}

#[test]
fn group_by_single_column() {
    let s = parse_select("SELECT city, COUNT(*) FROM users GROUP BY city");
    assert_eq!(s.group_by, vec![Expr::ident("city")]);
}

#[test]
fn group_by_multiple_columns() {
    let s = parse_select("SELECT a, b FROM t GROUP BY a, t.b");
    assert_eq!(s.group_by, vec![Expr::ident("a"), Expr::qualified("t", "b")]);
}

#[test]
fn group_by_with_having() {
    let s = parse_select("SELECT city FROM users GROUP BY city HAVING COUNT(*) > 5");
    assert_eq!(
        s.having,
        Some(Expr::aggregate(AggregateFunc::Count, Expr::Star, false).gt(Expr::integer(5)))
    );
}

#[test]
fn order_by_defaults_to_ascending() {
    let s = parse_select("SELECT * FROM users ORDER BY name");
    assert_eq!(
        s.order_by,
        vec![OrderBy {
            expr: Expr::ident("name"),
            direction: OrderDirection::Asc
        }]
    );
    assert!(s.order_by[0].is_ascending());
}

#[test]
fn order_by_mixed_directions() {
    let s = parse_select("SELECT * FROM users ORDER BY age DESC, name ASC, id");
    let directions: Vec<bool> = s.order_by.iter().map(OrderBy::is_ascending).collect();
    assert_eq!(directions, vec![false, true, true]);
}

#[test]
fn order_by_expression() {
    let s = parse_select("SELECT * FROM items ORDER BY price * qty DESC");
    assert_eq!(s.order_by.len(), 1);
    assert_eq!(s.order_by[0].direction, OrderDirection::Desc);
    assert!(matches!(s.order_by[0].expr, Expr::BinaryOp { .. }));
}

#[test]
fn limit_only() {
    let s = parse_select("SELECT * FROM users LIMIT 10");
    assert_eq!(s.limit, Some(10));
    assert_eq!(s.offset, None);
}

#[test]
fn limit_with_offset() {
    let s = parse_select("SELECT * FROM users LIMIT 10 OFFSET 5");
    assert_eq!(s.limit, Some(10));
    assert_eq!(s.offset, Some(5));
}

#[test]
fn limit_zero() {
    let s = parse_select("SELECT * FROM users LIMIT 0");
    assert_eq!(s.limit, Some(0));
}

#[test]
fn limit_rejects_non_integer() {
    let err = parse_err("SELECT * FROM users LIMIT 'ten'");
    assert_eq!(
        err.expected.as_deref(),
        Some("non-negative integer after LIMIT")
    );
    let _ = parse_err("SELECT * FROM users LIMIT 2.5");
    let _ = parse_err("SELECT * FROM users LIMIT -1");
}

#[test]
fn offset_rejects_expression() {
    let err = parse_err("SELECT * FROM users LIMIT 1 OFFSET n");
    assert_eq!(
        err.expected.as_deref(),
        Some("non-negative integer after OFFSET")
    );
}

#[test]
fn all_clauses_together() {
    let s = parse_select(
        "SELECT DISTINCT city, COUNT(*) AS n FROM users u \
         WHERE u.active = TRUE GROUP BY city HAVING COUNT(*) >= 2 \
         ORDER BY n DESC LIMIT 5 OFFSET 10;",
    );
    assert!(s.distinct);
    assert_eq!(s.columns.len(), 2);
    assert!(s.from.is_some());
    assert!(s.where_clause.is_some());
    assert_eq!(s.group_by.len(), 1);
    assert!(s.having.is_some());
    assert_eq!(s.order_by.len(), 1);
    assert_eq!(s.limit, Some(5));
    assert_eq!(s.offset, Some(10));
}

#[test]
fn trailing_semicolon_is_accepted() {
    let s = parse_select("SELECT * FROM users;");
    assert!(s.from.is_some());
}

#[test]
fn clauses_out_of_order_are_rejected() {
    let err = parse_err("SELECT * FROM users LIMIT 1 WHERE a = 1");
    assert_eq!(err.expected.as_deref(), Some("end of statement"));
}

#[test]
fn keywords_are_case_insensitive() {
    let upper = parse("SELECT * FROM users WHERE a = 1 ORDER BY b DESC");
    let lower = parse("select * from users where a = 1 order by b desc");
    assert_eq!(upper, lower);
}
