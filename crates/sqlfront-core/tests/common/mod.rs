#![allow(dead_code)]

use sqlfront_core::ast::{
    CreateTableStatement, DeleteStatement, Expr, InsertStatement, SelectStatement, Statement,
    UpdateStatement,
};
use sqlfront_core::{ParseError, parse as parse_tokens, tokenize};

pub fn parse(sql: &str) -> Statement {
    let tokens =
        tokenize(sql).unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e:?}"));
    parse_tokens(&tokens).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    let tokens =
        tokenize(sql).unwrap_or_else(|e| panic!("Failed to tokenize: {sql}\nError: {e:?}"));
    parse_tokens(&tokens).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_create(sql: &str) -> CreateTableStatement {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

/// Parses `SELECT * FROM t WHERE <expr>` and returns the WHERE expression.
pub fn parse_where(expr: &str) -> Expr {
    parse_select(&format!("SELECT * FROM t WHERE {expr}"))
        .where_clause
        .unwrap_or_else(|| panic!("Expected WHERE clause for: {expr}"))
}
