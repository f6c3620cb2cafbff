//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! `Expr` and `Statement` are mutually recursive: subqueries embed a
//! boxed `Statement` inside an expression.

mod expression;
mod statement;

pub use crate::lexer::{Literal, Operator};
pub use expression::{AggregateFunc, Expr};
pub use statement::{
    Assignment, ColumnDef, CreateTableStatement, DeleteStatement, InsertStatement, JoinType,
    OrderBy, OrderDirection, SelectItem, SelectStatement, Statement, TableRef, UpdateStatement,
};
