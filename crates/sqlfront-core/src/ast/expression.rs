//! Expression AST types.

use super::Statement;
use crate::lexer::{Keyword, Literal, Operator};

/// Aggregate functions recognized by the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl AggregateFunc {
    /// Maps an aggregate keyword to its function.
    #[must_use]
    pub const fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Count => Some(Self::Count),
            Keyword::Sum => Some(Self::Sum),
            Keyword::Avg => Some(Self::Avg),
            Keyword::Min => Some(Self::Min),
            Keyword::Max => Some(Self::Max),
            _ => None,
        }
    }

    /// Returns the SQL function name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
        }
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// An unqualified column name.
    Identifier(String),

    /// A `table.column` reference.
    QualifiedIdentifier {
        /// Table name or alias.
        table: String,
        /// Column name.
        column: String,
    },

    /// A bare `*`.
    Star,

    /// `table.*`.
    QualifiedStar(String),

    /// A binary expression.
    BinaryOp {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: Operator,
        /// Right operand.
        right: Box<Expr>,
    },

    /// Logical `NOT`.
    Not(Box<Expr>),

    /// Arithmetic negation of a non-literal operand.
    Negate(Box<Expr>),

    /// An aggregate function call.
    Aggregate {
        /// The function.
        func: AggregateFunc,
        /// The single argument, `Star` for `COUNT(*)`.
        arg: Box<Expr>,
        /// Whether `DISTINCT` was specified.
        distinct: bool,
    },

    /// `IS NULL` / `IS NOT NULL`.
    IsNull {
        /// The expression to check.
        expr: Box<Expr>,
        /// Whether this is IS NOT NULL.
        negated: bool,
    },

    /// `IN (v1, v2, ...)`.
    In {
        /// The expression to check.
        expr: Box<Expr>,
        /// The candidate values.
        list: Vec<Expr>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// `IN (SELECT ...)`.
    InSubquery {
        /// The expression to check.
        expr: Box<Expr>,
        /// The subquery producing candidate values.
        subquery: Box<Statement>,
        /// Whether this is NOT IN.
        negated: bool,
    },

    /// `BETWEEN low AND high`.
    Between {
        /// The expression to check.
        expr: Box<Expr>,
        /// Lower bound.
        low: Box<Expr>,
        /// Upper bound.
        high: Box<Expr>,
        /// Whether this is NOT BETWEEN.
        negated: bool,
    },

    /// A parenthesized scalar subquery.
    Subquery(Box<Statement>),
}

impl Expr {
    /// Creates an unqualified column reference.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a `table.column` reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::QualifiedIdentifier {
            table: table.into(),
            column: column.into(),
        }
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new string literal.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: Operator, right: Self) -> Self {
        Self::BinaryOp {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(Operator::Equals, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(Operator::GreaterThan, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(Operator::LessThan, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(Operator::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(Operator::Or, right)
    }

    /// Wraps the expression in a logical NOT.
    #[must_use]
    pub fn negated(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Creates an IS NULL expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: false,
        }
    }

    /// Creates an IS NOT NULL expression.
    #[must_use]
    pub fn is_not_null(self) -> Self {
        Self::IsNull {
            expr: Box::new(self),
            negated: true,
        }
    }

    /// Creates an IN expression.
    #[must_use]
    pub fn in_list(self, list: Vec<Self>) -> Self {
        Self::In {
            expr: Box::new(self),
            list,
            negated: false,
        }
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, low: Self, high: Self) -> Self {
        Self::Between {
            expr: Box::new(self),
            low: Box::new(low),
            high: Box::new(high),
            negated: false,
        }
    }

    /// Creates an aggregate call.
    #[must_use]
    pub fn aggregate(func: AggregateFunc, arg: Self, distinct: bool) -> Self {
        Self::Aggregate {
            func,
            arg: Box::new(arg),
            distinct,
        }
    }

    /// Returns true if the expression contains a subquery anywhere.
    #[must_use]
    pub fn contains_subquery(&self) -> bool {
        match self {
            Self::Subquery(_) | Self::InSubquery { .. } => true,
            Self::Literal(_)
            | Self::Identifier(_)
            | Self::QualifiedIdentifier { .. }
            | Self::Star
            | Self::QualifiedStar(_) => false,
            Self::BinaryOp { left, right, .. } => {
                left.contains_subquery() || right.contains_subquery()
            }
            Self::Not(inner) | Self::Negate(inner) => inner.contains_subquery(),
            Self::Aggregate { arg, .. } => arg.contains_subquery(),
            Self::IsNull { expr, .. } => expr.contains_subquery(),
            Self::In { expr, list, .. } => {
                expr.contains_subquery() || list.iter().any(Self::contains_subquery)
            }
            Self::Between {
                expr, low, high, ..
            } => expr.contains_subquery() || low.contains_subquery() || high.contains_subquery(),
        }
    }
}
