//! SQL Parser implementation.

use super::error::ParseError;
use super::operators::{
    additive_operator, comparison_operator, is_join_start, multiplicative_operator,
};
use super::options::ParserOptions;
use crate::ast::{
    AggregateFunc, Assignment, ColumnDef, CreateTableStatement, DeleteStatement, Expr,
    InsertStatement, JoinType, Literal, Operator, OrderBy, OrderDirection, SelectItem,
    SelectStatement, Statement, TableRef, UpdateStatement,
};
use crate::lexer::{Keyword, Span, Token, TokenKind};

/// Returned by [`Parser::current`] when a token slice lacks its
/// end-of-input marker.
static END_OF_INPUT: Token = Token::new(TokenKind::EndOfInput, Span::point(0));

/// SQL Parser.
///
/// The parser walks a token slice with a cursor. Every production either
/// consumes its tokens and returns a node, or fails with the first
/// [`ParseError`]; nothing is retried or recovered.
pub struct Parser<'a> {
    tokens: &'a [Token],
    /// Index of the current token.
    pos: usize,
    /// Current nesting of expressions and subqueries.
    depth: usize,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Creates a new parser with default options.
    #[must_use]
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_options(tokens, ParserOptions::default())
    }

    /// Creates a new parser with the given options.
    #[must_use]
    pub const fn with_options(tokens: &'a [Token], options: ParserOptions) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            options,
        }
    }

    /// Parses exactly one statement, optionally followed by `;`, and
    /// requires the token stream to end there.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the tokens are not a single valid statement.
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        let statement = self.parse_statement()?;
        if self.check(&TokenKind::Semicolon) {
            self.advance();
        }
        if !self.current().is_eof() {
            return Err(self.unexpected("end of statement"));
        }
        Ok(statement)
    }

    /// Parses a single SQL statement, leaving any trailing tokens.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input does not start with a valid
    /// statement.
    pub fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match &self.current().kind {
            TokenKind::Keyword(Keyword::Select) => {
                Ok(Statement::Select(self.parse_select_statement()?))
            }
            TokenKind::Keyword(Keyword::Insert) => {
                Ok(Statement::Insert(self.parse_insert_statement()?))
            }
            TokenKind::Keyword(Keyword::Update) => {
                Ok(Statement::Update(self.parse_update_statement()?))
            }
            TokenKind::Keyword(Keyword::Delete) => {
                Ok(Statement::Delete(self.parse_delete_statement()?))
            }
            TokenKind::Keyword(Keyword::Create) => {
                Ok(Statement::CreateTable(self.parse_create_table_statement()?))
            }
            _ => Err(self.unexpected("SELECT, INSERT, UPDATE, DELETE or CREATE")),
        }
    }

    /// Parses a SELECT statement. Subqueries re-enter here.
    fn parse_select_statement(&mut self) -> Result<SelectStatement, ParseError> {
        self.enter()?;
        let select = self.parse_select_body();
        self.depth -= 1;
        select
    }

    fn parse_select_body(&mut self) -> Result<SelectStatement, ParseError> {
        self.expect_keyword(Keyword::Select)?;

        let distinct = if self.check_keyword(Keyword::Distinct) {
            self.advance();
            true
        } else {
            if self.check_keyword(Keyword::All) {
                self.advance();
            }
            false
        };

        let columns = self.parse_select_items()?;

        // FROM is optional, e.g. SELECT 1 + 1
        let from = if self.check_keyword(Keyword::From) {
            self.advance();
            Some(self.parse_table_ref()?)
        } else {
            None
        };

        let where_clause = if self.check_keyword(Keyword::Where) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        let group_by = if self.check_keyword(Keyword::Group) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            self.parse_expression_list()?
        } else {
            vec![]
        };

        let having = if self.check_keyword(Keyword::Having) {
            self.advance();
            Some(self.parse_expression()?)
        } else {
            None
        };

        let order_by = if self.check_keyword(Keyword::Order) {
            self.advance();
            self.expect_keyword(Keyword::By)?;
            self.parse_order_by_list()?
        } else {
            vec![]
        };

        let limit = if self.check_keyword(Keyword::Limit) {
            self.advance();
            Some(self.parse_row_count("LIMIT")?)
        } else {
            None
        };

        let offset = if self.check_keyword(Keyword::Offset) {
            self.advance();
            Some(self.parse_row_count("OFFSET")?)
        } else {
            None
        };

        Ok(SelectStatement {
            distinct,
            columns,
            from,
            where_clause,
            group_by,
            having,
            order_by,
            limit,
            offset,
        })
    }

    /// Parses the SELECT list.
    fn parse_select_items(&mut self) -> Result<Vec<SelectItem>, ParseError> {
        let mut items = vec![];

        loop {
            if self.check(&TokenKind::Star) {
                self.advance();
                items.push(SelectItem::AllColumns);
            } else {
                let expr = self.parse_expression()?;
                let alias = self.parse_optional_alias()?;
                items.push(SelectItem::ProjectedExpr { expr, alias });
            }

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Ok(items)
    }

    /// Parses LIMIT/OFFSET counts, which must be integer literals.
    fn parse_row_count(&mut self, clause: &str) -> Result<usize, ParseError> {
        if let TokenKind::Literal(Literal::Integer(n)) = self.current().kind {
            if let Ok(count) = usize::try_from(n) {
                self.advance();
                return Ok(count);
            }
        }
        Err(self.unexpected(format!("non-negative integer after {clause}")))
    }

    /// Parses a table reference followed by any number of joins.
    fn parse_table_ref(&mut self) -> Result<TableRef, ParseError> {
        let mut table_ref = self.parse_simple_table_ref()?;

        while is_join_start(&self.current().kind) {
            let join_type = self.parse_join_type()?;
            let right = self.parse_simple_table_ref()?;

            let condition = if join_type == JoinType::Cross {
                Expr::boolean(true)
            } else if self.check_keyword(Keyword::On) {
                self.advance();
                self.parse_expression()?
            } else if self.options.allow_join_without_on && is_join_start(&self.current().kind)
            {
                // `a JOIN b JOIN c ON ...`: the inner join has no condition.
                Expr::boolean(true)
            } else {
                return Err(self.unexpected("ON"));
            };

            table_ref = TableRef::Join {
                left: Box::new(table_ref),
                join_type,
                right: Box::new(right),
                condition,
            };
        }

        Ok(table_ref)
    }

    /// Parses a table name with an optional alias.
    fn parse_simple_table_ref(&mut self) -> Result<TableRef, ParseError> {
        let name = self.expect_identifier()?;
        let alias = self.parse_optional_alias()?;
        Ok(TableRef::Table { name, alias })
    }

    /// Parses a join type, including the JOIN keyword itself.
    fn parse_join_type(&mut self) -> Result<JoinType, ParseError> {
        let join_type = match &self.current().kind {
            TokenKind::Keyword(Keyword::Join) => JoinType::Inner,
            TokenKind::Keyword(Keyword::Inner) => {
                self.advance();
                JoinType::Inner
            }
            TokenKind::Keyword(Keyword::Left) => {
                self.advance();
                self.skip_keyword(Keyword::Outer);
                JoinType::Left
            }
            TokenKind::Keyword(Keyword::Right) => {
                self.advance();
                self.skip_keyword(Keyword::Outer);
                JoinType::Right
            }
            TokenKind::Keyword(Keyword::Full) => {
                self.advance();
                self.skip_keyword(Keyword::Outer);
                JoinType::Full
            }
            TokenKind::Keyword(Keyword::Cross) => {
                self.advance();
                JoinType::Cross
            }
            _ => return Err(self.unexpected("JOIN keyword")),
        };
        self.expect_keyword(Keyword::Join)?;
        Ok(join_type)
    }

    /// Parses an optional `AS alias` or bare identifier alias. Keywords
    /// never become bare aliases, so `SELECT x FROM t` keeps its FROM.
    fn parse_optional_alias(&mut self) -> Result<Option<String>, ParseError> {
        if self.check_keyword(Keyword::As) {
            self.advance();
            Ok(Some(self.expect_identifier()?))
        } else if matches!(self.current().kind, TokenKind::Identifier(_)) {
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    /// Parses an INSERT statement.
    fn parse_insert_statement(&mut self) -> Result<InsertStatement, ParseError> {
        self.expect_keyword(Keyword::Insert)?;
        self.expect_keyword(Keyword::Into)?;
        let table = self.expect_identifier()?;

        let columns = if self.check(&TokenKind::LeftParen) {
            self.advance();
            let cols = self.parse_identifier_list()?;
            self.expect(&TokenKind::RightParen)?;
            cols
        } else {
            vec![]
        };

        self.expect_keyword(Keyword::Values)?;
        let mut rows = vec![];
        loop {
            let row_span = self.current().span;
            let row_position = self.pos;
            self.expect(&TokenKind::LeftParen)?;
            let row = self.parse_expression_list()?;
            self.expect(&TokenKind::RightParen)?;

            if !columns.is_empty() && row.len() != columns.len() {
                return Err(ParseError::new(
                    format!(
                        "VALUES row has {} values but {} columns were listed",
                        row.len(),
                        columns.len()
                    ),
                    row_span,
                    row_position,
                ));
            }
            rows.push(row);

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        Ok(InsertStatement {
            table,
            columns,
            rows,
        })
    }

    /// Parses an UPDATE statement.
    fn parse_update_statement(&mut self) -> Result<UpdateStatement, ParseError> {
        self.expect_keyword(Keyword::Update)?;
        let table = self.expect_identifier()?;
        self.expect_keyword(Keyword::Set)?;

        let mut assignments = vec![];
        loop {
            let column = self.expect_identifier()?;
            self.expect_operator(Operator::Equals)?;
            let value = self.parse_expression()?;
            assignments.push(Assignment { column, value });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }

        let where_clause = self.parse_optional_where()?;

        Ok(UpdateStatement {
            table,
            assignments,
            where_clause,
        })
    }

    /// Parses a DELETE statement.
    fn parse_delete_statement(&mut self) -> Result<DeleteStatement, ParseError> {
        self.expect_keyword(Keyword::Delete)?;
        self.expect_keyword(Keyword::From)?;
        let table = self.expect_identifier()?;
        let where_clause = self.parse_optional_where()?;
        Ok(DeleteStatement {
            table,
            where_clause,
        })
    }

    /// Parses a CREATE TABLE statement.
    fn parse_create_table_statement(&mut self) -> Result<CreateTableStatement, ParseError> {
        self.expect_keyword(Keyword::Create)?;
        self.expect_keyword(Keyword::Table)?;
        let table = self.expect_identifier()?;

        self.expect(&TokenKind::LeftParen)?;
        let mut columns = vec![];
        loop {
            columns.push(self.parse_column_def()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        self.expect(&TokenKind::RightParen)?;

        Ok(CreateTableStatement { table, columns })
    }

    /// Parses `name TYPE[(n[, m])] [PRIMARY KEY] [NOT NULL]`. The type
    /// string keeps the spelling of the input.
    fn parse_column_def(&mut self) -> Result<ColumnDef, ParseError> {
        let name = self.expect_identifier()?;
        let mut data_type = match &self.current().kind {
            TokenKind::Identifier(type_name) => type_name.clone(),
            _ => return Err(self.unexpected("data type")),
        };
        self.advance();

        if self.check(&TokenKind::LeftParen) {
            self.advance();
            let mut args = vec![self.expect_integer()?.to_string()];
            if self.check(&TokenKind::Comma) {
                self.advance();
                args.push(self.expect_integer()?.to_string());
            }
            self.expect(&TokenKind::RightParen)?;
            data_type = format!("{data_type}({})", args.join(","));
        }

        loop {
            if self.check_word("PRIMARY") {
                self.advance();
                if !self.check_word("KEY") {
                    return Err(self.unexpected("KEY"));
                }
                self.advance();
                data_type.push_str(" PRIMARY KEY");
            } else if self.check_keyword(Keyword::Not) {
                self.advance();
                if !matches!(self.current().kind, TokenKind::Literal(Literal::Null)) {
                    return Err(self.unexpected("NULL"));
                }
                self.advance();
                data_type.push_str(" NOT NULL");
            } else {
                break;
            }
        }

        Ok(ColumnDef { name, data_type })
    }

    fn parse_optional_where(&mut self) -> Result<Option<Expr>, ParseError> {
        if self.check_keyword(Keyword::Where) {
            self.advance();
            Ok(Some(self.parse_expression()?))
        } else {
            Ok(None)
        }
    }

    /// Parses an ORDER BY list.
    fn parse_order_by_list(&mut self) -> Result<Vec<OrderBy>, ParseError> {
        let mut items = vec![];
        loop {
            let expr = self.parse_expression()?;
            let direction = if self.check_keyword(Keyword::Desc) {
                self.advance();
                OrderDirection::Desc
            } else {
                self.skip_keyword(Keyword::Asc);
                OrderDirection::Asc
            };
            items.push(OrderBy { expr, direction });

            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(items)
    }

    // --- Expressions, loosest to tightest ---

    /// Parses a full expression.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.enter()?;
        let expr = self.parse_or();
        self.depth -= 1;
        expr
    }

    /// `and (OR and)*`, grouped to the right.
    fn parse_or(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_and()?;
        let mut rest = vec![];
        while self.check_keyword(Keyword::Or) {
            self.advance();
            rest.push(self.parse_and()?);
        }
        Ok(chain_right(first, rest, Operator::Or))
    }

    /// `not (AND not)*`, grouped to the right.
    fn parse_and(&mut self) -> Result<Expr, ParseError> {
        let first = self.parse_not()?;
        let mut rest = vec![];
        while self.check_keyword(Keyword::And) {
            self.advance();
            rest.push(self.parse_not()?);
        }
        Ok(chain_right(first, rest, Operator::And))
    }

    /// `NOT* comparison`.
    fn parse_not(&mut self) -> Result<Expr, ParseError> {
        let mut nots = 0;
        while self.check_keyword(Keyword::Not) {
            self.advance();
            nots += 1;
        }
        let mut expr = self.parse_comparison()?;
        for _ in 0..nots {
            expr = Expr::Not(Box::new(expr));
        }
        Ok(expr)
    }

    /// A single, non-chaining comparison, LIKE, IN or BETWEEN.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_is_null()?;

        if let Some(op) = comparison_operator(&self.current().kind) {
            self.advance();
            let right = self.parse_is_null()?;
            return Ok(left.binary(op, right));
        }

        match self.current().kind {
            TokenKind::Keyword(Keyword::In) => {
                self.advance();
                self.parse_in_tail(left, false)
            }
            TokenKind::Keyword(Keyword::Between) => {
                self.advance();
                self.parse_between_tail(left, false)
            }
            TokenKind::Keyword(Keyword::Not) => {
                // Look one token past NOT before consuming it.
                match self.peek_kind(1) {
                    TokenKind::Keyword(Keyword::In) => {
                        self.advance();
                        self.advance();
                        self.parse_in_tail(left, true)
                    }
                    TokenKind::Keyword(Keyword::Between) => {
                        self.advance();
                        self.advance();
                        self.parse_between_tail(left, true)
                    }
                    TokenKind::Keyword(Keyword::Like) => {
                        self.advance();
                        self.advance();
                        let right = self.parse_is_null()?;
                        Ok(Expr::Not(Box::new(left.binary(Operator::Like, right))))
                    }
                    _ => {
                        self.advance();
                        Err(self.unexpected("IN, BETWEEN or LIKE after NOT"))
                    }
                }
            }
            _ => Ok(left),
        }
    }

    /// Parses the parenthesized list or subquery after `[NOT] IN`.
    fn parse_in_tail(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let in_expr = if self.check_keyword(Keyword::Select) {
            let subquery = self.parse_select_statement()?;
            Expr::InSubquery {
                expr: Box::new(expr),
                subquery: Box::new(Statement::Select(subquery)),
                negated,
            }
        } else {
            Expr::In {
                expr: Box::new(expr),
                list: self.parse_expression_list()?,
                negated,
            }
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(in_expr)
    }

    /// Parses `low AND high` after `[NOT] BETWEEN`. The bounds are parsed
    /// below the AND layer so the separator is not taken as a conjunction.
    fn parse_between_tail(&mut self, expr: Expr, negated: bool) -> Result<Expr, ParseError> {
        let low = self.parse_is_null()?;
        self.expect_keyword(Keyword::And)?;
        let high = self.parse_is_null()?;
        Ok(Expr::Between {
            expr: Box::new(expr),
            low: Box::new(low),
            high: Box::new(high),
            negated,
        })
    }

    /// `additive [IS [NOT] NULL]`.
    fn parse_is_null(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_additive()?;
        if !self.check_keyword(Keyword::Is) {
            return Ok(expr);
        }
        self.advance();
        let negated = self.skip_keyword(Keyword::Not);
        if !matches!(self.current().kind, TokenKind::Literal(Literal::Null)) {
            return Err(self.unexpected("NULL"));
        }
        self.advance();
        Ok(Expr::IsNull {
            expr: Box::new(expr),
            negated,
        })
    }

    /// `multiplicative ((+|-) multiplicative)*`, left associative.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = additive_operator(&self.current().kind) {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = left.binary(op, right);
        }
        Ok(left)
    }

    /// `unary ((*|/) unary)*`, left associative.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = multiplicative_operator(&self.current().kind) {
            self.advance();
            let right = self.parse_unary()?;
            left = left.binary(op, right);
        }
        Ok(left)
    }

    /// `(+|-)* primary`. Minus applied to a numeric literal folds into
    /// the literal.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        let mut minuses = 0;
        while let TokenKind::Operator(op @ (Operator::Plus | Operator::Minus)) = self.current().kind
        {
            if op == Operator::Minus {
                minuses += 1;
            }
            self.advance();
        }
        let mut expr = self.parse_primary()?;
        for _ in 0..minuses {
            expr = negate(expr);
        }
        Ok(expr)
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match &self.current().kind {
            TokenKind::Literal(literal) => {
                let literal = literal.clone();
                self.advance();
                Ok(Expr::Literal(literal))
            }

            TokenKind::Star => {
                self.advance();
                Ok(Expr::Star)
            }

            TokenKind::Keyword(kw) => {
                let Some(func) = AggregateFunc::from_keyword(*kw) else {
                    return Err(self.unexpected("expression"));
                };
                self.advance();
                self.parse_aggregate(func)
            }

            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();

                if !self.check(&TokenKind::Dot) {
                    return Ok(Expr::Identifier(name));
                }
                self.advance();
                if self.check(&TokenKind::Star) {
                    self.advance();
                    return Ok(Expr::QualifiedStar(name));
                }
                let column = self.expect_identifier()?;
                Ok(Expr::QualifiedIdentifier {
                    table: name,
                    column,
                })
            }

            // Parenthesized expression or scalar subquery
            TokenKind::LeftParen => {
                self.advance();
                let expr = if self.check_keyword(Keyword::Select) {
                    Expr::Subquery(Box::new(Statement::Select(
                        self.parse_select_statement()?,
                    )))
                } else {
                    self.parse_expression()?
                };
                self.expect(&TokenKind::RightParen)?;
                Ok(expr)
            }

            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses `( [DISTINCT] (expr | *) )` after an aggregate keyword.
    fn parse_aggregate(&mut self, func: AggregateFunc) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LeftParen)?;
        let distinct = self.skip_keyword(Keyword::Distinct);
        let arg = if self.check(&TokenKind::Star) {
            self.advance();
            Expr::Star
        } else {
            self.parse_expression()?
        };
        self.expect(&TokenKind::RightParen)?;
        Ok(Expr::aggregate(func, arg, distinct))
    }

    /// Parses a comma-separated list of expressions.
    fn parse_expression_list(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut exprs = vec![];
        loop {
            exprs.push(self.parse_expression()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(exprs)
    }

    /// Parses a comma-separated list of identifiers.
    fn parse_identifier_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut idents = vec![];
        loop {
            idents.push(self.expect_identifier()?);
            if !self.check(&TokenKind::Comma) {
                break;
            }
            self.advance();
        }
        Ok(idents)
    }

    // --- Helper methods ---

    /// Returns the current token.
    fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&END_OF_INPUT)
    }

    /// Returns the kind of the token `offset` places ahead.
    fn peek_kind(&self, offset: usize) -> &'a TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(&END_OF_INPUT.kind, |t| &t.kind)
    }

    /// Advances to the next token. The cursor never moves past the end.
    fn advance(&mut self) {
        if !self.current().is_eof() {
            self.pos += 1;
        }
    }

    /// Tracks one more level of nesting.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::new(
                format!(
                    "Maximum nesting depth of {} exceeded",
                    self.options.max_depth
                ),
                self.current().span,
                self.pos,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Checks if the current token matches the given kind, ignoring any
    /// payload. Only meaningful for punctuation tokens.
    fn check(&self, kind: &TokenKind) -> bool {
        core::mem::discriminant(&self.current().kind) == core::mem::discriminant(kind)
    }

    /// Checks if the current token is the given keyword.
    fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(&self.current().kind, TokenKind::Keyword(kw) if *kw == keyword)
    }

    /// Checks if the current token is an identifier spelled `word`,
    /// ignoring case.
    fn check_word(&self, word: &str) -> bool {
        matches!(&self.current().kind, TokenKind::Identifier(name) if name.eq_ignore_ascii_case(word))
    }

    /// Consumes the keyword if present and reports whether it was.
    fn skip_keyword(&mut self, keyword: Keyword) -> bool {
        let present = self.check_keyword(keyword);
        if present {
            self.advance();
        }
        present
    }

    /// Expects the current token to be the given kind.
    fn expect(&mut self, kind: &TokenKind) -> Result<(), ParseError> {
        if self.check(kind) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(kind.to_string()))
        }
    }

    /// Expects the current token to be the given keyword.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.check_keyword(keyword) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(keyword.as_str()))
        }
    }

    /// Expects the current token to be the given operator.
    fn expect_operator(&mut self, op: Operator) -> Result<(), ParseError> {
        if self.current().kind == TokenKind::Operator(op) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(format!("'{}'", op.as_str())))
        }
    }

    /// Expects and returns an identifier.
    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Expects and returns an integer literal.
    fn expect_integer(&mut self) -> Result<i64, ParseError> {
        match self.current().kind {
            TokenKind::Literal(Literal::Integer(n)) => {
                self.advance();
                Ok(n)
            }
            _ => Err(self.unexpected("integer")),
        }
    }

    /// Builds an error describing the current token as unexpected.
    fn unexpected(&self, expected: impl Into<String>) -> ParseError {
        let token = self.current();
        if token.is_eof() {
            ParseError::unexpected_eof(expected, token.span, self.pos)
        } else {
            ParseError::unexpected(expected, token.kind.clone(), token.span, self.pos)
        }
    }
}

/// Joins `first op rest[0] op rest[1] ...` as `first op (rest[0] op (...))`.
fn chain_right(first: Expr, mut rest: Vec<Expr>, op: Operator) -> Expr {
    let Some(mut acc) = rest.pop() else {
        return first;
    };
    while let Some(prev) = rest.pop() {
        acc = prev.binary(op, acc);
    }
    first.binary(op, acc)
}

/// Negates an expression, folding numeric literals.
fn negate(expr: Expr) -> Expr {
    match expr {
        // i64::MIN has no positive counterpart to fold
        Expr::Literal(Literal::Integer(n)) => n
            .checked_neg()
            .map_or_else(|| Expr::Negate(Box::new(Expr::integer(n))), Expr::integer),
        Expr::Literal(Literal::Float(x)) => Expr::float(-x),
        other => Expr::Negate(Box::new(other)),
    }
}
