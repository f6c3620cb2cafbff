//! SQL Tokenizer implementation.

use super::{Keyword, LexError, Literal, Operator, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skips whitespace and comments.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), LexError> {
        loop {
            while self
                .peek()
                .is_some_and(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
            {
                self.advance();
            }

            // -- line comment
            if self.peek() == Some('-') && self.peek_next() == Some('-') {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
                continue;
            }

            // /* block comment */
            if self.peek() == Some('/') && self.peek_next() == Some('*') {
                let comment_start = self.pos;
                self.advance();
                self.advance();
                loop {
                    match self.advance() {
                        Some('*') if self.peek() == Some('/') => {
                            self.advance();
                            break;
                        }
                        Some(_) => {}
                        None => {
                            return Err(LexError::new("Unterminated block comment", comment_start));
                        }
                    }
                }
                continue;
            }

            return Ok(());
        }
    }

    /// Creates a token spanning from the token start to the cursor.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            return self.make_token(TokenKind::Keyword(keyword));
        }
        let kind = match text.to_ascii_uppercase().as_str() {
            "NULL" => TokenKind::Literal(Literal::Null),
            "TRUE" => TokenKind::Literal(Literal::Boolean(true)),
            "FALSE" => TokenKind::Literal(Literal::Boolean(false)),
            _ => TokenKind::Identifier(String::from(text)),
        };
        self.make_token(kind)
    }

    /// Scans a backtick-quoted identifier. The result is never a keyword.
    fn scan_quoted_identifier(&mut self) -> Result<Token, LexError> {
        self.advance(); // opening backtick
        let content_start = self.pos;
        loop {
            match self.advance() {
                Some('`') => break,
                Some(_) => {}
                None => {
                    return Err(LexError::new("Unterminated quoted identifier", self.start));
                }
            }
        }
        let name = &self.input[content_start..self.pos - 1];
        if name.is_empty() {
            return Err(LexError::new("Empty quoted identifier", self.start));
        }
        Ok(self.make_token(TokenKind::Identifier(String::from(name))))
    }

    /// Scans a number. A second `.` ends the number rather than being
    /// absorbed into it.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let mut is_float = false;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            is_float = true;
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];

        let literal = if is_float {
            text.parse::<f64>()
                .map(Literal::Float)
                .map_err(|e| LexError::new(format!("Invalid float literal {text}: {e}"), self.start))?
        } else {
            text.parse::<i64>().map(Literal::Integer).map_err(|e| {
                LexError::new(format!("Invalid integer literal {text}: {e}"), self.start)
            })?
        };
        Ok(self.make_token(TokenKind::Literal(literal)))
    }

    /// Scans a string literal delimited by `quote`, resolving escapes.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        self.advance(); // opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    // A doubled quote stands for one quote character.
                    if self.peek() == Some(quote) {
                        self.advance();
                        value.push(quote);
                    } else {
                        break;
                    }
                }
                Some('\\') => match self.advance() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some('r') => value.push('\r'),
                    Some('0') => value.push('\0'),
                    Some(c @ ('\\' | '\'' | '"')) => value.push(c),
                    Some(c) => {
                        value.push('\\');
                        value.push(c);
                    }
                    None => {
                        return Err(LexError::new("Unterminated string literal", self.start));
                    }
                },
                Some(c) => value.push(c),
                None => {
                    return Err(LexError::new("Unterminated string literal", self.start));
                }
            }
        }

        Ok(self.make_token(TokenKind::Literal(Literal::String(value))))
    }

    /// Scans the next token.
    ///
    /// Once the end of input is reached, every further call returns
    /// another [`TokenKind::EndOfInput`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] for unknown characters, a lone `!`,
    /// unterminated strings and comments, and unparsable numbers.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments()?;
        self.start = self.pos;

        let Some(c) = self.peek() else {
            return Ok(self.make_token(TokenKind::EndOfInput));
        };

        match c {
            '\'' | '"' => return self.scan_string(c),
            '`' => return self.scan_quoted_identifier(),
            c if c.is_ascii_digit() => return self.scan_number(),
            c if c.is_alphabetic() || c == '_' => return Ok(self.scan_identifier()),
            _ => {}
        }

        self.advance();
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Operator(Operator::Plus),
            '-' => TokenKind::Operator(Operator::Minus),
            '/' => TokenKind::Operator(Operator::Divide),
            '=' => TokenKind::Operator(Operator::Equals),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    TokenKind::Operator(Operator::LessOrEqual)
                }
                Some('>') => {
                    self.advance();
                    TokenKind::Operator(Operator::NotEquals)
                }
                _ => TokenKind::Operator(Operator::LessThan),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Operator(Operator::GreaterOrEqual)
                } else {
                    TokenKind::Operator(Operator::GreaterThan)
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenKind::Operator(Operator::NotEquals)
                } else {
                    return Err(LexError::new("Expected '=' after '!'", self.start));
                }
            }
            _ => return Err(LexError::unexpected_char(c, self.start)),
        };
        Ok(self.make_token(kind))
    }

    /// Tokenizes the entire input. On success the last token is the
    /// single [`TokenKind::EndOfInput`] marker.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`]; no partial token list is produced.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }
}
