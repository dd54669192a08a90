//! Lexer for TCSS source.
//!
//! Converts stylesheet text into a flat stream of [`Token`]s. Comments are
//! dropped; whitespace becomes a [`TokenKind::Whitespace`] token and also
//! marks the next token as `preceded_by_whitespace`.

use crate::error::ParseError;
use crate::parser::token::{Position, Token, TokenKind};

/// Single-use lexer over one stylesheet source.
///
/// The stream always ends with exactly one [`TokenKind::EndOfFile`] token,
/// after which the iterator is exhausted. Construct a new lexer to scan
/// the input again.
///
/// # Examples
///
/// ```
/// use tcss::parser::lexer::Lexer;
///
/// let tokens: Vec<_> = Lexer::new("Button{}").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens.len(), 4); // Button, {, }, EOF
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    after_whitespace: bool,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
            after_whitespace: false,
            finished: false,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn error(&self, message: impl Into<String>, at: Position) -> ParseError {
        ParseError::new(message, at.line, at.column)
    }

    /// Skips any run of comments. Returns whether anything was skipped.
    fn skip_comments(&mut self) -> Result<bool, ParseError> {
        let mut skipped = false;
        loop {
            let rest = self.remaining();
            if rest.starts_with("/*") {
                let start = self.current_position();
                self.advance();
                self.advance();
                loop {
                    match self.peek() {
                        Some('*') if self.peek_second() == Some('/') => {
                            self.advance();
                            self.advance();
                            break;
                        }
                        Some(_) => {
                            self.advance();
                        }
                        None => return Err(self.error("unterminated comment", start)),
                    }
                }
                skipped = true;
            } else if rest.starts_with("//") {
                while let Some(c) = self.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
                skipped = true;
            } else {
                return Ok(skipped);
            }
        }
    }

    fn consume_whitespace(&mut self) -> Result<(), ParseError> {
        loop {
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            if !self.skip_comments()? {
                return Ok(());
            }
        }
    }

    fn consume_name(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn consume_number(&mut self) -> TokenKind {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        let text = self.input[start..self.pos].to_string();
        let percent = self.peek() == Some('%');
        if percent {
            self.advance();
        }
        TokenKind::Number { text, percent }
    }

    fn consume_string(&mut self, start: Position) -> Result<TokenKind, ParseError> {
        let quote = self.advance().unwrap_or('"');
        let mut value = String::new();
        loop {
            match self.advance() {
                Some('\\') => match self.advance() {
                    Some(c) => value.push(c),
                    None => return Err(self.error("unterminated string", start)),
                },
                Some(c) if c == quote => return Ok(TokenKind::String { value, quote }),
                Some(c) => value.push(c),
                None => return Err(self.error("unterminated string", start)),
            }
        }
    }

    fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        if self.finished {
            return Ok(None);
        }

        self.skip_comments()?;
        let start = self.current_position();

        let Some(c) = self.peek() else {
            self.finished = true;
            return Ok(Some(Token::new(
                TokenKind::EndOfFile,
                start,
                self.after_whitespace,
            )));
        };

        if c.is_whitespace() {
            self.consume_whitespace()?;
            let token = Token::new(TokenKind::Whitespace, start, self.after_whitespace);
            self.after_whitespace = true;
            return Ok(Some(token));
        }

        let kind = match c {
            '"' | '\'' => self.consume_string(start)?,
            '#' => {
                self.advance();
                let name = self.consume_name();
                if name.is_empty() {
                    return Err(self.error("expected a name after '#'", start));
                }
                TokenKind::Hash(name)
            }
            '$' => {
                self.advance();
                if self.peek().is_some_and(is_ident_start) {
                    TokenKind::Variable(self.consume_name())
                } else {
                    TokenKind::Delimiter('$')
                }
            }
            '-' if self.peek_second().is_some_and(|n| n.is_ascii_digit()) => self.consume_number(),
            c if c.is_ascii_digit() => self.consume_number(),
            c if is_ident_start(c) => TokenKind::Identifier(self.consume_name()),
            '{' | '}' | '(' | ')' | '[' | ']' | ':' | ';' | ',' => {
                self.advance();
                match c {
                    '{' => TokenKind::OpenBrace,
                    '}' => TokenKind::CloseBrace,
                    '(' => TokenKind::OpenParen,
                    ')' => TokenKind::CloseParen,
                    '[' => TokenKind::OpenBracket,
                    ']' => TokenKind::CloseBracket,
                    ':' => TokenKind::Colon,
                    ';' => TokenKind::Semicolon,
                    _ => TokenKind::Comma,
                }
            }
            '.' | '>' | '*' | '&' | '!' | '=' | '^' | '~' | '+' | '/' => {
                self.advance();
                TokenKind::Delimiter(c)
            }
            other => {
                return Err(self.error(format!("unexpected character '{other}'"), start));
            }
        };

        let token = Token::new(kind, start, self.after_whitespace);
        self.after_whitespace = false;
        Ok(Some(token))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '-'
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Tokenizes the whole input, keeping whitespace tokens.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(input).collect()
}

/// Tokenizes the whole input without whitespace tokens.
///
/// Whitespace is still visible through each token's
/// `preceded_by_whitespace` flag.
pub fn tokenize_filtered(input: &str) -> Result<Vec<Token>, ParseError> {
    Lexer::new(input)
        .filter(|t| !matches!(t, Ok(Token { kind: TokenKind::Whitespace, .. })))
        .collect()
}
