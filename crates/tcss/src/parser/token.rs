//! Lexical tokens produced by the [`Lexer`](super::lexer::Lexer).

use std::fmt;

/// A 1-based line/column position in the stylesheet source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const START: Self = Self { line: 1, column: 1 };

    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The classes of token in TCSS source.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `Button`, `solid`, `-webkit-ish`
    Identifier(String),
    /// Quoted string content (escapes removed) and its quote character.
    String { value: String, quote: char },
    /// Numeric text as written (`-1.5`) and whether a `%` followed.
    Number { text: String, percent: bool },
    /// `#name` without the `#`. Both id selectors and hex colours.
    Hash(String),
    /// `$name` without the `$`.
    Variable(String),
    /// One of `. > * & ! = ^ $ ~ + /`
    Delimiter(char),
    Colon,
    Semicolon,
    Comma,
    OpenBrace,
    CloseBrace,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    Whitespace,
    EndOfFile,
}

impl TokenKind {
    /// Short human-readable description used in parse errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Identifier(name) => format!("identifier '{name}'"),
            TokenKind::String { .. } => "string".to_string(),
            TokenKind::Number { text, percent } => {
                format!("number '{}{}'", text, if *percent { "%" } else { "" })
            }
            TokenKind::Hash(name) => format!("hash '#{name}'"),
            TokenKind::Variable(name) => format!("variable '${name}'"),
            TokenKind::Delimiter(c) => format!("delimiter '{c}'"),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Semicolon => "';'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::OpenBrace => "'{'".to_string(),
            TokenKind::CloseBrace => "'}'".to_string(),
            TokenKind::OpenParen => "'('".to_string(),
            TokenKind::CloseParen => "')'".to_string(),
            TokenKind::OpenBracket => "'['".to_string(),
            TokenKind::CloseBracket => "']'".to_string(),
            TokenKind::Whitespace => "whitespace".to_string(),
            TokenKind::EndOfFile => "end of input".to_string(),
        }
    }
}

/// A token with its source position.
///
/// `preceded_by_whitespace` is set when whitespace separated this token from
/// the previous one. A comment on its own does not count. The parser relies
/// on it to tell `A.b` (compound) from `A .b` (descendant).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    pub preceded_by_whitespace: bool,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, preceded_by_whitespace: bool) -> Self {
        Self {
            kind,
            position,
            preceded_by_whitespace,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    pub fn is_delim(&self, c: char) -> bool {
        self.kind == TokenKind::Delimiter(c)
    }

    /// Renders the token back to source text.
    ///
    /// Strings are re-quoted with their original quote character.
    pub fn to_css(&self) -> String {
        match &self.kind {
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::String { value, quote } => {
                let mut out = String::with_capacity(value.len() + 2);
                out.push(*quote);
                for c in value.chars() {
                    if c == *quote || c == '\\' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push(*quote);
                out
            }
            TokenKind::Number { text, percent } => {
                if *percent {
                    format!("{text}%")
                } else {
                    text.clone()
                }
            }
            TokenKind::Hash(name) => format!("#{name}"),
            TokenKind::Variable(name) => format!("${name}"),
            TokenKind::Delimiter(c) => c.to_string(),
            TokenKind::Colon => ":".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::OpenBrace => "{".to_string(),
            TokenKind::CloseBrace => "}".to_string(),
            TokenKind::OpenParen => "(".to_string(),
            TokenKind::CloseParen => ")".to_string(),
            TokenKind::OpenBracket => "[".to_string(),
            TokenKind::CloseBracket => "]".to_string(),
            TokenKind::Whitespace => " ".to_string(),
            TokenKind::EndOfFile => String::new(),
        }
    }
}
