//! Error types for TCSS parsing and stylesheet management.
//!
//! Two layers:
//!
//! - [`ParseError`]: a lexical or grammar failure with the source position
//!   of the offending character or token.
//! - [`TcssError`]: everything a fallible public operation can return,
//!   including I/O failures when loading stylesheets from disk.
//!
//! Property conversion never produces an error; a value that does not fit
//! its property simply resolves to nothing.

use std::path::PathBuf;

use thiserror::Error;

/// A syntax error with a 1-based source position.
///
/// # Examples
///
/// ```rust
/// use tcss::parser::parse_stylesheet;
/// use tcss::TcssError;
///
/// // Missing value after the colon
/// let err = parse_stylesheet("Button { color: }").unwrap_err();
/// match err {
///     TcssError::Parse(e) => assert_eq!((e.line, e.column), (1, 17)),
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    /// What went wrong, including the kind of token found.
    pub message: String,
    /// 1-based line of the offending input.
    pub line: usize,
    /// 1-based column of the offending input.
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

/// Errors that can occur during TCSS parsing and processing.
#[derive(Error, Debug)]
pub enum TcssError {
    /// The stylesheet source could not be tokenized or parsed.
    #[error("CSS syntax error: {0}")]
    Parse(#[from] ParseError),

    /// A stylesheet file could not be read.
    #[error("I/O error reading stylesheet {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `set_active` was called with a name that was never registered.
    #[error("Unknown stylesheet: {0}")]
    UnknownStylesheet(String),
}

impl TcssError {
    /// Returns the underlying parse error, if this is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            TcssError::Parse(e) => Some(e),
            _ => None,
        }
    }
}
