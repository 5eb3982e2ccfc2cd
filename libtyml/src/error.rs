//! Error types for TYML parsing.

use crate::scanner::TokenKind;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for TYML parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying the filename for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }
}

/// What went wrong, independent of where.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Character that starts no token.
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),

    /// String literal still open at end of input.
    #[error("Unterminated string")]
    UnterminatedString,

    /// Token present where the grammar or template disallows it.
    #[error("Expected {expected}, got {found}")]
    ExpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    /// Identifier other than `true`/`false` where a boolean is required.
    #[error("Expected boolean value, got \"{0}\"")]
    ExpectedBool(String),

    /// Numeric literal that does not fit the declared type.
    #[error("Number \"{lexeme}\" does not fit {target}")]
    InvalidNumber {
        lexeme: String,
        target: &'static str,
    },

    /// Mapping key with no declared template entry.
    #[error("Unexpected key \"{0}\"")]
    UnknownKey(String),

    /// Required key absent when the mapping block closed.
    #[error("Missing key \"{0}\"")]
    MissingKey(String),

    /// Declared key provided more than once.
    #[error("Duplicate key \"{0}\"")]
    DuplicateKey(String),

    /// String not in the permitted enum set.
    #[error("Expected one of [{permitted}], got \"{found}\"")]
    EnumMismatch { permitted: String, found: String },

    /// Top-level key differs from the root template name.
    #[error("Expected root key \"{expected}\", got \"{found}\"")]
    RootMismatch { expected: String, found: String },
}

/// A structured parse failure: what went wrong and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ErrorKind,
    /// Zero-based line of the offending token.
    pub line: usize,
    /// Zero-based column of the offending token.
    pub column: usize,
    /// Name of the document, when one was supplied.
    pub filename: Option<String>,
}

impl ParseError {
    /// Create an error at a location.
    pub fn new(kind: ErrorKind, line: usize, column: usize, ctx: &ParseContext) -> Self {
        Self {
            kind,
            line,
            column,
            filename: ctx.filename.clone(),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.kind,
            self.line + 1,
            self.column + 1
        )?;
        if let Some(name) = &self.filename {
            write!(f, " of <{}>", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

/// Error type covering both parsing and the file-reading shim.
#[derive(Error, Debug)]
pub enum Error {
    /// The document does not conform to the template.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The file could not be read at all.
    #[error("Could not read file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
