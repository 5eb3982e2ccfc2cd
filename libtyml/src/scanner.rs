//! Phase 1: Scanner
//!
//! The scanner converts raw source text into a lazy token stream. As a side
//! effect of character consumption it tracks:
//! - The current line and column for error reporting
//! - Indentation, counted in characters consumed since the last line start
//!
//! Comments (`#` to end of line) are consumed with the surrounding
//! whitespace and never reach the parser. Indentation is a raw character
//! count, not logical levels; the parser interprets it numerically against
//! per-block thresholds.

use crate::error::{ErrorKind, ParseContext, ParseError, Result};
use std::fmt;

/// Kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// `:`
    Colon,
    /// Double-quoted string literal; the lexeme keeps its quotes.
    Str,
    /// `-?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?`
    Number,
    /// `-` not immediately followed by a digit (the list marker).
    Minus,
    /// End of input, returned repeatably.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Colon => "':'",
            TokenKind::Str => "string",
            TokenKind::Number => "number",
            TokenKind::Minus => "'-'",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A single token with its raw lexeme and position.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    /// Raw text span; string lexemes keep their surrounding quotes.
    pub lexeme: String,
    /// Zero-based column the lexeme begins at.
    pub begin_column: usize,
    /// Zero-based line the lexeme begins on.
    pub line: usize,
}

/// Tokenizer over one document.
///
/// Whitespace is skipped after every token, so between `scan` calls the
/// scanner always rests on the first character of the next token (or at end
/// of input). [`Scanner::indentation`] therefore reports the column of the
/// token the next `scan` call would produce, which is what the parser
/// compares against block thresholds.
pub struct Scanner<'a> {
    src: &'a str,
    offset: usize,
    line_offset: usize,
    line: usize,
    begin: usize,
    begin_line: usize,
    indentation: usize,
    ctx: ParseContext,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over a document.
    pub fn new(src: &'a str, ctx: ParseContext) -> Self {
        Self {
            src,
            offset: 0,
            line_offset: 0,
            line: 0,
            begin: 0,
            begin_line: 0,
            indentation: 0,
            ctx,
        }
    }

    /// True once every character has been consumed.
    pub fn at_end(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// Characters consumed since the last line start, i.e. the column of the
    /// next token to be scanned. Saturates to 0 at end of input.
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Zero-based column where the next token begins.
    pub fn column_begin(&self) -> usize {
        self.begin.saturating_sub(self.line_offset)
    }

    /// Build an error anchored at the start of the next unscanned token.
    pub fn error_here(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.begin_line, self.column_begin(), &self.ctx)
    }

    /// Build an error anchored at a previously scanned token.
    pub fn error_at(&self, token: &Token, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, token.line, token.begin_column, &self.ctx)
    }

    fn current(&self) -> u8 {
        if self.at_end() {
            0
        } else {
            self.src.as_bytes()[self.offset]
        }
    }

    fn advance(&mut self) -> u8 {
        if self.at_end() {
            return 0;
        }
        let b = self.src.as_bytes()[self.offset];
        if b == b'\n' {
            self.line_offset = self.offset + 1;
            self.line += 1;
            self.indentation = 0;
        } else {
            self.indentation += 1;
        }
        self.offset += 1;
        b
    }

    fn skip_whitespace(&mut self) {
        loop {
            while !self.at_end() && self.current().is_ascii_whitespace() {
                self.advance();
            }
            // A comment runs to end of line and counts as whitespace, so the
            // scanner always rests on a real token and indentation reflects
            // that token, not the comment.
            if self.current() == b'#' {
                while !self.at_end() && self.current() != b'\n' {
                    self.advance();
                }
                continue;
            }
            break;
        }
        if self.at_end() {
            self.indentation = 0;
        }
        self.begin = self.offset;
        self.begin_line = self.line;
    }

    fn make_token(&mut self, kind: TokenKind) -> Token {
        let token = Token {
            kind,
            lexeme: self.src[self.begin..self.offset].to_string(),
            begin_column: self.begin.saturating_sub(self.line_offset),
            line: self.begin_line,
        };
        self.begin = self.offset;
        self.skip_whitespace();
        token
    }

    fn make_string(&mut self) -> Result<Token> {
        // "([^"]|\.)*" with backslash escaping the following character
        while self.current() != b'"' {
            if self.at_end() {
                return Err(self.error_here(ErrorKind::UnterminatedString));
            }
            if self.current() == b'\\' {
                self.advance();
            }
            self.advance();
        }
        self.advance();
        Ok(self.make_token(TokenKind::Str))
    }

    fn make_number(&mut self) -> Token {
        // -?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?
        while self.current().is_ascii_digit() {
            self.advance();
        }
        if self.current() == b'.' {
            self.advance();
            while self.current().is_ascii_digit() {
                self.advance();
            }
        }
        if self.current() == b'e' || self.current() == b'E' {
            self.advance();
            if self.current() == b'+' || self.current() == b'-' {
                self.advance();
            }
            while self.current().is_ascii_digit() {
                self.advance();
            }
        }
        self.make_token(TokenKind::Number)
    }

    fn make_identifier(&mut self) -> Token {
        // [A-Za-z_][A-Za-z0-9_]*
        while self.current().is_ascii_alphanumeric() || self.current() == b'_' {
            self.advance();
        }
        self.make_token(TokenKind::Identifier)
    }

    /// Produce the next token, skipping whitespace and comments.
    pub fn scan(&mut self) -> Result<Token> {
        self.skip_whitespace();

        if self.at_end() {
            return Ok(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                begin_column: self.column_begin(),
                line: self.begin_line,
            });
        }

        let c = self.advance();
        match c {
            b':' => Ok(self.make_token(TokenKind::Colon)),
            b'"' => self.make_string(),
            b'-' => {
                if self.current().is_ascii_digit() {
                    Ok(self.make_number())
                } else {
                    Ok(self.make_token(TokenKind::Minus))
                }
            }
            _ if c.is_ascii_digit() => Ok(self.make_number()),
            _ if c.is_ascii_alphabetic() || c == b'_' => Ok(self.make_identifier()),
            _ => {
                let ch = self.src[self.begin..].chars().next().unwrap_or(c as char);
                Err(self.error_here(ErrorKind::UnexpectedChar(ch)))
            }
        }
    }
}
