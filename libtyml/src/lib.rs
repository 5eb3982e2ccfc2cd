//! TYML parser and serializer.
//!
//! TYML is a template-validated subset of YAML-style markup: scalars, lists,
//! nested mappings, and enumerated strings, with `#` line comments. Callers
//! declare the expected shape of a document as a [`Template`] tree; [`parse`]
//! walks the input against that tree and returns a strongly typed [`Value`],
//! or a [`ParseError`] carrying line and column context.
//!
//! # Parsing pipeline
//!
//! 1. **Scanner**: converts source text into tokens, tracking line, column,
//!    and indentation as characters are consumed.
//!
//! 2. **Parser**: recursively consumes tokens, guided by the template, and
//!    builds the value tree. Indentation thresholds recorded at block entry
//!    decide where lists and mappings end.
//!
//! The serializer ([`encode()`], [`write()`]) is independent of parsing and
//! only consumes the value model.
//!
//! # Example
//!
//! ```
//! use libtyml::{parse, Named, Template, Value};
//!
//! let template = Named::new(
//!     "Server",
//!     Template::Object(vec![
//!         Named::new("Name", Template::Str),
//!         Named::new("Port", Template::UInt16),
//!     ]),
//! );
//!
//! let value = parse(&template, "Server:\n  Name: \"alpha\"\n  Port: 8080\n").unwrap();
//! let server = value.get("Server").unwrap();
//! assert_eq!(server.get("Port").and_then(Value::as_uint16), Some(8080));
//! ```

mod encode;
mod error;
mod parser;
mod scanner;
mod template;
mod value;

pub use encode::{encode, write, EncodeOptions};
pub use error::{Error, ErrorKind, ParseError, Result};
pub use scanner::TokenKind;
pub use template::{Named, Template};
pub use value::Value;

use scanner::Scanner;
use std::fs;
use std::path::Path;

/// Parse a TYML document against a root template.
pub fn parse(template: &Named, input: &str) -> Result<Value> {
    parse_with_filename(template, input, None)
}

/// Parse a TYML document with a filename for error messages.
pub fn parse_with_filename(template: &Named, input: &str, filename: Option<&str>) -> Result<Value> {
    let ctx = error::ParseContext::new(filename);
    let mut scanner = Scanner::new(input, ctx);
    parser::parse_root(template, &mut scanner)
}

/// Read a file into memory and parse it against a root template.
///
/// An unreadable file yields [`Error::Io`], distinct from every parse error.
pub fn parse_file<P: AsRef<Path>>(
    template: &Named,
    path: P,
) -> std::result::Result<Value, Error> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let filename = path.file_name().and_then(|name| name.to_str());
    Ok(parse_with_filename(template, &input, filename)?)
}
