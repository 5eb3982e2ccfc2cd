//! Phase 2: Template-driven parser
//!
//! The parser recursively consumes tokens, guided by a caller-supplied
//! template tree, and builds a [`Value`] tree of the matching shape. Block
//! structure is decided by indentation thresholds: every list and object
//! records the indentation of its first token, then keeps consuming entries
//! while the scanner rests at or beyond that threshold.

use crate::error::{ErrorKind, Result};
use crate::scanner::{Scanner, Token, TokenKind};
use crate::template::{Named, Template};
use crate::value::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// Parse a whole document against the root template.
///
/// The document must consist of a single top-level `<RootName>: <value>`
/// entry whose name equals the template's. The result is a one-entry object
/// keyed by that name.
pub fn parse_root(root: &Named, scanner: &mut Scanner) -> Result<Value> {
    let identifier = expect(scanner, TokenKind::Identifier)?;
    expect(scanner, TokenKind::Colon)?;

    if identifier.lexeme != root.name {
        return Err(scanner.error_at(
            &identifier,
            ErrorKind::RootMismatch {
                expected: root.name.clone(),
                found: identifier.lexeme.clone(),
            },
        ));
    }

    let mut object = HashMap::new();
    object.insert(identifier.lexeme, parse_item(&root.item, scanner)?);
    Ok(Value::Object(object))
}

/// Parse one value according to a template node.
fn parse_item(template: &Template, scanner: &mut Scanner) -> Result<Value> {
    match template {
        Template::Bool => parse_bool(scanner),
        Template::Int8 => Ok(Value::Int8(parse_number(scanner, "int8")?)),
        Template::Int16 => Ok(Value::Int16(parse_number(scanner, "int16")?)),
        Template::Int32 => Ok(Value::Int32(parse_number(scanner, "int32")?)),
        Template::Int64 => Ok(Value::Int64(parse_number(scanner, "int64")?)),
        Template::UInt8 => Ok(Value::UInt8(parse_number(scanner, "uint8")?)),
        Template::UInt16 => Ok(Value::UInt16(parse_number(scanner, "uint16")?)),
        Template::UInt32 => Ok(Value::UInt32(parse_number(scanner, "uint32")?)),
        Template::UInt64 => Ok(Value::UInt64(parse_number(scanner, "uint64")?)),
        Template::Float => Ok(Value::Float(parse_number(scanner, "float32")?)),
        Template::Double => Ok(Value::Double(parse_number(scanner, "float64")?)),
        Template::Str => Ok(Value::String(parse_string(scanner)?)),
        Template::Enum(values) => parse_enum(values, scanner),
        Template::List(item) => parse_list(item, scanner),
        Template::Object(items) => parse_object(items, scanner),
    }
}

/// Scan the next token and require a specific kind.
fn expect(scanner: &mut Scanner, expected: TokenKind) -> Result<Token> {
    let token = scanner.scan()?;
    if token.kind != expected {
        return Err(scanner.error_at(
            &token,
            ErrorKind::ExpectedToken {
                expected,
                found: token.kind,
            },
        ));
    }
    Ok(token)
}

/// Parse a number token into the declared numeric type, range-checked.
fn parse_number<T: FromStr>(scanner: &mut Scanner, target: &'static str) -> Result<T> {
    let token = expect(scanner, TokenKind::Number)?;
    token.lexeme.parse().map_err(|_| {
        scanner.error_at(
            &token,
            ErrorKind::InvalidNumber {
                lexeme: token.lexeme.clone(),
                target,
            },
        )
    })
}

fn parse_bool(scanner: &mut Scanner) -> Result<Value> {
    let token = expect(scanner, TokenKind::Identifier)?;
    if token.lexeme.eq_ignore_ascii_case("true") {
        Ok(Value::Bool(true))
    } else if token.lexeme.eq_ignore_ascii_case("false") {
        Ok(Value::Bool(false))
    } else {
        Err(scanner.error_at(&token, ErrorKind::ExpectedBool(token.lexeme.clone())))
    }
}

fn parse_string(scanner: &mut Scanner) -> Result<String> {
    let token = expect(scanner, TokenKind::Str)?;
    Ok(unescape(&token.lexeme))
}

/// Strip the surrounding quotes and resolve escapes. Recognized escapes are
/// `\n` `\r` `\t` `\v`; any other escape sequence is elided entirely.
fn unescape(lexeme: &str) -> String {
    let inner = &lexeme[1..lexeme.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('r') => out.push('\r'),
                Some('t') => out.push('\t'),
                Some('v') => out.push('\x0B'),
                _ => {}
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse an enum value: one identifier or string token, matched
/// case-insensitively against the permitted set. Returns the declared
/// spelling, not the input's.
fn parse_enum(values: &[String], scanner: &mut Scanner) -> Result<Value> {
    let token = scanner.scan()?;
    if token.kind != TokenKind::Identifier && token.kind != TokenKind::Str {
        return Err(scanner.error_at(
            &token,
            ErrorKind::ExpectedToken {
                expected: TokenKind::Identifier,
                found: token.kind,
            },
        ));
    }
    let lexeme = if token.kind == TokenKind::Str {
        unescape(&token.lexeme)
    } else {
        token.lexeme.clone()
    };
    for value in values {
        if lexeme.eq_ignore_ascii_case(value) {
            return Ok(Value::String(value.clone()));
        }
    }
    Err(scanner.error_at(
        &token,
        ErrorKind::EnumMismatch {
            permitted: values.join(", "),
            found: lexeme,
        },
    ))
}

/// Parse list entries while the scanner rests at or beyond the indentation
/// of the first entry. Zero entries is a valid empty list.
fn parse_list(item: &Template, scanner: &mut Scanner) -> Result<Value> {
    let threshold = scanner.indentation();
    let mut list = Vec::new();
    while !scanner.at_end() && scanner.indentation() >= threshold {
        expect(scanner, TokenKind::Minus)?;
        list.push(parse_item(item, scanner)?);
    }
    Ok(Value::List(list))
}

/// Parse object entries while the scanner rests at or beyond the indentation
/// of the first entry. Keys may appear in any order; unknown keys fail
/// eagerly, missing and duplicate keys are reported once the block closes.
fn parse_object(items: &[Named], scanner: &mut Scanner) -> Result<Value> {
    let threshold = scanner.indentation();
    let mut object = HashMap::new();
    let mut seen = vec![0u32; items.len()];

    while !scanner.at_end() && scanner.indentation() >= threshold {
        let key = expect(scanner, TokenKind::Identifier)?;
        expect(scanner, TokenKind::Colon)?;

        // First declared match wins.
        let index = match items.iter().position(|item| item.name == key.lexeme) {
            Some(index) => index,
            None => {
                return Err(scanner.error_at(&key, ErrorKind::UnknownKey(key.lexeme.clone())));
            }
        };

        let value = parse_item(&items[index].item, scanner)?;
        object.insert(items[index].name.clone(), value);
        seen[index] += 1;
    }

    for (item, &count) in items.iter().zip(&seen) {
        if count == 0 && !item.optional {
            return Err(scanner.error_here(ErrorKind::MissingKey(item.name.clone())));
        }
        if count > 1 {
            return Err(scanner.error_here(ErrorKind::DuplicateKey(item.name.clone())));
        }
    }

    Ok(Value::Object(object))
}
