//! Render value trees back to TYML text.
//!
//! Output is re-parseable through a compatible template: scalars print as
//! their literal form, lists as `- ` entries, objects as `key:` entries with
//! nested blocks indented one step further. Keys are emitted in sorted order
//! so output is deterministic.

use crate::value::Value;
use std::collections::HashMap;
use std::io::{self, Write};

/// Serialization options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Spaces added per nesting level. Must be at least 2 for list items
    /// holding nested blocks to re-parse (the `- ` marker is two characters
    /// wide).
    pub indent_step: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self { indent_step: 2 }
    }
}

/// Encode a value tree as a TYML string.
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let mut out = String::new();
    if is_scalar(value) {
        out.push_str(&encode_scalar(value));
        out.push('\n');
    } else {
        encode_block(&mut out, value, 0, options);
    }
    out
}

/// Write a value tree as TYML text to a stream.
pub fn write<W: Write>(stream: &mut W, value: &Value, options: &EncodeOptions) -> io::Result<()> {
    stream.write_all(encode(value, options).as_bytes())
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::List(_) | Value::Object(_))
}

fn encode_scalar(value: &Value) -> String {
    match value {
        Value::Bool(true) => "true".to_string(),
        Value::Bool(false) => "false".to_string(),
        Value::Int8(n) => n.to_string(),
        Value::Int16(n) => n.to_string(),
        Value::Int32(n) => n.to_string(),
        Value::Int64(n) => n.to_string(),
        Value::UInt8(n) => n.to_string(),
        Value::UInt16(n) => n.to_string(),
        Value::UInt32(n) => n.to_string(),
        Value::UInt64(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Double(f) => f.to_string(),
        Value::String(s) => encode_string(s),
        Value::List(_) | Value::Object(_) => String::new(),
    }
}

/// Quote a string, escaping the control characters the scanner's escape
/// table can restore. Embedded `"` and `\` have no escaped form in the
/// grammar and are written through unchanged.
fn encode_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0B' => out.push_str("\\v"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn encode_block(out: &mut String, value: &Value, depth: usize, options: &EncodeOptions) {
    match value {
        Value::List(items) => encode_list(out, items, depth, options),
        Value::Object(object) => encode_object(out, object, depth, options),
        scalar => {
            out.push_str(&encode_scalar(scalar));
            out.push('\n');
        }
    }
}

fn encode_list(out: &mut String, items: &[Value], depth: usize, options: &EncodeOptions) {
    let pad = " ".repeat(depth * options.indent_step);
    for item in items {
        if is_scalar(item) {
            out.push_str(&format!("{}- {}\n", pad, encode_scalar(item)));
        } else {
            // The marker supplies the visual indent for the first line of
            // the nested block; strip that line's leading pad.
            let mut block = String::new();
            encode_block(&mut block, item, depth + 1, options);
            out.push_str(&pad);
            out.push_str("- ");
            if block.is_empty() {
                out.push('\n');
            } else {
                let lead = (depth + 1) * options.indent_step;
                out.push_str(&block[lead..]);
            }
        }
    }
}

fn encode_object(
    out: &mut String,
    object: &HashMap<String, Value>,
    depth: usize,
    options: &EncodeOptions,
) {
    let pad = " ".repeat(depth * options.indent_step);
    let mut keys: Vec<&String> = object.keys().collect();
    keys.sort();
    for key in keys {
        let value = &object[key];
        if is_scalar(value) {
            out.push_str(&format!("{}{}: {}\n", pad, key, encode_scalar(value)));
        } else {
            out.push_str(&format!("{}{}:\n", pad, key));
            encode_block(out, value, depth + 1, options);
        }
    }
}
