//! Schema templates describing the expected shape of a document.
//!
//! A template tree is built once by the caller and reused for every parse.
//! It is immutable after construction and holds no interior mutability, so a
//! single tree may be shared across threads for independent parses.

/// A schema node: what the parser expects at one position in the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Template {
    /// Case-insensitive `true`/`false` identifier.
    Bool,
    /// 8-bit signed integer literal.
    Int8,
    /// 16-bit signed integer literal.
    Int16,
    /// 32-bit signed integer literal.
    Int32,
    /// 64-bit signed integer literal.
    Int64,
    /// 8-bit unsigned integer literal.
    UInt8,
    /// 16-bit unsigned integer literal.
    UInt16,
    /// 32-bit unsigned integer literal.
    UInt32,
    /// 64-bit unsigned integer literal.
    UInt64,
    /// 32-bit floating-point literal.
    Float,
    /// 64-bit floating-point literal.
    Double,
    /// Double-quoted string literal.
    Str,
    /// One of a fixed set of string values, matched case-insensitively.
    /// Parsing yields the declared spelling regardless of input case.
    Enum(Vec<String>),
    /// Zero or more `- <item>` entries at a fixed indentation level.
    List(Box<Template>),
    /// Zero or more `key: <item>` entries at a fixed indentation level,
    /// matched against the declared names in any order.
    Object(Vec<Named>),
}

impl Template {
    /// Convenience constructor for list templates.
    pub fn list(item: Template) -> Self {
        Template::List(Box::new(item))
    }

    /// Convenience constructor for enum templates.
    pub fn enumeration(values: &[&str]) -> Self {
        Template::Enum(values.iter().map(|v| v.to_string()).collect())
    }
}

/// A named template entry within an object, or the document root.
#[derive(Debug, Clone, PartialEq)]
pub struct Named {
    pub name: String,
    pub item: Template,
    pub optional: bool,
}

impl Named {
    /// A required entry.
    pub fn new(name: &str, item: Template) -> Self {
        Self {
            name: name.to_string(),
            item,
            optional: false,
        }
    }

    /// An entry that may be absent from the document.
    pub fn optional(name: &str, item: Template) -> Self {
        Self {
            name: name.to_string(),
            item,
            optional: true,
        }
    }
}
