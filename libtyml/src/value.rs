//! TYML value representation.

use std::collections::HashMap;

/// A parsed TYML value.
///
/// The template supplied at parse time fixes which variant each position of
/// the tree holds, so callers extract with the matching `as_*` accessor.
/// Extracting the wrong variant returns `None`; that is a programming error,
/// not something malformed input can cause — shape mismatches are rejected
/// during parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 8-bit signed integer.
    Int8(i8),
    /// 16-bit signed integer.
    Int16(i16),
    /// 32-bit signed integer.
    Int32(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 8-bit unsigned integer.
    UInt8(u8),
    /// 16-bit unsigned integer.
    UInt16(u16),
    /// 32-bit unsigned integer.
    UInt32(u32),
    /// 64-bit unsigned integer.
    UInt64(u64),
    /// 32-bit floating-point number.
    Float(f32),
    /// 64-bit floating-point number.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered list of values.
    List(Vec<Value>),
    /// Mapping from key to value. Keys are unique by construction.
    Object(HashMap<String, Value>),
}

impl Value {
    /// Returns the boolean value if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int8`.
    pub fn as_int8(&self) -> Option<i8> {
        match self {
            Value::Int8(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int16`.
    pub fn as_int16(&self) -> Option<i16> {
        match self {
            Value::Int16(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int32`.
    pub fn as_int32(&self) -> Option<i32> {
        match self {
            Value::Int32(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is an `Int64`.
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Value::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is a `UInt8`.
    pub fn as_uint8(&self) -> Option<u8> {
        match self {
            Value::UInt8(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is a `UInt16`.
    pub fn as_uint16(&self) -> Option<u16> {
        match self {
            Value::UInt16(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is a `UInt32`.
    pub fn as_uint32(&self) -> Option<u32> {
        match self {
            Value::UInt32(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the integer value if this is a `UInt64`.
    pub fn as_uint64(&self) -> Option<u64> {
        match self {
            Value::UInt64(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value if this is a `Float`.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value if this is a `Double`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the list if this is a `List`.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns a reference to the mapping if this is an `Object`.
    pub fn as_object(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Looks up a key if this is an `Object`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|object| object.get(key))
    }

    /// True if this is an `Object` containing the key.
    pub fn has_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i8> for Value {
    fn from(n: i8) -> Self {
        Value::Int8(n)
    }
}

impl From<i16> for Value {
    fn from(n: i16) -> Self {
        Value::Int16(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int32(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int64(n)
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        Value::UInt8(n)
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Value::UInt16(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::UInt32(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt64(n)
    }
}

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Double(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(list: Vec<Value>) -> Self {
        Value::List(list)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(object: HashMap<String, Value>) -> Self {
        Value::Object(object)
    }
}
