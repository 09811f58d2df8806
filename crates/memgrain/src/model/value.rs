//! Value types for grain records.
//!
//! Grain bodies are loosely-typed mappings; this closed enum is the
//! complete set of value shapes the canonical encoding recognizes
//! (OMS §5). Every pipeline stage pattern-matches over these variants.

use std::collections::BTreeMap;

/// A grain record body: string keys mapped to values.
///
/// `BTreeMap` keeps keys sorted by UTF-8 byte order, which is exactly
/// the canonical key order (OMS §5.3), so insertion order can never leak
/// into the encoded bytes.
pub type GrainMap = BTreeMap<String, Value>;

/// A dynamically-typed grain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent/empty. Null-valued fields are dropped before encoding.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit float. Always encoded as 8 bytes; NaN is rejected.
    Float(f64),
    /// Unicode text. NFC-normalized before encoding.
    Text(String),
    /// Raw bytes, distinct from Text on the wire.
    Bytes(Vec<u8>),
    /// Order-significant sequence.
    List(Vec<Value>),
    /// Nested mapping; keys re-sorted like every mapping.
    Map(GrainMap),
}

impl Value {
    /// Returns the variant name, used in error reporting.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Returns true for `Value::Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the inner string for Text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner integer for Int values.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Value {
        Value::Float(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::List(items)
    }
}

impl From<GrainMap> for Value {
    fn from(map: GrainMap) -> Value {
        Value::Map(map)
    }
}
