//! Typed value tree shared by the document front end and the transpiler core.

use indexmap::IndexMap;

/// Insertion-ordered table of keyed values.
pub type Mapping = IndexMap<String, Value>;

/// A node of a parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer: `41`, `-5`
    Int(i64),
    /// A floating-point number: `1.5`, `1e-4`
    Float(f64),
    /// A boolean: `true`, `false`
    Bool(bool),
    /// A string: bare word, `=` formula or dotted quad
    Str(String),
    /// An ordered sequence: `[1, 2, 3]`
    Array(Vec<Value>),
    /// A table: `{ a = 1, b = 2 }`
    Dict(Mapping),
}

impl Value {
    /// Name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Bool(_) => "boolean",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
            Value::Dict(_) => "table",
        }
    }

    pub fn as_dict(&self) -> Option<&Mapping> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Build a table from `(key, value)` pairs, keeping their order.
    pub fn dict<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Dict(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Mapping> for Value {
    fn from(dict: Mapping) -> Self {
        Value::Dict(dict)
    }
}
