//! Document front end
//!
//! Turns source text into the [`Value`] tree the conversion core works on:
//! - TOML (the primary format)
//! - JSON (same tree shape, objects as tables)

use std::fmt;
use std::path::Path;

use tomlsx_value::{Mapping, Value};

use crate::utils::error::{ConversionError, ConversionResult};

/// Source document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    #[default]
    Toml,
    Json,
}

impl SourceFormat {
    /// Guess the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Toml,
        }
    }

    pub fn parse(self, input: &str) -> ConversionResult<Mapping> {
        match self {
            SourceFormat::Toml => parse_toml(input),
            SourceFormat::Json => parse_json(input),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Toml => write!(f, "toml"),
            SourceFormat::Json => write!(f, "json"),
        }
    }
}

/// Parse a TOML document into its top-level table.
pub fn parse_toml(input: &str) -> ConversionResult<Mapping> {
    let table: toml::Table = input.parse().map_err(|e: toml::de::Error| {
        let message = e.message().trim().to_string();
        match e.span() {
            Some(span) => {
                let (line, column) = line_column(input, span.start);
                ConversionError::parse_at(message, line, column)
            }
            None => ConversionError::parse(message),
        }
    })?;
    tracing::debug!(entries = table.len(), "loaded TOML document");

    let mut dict = Mapping::new();
    for (k, v) in table {
        let value = toml_to_value(v);
        dict.insert(k, value);
    }
    Ok(dict)
}

/// Parse a JSON document whose top level is an object.
pub fn parse_json(input: &str) -> ConversionResult<Mapping> {
    let json: serde_json::Value = serde_json::from_str(input)
        .map_err(|e| ConversionError::parse_at(e.to_string(), e.line(), e.column()))?;
    match json {
        serde_json::Value::Object(obj) => {
            tracing::debug!(entries = obj.len(), "loaded JSON document");
            json_object(obj, "")
        }
        _ => Err(ConversionError::parse("top-level JSON value must be an object")),
    }
}

fn toml_to_value(toml_val: toml::Value) -> Value {
    use toml::Value as TomlValue;
    match toml_val {
        TomlValue::String(s) => Value::Str(s),
        TomlValue::Integer(i) => Value::Int(i),
        TomlValue::Float(f) => Value::Float(f),
        TomlValue::Boolean(b) => Value::Bool(b),
        TomlValue::Datetime(dt) => Value::Str(dt.to_string()),
        TomlValue::Array(arr) => Value::Array(arr.into_iter().map(toml_to_value).collect()),
        TomlValue::Table(obj) => {
            let mut dict = Mapping::new();
            for (k, v) in obj {
                dict.insert(k, toml_to_value(v));
            }
            Value::Dict(dict)
        }
    }
}

fn json_to_value(json: serde_json::Value, path: &str) -> ConversionResult<Value> {
    use serde_json::Value as JsonValue;
    Ok(match json {
        JsonValue::Null => return Err(ConversionError::unsupported("null").at_path(path)),
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                return Err(ConversionError::unsupported(format!("number {}", n)).at_path(path));
            }
        }
        JsonValue::String(s) => Value::Str(s),
        JsonValue::Array(arr) => {
            let mut values = Vec::with_capacity(arr.len());
            for (i, v) in arr.into_iter().enumerate() {
                values.push(json_to_value(v, &format!("{}[{}]", path, i))?);
            }
            Value::Array(values)
        }
        JsonValue::Object(obj) => Value::Dict(json_object(obj, path)?),
    })
}

fn json_object(
    obj: serde_json::Map<String, serde_json::Value>,
    path: &str,
) -> ConversionResult<Mapping> {
    let mut dict = Mapping::new();
    for (k, v) in obj {
        let child = if path.is_empty() {
            k.clone()
        } else {
            format!("{}.{}", path, k)
        };
        dict.insert(k, json_to_value(v, &child)?);
    }
    Ok(dict)
}

/// 1-based line and column of a byte offset.
fn line_column(input: &str, offset: usize) -> (usize, usize) {
    let before = &input[..offset.min(input.len())];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
        + 1;
    (line, column)
}
