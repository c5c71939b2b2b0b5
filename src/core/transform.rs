//! Recursive value transformer
//!
//! Walks a [`Value`] tree and renders each node in the target notation:
//!
//! | Value              | Output                          |
//! |--------------------|---------------------------------|
//! | integer / float    | `41`, `1.5`                     |
//! | boolean            | `true`, `false`                 |
//! | array              | `(list 1 2 3)`                  |
//! | table              | `$[` entries `key : value` `]`  |
//! | dotted quad string | `"127.0.0.1"`                   |
//! | `=` string         | rewritten formula between pipes |
//! | other string       | bare identifier                 |

use tomlsx_value::{Mapping, Value};

use super::context::{
    TranspileOptions, DOTTED_QUAD_PATTERN, EXPRESSION_DELIMITERS, EXPRESSION_MARKER,
};
use super::expression::rewrite_arrays;
use super::identifier::{normalize, Identifier};
use crate::utils::error::{ConversionError, ConversionResult};

/// Renders values with a fixed set of options.
#[derive(Debug, Clone, Copy)]
pub struct ValueTransformer<'a> {
    options: &'a TranspileOptions,
}

impl<'a> ValueTransformer<'a> {
    pub fn new(options: &'a TranspileOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TranspileOptions {
        self.options
    }

    /// Render a value at the outermost nesting level.
    pub fn transform(&self, value: &Value) -> ConversionResult<String> {
        self.transform_at(value, 0, "")
    }

    /// Render a table at the outermost nesting level.
    pub fn transform_mapping(&self, dict: &Mapping) -> ConversionResult<String> {
        self.mapping_at(dict, 0, "")
    }

    /// Render `value` nested `depth` tables deep. `path` is the dotted
    /// location used in error messages.
    pub(crate) fn transform_at(
        &self,
        value: &Value,
        depth: usize,
        path: &str,
    ) -> ConversionResult<String> {
        match value {
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(format!("{:?}", f)),
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    parts.push(self.transform_at(item, depth, &index_path(path, i))?);
                }
                Ok(format!("(list {})", parts.join(" ")))
            }
            Value::Dict(dict) => self.mapping_at(dict, depth, path),
            Value::Str(s) => self.transform_str(s, path),
        }
    }

    fn mapping_at(&self, dict: &Mapping, depth: usize, path: &str) -> ConversionResult<String> {
        let entry_indent = " ".repeat((depth + 1) * self.options.indent);
        let close_indent = " ".repeat(depth * self.options.indent);

        let mut items = Vec::with_capacity(dict.len());
        for (key, value) in dict {
            let entry_path = key_path(path, key);
            tracing::trace!(path = %entry_path, value = value.type_name(), "processing key");
            let name = self.name(key, &entry_path)?;
            let rendered = self.transform_at(value, depth + 1, &entry_path)?;
            items.push(format!("{}{} : {}", entry_indent, name, rendered));
        }

        Ok(format!("$[\n{}\n{}]", items.join(",\n"), close_indent))
    }

    fn transform_str(&self, s: &str, path: &str) -> ConversionResult<String> {
        if let Some(quad) = dotted_quad(s) {
            return Ok(format!("\"{}\"", quad));
        }
        if let Some(formula) = s.strip_prefix(EXPRESSION_MARKER) {
            let (open, close) = EXPRESSION_DELIMITERS;
            let body = rewrite_arrays(formula.trim());
            return Ok(format!("{}{}{}", open, body, close));
        }
        Ok(self.name(s, path)?.into_string())
    }

    /// Normalize a key or bare word under the configured policy.
    pub(crate) fn name(&self, raw: &str, path: &str) -> ConversionResult<Identifier> {
        normalize(raw, self.options.policy).map_err(|e| locate(e, path))
    }
}

/// Render `value` at the outermost nesting level.
pub fn transform(value: &Value, options: &TranspileOptions) -> ConversionResult<String> {
    ValueTransformer::new(options).transform(value)
}

/// The dotted quad carried by `s`, with or without the expression marker.
fn dotted_quad(s: &str) -> Option<&str> {
    if DOTTED_QUAD_PATTERN.is_match(s) {
        return Some(s);
    }
    s.strip_prefix(EXPRESSION_MARKER)
        .map(str::trim)
        .filter(|rest| DOTTED_QUAD_PATTERN.is_match(rest))
}

fn key_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn index_path(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

fn locate(err: ConversionError, path: &str) -> ConversionError {
    if path.is_empty() {
        err
    } else {
        err.at_path(path)
    }
}
