//! tomlsx - TOML configuration to S-expression notation transpiler
//!
//! Converts a TOML document into:
//! - `(define name value);` statements for every entry of the `[const]` table
//! - a `$[ key : value, ... ]` keyed structure for the rest of the document
//!
//! Arrays become `(list ...)`, strings starting with `=` become `|...|`
//! formula spans (with `[a, b]` rewritten to `(list a b)`), dotted quads stay
//! quoted and every other string must be a legal identifier.
//!
//! # Example
//!
//! ```
//! let output = tomlsx::transpile("[const]\nbase = 41\n[data]\nnext = \"=base + 1\"\n").unwrap();
//! assert_eq!(
//!     output,
//!     "(define base 41);\n$[\n  data : $[\n    next : |base + 1|\n  ]\n]"
//! );
//! ```

pub mod core;
pub mod frontend;
pub mod utils;

pub use crate::core::{
    convert_document, IdentifierPolicy, TranspileOptions, CONST_SECTION, EXPRESSION_MARKER,
};
pub use frontend::SourceFormat;
pub use tomlsx_value::{Mapping, Value};
pub use utils::error::{ConversionError, ConversionResult};

/// Convert TOML source text with default options.
pub fn transpile(input: &str) -> ConversionResult<String> {
    transpile_with_options(input, &TranspileOptions::default())
}

/// Convert TOML source text with custom options.
pub fn transpile_with_options(input: &str, options: &TranspileOptions) -> ConversionResult<String> {
    transpile_source(input, SourceFormat::Toml, options)
}

/// Convert source text in the given format.
///
/// Parse failures are returned unchanged; the conversion core is not run.
pub fn transpile_source(
    input: &str,
    format: SourceFormat,
    options: &TranspileOptions,
) -> ConversionResult<String> {
    let doc = format.parse(input)?;
    convert_document(doc, options)
}

/// Convert an already parsed document.
///
/// ```
/// use tomlsx::{transpile_value, TranspileOptions, Value};
///
/// let doc = Value::dict([("const", Value::dict([("base", Value::Int(41))]))]);
/// let output = transpile_value(doc, &TranspileOptions::default()).unwrap();
/// assert_eq!(output, "(define base 41);\n$[\n\n]");
/// ```
pub fn transpile_value(doc: Value, options: &TranspileOptions) -> ConversionResult<String> {
    match doc {
        Value::Dict(dict) => convert_document(dict, options),
        other => crate::core::transform(&other, options),
    }
}
