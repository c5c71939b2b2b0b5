//! TOML to S-expression conversion core
//!
//! The pipeline runs in three steps over an already parsed value tree:
//! the `[const]` table is pulled out into define statements, the rest of
//! the document is rendered as a `$[ ... ]` keyed structure, and both are
//! assembled into the output text.

pub mod assemble;
pub mod context;
pub mod expression;
pub mod extract;
pub mod identifier;
pub mod transform;

pub use assemble::assemble;
pub use context::{
    IdentifierPolicy, TranspileOptions, CONST_SECTION, DIGIT_PREFIX, EXPRESSION_DELIMITERS,
    EXPRESSION_MARKER,
};
pub use expression::rewrite_arrays;
pub use extract::{extract_defines, Define};
pub use identifier::{is_identifier, normalize, Identifier};
pub use transform::{transform, ValueTransformer};

use tomlsx_value::Mapping;

use crate::utils::error::ConversionResult;

/// Run extraction, transformation and assembly over a parsed document.
pub fn convert_document(doc: Mapping, options: &TranspileOptions) -> ConversionResult<String> {
    let (defines, rest) = extract_defines(doc, options)?;
    let output = assemble(&defines, &rest, options)?;
    tracing::debug!(defines = defines.len(), bytes = output.len(), "conversion finished");
    Ok(output)
}
