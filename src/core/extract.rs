//! Const-section extraction
//!
//! The top-level `[const]` table does not appear in the nested output.
//! Each of its entries becomes a standalone `(define name value);` statement.

use tomlsx_value::{Mapping, Value};

use super::context::{TranspileOptions, CONST_SECTION};
use super::identifier::Identifier;
use super::transform::ValueTransformer;
use crate::utils::error::{ConversionError, ConversionResult};

/// One top-level define statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: Identifier,
    /// Value already rendered in the target notation
    pub value: String,
}

impl Define {
    /// Render as `(define name value);`
    pub fn render(&self) -> String {
        format!("(define {} {});", self.name, self.value)
    }
}

/// Remove the const section from `doc` and turn its entries into defines.
///
/// The remaining entries keep their order. Without a const section the
/// document is returned unchanged. Any failing entry aborts the extraction.
pub fn extract_defines(
    mut doc: Mapping,
    options: &TranspileOptions,
) -> ConversionResult<(Vec<Define>, Mapping)> {
    let section = match doc.shift_remove(CONST_SECTION) {
        Some(Value::Dict(section)) => section,
        Some(other) => {
            return Err(ConversionError::InvalidConstSection {
                found: other.type_name().to_string(),
            })
        }
        None => return Ok((Vec::new(), doc)),
    };
    tracing::debug!(entries = section.len(), "processing [{}] section", CONST_SECTION);

    let transformer = ValueTransformer::new(options);
    let mut defines = Vec::with_capacity(section.len());
    for (key, value) in &section {
        let path = format!("{}.{}", CONST_SECTION, key);
        let define = transformer
            .name(key, &path)
            .and_then(|name| {
                let value = transformer.transform_at(value, 0, &path)?;
                Ok(Define { name, value })
            })
            .map_err(|e| e.in_section(CONST_SECTION))?;
        tracing::trace!(name = %define.name, value = %define.value, "define");
        defines.push(define);
    }

    Ok((defines, doc))
}
