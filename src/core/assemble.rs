//! Output assembly

use tomlsx_value::Mapping;

use super::context::TranspileOptions;
use super::extract::Define;
use super::transform::ValueTransformer;
use crate::utils::error::ConversionResult;

/// Join the define statements and the transformed document into the final
/// text, one define per line followed by the document structure.
pub fn assemble(
    defines: &[Define],
    rest: &Mapping,
    options: &TranspileOptions,
) -> ConversionResult<String> {
    let mut lines: Vec<String> = defines.iter().map(Define::render).collect();

    if !rest.is_empty() || options.emit_empty_document {
        tracing::debug!(entries = rest.len(), "processing main data");
        lines.push(ValueTransformer::new(options).transform_mapping(rest)?);
    }

    Ok(lines.join("\n"))
}
