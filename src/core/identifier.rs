//! Identifier validation and normalization

use std::fmt;

use super::context::{IdentifierPolicy, DIGIT_PREFIX, IDENTIFIER_PATTERN};
use crate::utils::error::{ConversionError, ConversionResult};

/// A legal target identifier: a lowercase letter followed by lowercase
/// letters, digits or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Check `raw` against the identifier pattern, rewriting it first when the
/// policy is lenient.
pub fn normalize(raw: &str, policy: IdentifierPolicy) -> ConversionResult<Identifier> {
    tracing::trace!(name = raw, ?policy, "normalizing name");
    let candidate = match policy {
        IdentifierPolicy::Strict => raw.to_string(),
        IdentifierPolicy::Lenient => lenient_form(raw),
    };
    if IDENTIFIER_PATTERN.is_match(&candidate) {
        Ok(Identifier(candidate))
    } else {
        Err(ConversionError::invalid_identifier(raw))
    }
}

/// True if `name` is already a legal identifier.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER_PATTERN.is_match(name)
}

fn lenient_form(raw: &str) -> String {
    let mut out: String = raw
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' => c,
            _ => '_',
        })
        .collect();
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, DIGIT_PREFIX);
    }
    out
}
