//! Error handling for tomlsx conversions
//!
//! This module provides a unified error type and result type for the
//! front end, the transformation core and the CLI.

use std::fmt;

/// Conversion error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// Parse error - the source document could not be parsed
    ParseError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// A key or bare word is not a legal identifier
    InvalidIdentifier {
        name: String,
        /// Top-level section the offending entry belongs to
        section: Option<String>,
        /// Dotted path of the offending entry (e.g. `data.items[2]`)
        path: Option<String>,
    },
    /// A source value has no counterpart in the value tree
    UnsupportedValue { kind: String, path: Option<String> },
    /// The const section is present but is not a table
    InvalidConstSection { found: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::ParseError {
                message,
                line,
                column,
            } => {
                if let (Some(l), Some(c)) = (line, column) {
                    write!(f, "Parse error at line {}, column {}: {}", l, c, message)
                } else if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            ConversionError::InvalidIdentifier {
                name,
                section,
                path,
            } => {
                write!(f, "Invalid name: '{}'", name)?;
                if let Some(p) = path {
                    write!(f, " at '{}'", p)?;
                }
                if let Some(s) = section {
                    write!(f, " in [{}] section", s)?;
                }
                Ok(())
            }
            ConversionError::UnsupportedValue { kind, path } => {
                if let Some(p) = path {
                    write!(f, "Unsupported value type '{}' at '{}'", kind, p)
                } else {
                    write!(f, "Unsupported value type: {}", kind)
                }
            }
            ConversionError::InvalidConstSection { found } => {
                write!(f, "The [const] section must be a table, found {}", found)
            }
            ConversionError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

impl From<std::io::Error> for ConversionError {
    fn from(err: std::io::Error) -> Self {
        ConversionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

// Convenience constructors for errors
impl ConversionError {
    pub fn parse(message: impl Into<String>) -> Self {
        ConversionError::ParseError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        ConversionError::ParseError {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn invalid_identifier(name: impl Into<String>) -> Self {
        ConversionError::InvalidIdentifier {
            name: name.into(),
            section: None,
            path: None,
        }
    }

    pub fn unsupported(kind: impl Into<String>) -> Self {
        ConversionError::UnsupportedValue {
            kind: kind.into(),
            path: None,
        }
    }

    /// Attach the dotted path of the entry being converted.
    ///
    /// An already recorded path is kept, so the innermost location wins
    /// when the error bubbles up through nested tables.
    pub fn at_path(mut self, location: impl Into<String>) -> Self {
        match &mut self {
            ConversionError::InvalidIdentifier { path, .. }
            | ConversionError::UnsupportedValue { path, .. } => {
                if path.is_none() {
                    *path = Some(location.into());
                }
            }
            _ => {}
        }
        self
    }

    /// Attach the top-level section the failing entry belongs to.
    pub fn in_section(mut self, name: impl Into<String>) -> Self {
        if let ConversionError::InvalidIdentifier { section, .. } = &mut self {
            if section.is_none() {
                *section = Some(name.into());
            }
        }
        self
    }

    /// True for failures of the source parser rather than the transformer.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ConversionError::ParseError { .. })
    }
}
