//! Options and fixed notation constants for TOML to S-expression conversion

use lazy_static::lazy_static;
use regex::Regex;

// =============================================================================
// Notation constants
// =============================================================================

/// Name of the top-level table whose entries become `define` statements.
pub const CONST_SECTION: &str = "const";

/// Leading character marking a string as a raw formula.
pub const EXPRESSION_MARKER: char = '=';

/// Opening and closing delimiters wrapped around rewritten formulas.
pub const EXPRESSION_DELIMITERS: (char, char) = ('|', '|');

/// Prefix inserted in front of identifiers that start with a digit
/// under the lenient policy.
pub const DIGIT_PREFIX: &str = "n_";

lazy_static! {
    /// Legal target identifier
    pub static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();

    /// Four dot-separated groups of one to three ASCII digits
    pub static ref DOTTED_QUAD_PATTERN: Regex =
        Regex::new(r"^[0-9]{1,3}(\.[0-9]{1,3}){3}$").unwrap();

    /// Single-level array literal inside a formula
    pub static ref ARRAY_LITERAL_PATTERN: Regex = Regex::new(r"\[(.*?)\]").unwrap();
}

// =============================================================================
// Conversion Options
// =============================================================================

/// How keys and bare-word strings are turned into identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierPolicy {
    /// Reject anything that does not already match the identifier pattern
    Strict,
    /// Lower-case, replace illegal characters with `_` and prefix a leading
    /// digit with `n_` before checking
    #[default]
    Lenient,
}

/// Options for TOML to S-expression conversion
#[derive(Debug, Clone)]
pub struct TranspileOptions {
    /// Identifier policy applied to every key and bare word of a run
    /// Default: Lenient
    pub policy: IdentifierPolicy,

    /// Spaces added per nesting level of keyed mappings
    /// Default: 2
    pub indent: usize,

    /// Render an empty `$[ ]` structure when nothing but the const
    /// section was present
    /// Default: true
    pub emit_empty_document: bool,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            policy: IdentifierPolicy::Lenient,
            indent: 2,
            emit_empty_document: true,
        }
    }
}

impl TranspileOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create strict mode options (errors on any illegal name)
    pub fn strict() -> Self {
        Self {
            policy: IdentifierPolicy::Strict,
            ..Self::default()
        }
    }

    /// Options that omit the empty document structure after the defines
    pub fn compact() -> Self {
        Self {
            emit_empty_document: false,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: IdentifierPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
