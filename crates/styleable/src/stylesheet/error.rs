//! Error types for stylesheet construction and merging.

use serde_json::Value;
use thiserror::Error;

/// Error type for stylesheet construction and merge failures.
///
/// Both variants are contract failures: the attempt fails outright and no
/// partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylesheetError {
    /// The supplied value is not a plain selector-to-class mapping.
    ///
    /// Raised at the JSON boundary, before any component is wrapped.
    #[error("{what} must be an object (a plain selector to class-name mapping), got {found}")]
    InvalidShape {
        /// Which input was malformed ("stylesheet", "overrides", "compose").
        what: &'static str,
        /// Description of the offending value.
        found: String,
    },

    /// An override or compose entry targets a selector the stylesheet does
    /// not define.
    #[error("overrides must only target selectors present in the stylesheet: \"{}\" not included in the stylesheet keys \"{}\"", .selectors.join(", "), .known.join(", "))]
    UnknownSelectors {
        /// The offending selector names, sorted.
        selectors: Vec<String>,
        /// The valid selector set, sorted.
        known: Vec<String>,
    },
}

/// Describes a JSON value's kind for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
