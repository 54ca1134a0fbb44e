//! Error types for JFL

use thiserror::Error;

/// JFL error types
#[derive(Debug, Error)]
pub enum FlError {
    /// Input document (or bind target) was missing where one is required.
    #[error("Null input")]
    NullInput,
    /// Expected one JSON value kind but found another, e.g. a non-object root.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The value kind the operation requires.
        expected: &'static str,
        /// The value kind actually encountered.
        found: &'static str,
    },
    /// A single-object bind requires exactly one emission point.
    #[error("Invalid emission point count: expected exactly 1, found {0}")]
    InvalidEmissionCount(usize),
    /// Conversion or transform failed for a declared field mapping.
    #[error("Field binding failed for {field}: {source}")]
    FieldBinding {
        /// Name of the field whose binding failed.
        field: String,
        /// The underlying coercion or transform failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FlError>;

/// Name of a JSON value's kind, used in `TypeMismatch` errors.
pub fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
