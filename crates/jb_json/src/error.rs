use jb_reflect::value::JsonKind;

/// A fatal deserialization failure.
///
/// Anything below the top level is reported as a [`Warning`](crate::Warning)
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum DeserializeError {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level {expected}, found {found}")]
    InvalidTopLevel {
        expected: &'static str,
        found: JsonKind,
    },
}

/// A fatal serialization failure.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Strict mode only.
    #[error("map keys of type `{key_type}` cannot be written as JSON object keys")]
    InvalidMapKeyType { key_type: &'static str },
    /// Strict mode only.
    #[error("a value of type `{type_path}` has no JSON representation")]
    InvalidObject { type_path: &'static str },
    #[error("a top-level value of type `{type_path}` is not an object, a collection or a map")]
    InvalidTopLevel { type_path: &'static str },
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
