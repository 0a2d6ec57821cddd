use crate::Reflect;
use crate::value::JsonValue;

/// A value that already is JSON and is emitted as-is.
pub trait RawJson: Reflect {
    /// The JSON to emit, or `None` to omit the value.
    fn to_json(&self) -> Option<JsonValue>;
}
