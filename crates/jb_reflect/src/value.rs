//! The JSON value model shared by every conversion.
//!
//! Values come from [`serde_json`], built with `preserve_order` so objects keep
//! insertion order. [`serde_json::Number`] cannot hold NaN or infinity, so a
//! non-finite float never becomes a number leaf.

use alloc::string::String;
use core::fmt;

pub use serde_json::Value as JsonValue;

/// A JSON object: string keys to values, in insertion order.
pub type JsonMap = serde_json::Map<String, JsonValue>;

/// A JSON number with full precision.
pub type JsonNumber = serde_json::Number;

/// The date type recognized by the date capability.
#[cfg(feature = "chrono")]
pub type Date = chrono::DateTime<chrono::Utc>;

// -----------------------------------------------------------------------------
// JsonKind

/// The shape of a [`JsonValue`], without its payload.
///
/// Used to name sources and targets in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the shape of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jb_reflect::value::{JsonKind, JsonValue};
    ///
    /// assert_eq!(JsonKind::of(&JsonValue::from(3)), JsonKind::Number);
    /// assert_eq!(JsonKind::of(&JsonValue::Null), JsonKind::Null);
    /// ```
    pub const fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Bool,
            JsonValue::Number(_) => Self::Number,
            JsonValue::String(_) => Self::String,
            JsonValue::Array(_) => Self::Array,
            JsonValue::Object(_) => Self::Object,
        }
    }

    /// Scalars: null, booleans, numbers and strings.
    #[inline]
    pub const fn is_leaf(self) -> bool {
        !self.is_container()
    }

    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds() {
        assert_eq!(JsonKind::of(&json!("a")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!([1])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);

        assert!(JsonKind::Null.is_leaf());
        assert!(JsonKind::Bool.is_leaf());
        assert!(JsonKind::Object.is_container());
        assert!(!JsonKind::Array.is_leaf());
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        assert!(JsonNumber::from_f64(f64::NAN).is_none());
        assert!(JsonNumber::from_f64(f64::INFINITY).is_none());
        assert!(JsonNumber::from_f64(1.5).is_some());
    }
}
