//! Conversions between JSON leaves and native scalars.
//!
//! Decoding follows a small set of rules shared by every scalar:
//!
//! - `null` never produces a value, whatever the target.
//! - Strings are parsed into numeric targets; a parse failure is absence.
//! - Numbers convert between numeric types with `as` semantics, so a
//!   fractional number truncates into an integer target.
//! - Booleans have no grammar of their own: a leaf becomes a `bool` by first
//!   converting to an integer, then testing for non-zero. JSON `true` and
//!   `false` count as `1` and `0`.
//! - Numbers and booleans render to their textual form for string targets.
//!
//! Encoding is direct, except that non-finite floats have no JSON
//! representation and encode to `None`.
//!
//! ```rust
//! use jb_reflect::leaf::{FromLeaf, ToLeaf};
//! use serde_json::json;
//!
//! assert_eq!(i32::from_leaf(&json!("45")), Some(45));
//! assert_eq!(i32::from_leaf(&json!(45)), Some(45));
//! assert_eq!(i32::from_leaf(&json!(null)), None);
//! assert_eq!(bool::from_leaf(&json!("2")), Some(true));
//! assert_eq!(f64::NAN.to_leaf(), None);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod num;
mod text;

// -----------------------------------------------------------------------------
// Traits

use crate::value::JsonValue;

/// Decodes a native scalar from a JSON leaf.
pub trait FromLeaf: Sized {
    /// Returns `None` when the leaf has no representation as `Self`.
    fn from_leaf(value: &JsonValue) -> Option<Self>;
}

/// Encodes a native scalar as a JSON leaf.
pub trait ToLeaf {
    /// Returns `None` when the value has no JSON representation.
    fn to_leaf(&self) -> Option<JsonValue>;
}

#[cfg(test)]
mod tests {
    use crate::ops::MapKey;
    use crate::prelude::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(rename_all = "lowercase")]
    enum Shape {
        Square,
        Circle,
        #[reflect(rename = "ellipse")]
        Oval,
    }

    #[derive(Reflect, Debug, PartialEq)]
    #[reflect(raw = i64)]
    enum Level {
        Low = 1,
        High = 10,
    }

    #[test]
    fn string_raw_enum() {
        assert_eq!(Shape::from_leaf(&json!("circle")), Some(Shape::Circle));
        assert_eq!(Shape::from_leaf(&json!("ellipse")), Some(Shape::Oval));
        assert_eq!(Shape::from_leaf(&json!("triangle")), None);
        assert_eq!(Shape::from_leaf(&json!("Circle")), None);
        assert_eq!(Shape::Square.to_leaf(), Some(json!("square")));
        assert_eq!(Shape::Oval.key_string().as_deref(), Some("ellipse"));
        assert!(Shape::type_info().as_leaf().is_some());
    }

    #[test]
    fn integer_raw_enum() {
        assert_eq!(Level::from_leaf(&json!(10)), Some(Level::High));
        assert_eq!(Level::from_leaf(&json!("1")), Some(Level::Low));
        assert_eq!(Level::from_leaf(&json!(5)), None);
        assert_eq!(Level::High.to_leaf(), Some(json!(10)));
        assert_eq!(Level::Low.key_string().as_deref(), Some("1"));
    }
}
