use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::leaf::{FromLeaf, ToLeaf};
use crate::value::JsonValue;

impl FromLeaf for String {
    fn from_leaf(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(text) => Some(text.clone()),
            JsonValue::Number(number) => Some(number.to_string()),
            JsonValue::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
}

impl ToLeaf for String {
    #[inline]
    fn to_leaf(&self) -> Option<JsonValue> {
        Some(JsonValue::String(self.clone()))
    }
}

impl FromLeaf for Box<str> {
    #[inline]
    fn from_leaf(value: &JsonValue) -> Option<Self> {
        String::from_leaf(value).map(String::into_boxed_str)
    }
}

impl ToLeaf for Box<str> {
    #[inline]
    fn to_leaf(&self) -> Option<JsonValue> {
        Some(JsonValue::String(String::from(&**self)))
    }
}

/// A string of exactly one character.
impl FromLeaf for char {
    fn from_leaf(value: &JsonValue) -> Option<Self> {
        let text = String::from_leaf(value)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Some(ch),
            _ => None,
        }
    }
}

impl ToLeaf for char {
    #[inline]
    fn to_leaf(&self) -> Option<JsonValue> {
        Some(JsonValue::String(self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings() {
        assert_eq!(String::from_leaf(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(String::from_leaf(&json!(45)).as_deref(), Some("45"));
        assert_eq!(String::from_leaf(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(String::from_leaf(&json!(false)).as_deref(), Some("false"));
        assert_eq!(String::from_leaf(&json!(null)), None);
        assert_eq!(String::from_leaf(&json!(["a"])), None);
    }

    #[test]
    fn chars() {
        assert_eq!(char::from_leaf(&json!("é")), Some('é'));
        assert_eq!(char::from_leaf(&json!(7)), Some('7'));
        assert_eq!(char::from_leaf(&json!("ab")), None);
        assert_eq!(char::from_leaf(&json!("")), None);
        assert_eq!('x'.to_leaf(), Some(json!("x")));
    }

    #[test]
    fn boxed_str() {
        let value = Box::<str>::from_leaf(&json!("hi")).unwrap();
        assert_eq!(&*value, "hi");
        assert_eq!(value.to_leaf(), Some(json!("hi")));
    }
}
