use alloc::boxed::Box;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{RawInfo, RawKind, TypeInfo, Typed};
use crate::ops::RawJson;
use crate::value::{JsonMap, JsonNumber, JsonValue};
use crate::{FromReflect, Reflect};

fn any_from_json(value: &JsonValue) -> Option<Box<dyn Reflect>> {
    Some(Box::new(value.clone()))
}

fn object_from_json(value: &JsonValue) -> Option<Box<dyn Reflect>> {
    match value {
        JsonValue::Object(map) => Some(Box::new(map.clone())),
        _ => None,
    }
}

fn number_from_json(value: &JsonValue) -> Option<Box<dyn Reflect>> {
    match value {
        JsonValue::Number(number) => Some(Box::new(number.clone())),
        _ => None,
    }
}

macro_rules! impl_reflect_raw {
    ($ty:ty, $kind:ident, $from_json:ident) => {
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::new::<Self>().with_raw(RawInfo::new(RawKind::$kind, $from_json))
                })
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Raw);
        }

        impl FromReflect for $ty {}
    };
}

impl_reflect_raw!(JsonValue, Any, any_from_json);
impl_reflect_raw!(JsonMap, Object, object_from_json);
impl_reflect_raw!(JsonNumber, Number, number_from_json);

/// `null` is omitted like any other unset value.
impl RawJson for JsonValue {
    #[inline]
    fn to_json(&self) -> Option<JsonValue> {
        match self {
            JsonValue::Null => None,
            other => Some(other.clone()),
        }
    }
}

impl RawJson for JsonMap {
    #[inline]
    fn to_json(&self) -> Option<JsonValue> {
        Some(JsonValue::Object(self.clone()))
    }
}

impl RawJson for JsonNumber {
    #[inline]
    fn to_json(&self) -> Option<JsonValue> {
        Some(JsonValue::Number(self.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn raw_shapes() {
        let any = JsonValue::type_info().as_raw().unwrap();
        assert_eq!(any.kind(), RawKind::Any);
        assert!(any.accepts(&json!(null)));
        assert!(any.accepts(&json!([1, 2])));

        let object = JsonMap::type_info().as_raw().unwrap();
        assert!(object.accepts(&json!({"a": 1})));
        assert!(!object.accepts(&json!([1])));
        assert!(object.from_json(&json!([1])).is_none());

        let number = JsonNumber::type_info().as_raw().unwrap();
        let value = number.from_json(&json!(1.5)).unwrap();
        assert_eq!(value.take::<JsonNumber>().unwrap().as_f64(), Some(1.5));
    }

    #[test]
    fn null_is_omitted() {
        assert_eq!(JsonValue::Null.to_json(), None);
        assert_eq!(json!([null]).to_json(), Some(json!([null])));
    }
}
