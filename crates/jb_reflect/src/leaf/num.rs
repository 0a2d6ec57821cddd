use crate::leaf::{FromLeaf, ToLeaf};
use crate::value::{JsonNumber, JsonValue};

#[inline]
fn number_to_f64(number: &JsonNumber) -> Option<f64> {
    number.as_f64()
}

macro_rules! impl_int_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl FromLeaf for $ty {
            fn from_leaf(value: &JsonValue) -> Option<Self> {
                match value {
                    JsonValue::Number(number) => {
                        if let Some(int) = number.as_i64() {
                            Some(int as $ty)
                        } else if let Some(int) = number.as_u64() {
                            Some(int as $ty)
                        } else {
                            number_to_f64(number).map(|float| float as $ty)
                        }
                    }
                    JsonValue::String(text) => text.parse::<$ty>().ok(),
                    JsonValue::Bool(flag) => Some(<$ty>::from(*flag)),
                    _ => None,
                }
            }
        }

        impl ToLeaf for $ty {
            #[inline]
            fn to_leaf(&self) -> Option<JsonValue> {
                Some(JsonValue::from(*self))
            }
        }
    )*};
}

impl_int_leaf!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl FromLeaf for $ty {
            fn from_leaf(value: &JsonValue) -> Option<Self> {
                match value {
                    JsonValue::Number(number) => number_to_f64(number).map(|float| float as $ty),
                    JsonValue::String(text) => text.parse::<$ty>().ok(),
                    JsonValue::Bool(flag) => Some(<$ty>::from(u8::from(*flag))),
                    _ => None,
                }
            }
        }

        impl ToLeaf for $ty {
            #[inline]
            fn to_leaf(&self) -> Option<JsonValue> {
                JsonNumber::from_f64(f64::from(*self)).map(JsonValue::Number)
            }
        }
    )*};
}

impl_float_leaf!(f32, f64);

impl FromLeaf for bool {
    /// Integer conversion, then non-zero.
    #[inline]
    fn from_leaf(value: &JsonValue) -> Option<Self> {
        i64::from_leaf(value).map(|int| int != 0)
    }
}

impl ToLeaf for bool {
    #[inline]
    fn to_leaf(&self) -> Option<JsonValue> {
        Some(JsonValue::Bool(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn integers_from_numbers() {
        assert_eq!(i32::from_leaf(&json!(45)), Some(45));
        assert_eq!(i32::from_leaf(&json!(45.9)), Some(45));
        assert_eq!(u64::from_leaf(&json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(u8::from_leaf(&json!(-1.5)), Some(0));
    }

    #[test]
    fn integers_from_strings() {
        assert_eq!(i32::from_leaf(&json!("45")), Some(45));
        assert_eq!(i32::from_leaf(&json!("-7")), Some(-7));
        assert_eq!(i32::from_leaf(&json!("45.5")), None);
        assert_eq!(i32::from_leaf(&json!("x")), None);
        assert_eq!(usize::from_leaf(&json!("")), None);
    }

    #[test]
    fn null_is_absence() {
        assert_eq!(i32::from_leaf(&json!(null)), None);
        assert_eq!(f64::from_leaf(&json!(null)), None);
        assert_eq!(bool::from_leaf(&json!(null)), None);
    }

    #[test]
    fn containers_are_not_leaves() {
        assert_eq!(i32::from_leaf(&json!([1])), None);
        assert_eq!(f32::from_leaf(&json!({"a": 1})), None);
    }

    #[test]
    fn floats() {
        assert_eq!(f64::from_leaf(&json!(2)), Some(2.0));
        assert_eq!(f64::from_leaf(&json!("2.5")), Some(2.5));
        assert_eq!(f32::from_leaf(&json!(0.5)), Some(0.5));
        assert_eq!(f64::from_leaf(&json!(true)), Some(1.0));
    }

    #[test]
    fn booleans_go_through_integers() {
        assert_eq!(bool::from_leaf(&json!(1)), Some(true));
        assert_eq!(bool::from_leaf(&json!(0)), Some(false));
        assert_eq!(bool::from_leaf(&json!(-3)), Some(true));
        assert_eq!(bool::from_leaf(&json!("1")), Some(true));
        assert_eq!(bool::from_leaf(&json!("0")), Some(false));
        assert_eq!(bool::from_leaf(&json!(true)), Some(true));
        assert_eq!(bool::from_leaf(&json!(false)), Some(false));
        assert_eq!(bool::from_leaf(&json!("true")), None);
    }

    #[test]
    fn encoding() {
        assert_eq!(12_u16.to_leaf(), Some(json!(12)));
        assert_eq!((-3_i64).to_leaf(), Some(json!(-3)));
        assert_eq!(1.25_f64.to_leaf(), Some(json!(1.25)));
        assert_eq!(true.to_leaf(), Some(json!(true)));
    }

    #[test]
    fn non_finite_floats_have_no_leaf() {
        assert_eq!(f64::NAN.to_leaf(), None);
        assert_eq!(f64::INFINITY.to_leaf(), None);
        assert_eq!(f32::NEG_INFINITY.to_leaf(), None);
        assert_eq!(f32::NAN.to_leaf(), None);
    }
}
