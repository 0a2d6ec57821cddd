use alloc::boxed::Box;
use alloc::string::String;

use crate::impls::NonGenericTypeInfoCell;
use crate::info::{LeafInfo, TypeInfo, Typed};
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_leaf {
    ($($ty:ty),* $(,)?) => {$(
        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| TypeInfo::new::<Self>().with_leaf(LeafInfo::new::<Self>()))
            }
        }

        impl Reflect for $ty {
            crate::reflection::impl_reflect_cast_fn!(Leaf);
        }

        impl FromReflect for $ty {}
    )*};
}

impl_reflect_leaf!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, Box<str>,
);

#[cfg(test)]
mod tests {
    use crate::ops::ReflectRef;
    use crate::prelude::*;
    use serde_json::json;

    #[test]
    fn scalars_are_leaves() {
        let info = u32::type_info();
        assert!(info.is::<u32>());
        let value = info.as_leaf().unwrap().from_leaf(&json!("12")).unwrap();
        assert_eq!(value.take::<u32>().unwrap(), 12);

        let ReflectRef::Leaf(leaf) = 2.5_f32.reflect_ref() else {
            panic!("expected a leaf");
        };
        assert_eq!(leaf.to_leaf(), Some(json!(2.5)));
    }

    #[test]
    fn leaf_info_absence() {
        let info = i64::type_info().as_leaf().unwrap();
        assert!(info.from_leaf(&json!(null)).is_none());
        assert!(info.from_leaf(&json!("x")).is_none());
    }
}
