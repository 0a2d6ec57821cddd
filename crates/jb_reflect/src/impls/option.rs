use alloc::boxed::Box;

use crate::impls::GenericTypeInfoCell;
use crate::info::{OptionalInfo, TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::{FromReflect, Reflect};

impl<T: Reflect + Typed> Typed for Option<T> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| {
            TypeInfo::new::<Self>().with_optional(OptionalInfo::new::<T>())
        })
    }
}

impl<T: Reflect + Typed> Reflect for Option<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        ReflectRef::Optional(self.as_ref().map(Reflect::as_reflect))
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        ReflectMut::Other(self)
    }
}

/// Accepts `Option<T>` itself, or anything `T` accepts wrapped in `Some`.
impl<T: FromReflect + Typed> FromReflect for Option<T> {
    fn take_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match reflect.take::<Self>() {
            Ok(value) => Ok(value),
            Err(reflect) => T::take_reflect(reflect).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ops::ReflectRef;
    use crate::{FromReflect, Reflect};

    #[test]
    fn wraps_inner_values() {
        let value = <Option<Option<i32>>>::take_reflect(5_i32.into_boxed_reflect()).unwrap();
        assert_eq!(value, Some(Some(5)));

        let value = <Option<i32>>::take_reflect(Some(2_i32).into_boxed_reflect()).unwrap();
        assert_eq!(value, Some(2));

        assert!(<Option<i32>>::take_reflect(5_u8.into_boxed_reflect()).is_err());
    }

    #[test]
    fn unset_layers() {
        let value: Option<Option<u8>> = Some(None);
        assert!(value.reflect_ref().unwrap_optional().is_none());

        let value: Option<Option<u8>> = Some(Some(1));
        let view = value.reflect_ref().unwrap_optional().unwrap();
        assert!(matches!(view, ReflectRef::Leaf(_)));
    }
}
