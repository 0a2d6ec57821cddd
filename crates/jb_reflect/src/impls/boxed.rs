use alloc::boxed::Box;

use crate::info::{TypeInfo, Typed};
use crate::ops::{ReflectMut, ReflectRef};
use crate::{FromReflect, Reflect};

// `Box<T>` is transparent: it shares the info of `T` and forwards every view,
// which allows recursive composites such as `next: Option<Box<Node>>`.

impl<T: Typed> Typed for Box<T> {
    #[inline]
    fn type_info() -> &'static TypeInfo {
        T::type_info()
    }
}

impl<T: Reflect + Typed> Reflect for Box<T> {
    #[inline]
    fn reflect_ref(&self) -> ReflectRef<'_> {
        (**self).reflect_ref()
    }

    #[inline]
    fn reflect_mut(&mut self) -> ReflectMut<'_> {
        (**self).reflect_mut()
    }

    #[inline]
    fn reflect_proxy(&self) -> Option<Box<dyn Reflect>> {
        (**self).reflect_proxy()
    }
}

impl<T: FromReflect + Typed> FromReflect for Box<T> {
    fn take_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        match reflect.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(reflect) => match reflect.take::<Self>() {
                Ok(value) => Ok(value),
                Err(reflect) => T::take_reflect(reflect).map(Box::new),
            },
        }
    }
}
