use alloc::boxed::Box;

use crate::Reflect;

/// Typed extraction from a converted value.
///
/// The deserializer converts against the innermost type of a field, so a
/// field of type `Option<T>` or `Box<T>` receives a boxed `T`. The default
/// implementation only accepts `Self`; wrappers override it to accept their
/// inner value as well.
///
/// ```rust
/// use jb_reflect::{FromReflect, Reflect};
///
/// let value = 3_u16.into_boxed_reflect();
/// assert_eq!(<Option<Option<u16>>>::take_reflect(value).unwrap(), Some(Some(3)));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FromReflect` so cannot be created through reflection",
    note = "consider annotating `{Self}` with `#[derive(Reflect)]`"
)]
pub trait FromReflect: Reflect + Sized {
    fn take_reflect(reflect: Box<dyn Reflect>) -> Result<Self, Box<dyn Reflect>> {
        reflect.take::<Self>()
    }
}
