use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect) and by this
/// crate for the supported standard types.
///
/// # Manually Impl
///
/// Store the descriptor in a [`NonGenericTypeInfoCell`] (or a
/// [`GenericTypeInfoCell`] for generic types) so it is built only once:
///
/// ```
/// use jb_reflect::{
///     impls::NonGenericTypeInfoCell,
///     info::{TypeInfo, Typed},
/// };
///
/// struct Celsius(f64);
///
/// impl Typed for Celsius {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::new::<Self>())
///     }
/// }
///
/// assert!(Celsius::type_info().is::<Celsius>());
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::impls::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Blanket-implemented for every [`Typed`] type; do not implement it manually.
pub trait DynamicTyped {
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        T::type_info()
    }
}
