use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::DynamicTyped;
use crate::ops::{ReflectMut, ReflectRef};

// -----------------------------------------------------------------------------
// Reflect

/// The object-safe view of a value taking part in JSON binding.
///
/// `Reflect` tells the engines which capability a value exposes
/// ([`reflect_ref`](Self::reflect_ref)), how to mutate composites
/// ([`reflect_mut`](Self::reflect_mut)) and whether the value wants to be
/// serialized through another value ([`reflect_proxy`](Self::reflect_proxy)).
///
/// Use [`#[derive(Reflect)]`](crate::derive::Reflect) for your own types.
///
/// ## Type Identification
///
/// [`Any::type_id`] on `Box<dyn Reflect>` returns the id of the box itself.
/// Use [`Reflect::ty_id`] instead:
///
/// ```rust
/// # use jb_reflect::Reflect;
/// # use core::any::{Any, TypeId};
/// let x: Box<dyn Reflect> = 32_i32.into_boxed_reflect();
///
/// assert!(x.type_id() != TypeId::of::<i32>());
/// assert!(x.ty_id() == TypeId::of::<i32>());
/// ```
pub trait Reflect: DynamicTyped + Send + Sync + Any {
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// The capability view of this value.
    fn reflect_ref(&self) -> ReflectRef<'_>;

    /// The mutable view of this value; composites return
    /// [`ReflectMut::Struct`].
    fn reflect_mut(&mut self) -> ReflectMut<'_>;

    /// A value to serialize in place of this one.
    ///
    /// Returns `None` by default.
    #[inline]
    fn reflect_proxy(&self) -> Option<Box<dyn Reflect>> {
        None
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts to a concrete box, handing the original back on failure.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let any: Box<dyn Any> = self;
        match any.downcast::<T>() {
            Ok(value) => Ok(value),
            Err(_) => unreachable!("type is already checked"),
        }
    }

    /// Moves the concrete value out, handing the original back on failure.
    ///
    /// ```rust
    /// # use jb_reflect::Reflect;
    /// let x: Box<dyn Reflect> = 10_u8.into_boxed_reflect();
    /// let x = x.take::<String>().unwrap_err();
    /// assert_eq!(x.take::<u8>().unwrap(), 10);
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }

    /// The path of the underlying type.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.reflect_type_info().type_path()
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn Reflect<{}>", self.type_path())
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `reflect_ref` and `reflect_mut` for a non-composite kind.
macro_rules! impl_reflect_cast_fn {
    ($kind:ident) => {
        #[inline]
        fn reflect_ref(&self) -> $crate::ops::ReflectRef<'_> {
            $crate::ops::ReflectRef::$kind(self)
        }

        #[inline]
        fn reflect_mut(&mut self) -> $crate::ops::ReflectMut<'_> {
            $crate::ops::ReflectMut::Other(self)
        }
    };
}

pub(crate) use impl_reflect_cast_fn;
