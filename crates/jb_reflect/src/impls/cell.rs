//! Containers for static storage of type information.
//!
//! For non-generic types, [`NonGenericTypeInfoCell`] wraps a [`OnceLock`].
//!
//! For generic types the `static CELL` inside `type_info` is shared by every
//! instantiation, so [`GenericTypeInfoCell`] keys leaked infos by [`TypeId`].

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use foldhash::fast::FixedState;
use hashbrown::HashMap;

use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// NonGenericTypeInfoCell

/// Container for static storage of non-generic type information.
///
/// ## Example
///
/// ```
/// use jb_reflect::{impls::NonGenericTypeInfoCell, info::{TypeInfo, Typed}};
///
/// struct Meters(f64);
///
/// impl Typed for Meters {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::new::<Self>())
///     }
/// }
///
/// assert!(core::ptr::eq(Meters::type_info(), Meters::type_info()));
/// ```
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored info, building it with `f` on first access.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &TypeInfo
    where
        F: FnOnce() -> TypeInfo,
    {
        self.0.get_or_init(f)
    }
}

// -----------------------------------------------------------------------------
// GenericTypeInfoCell

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use jb_reflect::{impls::GenericTypeInfoCell, info::{TypeInfo, Typed}};
///
/// struct Tagged<T>(T);
///
/// impl<T: 'static> Typed for Tagged<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| TypeInfo::new::<Self>())
///     }
/// }
///
/// assert!(<Tagged<u8>>::type_info().is::<Tagged<u8>>());
/// assert!(<Tagged<i8>>::type_info().is::<Tagged<i8>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<HashMap<TypeId, &'static TypeInfo, FixedState>>);

impl GenericTypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(HashMap::with_hasher(FixedState::with_seed(0))))
    }

    /// Returns the info stored for `G`, building it with `f` on first access.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        match self.get_by_type_id(type_id) {
            Some(info) => info,
            None => self.insert_by_type_id(type_id, f()),
        }
    }

    #[inline(never)]
    fn get_by_type_id(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    // `f` runs without the lock held: building an info may query other
    // generic infos stored in this same cell.
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, value: TypeInfo) -> &'static TypeInfo {
        *self
            .0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(type_id)
            .or_insert_with(|| Box::leak(Box::new(value)))
    }
}

impl Default for NonGenericTypeInfoCell {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for GenericTypeInfoCell {
    fn default() -> Self {
        Self::new()
    }
}
