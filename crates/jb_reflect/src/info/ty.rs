use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

/// The identity of a Rust type: its [`TypeId`] and its type path.
///
/// Equality and hashing only consider the [`TypeId`].
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// # Examples
    ///
    /// ```
    /// use jb_reflect::info::Type;
    ///
    /// let ty = Type::of::<Vec<u8>>();
    /// assert!(ty.is::<Vec<u8>>());
    /// assert_eq!(ty.path(), "alloc::vec::Vec<u8>");
    /// ```
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// The fully qualified path, as reported by [`core::any::type_name`].
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}
