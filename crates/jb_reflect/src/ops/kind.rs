use crate::Reflect;
use crate::leaf::ToLeaf;
use crate::ops::{List, Map, RawJson, Struct};

/// An immutable capability view of a value, from [`Reflect::reflect_ref`].
pub enum ReflectRef<'a> {
    /// An optional wrapper; `None` when unset.
    Optional(Option<&'a dyn Reflect>),
    Raw(&'a dyn RawJson),
    #[cfg(feature = "chrono")]
    Date(&'a crate::value::Date),
    Leaf(&'a dyn ToLeaf),
    List(&'a dyn List),
    Map(&'a dyn Map),
    Struct(&'a dyn Struct),
    /// No capability: the value has no JSON representation of its own.
    Opaque(&'a dyn Reflect),
}

impl<'a> ReflectRef<'a> {
    /// Follows optional layers down to the first non-optional view.
    ///
    /// Returns `None` if any layer is unset.
    pub fn unwrap_optional(self) -> Option<ReflectRef<'a>> {
        let mut view = self;
        loop {
            match view {
                ReflectRef::Optional(Some(inner)) => view = inner.reflect_ref(),
                ReflectRef::Optional(None) => return None,
                other => return Some(other),
            }
        }
    }

    /// A short name of the variant, for diagnostics.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            ReflectRef::Optional(_) => "optional",
            ReflectRef::Raw(_) => "raw",
            #[cfg(feature = "chrono")]
            ReflectRef::Date(_) => "date",
            ReflectRef::Leaf(_) => "leaf",
            ReflectRef::List(_) => "list",
            ReflectRef::Map(_) => "map",
            ReflectRef::Struct(_) => "struct",
            ReflectRef::Opaque(_) => "opaque",
        }
    }
}

/// A mutable view of a value, from [`Reflect::reflect_mut`].
///
/// Only composites are mutated in place; everything else is replaced whole.
pub enum ReflectMut<'a> {
    Struct(&'a mut dyn Struct),
    Other(&'a mut dyn Reflect),
}
