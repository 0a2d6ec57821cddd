use alloc::vec::Vec;
use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{LeafInfo, ListInfo, MapInfo, OptionalInfo, RawInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// Capability

/// The capabilities a [`TypeInfo`] may expose.
///
/// Listed in the order the deserializer probes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Optional,
    Raw,
    Date,
    Leaf,
    List,
    Map,
    Composite,
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time description of a type's JSON shape.
///
/// Capability slots are independent: a raw-value enum is a leaf, a `Vec` and
/// a `HashSet` are both lists, and nothing prevents a hand-written type from
/// exposing several slots at once.
///
/// # Examples
///
/// ```
/// use jb_reflect::info::Typed;
///
/// let info = <Option<Option<Vec<i32>>>>::type_info();
/// assert!(info.as_optional().is_some());
///
/// let list = info.unwrap().as_list().unwrap();
/// assert!(list.item_info().is::<i32>());
/// ```
pub struct TypeInfo {
    ty: Type,
    optional: Option<OptionalInfo>,
    raw: Option<RawInfo>,
    date: bool,
    leaf: Option<LeafInfo>,
    list: Option<ListInfo>,
    map: Option<MapInfo>,
    composite: Option<StructInfo>,
}

macro_rules! impl_capability_fn {
    ($field:ident : $info:ty, $with_fn:ident, $as_fn:ident) => {
        #[inline]
        pub fn $with_fn(mut self, info: $info) -> Self {
            self.$field = Some(info);
            self
        }

        #[inline]
        pub const fn $as_fn(&self) -> Option<&$info> {
            self.$field.as_ref()
        }
    };
}

impl TypeInfo {
    /// Creates an info for `T` without any capability.
    ///
    /// Such a type is opaque to the engines.
    pub fn new<T: Any + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            optional: None,
            raw: None,
            date: false,
            leaf: None,
            list: None,
            map: None,
            composite: None,
        }
    }

    impl_capability_fn!(optional: OptionalInfo, with_optional, as_optional);
    impl_capability_fn!(raw: RawInfo, with_raw, as_raw);
    impl_capability_fn!(leaf: LeafInfo, with_leaf, as_leaf);
    impl_capability_fn!(list: ListInfo, with_list, as_list);
    impl_capability_fn!(map: MapInfo, with_map, as_map);
    impl_capability_fn!(composite: StructInfo, with_composite, as_composite);

    /// Marks the type as the date type handled by date hooks.
    #[inline]
    pub fn with_date(mut self) -> Self {
        self.date = true;
        self
    }

    #[inline]
    pub const fn is_date(&self) -> bool {
        self.date
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Strips every optional layer, returning the innermost type.
    pub fn unwrap(&'static self) -> &'static TypeInfo {
        let mut info = self;
        while let Some(optional) = &info.optional {
            info = optional.inner_info();
        }
        info
    }

    /// The capabilities this type exposes, in probing order.
    pub fn capabilities(&self) -> Vec<Capability> {
        let slots = [
            (self.optional.is_some(), Capability::Optional),
            (self.raw.is_some(), Capability::Raw),
            (self.date, Capability::Date),
            (self.leaf.is_some(), Capability::Leaf),
            (self.list.is_some(), Capability::List),
            (self.map.is_some(), Capability::Map),
            (self.composite.is_some(), Capability::Composite),
        ];
        slots
            .into_iter()
            .filter_map(|(present, capability)| present.then_some(capability))
            .collect()
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("type_path", &self.type_path())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::Typed;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    #[test]
    fn unwrap_strips_nested_optionals() {
        let info = <Option<Option<Option<u8>>>>::type_info();
        assert_eq!(info.capabilities(), [Capability::Optional]);
        assert!(info.unwrap().is::<u8>());
        assert_eq!(info.unwrap().capabilities(), [Capability::Leaf]);
    }

    #[test]
    fn boxes_are_transparent() {
        assert!(<Box<String>>::type_info().is::<String>());
    }

    #[test]
    fn capability_slots() {
        assert_eq!(<Vec<u8>>::type_info().capabilities(), [Capability::List]);
        assert_eq!(
            <BTreeMap<String, u8>>::type_info().capabilities(),
            [Capability::Map]
        );
        assert_eq!(
            <serde_json::Value>::type_info().capabilities(),
            [Capability::Raw]
        );
    }

    #[test]
    fn opaque_info_has_no_capability() {
        struct Hidden;
        let info = TypeInfo::new::<Hidden>();
        assert!(info.capabilities().is_empty());
        assert!(info.is::<Hidden>());
    }
}
