use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::hash::Hash;
use std::collections::HashMap;

use crate::impls::GenericTypeInfoCell;
use crate::info::{MapInfo, TypeInfo, Typed};
use crate::ops::{Map, MapKey};
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_map {
    ($map:ident $(, $bound:path)*) => {
        impl<K, V> Typed for $map<K, V>
        where
            K: FromReflect + Typed + MapKey $(+ $bound)*,
            V: FromReflect + Typed,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::new::<Self>().with_map(MapInfo::new::<Self, K, V>())
                })
            }
        }

        impl<K, V> Reflect for $map<K, V>
        where
            K: FromReflect + Typed + MapKey $(+ $bound)*,
            V: FromReflect + Typed,
        {
            crate::reflection::impl_reflect_cast_fn!(Map);
        }

        impl<K, V> Map for $map<K, V>
        where
            K: FromReflect + Typed + MapKey $(+ $bound)*,
            V: FromReflect + Typed,
        {
            #[inline]
            fn len(&self) -> usize {
                <$map<K, V>>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = (&dyn MapKey, &dyn Reflect)> + '_> {
                Box::new(
                    <$map<K, V>>::iter(self)
                        .map(|(key, value)| (key as &dyn MapKey, value as &dyn Reflect)),
                )
            }
        }

        impl<K, V> FromReflect for $map<K, V>
        where
            K: FromReflect + Typed + MapKey $(+ $bound)*,
            V: FromReflect + Typed,
        {
        }
    };
}

impl_reflect_map!(BTreeMap, Ord);
impl_reflect_map!(HashMap, Hash, Eq);

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::boxed::Box;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn string_keyed_maps() {
        let info = <BTreeMap<String, u8>>::type_info().as_map().unwrap();
        assert!(info.has_string_keys());
        assert!(info.value_info().is::<u8>());

        let entries = vec![(String::from("a"), 1_u8.into_boxed_reflect())];
        let map = info.from_entries(entries).take::<BTreeMap<String, u8>>().unwrap();
        assert_eq!(map.get("a"), Some(&1));
    }

    #[test]
    fn boxed_str_keys() {
        let info = <HashMap<Box<str>, u8>>::type_info().as_map().unwrap();
        assert!(info.has_string_keys());

        let entries = vec![(String::from("k"), 4_u8.into_boxed_reflect())];
        let map = info.from_entries(entries).take::<HashMap<Box<str>, u8>>().unwrap();
        assert_eq!(map.get("k"), Some(&4));
    }

    #[test]
    fn other_keys_are_described() {
        let info = <BTreeMap<u32, u8>>::type_info().as_map().unwrap();
        assert!(!info.has_string_keys());
        assert!(info.key_info().is::<u32>());
    }

    #[test]
    fn iterates_keys_and_values() {
        let map = BTreeMap::from([(3_u32, String::from("c"))]);
        let ReflectRef::Map(view) = map.reflect_ref() else {
            panic!("expected a map");
        };
        let (key, value) = view.iter().next().unwrap();
        assert_eq!(key.key_string().as_deref(), Some("3"));
        assert_eq!(value.downcast_ref::<String>().unwrap(), "c");
    }
}
