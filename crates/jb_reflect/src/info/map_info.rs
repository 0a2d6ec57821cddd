use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::info::{TypeInfo, Typed};
use crate::{FromReflect, Reflect};

/// Descriptor of an associative container.
///
/// Only maps keyed by [`String`] or `Box<str>` can be built from a JSON
/// object; other key types are still described so the engines can report them.
#[derive(Clone, Copy, Debug)]
pub struct MapInfo {
    key: fn() -> &'static TypeInfo,
    value: fn() -> &'static TypeInfo,
    from_entries: fn(Vec<(String, Box<dyn Reflect>)>) -> Box<dyn Reflect>,
}

fn collect_entries<M, K, V>(entries: Vec<(String, Box<dyn Reflect>)>) -> Box<dyn Reflect>
where
    M: FromIterator<(K, V)> + Reflect,
    K: FromReflect + Typed,
    V: FromReflect,
{
    let boxed_keys = K::type_info().is::<Box<str>>();
    let map: M = entries
        .into_iter()
        .filter_map(|(key, value)| {
            let key: Box<dyn Reflect> = if boxed_keys {
                Box::new(key.into_boxed_str())
            } else {
                Box::new(key)
            };
            let key = K::take_reflect(key).ok()?;
            let value = V::take_reflect(value).ok()?;
            Some((key, value))
        })
        .collect();
    Box::new(map)
}

impl MapInfo {
    #[inline]
    pub fn new<M, K, V>() -> Self
    where
        M: FromIterator<(K, V)> + Reflect,
        K: FromReflect + Typed,
        V: FromReflect + Typed,
    {
        Self {
            key: K::type_info,
            value: V::type_info,
            from_entries: collect_entries::<M, K, V>,
        }
    }

    #[inline]
    pub fn key_info(&self) -> &'static TypeInfo {
        (self.key)()
    }

    #[inline]
    pub fn value_info(&self) -> &'static TypeInfo {
        (self.value)()
    }

    /// Whether the key type is [`String`] or `Box<str>`, the key types a JSON
    /// object can populate.
    #[inline]
    pub fn has_string_keys(&self) -> bool {
        let key = self.key_info();
        key.is::<String>() || key.is::<Box<str>>()
    }

    /// Builds the map from string keys and converted values.
    ///
    /// Entries whose key or value does not match the map's types are skipped.
    #[inline]
    pub fn from_entries(&self, entries: Vec<(String, Box<dyn Reflect>)>) -> Box<dyn Reflect> {
        (self.from_entries)(entries)
    }
}
