use alloc::boxed::Box;

use crate::Reflect;
use crate::leaf::FromLeaf;
use crate::value::JsonValue;

/// Descriptor of a scalar that converts from a JSON leaf.
#[derive(Clone, Copy, Debug)]
pub struct LeafInfo {
    from_leaf: fn(&JsonValue) -> Option<Box<dyn Reflect>>,
}

fn boxed_from_leaf<T: FromLeaf + Reflect>(value: &JsonValue) -> Option<Box<dyn Reflect>> {
    T::from_leaf(value).map(Reflect::into_boxed_reflect)
}

impl LeafInfo {
    #[inline]
    pub fn new<T: FromLeaf + Reflect>() -> Self {
        Self {
            from_leaf: boxed_from_leaf::<T>,
        }
    }

    /// Decodes `value` through the type's [`FromLeaf`] implementation.
    #[inline]
    pub fn from_leaf(&self, value: &JsonValue) -> Option<Box<dyn Reflect>> {
        (self.from_leaf)(value)
    }
}
