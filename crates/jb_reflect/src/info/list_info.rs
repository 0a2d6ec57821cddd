use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::info::{TypeInfo, Typed};
use crate::{FromReflect, Reflect};

/// Descriptor of a homogeneous collection: ordered sequences and sets alike.
#[derive(Clone, Copy, Debug)]
pub struct ListInfo {
    item: fn() -> &'static TypeInfo,
    from_items: fn(Vec<Box<dyn Reflect>>) -> Box<dyn Reflect>,
}

fn collect_items<L, T>(items: Vec<Box<dyn Reflect>>) -> Box<dyn Reflect>
where
    L: FromIterator<T> + Reflect,
    T: FromReflect,
{
    let list: L = items
        .into_iter()
        .filter_map(|item| T::take_reflect(item).ok())
        .collect();
    Box::new(list)
}

impl ListInfo {
    #[inline]
    pub fn new<L, T>() -> Self
    where
        L: FromIterator<T> + Reflect,
        T: FromReflect + Typed,
    {
        Self {
            item: T::type_info,
            from_items: collect_items::<L, T>,
        }
    }

    #[inline]
    pub fn item_info(&self) -> &'static TypeInfo {
        (self.item)()
    }

    /// Builds the collection from converted items.
    ///
    /// Items that are not of the element type are skipped.
    #[inline]
    pub fn from_items(&self, items: Vec<Box<dyn Reflect>>) -> Box<dyn Reflect> {
        (self.from_items)(items)
    }
}
