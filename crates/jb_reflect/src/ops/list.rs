use alloc::boxed::Box;

use crate::Reflect;

/// A homogeneous collection: sequences and sets.
pub trait List: Reflect {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the elements in the collection's own order.
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_>;
}
