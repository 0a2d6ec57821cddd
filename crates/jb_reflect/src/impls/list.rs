use alloc::boxed::Box;
use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use core::hash::Hash;
use std::collections::HashSet;

use crate::impls::GenericTypeInfoCell;
use crate::info::{ListInfo, TypeInfo, Typed};
use crate::ops::List;
use crate::{FromReflect, Reflect};

macro_rules! impl_reflect_list {
    ($list:ident $(, $bound:path)*) => {
        impl<T: FromReflect + Typed $(+ $bound)*> Typed for $list<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| {
                    TypeInfo::new::<Self>().with_list(ListInfo::new::<Self, T>())
                })
            }
        }

        impl<T: FromReflect + Typed $(+ $bound)*> Reflect for $list<T> {
            crate::reflection::impl_reflect_cast_fn!(List);
        }

        impl<T: FromReflect + Typed $(+ $bound)*> List for $list<T> {
            #[inline]
            fn len(&self) -> usize {
                <$list<T>>::len(self)
            }

            fn iter(&self) -> Box<dyn Iterator<Item = &dyn Reflect> + '_> {
                Box::new(
                    <&$list<T> as IntoIterator>::into_iter(self).map(|item| item as &dyn Reflect),
                )
            }
        }

        impl<T: FromReflect + Typed $(+ $bound)*> FromReflect for $list<T> {}
    };
}

impl_reflect_list!(Vec);
impl_reflect_list!(VecDeque);
impl_reflect_list!(BTreeSet, Ord);
impl_reflect_list!(HashSet, Hash, Eq);

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use alloc::collections::{BTreeSet, VecDeque};
    use pretty_assertions::assert_eq;

    fn items<T: Copy + 'static>(value: &dyn Reflect) -> Vec<T> {
        let ReflectRef::List(list) = value.reflect_ref() else {
            panic!("expected a list");
        };
        list.iter()
            .map(|item| *item.downcast_ref::<T>().unwrap())
            .collect()
    }

    #[test]
    fn iterates_items() {
        assert_eq!(items::<u8>(&vec![1_u8, 2, 3]), [1, 2, 3]);
        assert_eq!(items::<i64>(&VecDeque::from([-1_i64, 5])), [-1, 5]);
        assert!(items::<u16>(&Vec::<u16>::new()).is_empty());
    }

    #[test]
    fn builds_from_items() {
        let info = <Vec<u8>>::type_info().as_list().unwrap();
        assert!(info.item_info().is::<u8>());

        let items = vec![1_u8.into_boxed_reflect(), 2_u8.into_boxed_reflect()];
        let list = info.from_items(items).take::<Vec<u8>>().unwrap();
        assert_eq!(list, [1, 2]);
    }

    #[test]
    fn sets_are_lists() {
        let info = <BTreeSet<i32>>::type_info().as_list().unwrap();
        let items = vec![3_i32.into_boxed_reflect(), 3_i32.into_boxed_reflect()];
        let set = info.from_items(items).take::<BTreeSet<i32>>().unwrap();
        assert_eq!(set.len(), 1);

        let ReflectRef::List(list) = set.reflect_ref() else {
            panic!("expected a list");
        };
        assert_eq!(List::len(list), 1);
    }

    #[test]
    fn optional_items_accept_inner_values() {
        let info = <Vec<Option<i32>>>::type_info().as_list().unwrap();
        assert!(info.item_info().as_optional().is_some());

        let items = vec![7_i32.into_boxed_reflect()];
        let list = info.from_items(items).take::<Vec<Option<i32>>>().unwrap();
        assert_eq!(list, [Some(7)]);
    }
}
