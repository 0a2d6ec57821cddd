use alloc::boxed::Box;
use alloc::string::{String, ToString};

use crate::Reflect;

/// An associative container.
pub trait Map: Reflect {
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&dyn MapKey, &dyn Reflect)> + '_>;
}

/// Derives the JSON object key of a map key.
///
/// Strings are used as-is and other scalars use their textual form. The
/// default implementation returns `None`, meaning the key cannot be written
/// as a JSON object key.
///
/// ```rust
/// use jb_reflect::ops::MapKey;
///
/// assert_eq!(42_u8.key_string().as_deref(), Some("42"));
///
/// struct Opaque;
/// impl MapKey for Opaque {}
/// assert_eq!(Opaque.key_string(), None);
/// ```
pub trait MapKey {
    fn key_string(&self) -> Option<String> {
        None
    }
}

impl MapKey for String {
    #[inline]
    fn key_string(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl MapKey for Box<str> {
    #[inline]
    fn key_string(&self) -> Option<String> {
        Some(String::from(&**self))
    }
}

macro_rules! impl_display_key {
    ($($ty:ty),* $(,)?) => {$(
        impl MapKey for $ty {
            #[inline]
            fn key_string(&self) -> Option<String> {
                Some(self.to_string())
            }
        }
    )*};
}

impl_display_key!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
