#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate through `jb_reflect`, which must also
// resolve inside the crate itself (unit tests and doc tests).
extern crate self as jb_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod impls;
pub mod info;
pub mod leaf;
pub mod ops;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use jb_reflect_derive as derive;
pub use reflection::{FromReflect, Reflect};

/// Commonly used items.
pub mod prelude {
    pub use crate::derive::Reflect;
    pub use crate::info::{DynamicTyped, TypeInfo, Typed};
    pub use crate::leaf::{FromLeaf, ToLeaf};
    pub use crate::ops::{AssignError, List, Map, MapKey, ReflectMut, ReflectRef, Struct};
    pub use crate::value::{JsonKind, JsonValue};
    pub use crate::{FromReflect, Reflect};
}
