//! Value-side capability traits.
//!
//! Where [`TypeInfo`](crate::info::TypeInfo) describes what a type can be
//! converted from, these traits expose what a value holds so it can be
//! reduced back to JSON.

// -----------------------------------------------------------------------------
// Modules

mod assign;
mod kind;
mod list;
mod map;
mod raw;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use assign::AssignError;
pub use kind::{ReflectMut, ReflectRef};
pub use list::List;
pub use map::{Map, MapKey};
pub use raw::RawJson;
pub use struct_ops::Struct;
