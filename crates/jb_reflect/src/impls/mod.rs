//! [`Typed`](crate::info::Typed) and [`Reflect`](crate::Reflect)
//! implementations for standard types, plus the static cells used to store
//! type info.

// -----------------------------------------------------------------------------
// Modules

mod boxed;
mod cell;
mod json;
mod list;
mod map;
mod option;
mod scalar;

#[cfg(feature = "chrono")]
mod date;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
