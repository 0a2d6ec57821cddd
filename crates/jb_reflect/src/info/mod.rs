//! Static type descriptors.
//!
//! A [`TypeInfo`] is built once per type inside [`Typed::type_info`] and is
//! immutable afterwards. It carries a set of capability slots that are not
//! mutually exclusive; the conversion engines probe them in a fixed order.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod leaf_info;
mod list_info;
mod map_info;
mod optional_info;
mod raw_info;
mod struct_info;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use leaf_info::LeafInfo;
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use optional_info::OptionalInfo;
pub use raw_info::{RawInfo, RawKind};
pub use struct_info::StructInfo;
pub use ty::Type;
pub use type_info::{Capability, TypeInfo};
pub use typed::{DynamicTyped, Typed};
