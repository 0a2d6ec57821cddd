// -----------------------------------------------------------------------------
// Modules

mod match_reflect;

mod enum_kind;
mod opaque_kind;
mod struct_kind;

mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use match_reflect::match_reflect_impls;

use enum_kind::impl_enum;
use opaque_kind::impl_opaque;
use struct_kind::impl_struct;
use trait_reflect::{impl_trait_from_reflect, impl_trait_reflect};
use trait_typed::impl_trait_typed;
