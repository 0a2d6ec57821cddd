//! Items referenced by code that `#[derive(Reflect)]` expands to.
//!
//! The invoking crate may be `no_std`-flavoured or shadow prelude names, so
//! generated code only reaches allocation types through this module.

pub mod alloc_utils {
    pub use alloc::boxed::Box;
    pub use alloc::string::{String, ToString};
    pub use alloc::vec::Vec;
}

pub use core::any::Any;
pub use core::option::Option;
pub use core::result::Result;

/// Forwarding into `#[reflect(base)]` fields.
pub mod struct_utils {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::ops::{AssignError, ReflectMut, ReflectRef};

    /// Looks `name` up in a base value, if it is a composite.
    pub fn base_field<'a>(base: &'a dyn Reflect, name: &str) -> Option<&'a dyn Reflect> {
        match base.reflect_ref() {
            ReflectRef::Struct(inner) => inner.field(name),
            _ => None,
        }
    }

    /// Assigns `name` in a base value, if it is a composite.
    pub fn set_base_field(
        base: &mut dyn Reflect,
        name: &str,
        value: Box<dyn Reflect>,
    ) -> Result<(), AssignError> {
        match base.reflect_mut() {
            ReflectMut::Struct(inner) => inner.set_field(name, value),
            ReflectMut::Other(_) => Err(AssignError::unknown_field(name)),
        }
    }
}
