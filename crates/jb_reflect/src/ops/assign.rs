use alloc::string::{String, ToString};
use core::fmt::Display;

use crate::Reflect;

/// Why a value could not be assigned into a composite field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    #[error("no field named `{name}`")]
    UnknownField { name: String },
    #[error("expected a value of type `{expected}`, found `{found}`")]
    MismatchedType {
        expected: &'static str,
        found: &'static str,
    },
    #[error("value rejected: {reason}")]
    Rejected { reason: String },
}

impl AssignError {
    #[inline]
    pub fn unknown_field(name: &str) -> Self {
        Self::UnknownField {
            name: name.to_string(),
        }
    }

    /// A value of the wrong type was offered for a field of type `T`.
    #[inline]
    pub fn mismatched<T: ?Sized>(found: &dyn Reflect) -> Self {
        Self::MismatchedType {
            expected: core::any::type_name::<T>(),
            found: found.type_path(),
        }
    }

    /// A field validator refused the value.
    #[inline]
    pub fn rejected(reason: impl Display) -> Self {
        Self::Rejected {
            reason: reason.to_string(),
        }
    }
}
