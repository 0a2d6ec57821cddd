use alloc::boxed::Box;

use crate::Reflect;
use crate::value::{JsonKind, JsonValue};

/// Which JSON shapes a raw passthrough type takes verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawKind {
    /// Any value, `null` included.
    Any,
    Object,
    Number,
}

impl RawKind {
    #[inline]
    pub const fn accepts(self, kind: JsonKind) -> bool {
        match self {
            Self::Any => true,
            Self::Object => matches!(kind, JsonKind::Object),
            Self::Number => matches!(kind, JsonKind::Number),
        }
    }
}

/// Descriptor of a type that stores untouched JSON, such as
/// [`serde_json::Value`] or [`serde_json::Map`].
#[derive(Clone, Copy, Debug)]
pub struct RawInfo {
    kind: RawKind,
    from_json: fn(&JsonValue) -> Option<Box<dyn Reflect>>,
}

impl RawInfo {
    #[inline]
    pub const fn new(kind: RawKind, from_json: fn(&JsonValue) -> Option<Box<dyn Reflect>>) -> Self {
        Self { kind, from_json }
    }

    #[inline]
    pub const fn kind(&self) -> RawKind {
        self.kind
    }

    #[inline]
    pub const fn accepts(&self, value: &JsonValue) -> bool {
        self.kind.accepts(JsonKind::of(value))
    }

    /// Copies `value` into the raw type, or `None` if its shape is not accepted.
    #[inline]
    pub fn from_json(&self, value: &JsonValue) -> Option<Box<dyn Reflect>> {
        (self.from_json)(value)
    }
}
