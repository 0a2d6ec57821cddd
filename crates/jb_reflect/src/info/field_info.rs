use crate::info::{Type, TypeInfo, Typed};

/// A named field of a composite type.
///
/// `owner` is the type that declares the field, which differs from the
/// composite type itself for fields flattened in from a base.
#[derive(Clone, Copy, Debug)]
pub struct NamedField {
    name: &'static str,
    info: fn() -> &'static TypeInfo,
    owner: Option<Type>,
}

impl NamedField {
    #[inline]
    pub fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            info: T::type_info,
            owner: None,
        }
    }

    /// The JSON key of this field.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared type of this field.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.info)()
    }

    #[inline]
    pub const fn owner(&self) -> Option<&Type> {
        self.owner.as_ref()
    }

    #[inline]
    pub(crate) const fn with_owner(mut self, owner: Type) -> Self {
        self.owner = Some(owner);
        self
    }
}
