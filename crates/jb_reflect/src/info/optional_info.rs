use crate::info::{TypeInfo, Typed};

/// Descriptor of an optional wrapper such as `Option<T>`.
#[derive(Clone, Copy, Debug)]
pub struct OptionalInfo {
    inner: fn() -> &'static TypeInfo,
}

impl OptionalInfo {
    #[inline]
    pub fn new<T: Typed>() -> Self {
        Self {
            inner: T::type_info,
        }
    }

    /// The directly wrapped type, which may itself be optional.
    #[inline]
    pub fn inner_info(&self) -> &'static TypeInfo {
        (self.inner)()
    }
}
