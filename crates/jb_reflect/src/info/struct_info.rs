use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Reflect;
use crate::info::{NamedField, Type, Typed};

/// Descriptor of a composite type with named fields.
///
/// The field list is flattened: the type's own fields come first, in
/// declaration order, followed by the fields of each base (see
/// [`with_base`](Self::with_base)). When a base declares a name the
/// more-derived type already declares, the more-derived field wins and the
/// base one is hidden.
///
/// # Examples
///
/// ```
/// use jb_reflect::prelude::*;
///
/// #[derive(Reflect, Default)]
/// struct Base {
///     id: u32,
///     label: String,
/// }
///
/// #[derive(Reflect, Default)]
/// struct Derived {
///     label: String,
///     #[reflect(base)]
///     base: Base,
/// }
///
/// let info = Derived::type_info().as_composite().unwrap();
/// assert_eq!(info.field_names().collect::<Vec<_>>(), ["label", "id"]);
/// assert!(info.field("label").unwrap().owner().unwrap().is::<Derived>());
/// assert!(info.field("id").unwrap().owner().unwrap().is::<Base>());
/// ```
#[derive(Clone, Debug)]
pub struct StructInfo {
    ty: Type,
    fields: Vec<NamedField>,
    instantiate: fn() -> Box<dyn Reflect>,
}

fn boxed_default<T: Default + Reflect>() -> Box<dyn Reflect> {
    Box::new(T::default())
}

impl StructInfo {
    /// Creates the descriptor of `T` from its own fields.
    pub fn new<T: Default + Reflect>(fields: Vec<NamedField>) -> Self {
        let ty = Type::of::<T>();
        Self {
            ty,
            fields: fields
                .into_iter()
                .map(|field| field.with_owner(ty))
                .collect(),
            instantiate: boxed_default::<T>,
        }
    }

    /// Appends the fields of the base type `B`.
    ///
    /// Base fields whose name is already present are skipped. Does nothing if
    /// `B` is not a composite.
    pub fn with_base<B: Typed>(mut self) -> Self {
        if let Some(base) = B::type_info().unwrap().as_composite() {
            for field in base.fields() {
                if self.field(field.name()).is_none() {
                    self.fields.push(*field);
                }
            }
        }
        self
    }

    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn fields(&self) -> &[NamedField] {
        &self.fields
    }

    #[inline]
    pub fn field_len(&self) -> usize {
        self.fields.len()
    }

    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(NamedField::name)
    }

    /// Creates a zero-valued instance from the type's `Default`.
    #[inline]
    pub fn instantiate(&self) -> Box<dyn Reflect> {
        (self.instantiate)()
    }
}
