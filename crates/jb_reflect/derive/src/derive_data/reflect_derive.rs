use syn::{Data, DeriveInput, Fields};

use super::{ReflectEnum, ReflectMeta, ReflectStruct, TypeAttributes};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    /// A struct with named fields.
    Struct(ReflectStruct<'a>),
    /// An enum with unit variants only.
    Enum(ReflectEnum<'a>),
    /// Unit and tuple structs, and anything marked `#[reflect(opaque)]`.
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        if attrs.raw.is_some() && !matches!(input.data, Data::Enum(_)) {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "`raw` is only supported on enums",
            ));
        }

        let is_opaque = attrs.is_opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident, &input.generics);

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(_) => Ok(Self::Struct(ReflectStruct::new(meta, &data.fields)?)),
                Fields::Unnamed(_) | Fields::Unit => Ok(Self::Opaque(meta)),
            },
            Data::Enum(data) => Ok(Self::Enum(ReflectEnum::new(meta, data)?)),
            Data::Union(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "`Reflect` cannot be derived for unions, use `#[reflect(opaque)]`",
            )),
        }
    }
}
