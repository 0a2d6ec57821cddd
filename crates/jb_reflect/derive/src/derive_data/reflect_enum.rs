use proc_macro2::TokenStream;
use quote::quote;
use syn::{DataEnum, Fields, Ident, Type};

use super::{FieldAttributes, ReflectMeta};

/// How the variants of a raw-value enum map to JSON leaves.
pub(crate) enum RawRepr<'a> {
    /// Variants map to their (renamed) names.
    String,
    /// Variants map to their discriminants, cast to this type.
    Integer(&'a Type),
}

/// A unit variant.
pub(crate) struct EnumVariant<'a> {
    pub ident: &'a Ident,
    /// The raw string, used with [`RawRepr::String`].
    pub name: String,
}

/// An enum whose variants are all units.
pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<EnumVariant<'a>>,
}

impl<'a> ReflectEnum<'a> {
    pub fn new(meta: ReflectMeta<'a>, data: &'a DataEnum) -> syn::Result<Self> {
        let rename_all = meta.attrs().rename_all;
        let mut variants: Vec<EnumVariant<'a>> = Vec::with_capacity(data.variants.len());

        for variant in &data.variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "`Reflect` can only be derived for enums whose variants are all units, \
                     use `#[reflect(opaque)]` otherwise",
                ));
            }

            let attrs = FieldAttributes::parse_variant_attrs(&variant.attrs)?;
            let raw = variant.ident.to_string();
            let name = match (&attrs.rename, rename_all) {
                (Some(lit), _) => lit.value(),
                (None, Some(rule)) => rule.apply(&raw),
                (None, None) => raw,
            };

            if variants.iter().any(|other| other.name == name) {
                return Err(syn::Error::new_spanned(
                    variant,
                    format!("duplicate variant name `{name}`"),
                ));
            }

            variants.push(EnumVariant {
                ident: &variant.ident,
                name,
            });
        }

        Ok(Self { meta, variants })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    #[inline]
    pub fn variants(&self) -> &[EnumVariant<'a>] {
        &self.variants
    }

    /// `raw = String` (or nothing) selects the string representation.
    pub fn raw_repr(&self) -> RawRepr<'_> {
        match &self.meta.attrs().raw {
            None => RawRepr::String,
            Some(Type::Path(path)) if path.qself.is_none() && path.path.is_ident("String") => {
                RawRepr::String
            }
            Some(ty) => RawRepr::Integer(ty),
        }
    }

    /// Generate the `TypeInfo` expression of a leaf.
    pub fn to_info_tokens(&self) -> TokenStream {
        let jb_reflect_path = self.meta.jb_reflect_path();
        let type_info_ = crate::path::type_info_(jb_reflect_path);
        let leaf_info_ = crate::path::leaf_info_(jb_reflect_path);

        quote! {
            #type_info_::new::<Self>().with_leaf(#leaf_info_::new::<Self>())
        }
    }
}
