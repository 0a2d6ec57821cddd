use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, Ident, Type};

use super::{FieldAttributes, ReflectMeta};

/// A named field of a derived struct.
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// The JSON key, after `rename` and `rename_all`.
    pub name: String,
}

impl<'a> StructField<'a> {
    #[inline]
    pub fn ident(&self) -> &'a Ident {
        // Only named fields reach this point.
        match &self.data.ident {
            Some(ident) => ident,
            None => unreachable!("struct fields are named"),
        }
    }

    #[inline]
    pub fn ty(&self) -> &'a Type {
        &self.data.ty
    }
}

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn new(mut meta: ReflectMeta<'a>, fields: &'a Fields) -> syn::Result<Self> {
        let rename_all = meta.attrs().rename_all;

        let mut parsed: Vec<StructField<'a>> = Vec::with_capacity(fields.len());
        for data in fields {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            let ident = match &data.ident {
                Some(ident) => ident,
                None => unreachable!("struct fields are named"),
            };
            let raw = ident.to_string();
            let raw = raw.strip_prefix("r#").unwrap_or(&raw);
            let name = match (&attrs.rename, rename_all) {
                (Some(lit), _) => lit.value(),
                (None, Some(rule)) => rule.apply(raw),
                (None, None) => raw.to_owned(),
            };

            if !attrs.base
                && !attrs.skip
                && parsed
                    .iter()
                    .any(|field| field.is_active() && field.name == name)
            {
                return Err(syn::Error::new_spanned(
                    data,
                    format!("duplicate field name `{name}`"),
                ));
            }

            parsed.push(StructField { data, attrs, name });
        }

        meta.set_field_types(
            parsed
                .iter()
                .filter(|field| !field.attrs.skip)
                .map(StructField::ty),
        );

        Ok(Self {
            meta,
            fields: parsed,
        })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields bound to JSON keys.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }

    /// `#[reflect(base)]` fields, in declaration order.
    pub fn base_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.base)
    }

    /// Generate the `TypeInfo` expression.
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// _path_::TypeInfo::new::<Self>().with_composite(
    ///     _path_::StructInfo::new::<Self>(Vec::from([
    ///         _path_::NamedField::new::<FieldTy>("name"),
    ///         ......
    ///     ]))
    ///     .with_base::<BaseTy>()
    /// )
    /// ```
    pub fn to_info_tokens(&self) -> TokenStream {
        let jb_reflect_path = self.meta.jb_reflect_path();
        let type_info_ = crate::path::type_info_(jb_reflect_path);
        let struct_info_ = crate::path::struct_info_(jb_reflect_path);
        let named_field_ = crate::path::named_field_(jb_reflect_path);
        let alloc_utils_ = crate::path::alloc_utils_(jb_reflect_path);

        let fields = self.active_fields().map(|field| {
            let ty = field.ty();
            let name = &field.name;
            quote!(#named_field_::new::<#ty>(#name))
        });
        let bases = self.base_fields().map(|field| {
            let ty = field.ty();
            quote!(.with_base::<#ty>())
        });

        quote! {
            #type_info_::new::<Self>().with_composite(
                #struct_info_::new::<Self>(#alloc_utils_::Vec::from([ #(#fields),* ]))
                    #(#bases)*
            )
        }
    }
}

impl StructField<'_> {
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.attrs.base && !self.attrs.skip
    }
}
