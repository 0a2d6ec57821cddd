use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, ImplGenerics, Path, Type, TypeGenerics};

use super::TypeAttributes;

/// Information shared by every kind of derived type.
pub(crate) struct ReflectMeta<'a> {
    jb_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
    // Field types that mention a type parameter; they receive
    // `FromReflect + Typed` bounds.
    bounded_types: Vec<Type>,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("jb_reflect_path", &self.jb_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            jb_reflect_path: crate::path::jb_reflect(),
            attrs,
            ident,
            generics,
            bounded_types: Vec::new(),
        }
    }

    /// Records the field types that need trait bounds in generic impls.
    pub(super) fn set_field_types<'t>(&mut self, types: impl Iterator<Item = &'t Type>) {
        let params: Vec<Ident> = self
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();
        if params.is_empty() {
            return;
        }
        for ty in types {
            if crate::utils::mentions_any(ty.to_token_stream(), &params)
                && !self.bounded_types.contains(ty)
            {
                self.bounded_types.push(ty.clone());
            }
        }
    }

    #[inline]
    pub fn jb_reflect_path(&self) -> &Path {
        &self.jb_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        self.generics.type_params().next().is_some()
    }

    /// Splits the generics for an `impl` block, adding the bounds every
    /// reflection trait needs.
    ///
    /// - `Self: Any + Send + Sync` for generic types.
    /// - `Self: Default` if `add_default` and the type is generic.
    /// - `FieldTy: FromReflect + Typed` for field types using a type param.
    pub fn split_generics(
        &self,
        add_default: bool,
    ) -> (ImplGenerics<'a>, TypeGenerics<'a>, TokenStream) {
        use crate::path::fp::{AnyFP, DefaultFP, SendFP, SyncFP};

        let generics = self.generics;
        let mut generic_where_clause = quote! { where };

        if self.impl_with_generic() {
            generic_where_clause.extend(quote! { Self: #AnyFP + #SendFP + #SyncFP, });
            if add_default {
                generic_where_clause.extend(quote! { Self: #DefaultFP, });
            }
        } else if generics.lifetimes().next().is_some() {
            generic_where_clause.extend(quote! { Self: 'static, });
        }

        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        // Maintain existing where clause bounds, if any.
        if let Some(where_clause) = where_clause {
            let predicates = where_clause.predicates.iter();
            generic_where_clause.extend(quote! { #(#predicates,)* });
        }

        let from_reflect_ = crate::path::from_reflect_(&self.jb_reflect_path);
        let typed_ = crate::path::typed_(&self.jb_reflect_path);
        let bounded_types = self.bounded_types.iter();
        generic_where_clause.extend(quote! {
            #(#bounded_types: #from_reflect_ + #typed_,)*
        });

        (impl_generics, ty_generics, generic_where_clause)
    }
}
