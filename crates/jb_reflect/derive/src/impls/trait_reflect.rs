use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`.
///
/// `kind` is the `ReflectRef` variant wrapping `self`. Only composites are
/// exposed through `ReflectMut::Struct`.
pub(crate) fn impl_trait_reflect(
    meta: &ReflectMeta,
    kind: TokenStream,
    is_struct: bool,
) -> TokenStream {
    use crate::path::fp::OptionFP;

    let jb_reflect_path = meta.jb_reflect_path();
    let reflect_ = crate::path::reflect_(jb_reflect_path);
    let reflect_ref_ = crate::path::reflect_ref_(jb_reflect_path);
    let reflect_mut_ = crate::path::reflect_mut_(jb_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(jb_reflect_path);

    let mut_kind = if is_struct {
        quote!(Struct)
    } else {
        quote!(Other)
    };

    let proxy_tokens = match &meta.attrs().proxy {
        Some(proxy) => quote! {
            #[inline]
            fn reflect_proxy(&self) -> #OptionFP<#alloc_utils_::Box<dyn #reflect_>> {
                #OptionFP::Some(#reflect_::into_boxed_reflect(#proxy(self)))
            }
        },
        None => crate::utils::empty(),
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(is_struct);

    quote! {
        impl #impl_generics #reflect_ for #ident #ty_generics #where_clause {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #reflect_mut_<'_> {
                #reflect_mut_::#mut_kind(self)
            }

            #proxy_tokens
        }
    }
}

/// Generate implementation code for `FromReflect`, relying on its default
/// downcasting method.
pub(crate) fn impl_trait_from_reflect(meta: &ReflectMeta, add_default: bool) -> TokenStream {
    let from_reflect_ = crate::path::from_reflect_(meta.jb_reflect_path());

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(add_default);

    quote! {
        impl #impl_generics #from_reflect_ for #ident #ty_generics #where_clause {}
    }
}
