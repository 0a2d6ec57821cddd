use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn struct_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::ops::Struct
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::ops::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn reflect_mut_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::ops::ReflectMut
    }
}

#[inline(always)]
pub(crate) fn assign_error_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::ops::AssignError
    }
}

#[inline(always)]
pub(crate) fn map_key_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::ops::MapKey
    }
}
