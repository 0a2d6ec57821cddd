use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn typed_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn named_field_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::info::NamedField
    }
}

#[inline(always)]
pub(crate) fn leaf_info_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::info::LeafInfo
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::impls::GenericTypeInfoCell
    }
}
