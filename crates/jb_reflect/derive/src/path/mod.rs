//! Paths of the `jb_reflect` items referenced by generated code.
//!
//! Keeping them here means a reorganisation of `jb_reflect` only touches
//! this module.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `jb_reflect` crate.
///
/// 1. For crates that depend on `jb_reflect`, `::jb_reflect` is returned.
/// 2. For crates that depend on `jsonbind`, `::jsonbind::reflect` is returned.
/// 3. For other situations, `::jb_reflect` is returned, but this may be incorrect.
///
/// Reading the manifest is relatively expensive, so the path is resolved once
/// per derive and passed around.
pub(crate) fn jb_reflect() -> syn::Path {
    jb_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("jb_reflect"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;
mod ops;

pub(crate) mod fp;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;
pub(crate) use ops::*;

#[inline(always)]
pub(crate) fn alloc_utils_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::__macro_exports::alloc_utils
    }
}

#[inline(always)]
pub(crate) fn struct_utils_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::__macro_exports::struct_utils
    }
}

#[inline(always)]
pub(crate) fn reflect_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn from_reflect_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::FromReflect
    }
}

#[inline(always)]
pub(crate) fn json_value_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::value::JsonValue
    }
}

#[inline(always)]
pub(crate) fn from_leaf_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::leaf::FromLeaf
    }
}

#[inline(always)]
pub(crate) fn to_leaf_(jb_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #jb_reflect_path::leaf::ToLeaf
    }
}
