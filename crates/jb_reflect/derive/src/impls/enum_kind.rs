use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_from_reflect, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::{RawRepr, ReflectEnum};

/// Implement reflect for a raw-value enum.
///
/// The enum is a leaf: it decodes by first decoding its raw type, then
/// matching the raw value against each variant.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens(), false);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Leaf), false);
    let from_reflect_tokens = impl_trait_from_reflect(meta, false);
    let leaf_trait_tokens = impl_trait_leaf(info);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #from_reflect_tokens

        #leaf_trait_tokens
    }
}

/// Generate `FromLeaf`, `ToLeaf` and `MapKey` implementation tokens.
fn impl_trait_leaf(info: &ReflectEnum) -> TokenStream {
    use crate::path::fp::OptionFP;
    let meta = info.meta();

    let jb_reflect_path = meta.jb_reflect_path();
    let from_leaf_ = crate::path::from_leaf_(jb_reflect_path);
    let to_leaf_ = crate::path::to_leaf_(jb_reflect_path);
    let map_key_ = crate::path::map_key_(jb_reflect_path);
    let json_value_ = crate::path::json_value_(jb_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(jb_reflect_path);

    let idents: Vec<_> = info.variants().iter().map(|variant| variant.ident).collect();
    let option_ = OptionFP;

    let (from_leaf_body, to_leaf_body, key_string_body) = match info.raw_repr() {
        RawRepr::String => {
            let names: Vec<&String> = info.variants().iter().map(|variant| &variant.name).collect();
            let from_leaf_body = quote! {
                let raw = <#alloc_utils_::String as #from_leaf_>::from_leaf(value)?;
                match raw.as_str() {
                    #(#names => #option_::Some(Self::#idents),)*
                    _ => #OptionFP::None,
                }
            };
            let to_raw = quote! {
                let raw: &'static str = match self {
                    #(Self::#idents => #names,)*
                };
            };
            let to_leaf_body = quote! {
                #to_raw
                #OptionFP::Some(#json_value_::String(#alloc_utils_::String::from(raw)))
            };
            let key_string_body = quote! {
                #to_raw
                #OptionFP::Some(#alloc_utils_::String::from(raw))
            };
            (from_leaf_body, to_leaf_body, key_string_body)
        }
        RawRepr::Integer(raw_ty) => {
            let from_leaf_body = quote! {
                let raw = <#raw_ty as #from_leaf_>::from_leaf(value)?;
                #(
                    if raw == Self::#idents as #raw_ty {
                        return #option_::Some(Self::#idents);
                    }
                )*
                #OptionFP::None
            };
            let to_raw = quote! {
                let raw: #raw_ty = match self {
                    #(Self::#idents => Self::#idents as #raw_ty,)*
                };
            };
            let to_leaf_body = quote! {
                #to_raw
                #to_leaf_::to_leaf(&raw)
            };
            let key_string_body = quote! {
                #to_raw
                #OptionFP::Some(#alloc_utils_::ToString::to_string(&raw))
            };
            (from_leaf_body, to_leaf_body, key_string_body)
        }
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #from_leaf_ for #ident #ty_generics #where_clause {
            fn from_leaf(value: &#json_value_) -> #OptionFP<Self> {
                #from_leaf_body
            }
        }

        impl #impl_generics #to_leaf_ for #ident #ty_generics #where_clause {
            fn to_leaf(&self) -> #OptionFP<#json_value_> {
                #to_leaf_body
            }
        }

        impl #impl_generics #map_key_ for #ident #ty_generics #where_clause {
            fn key_string(&self) -> #OptionFP<#alloc_utils_::String> {
                #key_string_body
            }
        }
    }
}
