use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_from_reflect, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::ReflectStruct;

/// Implement full reflect for struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens(), true);
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Struct), true);
    let from_reflect_tokens = impl_trait_from_reflect(meta, true);

    quote! {
        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #from_reflect_tokens
    }
}

/// Generate `Struct` trait implementation tokens.
///
/// Names not declared by the struct itself are forwarded to its base fields,
/// in declaration order. Assignment tries each base that knows the name and
/// falls back to the last base, which reports unknown names.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    use crate::path::fp::{OptionFP, ResultFP};
    let meta = info.meta();

    let jb_reflect_path = meta.jb_reflect_path();
    let struct_ = crate::path::struct_(jb_reflect_path);
    let reflect_ = crate::path::reflect_(jb_reflect_path);
    let from_reflect_ = crate::path::from_reflect_(jb_reflect_path);
    let assign_error_ = crate::path::assign_error_(jb_reflect_path);
    let alloc_utils_ = crate::path::alloc_utils_(jb_reflect_path);
    let struct_utils_ = crate::path::struct_utils_(jb_reflect_path);

    let field_names: Vec<&String> = info.active_fields().map(|field| &field.name).collect();
    let field_idents: Vec<_> = info.active_fields().map(|field| field.ident()).collect();

    let set_arms = info.active_fields().map(|field| {
        let name = &field.name;
        let ident = field.ident();
        let ty = field.ty();
        let validate = field.attrs.validate.as_ref().map(|validate| {
            quote! {
                #validate(&value).map_err(#assign_error_::rejected)?;
            }
        });
        quote! {
            #name => {
                let value = <#ty as #from_reflect_>::take_reflect(value)
                    .map_err(|value| #assign_error_::mismatched::<#ty>(&*value))?;
                #validate
                self.#ident = value;
                #ResultFP::Ok(())
            }
        }
    });

    let base_idents: Vec<_> = info.base_fields().map(|field| field.ident()).collect();
    let option_ = OptionFP;

    let field_fallback = quote! {
        #OptionFP::None
            #(.or_else(|| #struct_utils_::base_field(&self.#base_idents, name)))*
    };

    let set_fallback = match base_idents.split_last() {
        None => quote! {
            _ => #ResultFP::Err(#assign_error_::unknown_field(name)),
        },
        Some((last, rest)) => quote! {
            #(
                _ if #struct_utils_::base_field(&self.#rest, name).is_some() => {
                    #struct_utils_::set_base_field(&mut self.#rest, name, value)
                }
            )*
            _ => #struct_utils_::set_base_field(&mut self.#last, name, value),
        },
    };

    let ident = meta.ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #ident #ty_generics #where_clause {
            fn field(&self, name: &str) -> #OptionFP<&dyn #reflect_> {
                match name {
                    #(#field_names => #option_::Some(&self.#field_idents as &dyn #reflect_),)*
                    _ => #field_fallback,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: #alloc_utils_::Box<dyn #reflect_>,
            ) -> #ResultFP<(), #assign_error_> {
                match name {
                    #(#set_arms)*
                    #set_fallback
                }
            }
        }
    }
}
