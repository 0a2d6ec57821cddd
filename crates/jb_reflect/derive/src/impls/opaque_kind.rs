use proc_macro2::TokenStream;
use quote::quote;

use super::{impl_trait_from_reflect, impl_trait_reflect, impl_trait_typed};
use crate::derive_data::ReflectMeta;

/// Implement reflect for a type without JSON shape.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let type_info_ = crate::path::type_info_(meta.jb_reflect_path());

    let typed_trait_tokens = impl_trait_typed(meta, quote!(#type_info_::new::<Self>()), false);
    let reflect_trait_tokens = impl_trait_reflect(meta, quote!(Opaque), false);
    let from_reflect_tokens = impl_trait_from_reflect(meta, false);

    quote! {
        #typed_trait_tokens

        #reflect_trait_tokens

        #from_reflect_tokens
    }
}
