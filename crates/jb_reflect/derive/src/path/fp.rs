//! Fully qualified paths of `core` items.
//!
//! Generated code must not depend on what the invoking crate has in scope,
//! so prelude items are always spelled out.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($name:ident => $path:path);* $(;)?) => {$(
        pub(crate) struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($path));
            }
        }
    )*};
}

define_full_path! {
    OptionFP => ::core::option::Option;
    ResultFP => ::core::result::Result;
    AnyFP => ::core::any::Any;
    SendFP => ::core::marker::Send;
    SyncFP => ::core::marker::Sync;
    DefaultFP => ::core::default::Default;
}
