use proc_macro2::TokenStream;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}

/// Whether any of `idents` appears anywhere in `tokens`.
pub(crate) fn mentions_any(tokens: TokenStream, idents: &[syn::Ident]) -> bool {
    tokens.into_iter().any(|tree| match tree {
        proc_macro2::TokenTree::Ident(ident) => idents.contains(&ident),
        proc_macro2::TokenTree::Group(group) => mentions_any(group.stream(), idents),
        _ => false,
    })
}
