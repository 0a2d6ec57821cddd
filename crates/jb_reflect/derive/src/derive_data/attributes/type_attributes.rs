use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, Type, meta::ParseNestedMeta};

use super::RenameRule;
use crate::REFLECT_ATTRIBUTE_NAME;

/// Type-level `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(opaque)]`
    pub is_opaque: Option<Span>,
    /// `#[reflect(proxy = path)]`
    pub proxy: Option<Path>,
    /// `#[reflect(rename_all = "...")]`
    pub rename_all: Option<RenameRule>,
    /// `#[reflect(raw = Type)]`, enums only.
    pub raw: Option<Type>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("opaque") {
            self.is_opaque = Some(meta.path.require_ident()?.span());
            return Ok(());
        }

        if meta.path.is_ident("proxy") {
            if self.proxy.is_some() {
                return Err(meta.error("duplicate `proxy` attribute"));
            }
            self.proxy = Some(meta.value()?.parse()?);
            return Ok(());
        }

        if meta.path.is_ident("rename_all") {
            let lit: LitStr = meta.value()?.parse()?;
            let Some(rule) = RenameRule::parse(&lit.value()) else {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule, expected one of {}", RenameRule::VARIANTS),
                ));
            };
            self.rename_all = Some(rule);
            return Ok(());
        }

        if meta.path.is_ident("raw") {
            self.raw = Some(meta.value()?.parse()?);
            return Ok(());
        }

        Err(meta.error("unsupported reflect attribute, expected `opaque`, `proxy`, `rename_all` or `raw`"))
    }
}
