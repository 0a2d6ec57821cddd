use proc_macro2::Span;
use syn::{Attribute, LitStr, Path, meta::ParseNestedMeta, spanned::Spanned};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Field-level (and variant-level) `#[reflect(...)]` attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(base)]`
    pub base: bool,
    /// `#[reflect(skip)]`
    pub skip: bool,
    /// `#[reflect(rename = "...")]`
    pub rename: Option<LitStr>,
    /// `#[reflect(validate = path)]`
    pub validate: Option<Path>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| this.parse_meta(meta))?;
            }
        }
        this.validity(attrs)?;
        Ok(this)
    }

    /// Variants only accept `rename`.
    pub fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let this = Self::parse_attrs(attrs)?;
        if this.base || this.skip || this.validate.is_some() {
            return Err(syn::Error::new(
                reflect_attr_span(attrs),
                "variants only accept `rename`",
            ));
        }
        Ok(this)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("base") {
            self.base = true;
            return Ok(());
        }

        if meta.path.is_ident("skip") {
            self.skip = true;
            return Ok(());
        }

        if meta.path.is_ident("rename") {
            if self.rename.is_some() {
                return Err(meta.error("duplicate `rename` attribute"));
            }
            self.rename = Some(meta.value()?.parse()?);
            return Ok(());
        }

        if meta.path.is_ident("validate") {
            if self.validate.is_some() {
                return Err(meta.error("duplicate `validate` attribute"));
            }
            self.validate = Some(meta.value()?.parse()?);
            return Ok(());
        }

        Err(meta.error("unsupported reflect attribute, expected `base`, `skip`, `rename` or `validate`"))
    }

    fn validity(&self, attrs: &[Attribute]) -> syn::Result<()> {
        let conflict = (self.base && (self.skip || self.rename.is_some() || self.validate.is_some()))
            || (self.skip && (self.rename.is_some() || self.validate.is_some()));
        if !conflict {
            return Ok(());
        }
        Err(syn::Error::new(
            reflect_attr_span(attrs),
            "`base` and `skip` cannot be combined with other field attributes",
        ))
    }
}

fn reflect_attr_span(attrs: &[Attribute]) -> Span {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident(REFLECT_ATTRIBUTE_NAME))
        .map_or_else(Span::call_site, Spanned::span)
}
