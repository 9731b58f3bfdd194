//! Parsing of `#[log_row(...)]` field attributes.
//!
//! This module maps attribute syntax to per-field options and produces
//! structured errors for invalid forms.

use syn::{spanned::Spanned, Attribute, LitStr, Meta, Result};

/// Options parsed from the `#[log_row(...)]` attributes of one field.
///
/// | Attribute | Effect |
/// |-----------|--------|
/// | None | Column logged under the field name |
/// | `#[log_row(pii)]` | Column listed in `PII_FIELDS` |
/// | `#[log_row(rename = "col")]` | Column logged as `col` |
/// | `#[log_row(skip)]` | Field not logged |
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldOptions {
    pub(crate) pii: bool,
    pub(crate) skip: bool,
    pub(crate) rename: Option<String>,
}

const EXPECTED: &str = "expected `pii`, `skip` or `rename = \"...\"`";

pub(crate) fn parse_field_options(attrs: &[Attribute]) -> Result<FieldOptions> {
    let mut options = FieldOptions::default();

    for attr in attrs {
        if !attr.path().is_ident("log_row") {
            continue;
        }

        let Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new(attr.span(), EXPECTED));
        };

        list.parse_nested_meta(|meta| {
            if meta.path.is_ident("pii") {
                if options.pii {
                    return Err(meta.error("duplicate `pii` option"));
                }
                options.pii = true;
                Ok(())
            } else if meta.path.is_ident("skip") {
                if options.skip {
                    return Err(meta.error("duplicate `skip` option"));
                }
                options.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                if options.rename.is_some() {
                    return Err(meta.error("duplicate `rename` option"));
                }
                let name: LitStr = meta.value()?.parse()?;
                if name.value().is_empty() {
                    return Err(syn::Error::new(name.span(), "column name cannot be empty"));
                }
                options.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error(format!(
                    "unknown log_row option `{}`; {EXPECTED}",
                    meta.path
                        .get_ident()
                        .map_or_else(|| "?".to_string(), ToString::to_string)
                )))
            }
        })?;
    }

    if options.skip && (options.pii || options.rename.is_some()) {
        return Err(syn::Error::new(
            attrs
                .iter()
                .find(|attr| attr.path().is_ident("log_row"))
                .map_or_else(proc_macro2::Span::call_site, Spanned::span),
            "`skip` cannot be combined with other log_row options",
        ));
    }

    Ok(options)
}
