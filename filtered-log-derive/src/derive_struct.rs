//! `LogRow` derivation for structs with named fields.
//!
//! Produces one `(column, value)` expression per logged field and, for generic
//! structs, the `Display` bounds those expressions need.

use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{ext::IdentExt, parse_quote, spanned::Spanned, FieldsNamed, Generics, Result};

use crate::{attrs::parse_field_options, types::option_inner_type};

pub(crate) struct StructDeriveOutput {
    pub(crate) columns: Vec<TokenStream>,
    pub(crate) pii_fields: Vec<String>,
    pub(crate) generics: Generics,
}

pub(crate) fn derive_named_struct(
    fields: FieldsNamed,
    generics: &Generics,
    crate_root: &TokenStream,
) -> Result<StructDeriveOutput> {
    let mut columns = Vec::new();
    let mut pii_fields = Vec::new();
    let mut generics = generics.clone();
    let needs_bounds = generics.type_params().next().is_some();

    for field in fields.named {
        let span = field.span();
        let options = parse_field_options(&field.attrs)?;
        if options.skip {
            continue;
        }
        let Some(ident) = field.ident else {
            return Err(syn::Error::new(span, "named field should have an identifier"));
        };
        let column = options
            .rename
            .unwrap_or_else(|| ident.unraw().to_string());

        let (value, displayed) = match option_inner_type(&field.ty) {
            Some(inner) => (
                quote_spanned! { span => #crate_root::render_optional(&self.#ident) },
                inner.clone(),
            ),
            None => (
                quote_spanned! { span => ::std::string::ToString::to_string(&self.#ident) },
                field.ty.clone(),
            ),
        };
        if needs_bounds {
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#displayed: ::core::fmt::Display));
        }

        columns.push(quote! { (#column, #value) });
        if options.pii {
            pii_fields.push(column);
        }
    }

    Ok(StructDeriveOutput {
        columns,
        pii_fields,
        generics,
    })
}
