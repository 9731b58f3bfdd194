//! Derive macros for `filtered-log`.
//!
//! This crate generates `LogRow` implementations behind `#[derive(LogRow)]`. It:
//! - reads `#[log_row(...)]` field attributes
//! - emits a `columns()` body rendering each field with `Display`
//! - collects the names of `pii` columns into `LogRow::PII_FIELDS`
//!
//! It does **not** redact anything. Redaction lives in the main `filtered-log`
//! crate and runs when a line is logged.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

#[allow(unused_extern_crates)]
extern crate proc_macro;

use proc_macro2::TokenStream;
use proc_macro_crate::{crate_name, FoundCrate};
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields, Result};

mod attrs;
mod derive_struct;
mod types;
use derive_struct::derive_named_struct;

/// Derives `filtered_log::LogRow` for structs with named fields.
///
/// Each field becomes one `name=value; ` column, in declaration order. Values
/// are rendered with `Display`; `Option<T>` fields render `None` as
/// `filtered_log::NULL_COLUMN`.
///
/// # Field Attributes
///
/// - **No annotation**: the field is logged as is.
/// - `#[log_row(pii)]`: the column is listed in `LogRow::PII_FIELDS`, so a
///   logger built from `SensitiveFields::from_row` masks it.
/// - `#[log_row(rename = "col")]`: use `col` as the column name.
/// - `#[log_row(skip)]`: leave the field out of the line entirely.
///
/// Options can be combined, e.g. `#[log_row(pii, rename = "mail")]`. Tuple
/// structs, unit structs, enums and unions are rejected at compile time.
#[proc_macro_derive(LogRow, attributes(log_row))]
pub fn derive_log_row(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Returns the token stream to reference the filtered-log crate root.
///
/// Handles crate renaming (e.g., `logs = { package = "filtered-log", ... }`).
/// Inside filtered-log itself the crate is reachable as `::filtered_log`
/// through `extern crate self`, which also keeps doctests working.
fn crate_root() -> TokenStream {
    match crate_name("filtered-log") {
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote! { ::#ident }
        }
        Ok(FoundCrate::Itself) | Err(_) => quote! { ::filtered_log },
    }
}

const SHAPE_ERROR: &str = "`LogRow` can only be derived for structs with named fields";

fn expand(input: DeriveInput) -> Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;

    let fields = match data {
        Data::Struct(data) => match data.fields {
            Fields::Named(fields) => fields,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new(data.struct_token.span(), SHAPE_ERROR));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new(data.enum_token.span(), SHAPE_ERROR));
        }
        Data::Union(data) => {
            return Err(syn::Error::new(data.union_token.span(), SHAPE_ERROR));
        }
    };

    let crate_root = crate_root();
    let output = derive_named_struct(fields, &generics, &crate_root)?;
    let columns = &output.columns;
    let pii_fields = &output.pii_fields;
    let (impl_generics, ty_generics, where_clause) = output.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #crate_root::LogRow for #ident #ty_generics #where_clause {
            const PII_FIELDS: &'static [&'static str] = &[#(#pii_fields),*];

            fn columns(&self) -> ::std::vec::Vec<(&'static str, ::std::string::String)> {
                ::std::vec![#(#columns),*]
            }
        }
    })
}
