//! Type utilities for the derive macro.

/// Returns `T` if `ty` is written as `Option<T>`.
///
/// Matches on the last path segment only, so `std::option::Option<T>` is
/// recognised but a type alias for an option is not; such fields are rendered
/// with `Display` like any other.
pub(crate) fn option_inner_type(ty: &syn::Type) -> Option<&syn::Type> {
    let syn::Type::Path(path) = ty else {
        return None;
    };
    if path.qself.is_some() {
        return None;
    }

    let segment = path.path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }

    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    if args.args.len() != 1 {
        return None;
    }

    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
