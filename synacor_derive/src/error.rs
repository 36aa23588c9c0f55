//! Derive macro for error types.
//!
//! Generates `std::fmt::Display` and `std::error::Error` implementations for
//! error enums so that each variant only declares its message format.
//! Replacement for the `thiserror` crate.
//!
//! # Usage
//!
//! ```ignore
//! use synacor_derive::Error;
//!
//! #[derive(Debug, Error)]
//! pub enum MyError {
//!     #[error("invalid opcode {opcode} at address {addr}")]
//!     InvalidOpcode { opcode: u16, addr: u16 },
//!
//!     #[error("i/o failure: {0}")]
//!     Io(String),
//!
//!     #[error("out of fuel")]
//!     OutOfFuel,
//! }
//! ```
//!
//! Supported variant shapes: unit, named fields (`{field}` interpolation),
//! and tuple fields (`{0}`, `{1}` interpolation). Every field must appear in
//! the message.

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Lit, Meta, parse_macro_input};

/// Derives `Display` and `Error` for an enum.
///
/// Each variant must carry an `#[error("...")]` attribute with the display
/// message for that variant.
pub fn derive_error(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Error derive only supports enums",
        ));
    };

    let arms = data
        .variants
        .iter()
        .map(display_arm)
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl ::std::fmt::Display for #name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    #(#arms)*
                }
            }
        }

        impl ::std::error::Error for #name {}
    })
}

/// Builds the `Display` match arm for one variant.
fn display_arm(variant: &syn::Variant) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &variant.ident;
    let message = error_message(variant)?;

    let arm = match &variant.fields {
        Fields::Unit => quote! {
            Self::#ident => write!(f, #message),
        },
        Fields::Named(fields) => {
            let names: Vec<_> = fields.named.iter().map(|f| &f.ident).collect();
            quote! {
                Self::#ident { #(#names),* } => write!(f, #message, #(#names = #names),*),
            }
        }
        Fields::Unnamed(fields) => {
            let bindings: Vec<_> = (0..fields.unnamed.len())
                .map(|i| format_ident!("f{}", i))
                .collect();
            let message = positional_to_named(&message, fields.unnamed.len());
            quote! {
                Self::#ident(#(#bindings),*) => write!(f, #message, #(#bindings = #bindings),*),
            }
        }
    };

    Ok(arm)
}

/// Extracts the string literal from a variant's `#[error("...")]` attribute.
fn error_message(variant: &syn::Variant) -> syn::Result<String> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("error") {
            continue;
        }
        let Meta::List(list) = &attr.meta else {
            return Err(syn::Error::new_spanned(
                &attr.meta,
                "invalid #[error] attribute; use #[error(\"message\")]",
            ));
        };
        let Ok(Lit::Str(lit)) = syn::parse2::<Lit>(list.tokens.clone()) else {
            return Err(syn::Error::new_spanned(
                &attr.meta,
                "#[error] message must be a string literal",
            ));
        };
        return Ok(lit.value());
    }

    Err(syn::Error::new_spanned(
        variant,
        format!(
            "missing #[error(\"...\")] attribute on variant `{}`",
            variant.ident
        ),
    ))
}

/// Rewrites positional format args `{0}`, `{1}` to the named bindings
/// `{f0}`, `{f1}` used in the generated match arm.
fn positional_to_named(message: &str, field_count: usize) -> String {
    let mut result = message.to_string();
    for i in (0..field_count).rev() {
        result = result.replace(&format!("{{{i}}}"), &format!("{{f{i}}}"));
    }
    result
}
