// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider ELMR project*
//!
//! This crate contains the ELMR procedural macros: calendar month literals
//! that are range checked at compile time
//!

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{LitInt, Token, parse_macro_input};

// Must match `elmr_core::{MIN_YEAR, MAX_YEAR}`
const MIN_YEAR: i64 = 1;
const MAX_YEAR: i64 = 9999;

/// Parse an integer literal and check it is within `min..=max`
fn checked_literal(lit: &LitInt, type_name: &str, min: i64, max: i64) -> Result<i64, syn::Error> {
    let value = lit
        .base10_parse::<i64>()
        .map_err(|_| syn::Error::new_spanned(lit, "Expected a valid i64 integer literal"))?;
    if value < min || value > max {
        return Err(syn::Error::new_spanned(
            lit,
            format!("{type_name} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

/// Generate the type with compile time bounds checking
fn generate_const_checked_integer_macro(
    input: TokenStream,
    type_name: &str,
    min: i64,
    max: i64,
) -> TokenStream {
    let lit = parse_macro_input!(input as LitInt);

    let value = match checked_literal(&lit, type_name, min, max) {
        Ok(value) => value,
        Err(error) => return error.to_compile_error().into(),
    };

    let ident = syn::Ident::new(type_name, proc_macro2::Span::call_site());
    quote! {
        #ident::try_from(#value).unwrap()
    }
    .into()
}

/// Create a `Month`, using `month!(x)`, with compile time checking of the value.
#[proc_macro]
pub fn month(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Month", 1, 12)
}

/// Create a `Year`, using `year!(x)`, with compile time checking of the value.
#[proc_macro]
pub fn year(input: TokenStream) -> TokenStream {
    generate_const_checked_integer_macro(input, "Year", MIN_YEAR, MAX_YEAR)
}

/// Create a `YearMonth`, using `year_month!(year, month)`, with compile time
/// checking of both values.
#[proc_macro]
pub fn year_month(input: TokenStream) -> TokenStream {
    let parser = Punctuated::<LitInt, Token![,]>::parse_terminated;
    let lits = match parser.parse(input) {
        Ok(lits) => lits,
        Err(error) => return error.to_compile_error().into(),
    };
    if lits.len() != 2 {
        return syn::Error::new(
            proc_macro2::Span::call_site(),
            "Expected `year_month!(year, month)`",
        )
        .to_compile_error()
        .into();
    }

    let year = match checked_literal(&lits[0], "Year", MIN_YEAR, MAX_YEAR) {
        Ok(value) => value,
        Err(error) => return error.to_compile_error().into(),
    };
    let month = match checked_literal(&lits[1], "Month", 1, 12) {
        Ok(value) => value,
        Err(error) => return error.to_compile_error().into(),
    };

    quote! {
        YearMonth::from(#year, #month).unwrap()
    }
    .into()
}
