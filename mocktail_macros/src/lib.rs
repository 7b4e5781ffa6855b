mod expand;
mod parse;

extern crate proc_macro;

use proc_macro::TokenStream;

/// Builds a `mocktail::PackageDesc` from Go-like declarations.
///
/// See the re-export in `mocktail` for the accepted syntax.
#[proc_macro]
pub fn interfaces(input: TokenStream) -> TokenStream {
    let package = syn::parse_macro_input!(input as parse::Package);

    match expand::package(package) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(e) => TokenStream::from(e.write_errors()),
    }
}
