use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::{Field, Interface, Method, Package, Type};

// the generators name anonymous parameters and results with one letter
const MAX_UNNAMED: usize = 26;

const BASIC_TYPES: &[&str] = &[
    "bool",
    "string",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "byte",
    "rune",
    "float32",
    "float64",
    "complex64",
    "complex128",
];

struct Scope<'a> {
    package: String,
    imports: &'a [String],
}

pub fn package(package: Package) -> darling::Result<TokenStream> {
    let mut errors = darling::Error::accumulator();

    let imports: Vec<String> = package.imports.iter().map(|path| path.value()).collect();
    let scope = Scope {
        package: package.name.to_string(),
        imports: &imports,
    };

    let interfaces: Vec<TokenStream> = package
        .interfaces
        .iter()
        .filter_map(|interface| errors.handle(scope.interface(interface)))
        .collect();

    errors.finish()?;

    let name = &scope.package;
    Ok(quote! {
        ::mocktail::PackageDesc::new(#name)
            #(.import(#imports))*
            #(.interface(#interfaces))*
    })
}

impl Scope<'_> {
    fn interface(&self, interface: &Interface) -> darling::Result<TokenStream> {
        let mut errors = darling::Error::accumulator();
        let mut seen = HashSet::new();

        for method in &interface.methods {
            let raw = format!("{}Raw", method.name);
            if let Some(clash) = interface.methods.iter().find(|other| other.name == raw) {
                errors.push(
                    darling::Error::custom(format!(
                        "`{}` clashes with the `On{}` setter generated for `{}`",
                        raw, raw, method.name
                    ))
                    .with_span(&clash.name),
                );
            }
        }

        let methods: Vec<TokenStream> = interface
            .methods
            .iter()
            .filter_map(|method| {
                if !seen.insert(method.name.to_string()) {
                    errors.push(
                        darling::Error::custom(format!(
                            "method `{}` is declared more than once in `{}`",
                            method.name, interface.name
                        ))
                        .with_span(&method.name),
                    );
                    return None;
                }
                errors.handle(self.method(method))
            })
            .collect();

        errors.finish()?;

        let name = interface.name.to_string();
        let package = &self.package;
        Ok(quote! {
            ::mocktail::InterfaceDesc::new(#name, #package)
                #(.method(#methods))*
        })
    }

    fn method(&self, method: &Method) -> darling::Result<TokenStream> {
        let mut errors = darling::Error::accumulator();

        if let Some(extra) = method
            .params
            .iter()
            .skip(MAX_UNNAMED)
            .find(|param| param.name.is_none() && !is_context(&param.ty))
        {
            errors.push(
                darling::Error::custom(format!(
                    "`{}` has more than {} parameters; name them",
                    method.name, MAX_UNNAMED
                ))
                .with_span(&span_of(extra, &method.name)),
            );
        }

        if method.results.len() > MAX_UNNAMED {
            errors.push(
                darling::Error::custom(format!(
                    "`{}` returns more than {} values",
                    method.name, MAX_UNNAMED
                ))
                .with_span(&method.name),
            );
        }

        let params: Vec<TokenStream> = method
            .params
            .iter()
            .filter_map(|param| errors.handle(self.field(param)))
            .collect();
        let results: Vec<TokenStream> = method
            .results
            .iter()
            .filter_map(|result| errors.handle(self.field(result)))
            .collect();

        errors.finish()?;

        let name = method.name.to_string();
        Ok(quote! {
            ::mocktail::MethodDesc::new(#name)
                #(.param #params)*
                #(.named_result #results)*
        })
    }

    // `(name, type)`, ready to be appended to `.param` or `.named_result`
    fn field(&self, field: &Field) -> darling::Result<TokenStream> {
        let name = field
            .name
            .as_ref()
            .map(|ident| ident.to_string())
            .unwrap_or_default();
        let ty = self.ty(&field.ty)?;
        Ok(quote! { (#name, #ty) })
    }

    fn ty(&self, ty: &Type) -> darling::Result<TokenStream> {
        Ok(match ty {
            Type::Ident(ident) => {
                let name = ident.to_string();
                match name.as_str() {
                    "error" => quote! { ::mocktail::TypeDesc::error() },
                    "any" => quote! { ::mocktail::TypeDesc::interface("any") },
                    basic if BASIC_TYPES.contains(&basic) => {
                        quote! { ::mocktail::TypeDesc::primitive(#basic) }
                    }
                    local => {
                        let qualified = format!("{}.{}", self.package, local);
                        let package = &self.package;
                        quote! { ::mocktail::TypeDesc::named(#qualified, #package) }
                    }
                }
            }
            Type::Qualified(package, name) => {
                let package_name = package.to_string();
                let path = self
                    .imports
                    .iter()
                    .find(|path| package_name_of(path) == package_name)
                    .ok_or_else(|| {
                        darling::Error::custom(format!(
                            "package `{}` is not imported",
                            package_name
                        ))
                        .with_span(package)
                    })?;
                let qualified = format!("{}.{}", path, name);
                quote! { ::mocktail::TypeDesc::named(#qualified, #package_name) }
            }
            Type::Pointer(elem) => {
                let elem = self.ty(elem)?;
                quote! { ::mocktail::TypeDesc::pointer(#elem) }
            }
            Type::Slice(elem) => {
                let elem = self.ty(elem)?;
                quote! { ::mocktail::TypeDesc::slice(#elem) }
            }
            Type::Map(key, elem) => {
                let key = self.ty(key)?;
                let elem = self.ty(elem)?;
                quote! { ::mocktail::TypeDesc::map(#key, #elem) }
            }
            Type::EmptyInterface => quote! { ::mocktail::TypeDesc::empty_interface() },
        })
    }
}

// anonymous parameters only carry a span through their type
fn span_of(field: &Field, fallback: &syn::Ident) -> syn::Ident {
    match &field.ty {
        Type::Ident(ident) | Type::Qualified(ident, _) => ident.clone(),
        _ => fallback.clone(),
    }
}

// `context.Context` parameters are never forwarded, so they need no name
fn is_context(ty: &Type) -> bool {
    matches!(ty, Type::Qualified(package, name) if package == "context" && name == "Context")
}

/// Name a package is referred to by when imported from `path`: the last
/// element, without a `.vN` suffix (`gopkg.in/yaml.v3`) and skipping a
/// major-version element (`github.com/acme/api/v2`).
fn package_name_of(path: &str) -> &str {
    fn is_version(s: &str) -> bool {
        s.strip_prefix('v')
            .map_or(false, |n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
    }

    let mut elements = path.rsplit('/');
    let mut last = elements.next().unwrap_or(path);
    if is_version(last) {
        if let Some(parent) = elements.next() {
            last = parent;
        }
    }

    match last.rsplit_once('.') {
        Some((name, version)) if is_version(version) => name,
        _ => last,
    }
}
