use syn::{
    braced, bracketed,
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream},
    token, Ident, LitStr, Token,
};

mod kw {
    syn::custom_keyword!(package);
    syn::custom_keyword!(import);
    syn::custom_keyword!(interface);
    syn::custom_keyword!(map);
}

pub struct Package {
    pub name: Ident,
    pub imports: Vec<LitStr>,
    pub interfaces: Vec<Interface>,
}

pub struct Interface {
    pub name: Ident,
    pub methods: Vec<Method>,
}

pub struct Method {
    pub name: Ident,
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

pub struct Field {
    pub name: Option<Ident>,
    pub ty: Type,
}

#[derive(Clone)]
pub enum Type {
    // basic types, `error`, `any` and types of the package itself
    Ident(Ident),
    // `pkg.Name`
    Qualified(Ident, Ident),
    Pointer(Box<Type>),
    Slice(Box<Type>),
    Map(Box<Type>, Box<Type>),
    EmptyInterface,
}

fn skip_semi(input: ParseStream) -> syn::Result<()> {
    if input.peek(Token![;]) {
        input.parse::<Token![;]>()?;
    }
    Ok(())
}

impl Parse for Package {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<kw::package>()?;
        let name = input.call(Ident::parse_any)?;
        skip_semi(input)?;

        let mut imports = vec![];
        while input.peek(kw::import) {
            input.parse::<kw::import>()?;
            if input.peek(token::Paren) {
                // import ( "a" "b" )
                let content;
                parenthesized!(content in input);
                while !content.is_empty() {
                    imports.push(content.parse()?);
                    skip_semi(&content)?;
                }
            } else {
                imports.push(input.parse()?);
            }
            skip_semi(input)?;
        }

        let mut interfaces = vec![];
        while !input.is_empty() {
            interfaces.push(input.parse()?);
            skip_semi(input)?;
        }

        Ok(Package {
            name,
            imports,
            interfaces,
        })
    }
}

impl Parse for Interface {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        input.parse::<Token![type]>()?;
        let name = input.call(Ident::parse_any)?;
        input.parse::<kw::interface>()?;

        let content;
        braced!(content in input);

        let mut methods = vec![];
        while !content.is_empty() {
            methods.push(content.parse()?);
            skip_semi(&content)?;
        }

        Ok(Interface { name, methods })
    }
}

impl Parse for Method {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = input.call(Ident::parse_any)?;

        let content;
        parenthesized!(content in input);
        let params = parse_fields(&content)?;

        let results = if input.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            parse_fields(&content)?
        } else if starts_result(input) {
            vec![Field {
                name: None,
                ty: input.parse()?,
            }]
        } else {
            vec![]
        };

        Ok(Method {
            name,
            params,
            results,
        })
    }
}

// a single unparenthesized result, as opposed to the next method
fn starts_result(input: ParseStream) -> bool {
    if input.peek(Token![*]) || input.peek(token::Bracket) {
        return true;
    }
    input.peek(Ident::peek_any) && !input.peek2(token::Paren)
}

/// Parses `a, b int, c string` as well as `int, string`.
///
/// Names are only known once the whole list is read: a lone
/// identifier is a type unless some other entry is named, in which
/// case it is a name sharing the type of the next named entry.
fn parse_fields(input: ParseStream) -> syn::Result<Vec<Field>> {
    let mut entries: Vec<(Type, Option<Type>)> = vec![];
    while !input.is_empty() {
        let first: Type = input.parse()?;
        let second = if input.is_empty() || input.peek(Token![,]) {
            None
        } else {
            Some(input.parse()?)
        };
        entries.push((first, second));

        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }

    if entries.iter().all(|(_, second)| second.is_none()) {
        return Ok(entries
            .into_iter()
            .map(|(ty, _)| Field { name: None, ty })
            .collect());
    }

    let mut fields = Vec::with_capacity(entries.len());
    let mut pending = vec![];
    for (first, second) in entries {
        let name = match first {
            Type::Ident(ident) => ident,
            _ => {
                return Err(input.error("mixed named and unnamed parameters"));
            }
        };

        match second {
            None => pending.push(name),
            Some(ty) => {
                for name in pending.drain(..) {
                    fields.push(Field {
                        name: Some(name),
                        ty: ty.clone(),
                    });
                }
                fields.push(Field {
                    name: Some(name),
                    ty,
                });
            }
        }
    }

    if let Some(name) = pending.first() {
        return Err(syn::Error::new(name.span(), "parameter is missing a type"));
    }

    Ok(fields)
}

impl Parse for Type {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![*]) {
            input.parse::<Token![*]>()?;
            return Ok(Type::Pointer(Box::new(input.parse()?)));
        }

        if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            if !content.is_empty() {
                return Err(content.error("arrays are not supported; use a slice"));
            }
            return Ok(Type::Slice(Box::new(input.parse()?)));
        }

        if input.peek(kw::map) && input.peek2(token::Bracket) {
            input.parse::<kw::map>()?;
            let content;
            bracketed!(content in input);
            let key = content.parse()?;
            if !content.is_empty() {
                return Err(content.error("expected `]`"));
            }
            let elem = input.parse()?;
            return Ok(Type::Map(Box::new(key), Box::new(elem)));
        }

        if input.peek(kw::interface) && input.peek2(token::Brace) {
            input.parse::<kw::interface>()?;
            let content;
            braced!(content in input);
            if !content.is_empty() {
                return Err(content.error("only the empty interface literal is supported"));
            }
            return Ok(Type::EmptyInterface);
        }

        let ident = input.call(Ident::parse_any)?;
        if input.peek(Token![.]) {
            input.parse::<Token![.]>()?;
            let name = input.call(Ident::parse_any)?;
            return Ok(Type::Qualified(ident, name));
        }

        Ok(Type::Ident(ident))
    }
}
