//! Descriptions of the interfaces to mock.
//!
//! These are the only inputs the generators read. They are built by
//! whatever walks the Go sources (or by hand, see [`interfaces!`]) and
//! are never mutated once generation starts.
//!
//! [`interfaces!`]: crate::interfaces

use std::collections::BTreeSet;

use crate::error::{GenerateError, Result};

/// Qualified spelling of the well-known cancellation type.
///
/// Parameters of this type are never recorded nor forwarded.
pub const CONTEXT_TYPE: &str = "context.Context";

/// Number of parameters or results that can receive a synthesized
/// single-letter name.
pub const MAX_SYNTHESIZED_NAMES: usize = 26;

/// A Go type as it appears in a method signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDesc {
    /// Predeclared basic type: `int`, `string`, `bool`, ...
    Primitive(String),
    /// `*T`
    Pointer(Box<TypeDesc>),
    /// `[]T`
    Slice(Box<TypeDesc>),
    /// `map[K]V`
    Map(Box<TypeDesc>, Box<TypeDesc>),
    /// A declared type.
    ///
    /// `qualified` is the full spelling including the import path,
    /// e.g. `github.com/acme/models.Item`. `package` is the *name* of
    /// the owning package (`models`), or `None` for predeclared types
    /// such as `error`.
    Named {
        qualified: String,
        package: Option<String>,
    },
    /// An interface literal, kept verbatim (`interface{}`).
    Interface(String),
}

impl TypeDesc {
    pub fn primitive(name: impl Into<String>) -> Self {
        TypeDesc::Primitive(name.into())
    }

    pub fn pointer(elem: TypeDesc) -> Self {
        TypeDesc::Pointer(Box::new(elem))
    }

    pub fn slice(elem: TypeDesc) -> Self {
        TypeDesc::Slice(Box::new(elem))
    }

    pub fn map(key: TypeDesc, elem: TypeDesc) -> Self {
        TypeDesc::Map(Box::new(key), Box::new(elem))
    }

    pub fn named(qualified: impl Into<String>, package: impl Into<String>) -> Self {
        TypeDesc::Named {
            qualified: qualified.into(),
            package: Some(package.into()),
        }
    }

    /// The predeclared `error` interface.
    pub fn error() -> Self {
        TypeDesc::Named {
            qualified: "error".to_owned(),
            package: None,
        }
    }

    /// `context.Context`
    pub fn context() -> Self {
        TypeDesc::named(CONTEXT_TYPE, "context")
    }

    pub fn interface(spelling: impl Into<String>) -> Self {
        TypeDesc::Interface(spelling.into())
    }

    /// `interface{}`
    pub fn empty_interface() -> Self {
        TypeDesc::interface("interface{}")
    }

    pub fn is_context(&self) -> bool {
        matches!(self, TypeDesc::Named { qualified, .. } if qualified == CONTEXT_TYPE)
    }

    /// Import path a declared type comes from: `github.com/acme/models`
    /// for `github.com/acme/models.Item`. `None` for predeclared types
    /// and anything that is not a declared type.
    pub fn import_path(&self) -> Option<&str> {
        match self {
            TypeDesc::Named {
                qualified,
                package: Some(_),
            } => {
                let dir = qualified.rfind('/').map_or(0, |i| i + 1);
                let dot = qualified[dir..].rfind('.')?;
                Some(&qualified[..dir + dot])
            }
            _ => None,
        }
    }

    /// The `mock.Arguments` accessor that reads this type without a
    /// type assertion, if there is one.
    pub fn narrow_accessor(&self) -> Option<&'static str> {
        match self {
            TypeDesc::Primitive(name) => match name.as_str() {
                "string" => Some("String"),
                "int" => Some("Int"),
                "bool" => Some("Bool"),
                "error" => Some("Error"),
                _ => None,
            },
            TypeDesc::Named {
                qualified,
                package: None,
            } if qualified == "error" => Some("Error"),
            _ => None,
        }
    }
}

/// A parameter or a result. An empty name (or `_`) is anonymous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Var {
    pub name: String,
    pub ty: TypeDesc,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        Var {
            name: name.into(),
            ty,
        }
    }

    pub fn anonymous(ty: TypeDesc) -> Self {
        Var::new("", ty)
    }

    pub fn is_anonymous(&self) -> bool {
        self.name.is_empty() || self.name == "_"
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodDesc {
    pub name: String,
    pub params: Vec<Var>,
    pub results: Vec<Var>,
}

impl MethodDesc {
    pub fn new(name: impl Into<String>) -> Self {
        MethodDesc {
            name: name.into(),
            params: vec![],
            results: vec![],
        }
    }

    pub fn param(mut self, name: impl Into<String>, ty: TypeDesc) -> Self {
        self.params.push(Var::new(name, ty));
        self
    }

    pub fn result(mut self, ty: TypeDesc) -> Self {
        self.results.push(Var::anonymous(ty));
        self
    }

    pub fn named_result(mut self, name: impl Into<String>, ty: TypeDesc) -> Self {
        self.results.push(Var::new(name, ty));
        self
    }

    /// Parameters that reach `Called` and `On`, paired with their
    /// position in the full parameter list.
    pub fn forwarded_params(&self) -> impl Iterator<Item = (usize, &Var)> {
        self.params
            .iter()
            .enumerate()
            .filter(|(_, param)| !param.ty.is_context())
    }

    /// Whether a `func` may stand in for the returned values.
    ///
    /// A method with nothing to forward or nothing to return has no
    /// use for it: the function would be indistinguishable from a
    /// plain value.
    pub fn supports_returns_fn(&self) -> bool {
        !self.results.is_empty() && self.forwarded_params().next().is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDesc {
    pub name: String,
    /// Name of the package declaring the interface.
    pub package: String,
    pub methods: Vec<MethodDesc>,
}

impl InterfaceDesc {
    pub fn new(name: impl Into<String>, package: impl Into<String>) -> Self {
        InterfaceDesc {
            name: name.into(),
            package: package.into(),
            methods: vec![],
        }
    }

    pub fn method(mut self, method: MethodDesc) -> Self {
        self.methods.push(method);
        self
    }

    /// Checks what the generators take for granted: unique method
    /// names, no method named like another one's `On<Method>Raw`
    /// setter, and enough letters for every synthesized name.
    pub fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();

        for method in &self.methods {
            let raw = format!("{}Raw", method.name);
            if self.methods.iter().any(|other| other.name == raw) {
                return Err(GenerateError::RawSetterClash {
                    interface: self.name.clone(),
                    method: method.name.clone(),
                    raw,
                });
            }

            if !seen.insert(method.name.as_str()) {
                return Err(GenerateError::DuplicateMethod {
                    interface: self.name.clone(),
                    method: method.name.clone(),
                });
            }

            let unnamed_overflow = method
                .forwarded_params()
                .any(|(i, param)| param.is_anonymous() && i >= MAX_SYNTHESIZED_NAMES);
            if unnamed_overflow {
                return Err(GenerateError::TooManyParameters {
                    interface: self.name.clone(),
                    method: method.name.clone(),
                    count: method.params.len(),
                });
            }

            if method.results.len() > MAX_SYNTHESIZED_NAMES {
                return Err(GenerateError::TooManyResults {
                    interface: self.name.clone(),
                    method: method.name.clone(),
                    count: method.results.len(),
                });
            }
        }

        Ok(())
    }
}

/// Everything generated into a single file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageDesc {
    pub name: String,
    /// Imports declared alongside the interfaces.
    ///
    /// The generated import block is derived from the types the
    /// signatures actually use; paths listed here but never referenced
    /// are left out of it.
    pub imports: BTreeSet<String>,
    pub interfaces: Vec<InterfaceDesc>,
}

impl PackageDesc {
    pub fn new(name: impl Into<String>) -> Self {
        PackageDesc {
            name: name.into(),
            ..PackageDesc::default()
        }
    }

    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.imports.insert(path.into());
        self
    }

    pub fn interface(mut self, interface: InterfaceDesc) -> Self {
        self.interfaces.push(interface);
        self
    }
}
