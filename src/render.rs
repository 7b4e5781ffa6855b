use std::fmt::{self, Formatter};

use crate::model::TypeDesc;

/// Spelling of a type as written from inside `package`.
///
/// Declared types are written as `<package name>.<Name>`, or bare
/// `<Name>` when they belong to `package` itself.
#[derive(Clone, Copy)]
pub struct TypeName<'a> {
    ty: &'a TypeDesc,
    package: &'a str,
}

impl<'a> TypeName<'a> {
    pub fn new(ty: &'a TypeDesc, package: &'a str) -> Self {
        TypeName { ty, package }
    }

    fn nested(&self, ty: &'a TypeDesc) -> Self {
        TypeName::new(ty, self.package)
    }
}

impl fmt::Display for TypeName<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.ty {
            TypeDesc::Primitive(name) => f.write_str(name),
            TypeDesc::Pointer(elem) => write!(f, "*{}", self.nested(elem)),
            TypeDesc::Slice(elem) => write!(f, "[]{}", self.nested(elem)),
            TypeDesc::Map(key, elem) => {
                write!(f, "map[{}]{}", self.nested(key), self.nested(elem))
            }
            TypeDesc::Named { qualified, package } => {
                let short = match qualified.rfind('/') {
                    Some(i) => &qualified[i + 1..],
                    None => qualified.as_str(),
                };

                match package {
                    // the qualifier is the package name, which is not
                    // always the last path element (`yaml.v3`, `/v2`)
                    Some(package) => {
                        let name = short.rsplit('.').next().unwrap_or(short);
                        if package == self.package {
                            f.write_str(name)
                        } else {
                            write!(f, "{}.{}", package, name)
                        }
                    }
                    None => f.write_str(short),
                }
            }
            TypeDesc::Interface(spelling) => f.write_str(spelling),
        }
    }
}

impl TypeDesc {
    /// Shorthand for [`TypeName`] when a `String` is needed.
    pub fn render(&self, package: &str) -> String {
        TypeName::new(self, package).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_wrappers() {
        let ty = TypeDesc::pointer(TypeDesc::slice(TypeDesc::map(
            TypeDesc::primitive("string"),
            TypeDesc::primitive("int"),
        )));
        assert_eq!(ty.render("store"), "*[]map[string]int");
    }

    #[test]
    fn import_path_is_dropped() {
        let ty = TypeDesc::named("github.com/acme/models.Item", "models");
        assert_eq!(ty.render("store"), "models.Item");
    }

    #[test]
    fn local_types_are_unqualified() {
        let ty = TypeDesc::named("github.com/acme/store.Item", "store");
        assert_eq!(ty.render("store"), "Item");
    }

    #[test]
    fn versioned_import_paths() {
        let node = TypeDesc::named("gopkg.in/yaml.v3.Node", "yaml");
        assert_eq!(node.render("store"), "yaml.Node");

        let client = TypeDesc::pointer(TypeDesc::named("github.com/acme/api/v2.Client", "api"));
        assert_eq!(client.render("store"), "*api.Client");
    }

    #[test]
    fn predeclared_error() {
        assert_eq!(TypeDesc::error().render("store"), "error");
    }
}
