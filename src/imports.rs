use std::{collections::BTreeSet, io::Write};

use crate::{
    model::{PackageDesc, TypeDesc},
    options::Options,
    sink::Sink,
};

/// Imports every generated file needs: `testing.TB` for the
/// constructor, `time` for `WaitUntil`/`After`, and testify itself.
pub const REQUIRED_IMPORTS: &[&str] = &["testing", "time", "github.com/stretchr/testify/mock"];

/// Paths with a dot in them live outside the standard library.
fn is_external(path: &str) -> bool {
    path.contains('.')
}

/// Deduplicated imports, standard library first, each group sorted.
///
/// An empty entry separates the two groups when both are present.
pub fn sorted_imports<'a, I>(referenced: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut standard = BTreeSet::new();
    let mut external = BTreeSet::new();

    let mut add = |path: &'a str| {
        if path.is_empty() {
            return;
        }

        if is_external(path) {
            external.insert(path);
        } else {
            standard.insert(path);
        }
    };

    for path in REQUIRED_IMPORTS.iter().copied() {
        add(path);
    }
    for path in referenced {
        add(path);
    }

    let separate = !standard.is_empty() && !external.is_empty();

    let mut imports: Vec<String> = standard.into_iter().map(str::to_owned).collect();
    if separate {
        imports.push(String::new());
    }
    imports.extend(external.into_iter().map(str::to_owned));
    imports
}

/// Import paths of every declared type the interfaces' signatures
/// mention, other than the interfaces' own package.
pub fn referenced_imports(package: &PackageDesc) -> BTreeSet<&str> {
    fn visit<'a>(ty: &'a TypeDesc, current: &str, out: &mut BTreeSet<&'a str>) {
        match ty {
            TypeDesc::Pointer(elem) | TypeDesc::Slice(elem) => visit(elem, current, out),
            TypeDesc::Map(key, elem) => {
                visit(key, current, out);
                visit(elem, current, out);
            }
            TypeDesc::Named {
                package: Some(owner),
                ..
            } if owner != current => {
                if let Some(path) = ty.import_path() {
                    out.insert(path);
                }
            }
            _ => {}
        }
    }

    let mut referenced = BTreeSet::new();
    for interface in &package.interfaces {
        for method in &interface.methods {
            for var in method.params.iter().chain(&method.results) {
                visit(&var.ty, &interface.package, &mut referenced);
            }
        }
    }
    referenced
}

/// Generation banner, package clause and import block.
pub fn write_header<W: Write>(w: &mut Sink<W>, package: &PackageDesc, options: &Options) {
    writeln!(w, "// Code generated by {}; DO NOT EDIT.", options.tool_name);
    writeln!(w);
    writeln!(w, "package {}", package.name);
    writeln!(w);

    let referenced = referenced_imports(package);
    for unused in package
        .imports
        .iter()
        .filter(|path| !referenced.contains(path.as_str()))
    {
        tracing::debug!(import = %unused, "declared import is never referenced; leaving it out");
    }

    let imports = sorted_imports(referenced);
    tracing::debug!(count = imports.len(), "writing imports");

    writeln!(w, "import (");
    for import in &imports {
        if import.is_empty() {
            writeln!(w);
        } else {
            writeln!(w, "\t\"{}\"", import);
        }
    }
    writeln!(w, ")");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_sorted_groups() {
        let imports = sorted_imports(vec!["os", "github.com/foo/bar", "context", "fmt"]);
        assert_eq!(
            imports,
            vec![
                "context",
                "fmt",
                "os",
                "testing",
                "time",
                "",
                "github.com/foo/bar",
                "github.com/stretchr/testify/mock",
            ]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let imports = sorted_imports(vec!["time", "github.com/stretchr/testify/mock", "time"]);
        assert_eq!(
            imports,
            vec!["testing", "time", "", "github.com/stretchr/testify/mock"]
        );
    }
}
