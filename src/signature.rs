use std::fmt::{self, Formatter};

use crate::{model::MethodDesc, render::TypeName};

/// The `func` type a test may return in place of the method's values.
///
/// Takes the method's forwarded parameter types and yields all of its
/// results: `func(string) (string, error)`.
pub struct FuncSignature<'a> {
    method: &'a MethodDesc,
    package: &'a str,
}

impl<'a> FuncSignature<'a> {
    pub fn new(method: &'a MethodDesc, package: &'a str) -> Self {
        FuncSignature { method, package }
    }
}

impl fmt::Display for FuncSignature<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("func(")?;
        for (n, (_, param)) in self.method.forwarded_params().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", TypeName::new(&param.ty, self.package))?;
        }

        f.write_str(") (")?;
        for (i, result) in self.method.results.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", TypeName::new(&result.ty, self.package))?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeDesc;

    #[test]
    fn context_is_left_out() {
        let method = MethodDesc::new("Get")
            .param("ctx", TypeDesc::context())
            .param("key", TypeDesc::primitive("string"))
            .result(TypeDesc::primitive("string"))
            .result(TypeDesc::error());

        assert_eq!(
            FuncSignature::new(&method, "store").to_string(),
            "func(string) (string, error)"
        );
    }

    #[test]
    fn trailing_context() {
        let method = MethodDesc::new("Put")
            .param("item", TypeDesc::pointer(TypeDesc::named("github.com/acme/store.Item", "store")))
            .param("ctx", TypeDesc::context())
            .result(TypeDesc::error());

        assert_eq!(
            FuncSignature::new(&method, "store").to_string(),
            "func(*Item) (error)"
        );
    }
}
