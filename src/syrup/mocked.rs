use std::{borrow::Cow, io::Write};

use super::{arg_names, join, Syrup};
use crate::{
    naming::{param_name, result_name},
    options::ResultCast,
    signature::FuncSignature,
    sink::Sink,
};

impl Syrup<'_> {
    /// The method satisfying the interface: records the call through
    /// `mock.Mock` and hands back whatever the test configured.
    pub fn mocked_method<W: Write>(&self, w: &mut Sink<W>) {
        let method = self.method;

        // context parameters are bound to `_`; they are never read
        let params = join(method.params.iter().enumerate().map(|(i, param)| {
            let name = if param.ty.is_context() {
                Cow::Borrowed("_")
            } else {
                param_name(param, i)
            };
            format!("{} {}", name, self.type_name(&param.ty))
        }));

        write!(w, "func (_m *{}) {}({})", self.mock_ty, method.name, params);
        match method.results.as_slice() {
            [] => {}
            [result] => write!(w, " {}", self.type_name(&result.ty)),
            results => write!(
                w,
                " ({})",
                join(results.iter().map(|r| self.type_name(&r.ty)))
            ),
        }
        writeln!(w, " {{");

        let args = arg_names(method);
        if method.results.is_empty() {
            writeln!(w, "\t_m.Called({})", args);
        } else {
            writeln!(w, "\t_ret := _m.Called({})", args);
        }

        if method.supports_returns_fn() {
            writeln!(w);
            writeln!(
                w,
                "\tif _rf, ok := _ret.Get(0).({}); ok {{",
                FuncSignature::new(method, self.package)
            );
            writeln!(w, "\t\treturn _rf({})", args);
            writeln!(w, "\t}}");
        }

        if !method.results.is_empty() {
            writeln!(w);
            for (i, result) in method.results.iter().enumerate() {
                let name = result_name(result, i);
                match (result.ty.narrow_accessor(), self.options.result_cast) {
                    (Some(accessor), _) => writeln!(w, "\t{} := _ret.{}({})", name, accessor, i),
                    (None, ResultCast::Permissive) => writeln!(
                        w,
                        "\t{}, _ := _ret.Get({}).({})",
                        name,
                        i,
                        self.type_name(&result.ty)
                    ),
                    (None, ResultCast::Strict) => writeln!(
                        w,
                        "\t{} := _ret.Get({}).({})",
                        name,
                        i,
                        self.type_name(&result.ty)
                    ),
                }
            }

            writeln!(w);
            writeln!(
                w,
                "\treturn {}",
                join(
                    method
                        .results
                        .iter()
                        .enumerate()
                        .map(|(i, result)| result_name(result, i))
                )
            );
        }

        writeln!(w, "}}");
        writeln!(w);
    }
}
