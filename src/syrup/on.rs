use std::io::Write;

use super::{arg_names, raw_params, typed_params, Syrup};
use crate::{model::MethodDesc, sink::Sink};

/// Arguments of `mock.Mock.On`: the method name, then the expected
/// arguments.
fn on_args(method: &MethodDesc) -> String {
    let args = arg_names(method);
    if args.is_empty() {
        format!("\"{}\"", method.name)
    } else {
        format!("\"{}\", {}", method.name, args)
    }
}

impl Syrup<'_> {
    pub fn method_on<W: Write>(&self, w: &mut Sink<W>) {
        self.write_on(w, "", &typed_params(self.method, self.package));
    }

    /// Same as `On<Method>` but takes `interface{}` so matchers such
    /// as `mock.Anything` fit in any position.
    pub fn method_on_raw<W: Write>(&self, w: &mut Sink<W>) {
        self.write_on(w, "Raw", &raw_params(self.method));
    }

    fn write_on<W: Write>(&self, w: &mut Sink<W>, suffix: &str, params: &str) {
        writeln!(
            w,
            "func (_m *{}) On{}{}({}) *{} {{",
            self.mock_ty, self.method.name, suffix, params, self.call_ty
        );
        writeln!(
            w,
            "\treturn &{}{{Call: _m.Mock.On({}), Parent: _m}}",
            self.call_ty,
            on_args(self.method)
        );
        writeln!(w, "}}");
        writeln!(w);
    }
}
