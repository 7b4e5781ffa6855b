use std::io::Write;

use super::{arg_names, call_type, join, raw_params, typed_params, Syrup};
use crate::{model::MethodDesc, naming::return_arg_name, signature::FuncSignature, sink::Sink};

// (method, parameters, arguments) forwarded as-is to `*mock.Call`
const CONFIGURATORS: &[(&str, &str, &str)] = &[
    ("Panic", "msg string", "msg"),
    ("Once", "", ""),
    ("Twice", "", ""),
    ("Times", "i int", "i"),
    ("WaitUntil", "w <-chan time.Time", "w"),
    ("After", "d time.Duration", "d"),
    ("Run", "fn func(args mock.Arguments)", "fn"),
    ("Maybe", "", ""),
];

impl Syrup<'_> {
    /// The wrapper type plus its count, timing and side-effect
    /// configurators.
    pub fn call_base<W: Write>(&self, w: &mut Sink<W>) {
        let call = &self.call_ty;

        writeln!(w, "type {} struct {{", call);
        writeln!(w, "\t*mock.Call");
        writeln!(w, "\tParent *{}", self.mock_ty);
        writeln!(w, "}}");
        writeln!(w);

        for (name, params, args) in CONFIGURATORS {
            writeln!(w, "func (_c *{}) {}({}) *{} {{", call, name, params, call);
            writeln!(w, "\t_c.Call = _c.Call.{}({})", name, args);
            writeln!(w, "\treturn _c");
            writeln!(w, "}}");
            writeln!(w);
        }
    }

    /// `TypedReturns(a string, b error)`; only when there is something
    /// to return.
    pub fn typed_returns<W: Write>(&self, w: &mut Sink<W>) {
        let results = &self.method.results;
        if results.is_empty() {
            return;
        }

        let params = join(
            results
                .iter()
                .enumerate()
                .map(|(i, r)| format!("{} {}", return_arg_name(i), self.type_name(&r.ty))),
        );
        let names = join((0..results.len()).map(return_arg_name));

        writeln!(
            w,
            "func (_c *{}) TypedReturns({}) *{} {{",
            self.call_ty, params, self.call_ty
        );
        writeln!(w, "\t_c.Call = _c.Return({})", names);
        writeln!(w, "\treturn _c");
        writeln!(w, "}}");
        writeln!(w);
    }

    /// `ReturnsFn(fn func(string) (string, error))`; the mocked method
    /// calls `fn` with the forwarded arguments instead of returning
    /// fixed values.
    pub fn returns_fn<W: Write>(&self, w: &mut Sink<W>) {
        if !self.method.supports_returns_fn() {
            return;
        }

        writeln!(
            w,
            "func (_c *{}) ReturnsFn(fn {}) *{} {{",
            self.call_ty,
            FuncSignature::new(self.method, self.package),
            self.call_ty
        );
        writeln!(w, "\t_c.Call = _c.Return(fn)");
        writeln!(w, "\treturn _c");
        writeln!(w, "}}");
        writeln!(w);
    }

    /// `On<Other>` for every other method, so expectations chain
    /// without going back to the mock.
    pub fn call_methods_on<W: Write>(&self, w: &mut Sink<W>) {
        for other in self.other_methods() {
            writeln!(
                w,
                "func (_c *{}) On{}({}) *{} {{",
                self.call_ty,
                other.name,
                typed_params(other, self.package),
                call_type(&self.interface.name, &other.name)
            );
            writeln!(w, "\treturn _c.Parent.On{}({})", other.name, arg_names(other));
            writeln!(w, "}}");
            writeln!(w);
        }
    }

    pub fn call_methods_on_raw<W: Write>(&self, w: &mut Sink<W>) {
        for other in self.other_methods() {
            writeln!(
                w,
                "func (_c *{}) On{}Raw({}) *{} {{",
                self.call_ty,
                other.name,
                raw_params(other),
                call_type(&self.interface.name, &other.name)
            );
            writeln!(w, "\treturn _c.Parent.On{}Raw({})", other.name, arg_names(other));
            writeln!(w, "}}");
            writeln!(w);
        }
    }

    fn other_methods(&self) -> impl Iterator<Item = &MethodDesc> + '_ {
        let name = &self.method.name;
        self.interface
            .methods
            .iter()
            .filter(move |method| method.name != *name)
    }
}
