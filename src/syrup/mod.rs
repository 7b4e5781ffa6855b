//! Per-method code: the mocked method, its `On` setters and its call
//! wrapper.

mod call;
mod mocked;
mod on;

use std::io::Write;

use crate::{
    model::{InterfaceDesc, MethodDesc, TypeDesc, Var},
    naming::{go_camel, go_pascal, param_name},
    options::Options,
    render::TypeName,
    sink::Sink,
};

/// `storeMock` for `Store`.
pub fn mock_type(interface: &str) -> String {
    format!("{}Mock", go_camel(interface))
}

/// `newStoreMock` for `Store`.
pub fn constructor(interface: &str) -> String {
    format!("new{}Mock", go_pascal(interface))
}

/// `StoreGetCall` for `Store.Get`.
pub fn call_type(interface: &str, method: &str) -> String {
    format!("{}{}Call", go_pascal(interface), method)
}

/// Generates everything one interface method needs.
pub struct Syrup<'a> {
    package: &'a str,
    interface: &'a InterfaceDesc,
    method: &'a MethodDesc,
    options: &'a Options,
    mock_ty: String,
    call_ty: String,
}

impl<'a> Syrup<'a> {
    pub fn new(interface: &'a InterfaceDesc, method: &'a MethodDesc, options: &'a Options) -> Self {
        Syrup {
            package: &interface.package,
            interface,
            method,
            options,
            mock_ty: mock_type(&interface.name),
            call_ty: call_type(&interface.name, &method.name),
        }
    }

    /// The mocked method followed by `On<Method>` and `On<Method>Raw`.
    pub fn mock_method<W: Write>(&self, w: &mut Sink<W>) {
        tracing::trace!(method = %self.method.name, "mocked method");
        self.mocked_method(w);
        self.method_on(w);
        self.method_on_raw(w);
    }

    /// The call wrapper type and everything callable on it.
    pub fn call<W: Write>(&self, w: &mut Sink<W>) {
        tracing::trace!(method = %self.method.name, call = %self.call_ty, "call wrapper");
        self.call_base(w);
        self.typed_returns(w);
        self.returns_fn(w);
        self.call_methods_on(w);
        self.call_methods_on_raw(w);
    }

    fn type_name(&self, ty: &'a TypeDesc) -> TypeName<'a> {
        TypeName::new(ty, self.package)
    }
}

fn join<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `key, value`: the arguments handed to `Called` and `On`.
fn arg_names(method: &MethodDesc) -> String {
    join(method.forwarded_params().map(|(i, param)| param_name(param, i)))
}

/// `key string, value []byte`, or with every type replaced by
/// `interface{}` when `ty` says so.
fn forwarded_param_list(method: &MethodDesc, ty: impl Fn(&Var) -> String) -> String {
    join(
        method
            .forwarded_params()
            .map(|(i, param)| format!("{} {}", param_name(param, i), ty(param))),
    )
}

fn typed_params(method: &MethodDesc, package: &str) -> String {
    forwarded_param_list(method, |param| TypeName::new(&param.ty, package).to_string())
}

fn raw_params(method: &MethodDesc) -> String {
    forwarded_param_list(method, |_| "interface{}".to_owned())
}
