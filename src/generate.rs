use std::io::{self, Write};

use crate::{
    error::Result,
    imports,
    model::{InterfaceDesc, PackageDesc},
    options::Options,
    sink::Sink,
    syrup::{self, Syrup},
};

/// Writes the mock file for `package` into `out`.
///
/// Every interface is validated before the first byte is written. A
/// write failure does not stop the pass; later writes are skipped and
/// the first error is returned once everything has been attempted.
pub fn generate<W: Write>(out: W, package: &PackageDesc, options: &Options) -> Result<W> {
    let span = tracing::debug_span!("generate", package = %package.name);
    let _guard = span.enter();

    for interface in &package.interfaces {
        interface.validate()?;
    }

    tracing::debug!(
        interfaces = package.interfaces.len(),
        imports = package.imports.len(),
        result_cast = %options.result_cast,
        "generating mocks"
    );

    let mut w = Sink::new(out);
    imports::write_header(&mut w, package, options);
    for interface in &package.interfaces {
        write_interface(&mut w, interface, options);
    }

    if w.failed() {
        tracing::warn!("output stream failed; generated file is incomplete");
    }
    w.finish()
}

/// [`generate`] into memory.
pub fn generate_to_string(package: &PackageDesc, options: &Options) -> Result<String> {
    let bytes = generate(Vec::new(), package, options)?;
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Mock base, then each method in declaration order.
pub fn write_interface<W: Write>(w: &mut Sink<W>, interface: &InterfaceDesc, options: &Options) {
    tracing::debug!(
        interface = %interface.name,
        methods = interface.methods.len(),
        "generating mock"
    );
    if interface.methods.is_empty() {
        tracing::warn!(interface = %interface.name, "interface has no methods to mock");
    }

    write_mock_base(w, &interface.name);

    for method in &interface.methods {
        let syrup = Syrup::new(interface, method, options);
        syrup.mock_method(w);
        syrup.call(w);
    }
}

/// The mock type and its constructor, which asserts expectations when
/// the test finishes.
pub fn write_mock_base<W: Write>(w: &mut Sink<W>, interface: &str) {
    let mock = syrup::mock_type(interface);

    writeln!(w);
    writeln!(w, "// {} mock of {}.", mock, interface);
    writeln!(w, "type {} struct{{ mock.Mock }}", mock);
    writeln!(w);
    writeln!(w, "// {} creates a new {}.", syrup::constructor(interface), mock);
    writeln!(
        w,
        "func {}(tb testing.TB) *{} {{",
        syrup::constructor(interface),
        mock
    );
    writeln!(w, "\ttb.Helper()");
    writeln!(w);
    writeln!(w, "\tm := &{}{{}}", mock);
    writeln!(w, "\tm.Mock.Test(tb)");
    writeln!(w);
    writeln!(w, "\ttb.Cleanup(func() {{ m.AssertExpectations(tb) }})");
    writeln!(w);
    writeln!(w, "\treturn m");
    writeln!(w, "}}");
    writeln!(w);
}
