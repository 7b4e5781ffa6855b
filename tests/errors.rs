use std::io;

use mocktail::{GenerateError, InterfaceDesc, MethodDesc, Options, PackageDesc, TypeDesc};

// accepts `budget` bytes, then fails every write
#[derive(Debug)]
struct Budget {
    budget: usize,
    written: usize,
    failures: usize,
}

impl io::Write for Budget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.budget {
            self.failures += 1;
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn store() -> PackageDesc {
    PackageDesc::new("store").interface(
        InterfaceDesc::new("Store", "store")
            .method(
                MethodDesc::new("Get")
                    .param("key", TypeDesc::primitive("string"))
                    .result(TypeDesc::primitive("string")),
            )
            .method(MethodDesc::new("Close")),
    )
}

#[test]
fn duplicate_methods_write_nothing() {
    let package = PackageDesc::new("store").interface(
        InterfaceDesc::new("Store", "store")
            .method(MethodDesc::new("Close"))
            .method(MethodDesc::new("Close")),
    );

    let mut out = Vec::new();
    let err = mocktail::generate(&mut out, &package, &Options::default()).unwrap_err();

    assert!(matches!(err, GenerateError::DuplicateMethod { .. }));
    assert_eq!(err.to_string(), "interface Store declares method Close more than once");
    assert!(out.is_empty());
}

#[test]
fn too_many_unnamed_parameters() {
    let wide = (0..30).fold(MethodDesc::new("Wide"), |method, _| {
        method.param("", TypeDesc::primitive("int"))
    });
    let package = PackageDesc::new("store").interface(InterfaceDesc::new("Store", "store").method(wide));

    let err = mocktail::generate_to_string(&package, &Options::default()).unwrap_err();
    assert!(matches!(
        err,
        GenerateError::TooManyParameters { count: 30, .. }
    ));
}

#[test]
fn too_many_results() {
    let wide = (0..27).fold(MethodDesc::new("Wide"), |method, _| {
        method.result(TypeDesc::primitive("int"))
    });
    let package = PackageDesc::new("store").interface(InterfaceDesc::new("Store", "store").method(wide));

    let err = mocktail::generate_to_string(&package, &Options::default()).unwrap_err();
    assert!(matches!(err, GenerateError::TooManyResults { count: 27, .. }));
}

#[test]
fn write_failure_is_reported_once_the_pass_is_over() {
    let mut budget = Budget {
        budget: 64,
        written: 0,
        failures: 0,
    };

    let err = mocktail::generate(&mut budget, &store(), &Options::default()).unwrap_err();

    match err {
        GenerateError::Io(e) => assert_eq!(e.to_string(), "disk full"),
        other => panic!("expected an io error, got {:?}", other),
    }
    assert!(budget.written <= 64);
    // nothing is attempted after the first failure
    assert_eq!(budget.failures, 1);
}

#[test]
fn enough_room() {
    let mut budget = Budget {
        budget: usize::MAX,
        written: 0,
        failures: 0,
    };

    mocktail::generate(&mut budget, &store(), &Options::default()).unwrap();
    let expected = mocktail::generate_to_string(&store(), &Options::default()).unwrap();
    assert_eq!(budget.written, expected.len());
}

#[test]
fn method_named_like_a_raw_setter() {
    let package = PackageDesc::new("store").interface(
        InterfaceDesc::new("Store", "store")
            .method(MethodDesc::new("Get").param("key", TypeDesc::primitive("string")))
            .method(MethodDesc::new("GetRaw")),
    );

    let mut out = Vec::new();
    let err = mocktail::generate(&mut out, &package, &Options::default()).unwrap_err();

    match err {
        GenerateError::RawSetterClash {
            interface,
            method,
            raw,
        } => {
            assert_eq!(interface, "Store");
            assert_eq!(method, "Get");
            assert_eq!(raw, "GetRaw");
        }
        other => panic!("expected a setter clash, got {:?}", other),
    }
    assert!(out.is_empty());
}
