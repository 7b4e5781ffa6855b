//! # Mocktail
//!
//! Generates [testify] mocks for Go interfaces, together with a typed
//! call wrapper per method so expectations read like the interface
//! they stand in for.
//!
//! Given a [`PackageDesc`] describing the interfaces of one Go package,
//! [`generate`] writes a single file containing, per interface:
//!
//! * a `<name>Mock` type embedding `mock.Mock` and a `new<Name>Mock`
//!   constructor that asserts expectations on test cleanup.
//! * per method: the mocked method itself, `On<Method>` taking typed
//!   arguments and `On<Method>Raw` taking `interface{}` arguments.
//! * per method: a `<Name><Method>Call` wrapper with `Once`, `Times`,
//!   `After`, `Run`, `Maybe`, ..., a `TypedReturns` taking the method's
//!   result types and a `ReturnsFn` taking a function computing them.
//!
//! Parameters of type `context.Context` are neither recorded nor
//! forwarded.
//!
//! ```
//! let package = mocktail::interfaces! {
//!     package store;
//!
//!     import "context";
//!
//!     type Store interface {
//!         Get(ctx context.Context, key string) (string, error)
//!     }
//! };
//!
//! let code = mocktail::generate_to_string(&package, &mocktail::Options::default()).unwrap();
//! assert!(code.contains("func (_m *storeMock) OnGet(key string) *StoreGetCall {"));
//! ```
//!
//! Descriptions may also be assembled by hand:
//!
//! ```
//! use mocktail::{InterfaceDesc, MethodDesc, PackageDesc, TypeDesc};
//!
//! let package = PackageDesc::new("store").import("context").interface(
//!     InterfaceDesc::new("Store", "store").method(
//!         MethodDesc::new("Get")
//!             .param("ctx", TypeDesc::context())
//!             .param("key", TypeDesc::primitive("string"))
//!             .result(TypeDesc::primitive("string"))
//!             .result(TypeDesc::error()),
//!     ),
//! );
//! # assert!(mocktail::generate_to_string(&package, &Default::default()).is_ok());
//! ```
//!
//! [testify]: https://github.com/stretchr/testify

mod error;
mod generate;
mod model;
mod options;

pub mod imports;
pub mod naming;
pub mod render;
pub mod signature;
pub mod sink;
pub mod syrup;

pub use error::{GenerateError, Result};
pub use generate::{generate, generate_to_string, write_interface, write_mock_base};
pub use model::{
    InterfaceDesc, MethodDesc, PackageDesc, TypeDesc, Var, CONTEXT_TYPE, MAX_SYNTHESIZED_NAMES,
};
pub use options::{Options, ResultCast};

/// Builds a [`PackageDesc`] from Go-like declarations.
///
/// ```
/// let package = mocktail::interfaces! {
///     package store;
///
///     import "context";
///     import "github.com/acme/models";
///
///     type Store interface {
///         Get(ctx context.Context, key string) (*models.Item, error)
///         Keys() []string
///         Close()
///     }
/// };
///
/// assert_eq!(package.interfaces[0].methods.len(), 3);
/// ```
///
/// Supported types are the basic types, `error`, `*T`, `[]T`,
/// `map[K]V`, `interface{}`/`any`, types declared in the package
/// itself (`Item`) and types of imported packages (`models.Item`).
///
/// A method may not be named like another method's `On<Method>Raw`
/// setter:
///
/// ```compile_fail
/// let package = mocktail::interfaces! {
///     package store;
///
///     type Store interface {
///         Get(key string) string
///         GetRaw(key string) string
///     }
/// };
/// ```
pub use mocktail_macros::interfaces;
