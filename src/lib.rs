//! Exact-type runtime function overloading for dynamically typed values.
//!
//! Several variants registered under one name, each declaring a fixed
//! parameter-type tuple, are dispatched at call time to the single variant
//! whose declared types match the runtime types of the arguments exactly.
//! No coercion, no subtype acceptance, no best-match ranking: the
//! argument-type tuple either is a registered key or the call fails with a
//! [`ResolutionError`] that enumerates every registered signature.
//!
//! Variants are declared with a [`FnDef`] builder, which supplies the type
//! metadata a dynamically typed host would read from annotations, and are
//! registered into a per-scope [`Registry`]. Registration returns an
//! [`Overloaded`] handle; every registration of the same name in the same
//! scope returns a handle to the one shared dispatcher.
//!
//! # Example
//!
//! ```
//! use multifn::{args, scope, FnDef, Overloads, Value};
//!
//! let mut overloads = Overloads::new();
//! let registry = overloads.scope(scope!());
//!
//! registry
//!     .overload(
//!         FnDef::new("area", |mut args| {
//!             let side: f64 = args.remove(0).downcast().unwrap();
//!             Value::new(side * side)
//!         })
//!         .param::<f64>("side")
//!         .returns::<f64>(),
//!     )
//!     .unwrap();
//!
//! let area = registry
//!     .overload(
//!         FnDef::new("area", |mut args| {
//!             let height: f64 = args.remove(1).downcast().unwrap();
//!             let width: f64 = args.remove(0).downcast().unwrap();
//!             Value::new(width * height)
//!         })
//!         .param::<f64>("width")
//!         .param::<f64>("height")
//!         .returns::<f64>(),
//!     )
//!     .unwrap();
//!
//! let result = area.call(args![3.0_f64, 4.0_f64]).unwrap();
//! assert_eq!(result.downcast::<f64>().unwrap(), 12.0);
//!
//! // No i64 variant is registered, so this call fails and the error lists
//! // both f64 signatures.
//! assert!(area.call(args![3_i64]).is_err());
//! ```
//!
//! # Concurrency contract
//!
//! Single-threaded by construction: dispatcher handles are `Rc`-based and
//! `!Send`, so the compiler enforces the contract. Dispatch is a read-only
//! map lookup and may re-enter the same dispatcher from inside an
//! implementation; registering from inside a running implementation is
//! unsupported and panics on the interior borrow.

mod def;
mod error;
mod function;
mod registry;
mod signature;
mod types;
mod value;

pub use def::{FnDef, Impl, ParamSpec};
pub use error::{ConfigurationError, ResolutionError};
pub use function::{Overloaded, OverloadedFunction};
pub use registry::{Overloads, Registry, ScopeId};
pub use signature::Signature;
pub use types::TypeTag;
pub use value::Value;

/// Build a `Vec<Value>` argument list from expressions.
///
/// Each expression is wrapped with [`Value::new`], so the runtime type of
/// every argument is the expression's concrete type.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::new($arg)),+]
    };
}

/// The [`ScopeId`] of the calling module, captured via `module_path!()`.
#[macro_export]
macro_rules! scope {
    () => {
        $crate::ScopeId::new(::std::module_path!())
    };
}
