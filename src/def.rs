//! Variant definition metadata.
//!
//! A [`FnDef`] is the explicit stand-in for reading a function's type
//! annotations at definition time: the declared name, parameter types, and
//! return type are supplied alongside the implementation body and validated
//! when the definition is registered.

use std::any::Any;

use crate::types::TypeTag;
use crate::value::Value;

/// The boxed implementation stored for each registered variant.
pub type Impl = Box<dyn Fn(Vec<Value>) -> Value>;

/// One declared parameter of a variant.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    /// The parameter name as declared.
    pub name: &'static str,
    /// The declared type, or `None` when the declaration omitted it.
    pub tag: Option<TypeTag>,
    /// Whether this parameter collects remaining arguments.
    pub variadic: bool,
}

/// Definition metadata for one overload variant.
///
/// Built fluently and handed to `Registry::overload`, which validates it:
/// every parameter must carry a type, no parameter may be variadic, and the
/// first parameter must not be named like a bound receiver.
pub struct FnDef {
    name: &'static str,
    params: Vec<ParamSpec>,
    ret: Option<TypeTag>,
    body: Impl,
}

impl FnDef {
    /// Start a definition for `name` with its implementation body.
    ///
    /// The body receives the call arguments in order and returns a single
    /// [`Value`]; variants without a meaningful result return
    /// `Value::new(())`.
    pub fn new(name: &'static str, body: impl Fn(Vec<Value>) -> Value + 'static) -> Self {
        Self {
            name,
            params: Vec::new(),
            ret: None,
            body: Box::new(body),
        }
    }

    /// Declare the next positional parameter with its type.
    pub fn param<T: Any>(mut self, name: &'static str) -> Self {
        self.params.push(ParamSpec {
            name,
            tag: Some(TypeTag::of::<T>()),
            variadic: false,
        });
        self
    }

    /// Declare a parameter without a type.
    ///
    /// Registration rejects such definitions; this exists so the omission
    /// surfaces as a definition-time error instead of dispatching on a
    /// guessed type.
    pub fn untyped(mut self, name: &'static str) -> Self {
        self.params.push(ParamSpec {
            name,
            tag: None,
            variadic: false,
        });
        self
    }

    /// Declare a rest parameter that would collect remaining arguments.
    ///
    /// Registration rejects such definitions: a rest parameter has no fixed
    /// type tuple to dispatch on.
    pub fn rest(mut self, name: &'static str) -> Self {
        self.params.push(ParamSpec {
            name,
            tag: None,
            variadic: true,
        });
        self
    }

    /// Declare the return type. Informational only; never part of dispatch.
    pub fn returns<T: Any>(mut self) -> Self {
        self.ret = Some(TypeTag::of::<T>());
        self
    }

    /// The declared function name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The declared parameters, in order.
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// The declared return type, if any.
    pub fn ret(&self) -> Option<TypeTag> {
        self.ret
    }

    pub(crate) fn into_body(self) -> Impl {
        self.body
    }
}
