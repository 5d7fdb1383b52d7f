//! The dispatcher: one overloaded name and every variant registered under
//! it.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use tracing::trace;

use crate::def::Impl;
use crate::error::ResolutionError;
use crate::signature::Signature;
use crate::value::Value;

/// All variants registered under one name, keyed by their exact
/// parameter-type tuples.
///
/// The map preserves registration order so resolution failures can
/// enumerate the candidates in the order they were defined. Re-registering
/// an identical signature overwrites the stored implementation in place
/// (last write wins) and keeps the original position in the enumeration.
pub struct OverloadedFunction {
    name: String,
    variants: IndexMap<Signature, Impl>,
}

impl OverloadedFunction {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: IndexMap::new(),
        }
    }

    /// The shared name of every variant in this dispatcher.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether no variants have been registered yet.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Insert or overwrite the variant for `signature`.
    ///
    /// Overwriting is silent: the last registered implementation for an
    /// identical parameter tuple wins.
    pub fn register(&mut self, signature: Signature, implementation: Impl) {
        trace!(name = %self.name, signature = %signature, "registered overload variant");
        self.variants.insert(signature, implementation);
    }

    /// Every registered signature rendered as `name(T1, T2) -> R`, in
    /// registration order.
    pub fn signatures(&self) -> Vec<String> {
        self.variants
            .keys()
            .map(|sig| sig.render(&self.name))
            .collect()
    }

    /// Resolve the variant whose declared types exactly match the runtime
    /// types of `args`, and invoke it.
    ///
    /// Matching is exact per position and count: no coercion, no subtype
    /// acceptance (`bool` never satisfies an `i64` parameter). The
    /// implementation's result is returned unchanged, and a panic inside it
    /// propagates untouched.
    pub fn call(&self, args: Vec<Value>) -> Result<Value, ResolutionError> {
        let key = Signature::of_args(&args);
        match self.variants.get(&key) {
            Some(implementation) => {
                trace!(name = %self.name, signature = %key, "dispatching");
                Ok(implementation(args))
            }
            None => Err(ResolutionError::NoMatch {
                name: self.name.clone(),
                attempted: key.render_call(&self.name),
                registered: self.signatures(),
            }),
        }
    }
}

/// A thin callable proxy over the shared dispatcher for one name.
///
/// Every registration of the same name in the same scope returns a handle
/// aliasing the same dispatcher, so a handle taken before later definitions
/// still sees every variant. Handles are `Rc`-based and therefore
/// single-threaded; dispatch takes a shared borrow, so implementations may
/// call back into the same dispatcher, but registering from inside a running
/// implementation is unsupported.
#[derive(Clone)]
pub struct Overloaded {
    inner: Rc<RefCell<OverloadedFunction>>,
}

impl std::fmt::Debug for Overloaded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Overloaded")
            .field("name", &self.name())
            .field("signatures", &self.signatures())
            .finish()
    }
}

impl Overloaded {
    pub(crate) fn new(inner: Rc<RefCell<OverloadedFunction>>) -> Self {
        Self { inner }
    }

    /// The overloaded name this handle dispatches for.
    pub fn name(&self) -> String {
        self.inner.borrow().name().to_string()
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether no variants have been registered yet.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Every registered signature, in registration order.
    pub fn signatures(&self) -> Vec<String> {
        self.inner.borrow().signatures()
    }

    /// Dispatch a call; see [`OverloadedFunction::call`].
    pub fn call(&self, args: Vec<Value>) -> Result<Value, ResolutionError> {
        self.inner.borrow().call(args)
    }
}
