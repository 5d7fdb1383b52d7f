//! Type-erased argument and return values.

use std::any::Any;
use std::fmt;

use crate::types::TypeTag;

/// An owned, dynamically typed value.
///
/// Carries the [`TypeTag`] captured at construction; that tag is what the
/// dispatcher compares against declared parameter types. The tag records the
/// concrete type the value was constructed with, never a declared or coerced
/// one.
pub struct Value {
    inner: Box<dyn Any>,
    tag: TypeTag,
}

impl Value {
    /// Wrap a concrete value, capturing its type tag.
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Box::new(value),
            tag: TypeTag::of::<T>(),
        }
    }

    /// The runtime type tag of the wrapped value.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Whether the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Take the value out as `T`, or give `self` back on a type mismatch.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        match self.inner.downcast::<T>() {
            Ok(v) => Ok(*v),
            Err(inner) => Err(Value { inner, tag: self.tag }),
        }
    }

    /// Borrow the value as `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.tag.name())
            .finish_non_exhaustive()
    }
}
