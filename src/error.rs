//! Error taxonomy: definition-time configuration errors and call-time
//! resolution errors.
//!
//! Everything here surfaces synchronously to the immediate caller. Nothing
//! is retried or swallowed; implementation panics propagate past the
//! dispatcher untouched.

use thiserror::Error;

/// A rejected variant definition.
///
/// Raised at registration time; the faulty variant is never inserted, so a
/// failed registration leaves the dispatcher exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Every parameter must declare its type. The return type is exempt.
    #[error("cannot overload `{function}`: parameter `{param}` has no declared type")]
    MissingAnnotation { function: String, param: String },

    /// Rest parameters have no fixed type tuple to dispatch on.
    #[error("cannot overload `{function}`: rest parameter `{param}` has no fixed type tuple")]
    Variadic { function: String, param: String },

    /// Bound-receiver style first parameters are disallowed: the dispatcher
    /// cannot know the receiver's runtime type at call time. This is a
    /// check on the naming convention, not a semantic guarantee.
    #[error("cannot overload `{function}`: first parameter `{param}` names a bound receiver")]
    Receiver { function: String, param: String },
}

/// A failed dispatch.
///
/// Raised at call time when no registered signature matches the runtime
/// argument-type tuple exactly.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// No registered signature matches the attempted argument types.
    #[error(
        "no matching function found for {attempted}; registered signatures:\n  {}",
        .registered.join("\n  ")
    )]
    NoMatch {
        /// The overloaded name that was called.
        name: String,
        /// The attempted call, rendered as `name(T1, T2)`.
        attempted: String,
        /// Every registered signature rendered as `name(T1, T2) -> R`, in
        /// registration order.
        registered: Vec<String>,
    },
}
