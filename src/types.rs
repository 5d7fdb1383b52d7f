//! Runtime type-descriptor tokens.
//!
//! Dispatch decisions happen at runtime over value-carried type tags, not
//! over the static type system: a [`TypeTag`] pairs the [`TypeId`] that
//! decides identity with the captured type name used for rendering
//! signatures and resolution errors.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A runtime type descriptor for one concrete Rust type.
///
/// Equality and hashing cover the [`TypeId`] only, so two tags for the same
/// type always compare equal regardless of how their names were captured.
/// Identity is exact and nominal: `bool` never equals `i64`, and a tag for
/// `&str` is distinct from a tag for `String`.
#[derive(Debug, Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Capture the tag for a concrete type.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The type identity used for dispatch.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The full path name as reported by `std::any::type_name`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_name(self.name))
    }
}

/// Strip leading module paths from a type name while keeping generic
/// arguments readable: `alloc::string::String` becomes `String`,
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (i, c) in full.char_indices() {
        match c {
            ':' => segment_start = i + 1,
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                out.push_str(&full[segment_start..i]);
                out.push(c);
                segment_start = i + 1;
            }
            _ => {}
        }
    }
    out.push_str(&full[segment_start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tags_compare_by_type_identity() {
        assert_eq!(TypeTag::of::<i64>().id(), std::any::TypeId::of::<i64>());
        assert_eq!(TypeTag::of::<i64>(), TypeTag::of::<i64>());
        assert_ne!(TypeTag::of::<i64>(), TypeTag::of::<i32>());
        assert_ne!(TypeTag::of::<bool>(), TypeTag::of::<i64>());
        assert_ne!(TypeTag::of::<&str>(), TypeTag::of::<String>());
    }

    #[test]
    fn display_uses_short_names() {
        assert_eq!(TypeTag::of::<String>().to_string(), "String");
        assert_eq!(TypeTag::of::<i64>().to_string(), "i64");
        assert_eq!(TypeTag::of::<()>().to_string(), "()");
    }

    #[test]
    fn short_name_preserves_generics_and_tuples() {
        assert_eq!(short_name("alloc::string::String"), "String");
        assert_eq!(
            short_name("alloc::vec::Vec<alloc::string::String>"),
            "Vec<String>"
        );
        assert_eq!(short_name("(i64, bool)"), "(i64, bool)");
        assert_eq!(short_name("&str"), "&str");
        assert_eq!(
            short_name("core::option::Option<core::primitive::u8>"),
            "Option<u8>"
        );
    }
}
