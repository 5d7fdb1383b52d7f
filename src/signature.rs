//! Signature keys for the variant map.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::def::FnDef;
use crate::error::ConfigurationError;
use crate::types::TypeTag;
use crate::value::Value;

/// One variant's declared parameter-type tuple, with the optional return
/// type carried along for rendering.
///
/// Equality and hashing cover the parameter tuple only, element-wise and in
/// order, so a `Signature` works directly as the variant map key and the
/// return annotation never influences dispatch. Built once at registration
/// and immutable thereafter.
#[derive(Debug, Clone)]
pub struct Signature {
    params: Vec<TypeTag>,
    ret: Option<TypeTag>,
}

impl Signature {
    /// Build and validate the signature declared by a definition.
    ///
    /// Fails when any parameter lacks a declared type or is a rest
    /// parameter. The return annotation is exempt from validation.
    pub fn from_def(def: &FnDef) -> Result<Self, ConfigurationError> {
        let mut params = Vec::with_capacity(def.params().len());
        for spec in def.params() {
            if spec.variadic {
                return Err(ConfigurationError::Variadic {
                    function: def.name().to_string(),
                    param: spec.name.to_string(),
                });
            }
            match spec.tag {
                Some(tag) => params.push(tag),
                None => {
                    return Err(ConfigurationError::MissingAnnotation {
                        function: def.name().to_string(),
                        param: spec.name.to_string(),
                    })
                }
            }
        }
        Ok(Self {
            params,
            ret: def.ret(),
        })
    }

    /// The lookup key for a call: the runtime type of each argument, in
    /// call order. The return type is unknown and irrelevant for lookup.
    pub fn of_args(args: &[Value]) -> Self {
        Self {
            params: args.iter().map(Value::tag).collect(),
            ret: None,
        }
    }

    /// The declared parameter types, in order.
    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    /// The declared return type, if any.
    pub fn ret(&self) -> Option<TypeTag> {
        self.ret
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render as `name(T1, T2) -> R`; an unspecified return renders as `_`.
    pub fn render(&self, name: &str) -> String {
        match self.ret {
            Some(ret) => format!("{}({}) -> {}", name, self.param_list(), ret),
            None => format!("{}({}) -> _", name, self.param_list()),
        }
    }

    /// Render as a call, `name(T1, T2)`, without the return type.
    pub fn render_call(&self, name: &str) -> String {
        format!("{}({})", name, self.param_list())
    }

    fn param_list(&self) -> String {
        self.params
            .iter()
            .map(TypeTag::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.params == other.params
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.params.hash(state);
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.param_list())?;
        match self.ret {
            Some(ret) => write!(f, " -> {ret}"),
            None => write!(f, " -> _"),
        }
    }
}
