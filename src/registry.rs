//! Scope-keyed registries and the registration entry point.
//!
//! Overload sets live in per-scope registries rather than one global table:
//! an [`Overloads`] store maps each [`ScopeId`] to its own [`Registry`], so
//! two scopes can define same-named overload sets that never see each
//! other's variants.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::def::FnDef;
use crate::error::ConfigurationError;
use crate::function::{Overloaded, OverloadedFunction};
use crate::signature::Signature;

/// Parameter names treated as bound receivers when they appear first.
const RECEIVER_NAMES: [&str; 2] = ["self", "cls"];

/// Identifies one lexical scope, typically a module.
///
/// Build with the [`scope!`](crate::scope) macro, which captures
/// `module_path!()`. Any distinct `&'static str` works; scopes compare by
/// string equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(&'static str);

impl ScopeId {
    /// A scope identified by `path`.
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    /// The identifying path.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One scope's overload namespace: every overloaded name defined in that
/// scope, each owning its dispatcher.
#[derive(Default)]
pub struct Registry {
    functions: IndexMap<String, Rc<RefCell<OverloadedFunction>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dispatcher for `name`, created empty on first use. Idempotent.
    pub fn get_or_create(&mut self, name: &str) -> Rc<RefCell<OverloadedFunction>> {
        self.functions
            .entry(name.to_string())
            .or_insert_with(|| Rc::new(RefCell::new(OverloadedFunction::new(name))))
            .clone()
    }

    /// Whether `name` has a dispatcher in this registry.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Number of overloaded names in this registry.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether no names have been registered yet.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Register one variant definition. The sole mutation path.
    ///
    /// Validates the definition, builds its signature, and inserts it into
    /// the dispatcher shared by every variant of the same name in this
    /// scope. Returns a handle to that shared dispatcher; on failure
    /// nothing is inserted and the dispatcher is unchanged.
    pub fn overload(&mut self, def: FnDef) -> Result<Overloaded, ConfigurationError> {
        let signature = Signature::from_def(&def)?;
        if let Some(first) = def.params().first() {
            if RECEIVER_NAMES.contains(&first.name) {
                return Err(ConfigurationError::Receiver {
                    function: def.name().to_string(),
                    param: first.name.to_string(),
                });
            }
        }

        let name = def.name();
        let function = self.get_or_create(name);
        function.borrow_mut().register(signature, def.into_body());
        debug!(function = name, variants = function.borrow().len(), "overload registered");
        Ok(Overloaded::new(function))
    }
}

/// Scope-keyed storage of registries.
///
/// Each [`ScopeId`] gets its own [`Registry`] on first use, created lazily
/// and dropped with the store. Registration is single-threaded by
/// construction (handles are `Rc`-based); dispatch through existing handles
/// is a read-only lookup.
#[derive(Default)]
pub struct Overloads {
    scopes: FxHashMap<ScopeId, Registry>,
}

impl Overloads {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry attached to `scope`, created on first use.
    pub fn scope(&mut self, scope: ScopeId) -> &mut Registry {
        self.scopes.entry(scope).or_default()
    }

    /// Register a variant definition in `scope`.
    pub fn overload(
        &mut self,
        scope: ScopeId,
        def: FnDef,
    ) -> Result<Overloaded, ConfigurationError> {
        self.scope(scope).overload(def)
    }
}
