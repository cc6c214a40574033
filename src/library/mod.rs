//! Libraries: named bundles of component and action handlers.
//!
//! A [`Library`] owns one namespace. Registering a second library under the
//! same namespace merges it into the first, with the incoming entries
//! overwriting on collision. The built-in `layout` and `navigation`
//! libraries live in the submodules.

mod handler;
pub mod layout;
pub mod navigation;

pub use handler::{ActionHandler, ComponentHandler, MethodHandler};

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A named bundle of handlers.
#[derive(Clone)]
pub struct Library {
    namespace: String,
    components: HashMap<String, Arc<dyn ComponentHandler>>,
    actions: HashMap<String, Arc<dyn ActionHandler>>,
}

impl Library {
    /// Create an empty library for `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            components: HashMap::new(),
            actions: HashMap::new(),
        }
    }

    /// Builder form of [`Library::register_component`].
    pub fn with_component(
        mut self,
        kind: impl Into<String>,
        handler: impl ComponentHandler + 'static,
    ) -> Self {
        self.register_component(kind, handler);
        self
    }

    /// Builder form of [`Library::register_action`].
    pub fn with_action(
        mut self,
        kind: impl Into<String>,
        handler: impl ActionHandler + 'static,
    ) -> Self {
        self.register_action(kind, handler);
        self
    }

    /// Register a component handler, replacing any previous one.
    pub fn register_component(
        &mut self,
        kind: impl Into<String>,
        handler: impl ComponentHandler + 'static,
    ) {
        self.components.insert(kind.into(), Arc::new(handler));
    }

    /// Register an action handler, replacing any previous one.
    pub fn register_action(&mut self, kind: impl Into<String>, handler: impl ActionHandler + 'static) {
        self.actions.insert(kind.into(), Arc::new(handler));
    }

    /// Merge another library of the same namespace into this one.
    ///
    /// Entries from `other` overwrite entries with the same type. A library
    /// with a different namespace is rejected (logged, nothing copied).
    pub fn merge(&mut self, other: Library) {
        if other.namespace != self.namespace {
            tracing::warn!(
                "Refusing to merge library '{}' into '{}'",
                other.namespace,
                self.namespace
            );
            return;
        }
        self.components.extend(other.components);
        self.actions.extend(other.actions);
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Look up a component handler by type.
    pub fn component(&self, kind: &str) -> Option<Arc<dyn ComponentHandler>> {
        self.components.get(kind).cloned()
    }

    /// Look up an action handler by type.
    pub fn action(&self, kind: &str) -> Option<Arc<dyn ActionHandler>> {
        self.actions.get(kind).cloned()
    }

    pub fn has_component(&self, kind: &str) -> bool {
        self.components.contains_key(kind)
    }

    pub fn has_action(&self, kind: &str) -> bool {
        self.actions.contains_key(kind)
    }

    /// Registered component types, sorted.
    pub fn component_types(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.components.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Registered action types, sorted.
    pub fn action_types(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.actions.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("namespace", &self.namespace)
            .field("components", &self.component_types())
            .field("actions", &self.action_types())
            .finish()
    }
}
