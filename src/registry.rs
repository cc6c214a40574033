//! The dispatch registry.
//!
//! One [`Registry`] belongs to one UI root. It holds the libraries keyed by
//! namespace, plus the global method handlers and node providers, and it is
//! the only place keys get resolved.
//!
//! Lookups come in two flavours on purpose:
//!
//! - components and actions are content: a miss yields `None` (and a
//!   visible fallback at render time);
//! - methods and providers are configuration: a miss is a fatal
//!   [`RegistryError`] that the host propagates and aborts on.
//!
//! # Example
//!
//! ```
//! use sdui::library::Library;
//! use sdui::node::{Node, Tree};
//! use sdui::registry::Registry;
//! use sdui::state::DataState;
//!
//! fn log(_node: &Node, state: &mut DataState) {
//!     state.append("log", "clicked");
//! }
//!
//! let mut registry = Registry::new();
//! registry.add_library(Library::new("actions").with_action("log", log));
//!
//! let mut state = DataState::new();
//! registry
//!     .action("actions:log")
//!     .unwrap()
//!     .invoke(&Node::new("layout:button"), &mut state);
//! assert_eq!(state.get("log"), Some("clicked"));
//! assert!(registry.component("missing:thing").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{RegistryError, SduiResult};
use crate::library::{self, ActionHandler, ComponentHandler, Library, MethodHandler};
use crate::loader::TreeLoad;
use crate::methods;
use crate::node::{ComponentKey, Node, Tree};
use crate::providers::{
    self, FileProvider, HttpProvider, JsonProvider, LinkProvider, NodeProvider, SystemOpener,
};
use crate::render::{Action, ActionChain, Render, RenderContext};
use crate::state::DataState;

/// Resolves namespaced keys to handlers.
#[derive(Default)]
pub struct Registry {
    libraries: HashMap<String, Library>,
    methods: HashMap<String, Arc<dyn MethodHandler>>,
    providers: HashMap<String, Arc<dyn NodeProvider>>,
}

impl Registry {
    /// An empty registry with no libraries, methods or providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the built-ins: the `layout` and `navigation`
    /// libraries, the boolean methods, and the `json`, `file`, `link` and
    /// `http` providers. The file provider reads relative to
    /// `config.resource_root`.
    pub fn with_defaults(config: &Config) -> Self {
        let mut registry = Self::new();
        methods::register_boolean_methods(&mut registry);
        registry
            .register_node_provider(providers::JSON, JsonProvider)
            .register_node_provider(providers::FILE, FileProvider::new(&config.resource_root))
            .register_node_provider(providers::LINK, LinkProvider::new(SystemOpener))
            .register_node_provider(providers::HTTP, HttpProvider::default());
        registry
            .add_library(library::layout::library())
            .add_library(library::navigation::library());
        registry
    }

    /// Add a library, merging it into an existing one of the same namespace.
    pub fn add_library(&mut self, library: Library) -> &mut Self {
        match self.libraries.get_mut(library.namespace()) {
            Some(existing) => existing.merge(library),
            None => {
                tracing::debug!("Registered library '{}'", library.namespace());
                self.libraries.insert(library.namespace().to_string(), library);
            }
        }
        self
    }

    pub fn library(&self, namespace: &str) -> Option<&Library> {
        self.libraries.get(namespace)
    }

    /// Registered namespaces, sorted.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<&str> = self.libraries.keys().map(String::as_str).collect();
        namespaces.sort_unstable();
        namespaces
    }

    pub fn register_method(
        &mut self,
        name: impl Into<String>,
        handler: impl MethodHandler + 'static,
    ) -> &mut Self {
        self.methods.insert(name.into(), Arc::new(handler));
        self
    }

    /// Look up a method handler. A miss is a fatal configuration error.
    pub fn load_method(&self, name: &str) -> Result<Arc<dyn MethodHandler>, RegistryError> {
        self.methods
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownMethod {
                name: name.to_string(),
            })
    }

    /// Look up and call a method handler in one step.
    pub fn call_method(
        &self,
        name: &str,
        node: &Node,
        state: &DataState,
    ) -> Result<String, RegistryError> {
        Ok(self.load_method(name)?.call(node, state))
    }

    /// Check that every `method:*` node in `tree` names a registered method.
    ///
    /// Rendering evaluates method nodes without a way to fail, so a tree is
    /// checked once before it is shown. The first miss is returned.
    pub fn check_methods(&self, tree: &Tree) -> Result<(), RegistryError> {
        let Some(root) = tree.node() else {
            return Ok(());
        };
        let mut missing = None;
        root.walk(&mut |node| {
            if missing.is_some() {
                return;
            }
            if let Some(name) = methods::method_name(node) {
                missing = self.load_method(name).err();
            }
        });
        missing.map_or(Ok(()), Err)
    }

    pub fn register_node_provider(
        &mut self,
        provider_type: impl Into<String>,
        provider: impl NodeProvider + 'static,
    ) -> &mut Self {
        self.providers.insert(provider_type.into(), Arc::new(provider));
        self
    }

    /// Look up a node provider. A miss is a fatal configuration error.
    pub fn load_node_provider(
        &self,
        provider_type: &str,
    ) -> Result<Arc<dyn NodeProvider>, RegistryError> {
        self.providers
            .get(provider_type)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownProvider {
                provider_type: provider_type.to_string(),
            })
    }

    /// Start loading a tree through the provider registered as
    /// `provider_type`.
    ///
    /// The provider lookup happens before anything is spawned, so an unknown
    /// type fails here rather than as a load error.
    pub fn load(&self, provider_type: &str, resource: &str) -> SduiResult<TreeLoad> {
        let provider = self.load_node_provider(provider_type)?;
        let resource = resource.to_string();
        tracing::info!("Loading tree via '{}': {}", provider_type, resource);
        Ok(TreeLoad::spawn(async move { provider.provide(&resource).await }))
    }

    /// Resolve a component key. Malformed keys and unknown namespaces or
    /// types all resolve to `None`.
    pub fn component(&self, key: &str) -> Option<Arc<dyn ComponentHandler>> {
        let key = self.parse_key(key)?;
        self.libraries.get(key.namespace())?.component(key.kind())
    }

    /// Resolve an action key, with the same rules as [`Registry::component`].
    pub fn action(&self, key: &str) -> Option<Arc<dyn ActionHandler>> {
        let key = self.parse_key(key)?;
        self.libraries.get(key.namespace())?.action(key.kind())
    }

    fn parse_key<'k>(&self, key: &'k str) -> Option<ComponentKey<'k>> {
        let parsed = ComponentKey::parse(key);
        if parsed.is_none() {
            tracing::debug!("Malformed component key: {:?}", key);
        }
        parsed
    }

    /// Resolve the action for a node. A missing node gives a no-op; an
    /// unknown key gives a no-op that carries an "unknown action" fallback.
    pub fn resolve_action(&self, node: Option<&Node>) -> Action {
        let Some(node) = node else {
            return Action::noop();
        };
        match self.action(node.component()) {
            Some(handler) => Action::resolved(handler),
            None => {
                tracing::warn!("Unknown server driven action: {}", node.component());
                Action::unresolved(node.component())
            }
        }
    }

    /// Resolve a list of action nodes into one ordered chain.
    pub fn resolve_actions(&self, nodes: &[Node]) -> ActionChain {
        ActionChain::new(nodes.iter().map(|node| self.resolve_action(Some(node))).collect())
    }

    /// Render a provider result.
    ///
    /// Method nodes are expected to resolve; see [`Registry::check_methods`].
    pub fn render(&self, tree: &Tree, state: &mut DataState) -> Render {
        match tree {
            Tree::Ignored => Render::Suppressed,
            Tree::Node(node) => Render::Rendered(RenderContext::new(self, state).render(node)),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        methods.sort_unstable();
        let mut providers: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        providers.sort_unstable();
        f.debug_struct("Registry")
            .field("libraries", &self.namespaces())
            .field("methods", &methods)
            .field("providers", &providers)
            .finish()
    }
}
