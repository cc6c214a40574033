//! Dispatch: turning a node tree into render output.
//!
//! [`Registry::render`](crate::registry::Registry::render) is the entry
//! point. It suppresses [`Tree::Ignored`](crate::node::Tree::Ignored)
//! outright, and otherwise walks the tree through a [`RenderContext`]:
//! each node's key is resolved to a component handler, which renders the
//! node and recurses into whatever children it chooses to show.
//!
//! Any node may carry a `visible` property: a boolean, or a method node
//! evaluated against the state. A node that is not visible renders as
//! [`Element::Empty`] without reaching its handler.
//!
//! Misses never fail. An unknown component becomes an
//! [`Element::Unknown`] carrying the raw key; an unknown action becomes a
//! no-op [`Action`] whose fallback element callers may display.

mod action;
mod element;

pub use action::{Action, ActionChain};
pub use element::{Element, UnknownKind};

/// Property holding a node's visibility condition.
pub const VISIBLE: &str = "visible";

use crate::methods;
use crate::node::{Node, Value};
use crate::registry::Registry;
use crate::state::DataState;

/// Result of rendering a tree.
#[derive(Debug, Clone)]
pub enum Render {
    Rendered(Element),
    /// The tree was ignored: no output, no action.
    Suppressed,
}

impl Render {
    pub fn element(&self) -> Option<&Element> {
        match self {
            Render::Rendered(element) => Some(element),
            Render::Suppressed => None,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self, Render::Suppressed)
    }
}

/// Context handed to component handlers during one render pass.
pub struct RenderContext<'a> {
    registry: &'a Registry,
    state: &'a mut DataState,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a Registry, state: &'a mut DataState) -> Self {
        Self { registry, state }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn state(&self) -> &DataState {
        &*self.state
    }

    pub fn state_mut(&mut self) -> &mut DataState {
        &mut *self.state
    }

    /// Resolve and render one node.
    pub fn render(&mut self, node: &Node) -> Element {
        if !self.is_visible(node) {
            return Element::Empty;
        }
        match self.registry.component(node.component()) {
            Some(handler) => handler.render(node, self),
            None => {
                tracing::warn!("Unknown server driven component: {}", node.component());
                Element::unknown_component(node.component())
            }
        }
    }

    /// Evaluate the `visible` property of `node`. Absent or unreadable
    /// conditions leave the node visible.
    pub fn is_visible(&self, node: &Node) -> bool {
        let condition = match node.property(VISIBLE) {
            None => return true,
            Some(Value::Node(condition)) => condition,
            Some(other) => return other.as_bool().unwrap_or(true),
        };
        let Some(name) = methods::method_name(condition) else {
            tracing::warn!("'{}' of {} is not a method node", VISIBLE, node.component());
            return true;
        };
        match self.registry.call_method(name, condition, self.state()) {
            Ok(result) => result == "true",
            Err(e) => {
                tracing::error!("{}", e);
                true
            }
        }
    }

    /// Render every child of `node`, in order.
    pub fn render_children(&mut self, node: &Node) -> Vec<Element> {
        self.render_all(node.children())
    }

    pub fn render_all(&mut self, nodes: &[Node]) -> Vec<Element> {
        nodes.iter().map(|child| self.render(child)).collect()
    }

    /// See [`Registry::resolve_action`].
    pub fn resolve_action(&self, node: Option<&Node>) -> Action {
        self.registry.resolve_action(node)
    }

    /// See [`Registry::resolve_actions`].
    pub fn resolve_actions(&self, nodes: &[Node]) -> ActionChain {
        self.registry.resolve_actions(nodes)
    }
}
