//! The node model: the tree unit delivered by the server.
//!
//! A [`Node`] names a component or action by its namespaced key and carries
//! arbitrary properties plus an optional ordered list of children. Nodes are
//! immutable once produced; all mutation during rendering goes to the
//! separate [`DataState`](crate::state::DataState).
//!
//! ```
//! use sdui::node::Node;
//!
//! let node: Node = serde_json::from_str(r#"{
//!     "component": "layout:button",
//!     "properties": { "onClick": [{ "component": "actions:log" }] },
//!     "children": [{ "component": "layout:text", "properties": { "text": "Go" } }]
//! }"#).unwrap();
//!
//! assert_eq!(node.key().unwrap().namespace(), "layout");
//! assert_eq!(node.property_nodes("onClick").len(), 1);
//! assert_eq!(node.children().len(), 1);
//! ```

mod key;
mod tree;
mod value;

pub use key::ComponentKey;
pub use tree::Tree;
pub use value::Value;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A server-driven node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    component: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<Node>>,
}

impl Node {
    /// Create a node with no properties and no children slot.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            properties: BTreeMap::new(),
            children: None,
        }
    }

    /// Add or replace a property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Set the children slot.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    /// The raw `"<library>:<type>"` key, unparsed.
    pub fn component(&self) -> &str {
        &self.component
    }

    /// The parsed key, or `None` if it is malformed.
    pub fn key(&self) -> Option<ComponentKey<'_>> {
        ComponentKey::parse(&self.component)
    }

    pub fn properties(&self) -> &BTreeMap<String, Value> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn property_str(&self, name: &str) -> Option<&str> {
        self.property(name).and_then(Value::as_str)
    }

    pub fn property_bool(&self, name: &str) -> Option<bool> {
        self.property(name).and_then(Value::as_bool)
    }

    pub fn property_u64(&self, name: &str) -> Option<u64> {
        self.property(name).and_then(Value::as_u64)
    }

    /// A property holding exactly one nested node.
    pub fn property_node(&self, name: &str) -> Option<&Node> {
        match self.property(name)? {
            Value::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Nested nodes under a property: empty when absent or scalar, one
    /// element for a single node, the whole list for a node sequence.
    pub fn property_nodes(&self, name: &str) -> &[Node] {
        self.property(name).map(Value::nodes).unwrap_or(&[])
    }

    /// Ordered children; empty when the slot is absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the node declares a children slot at all (possibly empty).
    pub fn has_children_slot(&self) -> bool {
        self.children.is_some()
    }

    /// Direct descendants: children first, then node-valued properties in
    /// property-name order.
    pub fn nested(&self) -> impl Iterator<Item = &Node> {
        self.children()
            .iter()
            .chain(self.properties.values().flat_map(Value::nodes))
    }

    /// Pre-order traversal over this node and everything reachable from it.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for node in self.nested() {
            node.walk(f);
        }
    }
}
