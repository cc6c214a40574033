//! Built-in boolean methods.
//!
//! Methods are global (not namespaced) and evaluate a node against the data
//! state, returning `"true"` or `"false"`. Every built-in reads the state
//! key named by the node's `key` property; the comparison methods compare
//! it with the node's `value` property.
//!
//! A method node is written with the reserved `method` namespace. Any
//! component can carry one in its `visible` property and is rendered only
//! while the method returns `"true"`:
//!
//! ```json
//! {
//!   "component": "layout:text",
//!   "properties": {
//!     "text": "Pro features",
//!     "visible": { "component": "method:equals", "properties": { "key": "plan", "value": "pro" } }
//!   }
//! }
//! ```

use crate::node::Node;
use crate::registry::Registry;
use crate::state::DataState;

/// Namespace of method nodes.
pub const NAMESPACE: &str = "method";

pub const IS_EMPTY: &str = "isEmpty";
pub const IS_NOT_EMPTY: &str = "isNotEmpty";
pub const EQUALS: &str = "equals";
pub const NOT_EQUALS: &str = "notEquals";

/// The method a node names, if it is a `method:<name>` node.
pub fn method_name(node: &Node) -> Option<&str> {
    node.key()
        .filter(|key| key.namespace() == NAMESPACE)
        .map(|key| key.kind())
}

fn bool_str(value: bool) -> String {
    value.to_string()
}

fn state_value<'s>(node: &Node, state: &'s DataState) -> Option<&'s str> {
    node.property_str("key").and_then(|key| state.get(key))
}

fn expected(node: &Node) -> Option<String> {
    node.property("value").and_then(|value| value.to_text())
}

fn is_empty(node: &Node, state: &DataState) -> String {
    bool_str(state_value(node, state).map_or(true, str::is_empty))
}

fn is_not_empty(node: &Node, state: &DataState) -> String {
    bool_str(!state_value(node, state).map_or(true, str::is_empty))
}

fn equals(node: &Node, state: &DataState) -> String {
    bool_str(state_value(node, state).map(str::to_string) == expected(node))
}

fn not_equals(node: &Node, state: &DataState) -> String {
    bool_str(state_value(node, state).map(str::to_string) != expected(node))
}

/// Register the boolean methods on `registry`.
pub fn register_boolean_methods(registry: &mut Registry) {
    registry
        .register_method(IS_EMPTY, is_empty)
        .register_method(IS_NOT_EMPTY, is_not_empty)
        .register_method(EQUALS, equals)
        .register_method(NOT_EQUALS, not_equals);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        register_boolean_methods(&mut registry);
        registry
    }

    #[test]
    fn test_is_empty() {
        let registry = registry();
        let node = Node::new("method:isEmpty").with_property("key", "name");

        let mut state = DataState::new();
        assert_eq!(registry.call_method(IS_EMPTY, &node, &state).unwrap(), "true");
        state.insert("name", "");
        assert_eq!(registry.call_method(IS_EMPTY, &node, &state).unwrap(), "true");
        state.insert("name", "Ada");
        assert_eq!(registry.call_method(IS_EMPTY, &node, &state).unwrap(), "false");
        assert_eq!(registry.call_method(IS_NOT_EMPTY, &node, &state).unwrap(), "true");
    }

    #[test]
    fn test_equals() {
        let registry = registry();
        let node = Node::new("method:equals")
            .with_property("key", "plan")
            .with_property("value", "pro");
        let mut state: DataState = [("plan", "free")].into_iter().collect();

        assert_eq!(registry.call_method(EQUALS, &node, &state).unwrap(), "false");
        assert_eq!(registry.call_method(NOT_EQUALS, &node, &state).unwrap(), "true");

        state.insert("plan", "pro");
        assert_eq!(registry.call_method(EQUALS, &node, &state).unwrap(), "true");
    }

    #[test]
    fn test_equals_compares_numbers_as_text() {
        let registry = registry();
        let node = Node::new("method:equals")
            .with_property("key", "count")
            .with_property("value", 3u64);
        let state: DataState = [("count", "3")].into_iter().collect();
        assert_eq!(registry.call_method(EQUALS, &node, &state).unwrap(), "true");
    }

    #[test]
    fn test_method_name() {
        assert_eq!(method_name(&Node::new("method:isEmpty")), Some("isEmpty"));
        assert_eq!(method_name(&Node::new("layout:text")), None);
        assert_eq!(method_name(&Node::new("method")), None);
    }

    #[test]
    fn test_missing_key_never_equals() {
        let registry = registry();
        let node = Node::new("method:equals").with_property("value", "x");
        assert_eq!(
            registry.call_method(EQUALS, &node, &DataState::new()).unwrap(),
            "false"
        );
    }
}
