//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{registry_with_log_action, node};
//!
//! let registry = registry_with_log_action();
//! let button = node(r#"{"component": "layout:button"}"#);
//! ```

#![allow(dead_code)]

use sdui::config::Config;
use sdui::library::Library;
use sdui::node::Node;
use sdui::registry::Registry;
use sdui::state::DataState;

/// Appends `"clicked"` to the `log` state key.
pub fn log_clicked(_trigger: &Node, state: &mut DataState) {
    state.append("log", "clicked");
}

/// Appends the trigger's key to the `trace` state key.
pub fn trace_trigger(trigger: &Node, state: &mut DataState) {
    state.append("trace", trigger.component());
}

/// The `actions` test library: `actions:log` and `actions:trace`.
pub fn actions_library() -> Library {
    Library::new("actions")
        .with_action("log", log_clicked)
        .with_action("trace", trace_trigger)
}

/// A default registry plus the `actions` library.
pub fn registry_with_log_action() -> Registry {
    let mut registry = Registry::with_defaults(&Config::default());
    registry.add_library(actions_library());
    registry
}

/// Parse a node from JSON, panicking on invalid input.
pub fn node(json: &str) -> Node {
    serde_json::from_str(json).expect("test JSON should be a valid node")
}
