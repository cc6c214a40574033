//! The built-in `navigation` library.
//!
//! Routing lives entirely in the data state:
//!
//! - `navigation:host` shows the screen whose `route` matches
//!   [`ROUTE_KEY`], starting from its `start` property;
//! - `navigation:navigate` switches to the trigger's `destination`,
//!   remembering the current route so `navigation:back` can return to it;
//! - `navigation:load` asks the front end to replace the whole tree by
//!   writing `"<provider>:<resource>"` into [`REQUEST_KEY`].
//!
//! Actions read their parameters from the triggering node, so a button
//! carries `destination` (or `resource`/`provider`) next to its `onClick`.
//!
//! ```json
//! {
//!   "component": "navigation:host",
//!   "properties": {
//!     "start": "home",
//!     "screens": [
//!       { "component": "navigation:screen", "properties": { "route": "home" }, "children": [] }
//!     ]
//!   }
//! }
//! ```

use super::Library;
use crate::node::Node;
use crate::providers;
use crate::render::{Element, RenderContext};
use crate::state::DataState;

pub const NAMESPACE: &str = "navigation";

/// Current route of the host.
pub const ROUTE_KEY: &str = "navigation.route";
/// Previous routes, most recent last.
pub const BACK_STACK_KEY: &str = "navigation.backStack";
/// Pending tree load for the front end.
pub const REQUEST_KEY: &str = "navigation.request";

const STACK_SEPARATOR: char = '\u{1f}';

pub fn library() -> Library {
    Library::new(NAMESPACE)
        .with_component("host", host)
        .with_component("screen", screen)
        .with_action("navigate", navigate)
        .with_action("back", back)
        .with_action("load", load)
}

fn host(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    if !cx.state().contains_key(ROUTE_KEY) {
        if let Some(start) = node.property_str("start") {
            cx.state_mut().insert(ROUTE_KEY, start);
        }
    }
    let route = cx.state().get(ROUTE_KEY).unwrap_or_default().to_string();
    let screen = node
        .property_nodes("screens")
        .iter()
        .find(|screen| screen.property_str("route") == Some(route.as_str()));
    match screen {
        Some(screen) => cx.render(screen),
        None => {
            tracing::warn!("No screen for route {:?}", route);
            Element::Text(format!("No screen for route: {}", route))
        }
    }
}

fn screen(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    Element::Column(cx.render_children(node))
}

fn navigate(trigger: &Node, state: &mut DataState) {
    let Some(destination) = trigger.property_str("destination") else {
        tracing::warn!("navigation:navigate triggered without a destination");
        return;
    };
    if let Some(current) = state.insert(ROUTE_KEY, destination) {
        let mut stack = back_stack(state);
        stack.push(current);
        set_back_stack(state, &stack);
    }
    tracing::debug!("Navigated to {}", destination);
}

fn back(_trigger: &Node, state: &mut DataState) {
    let mut stack = back_stack(state);
    if let Some(previous) = stack.pop() {
        set_back_stack(state, &stack);
        tracing::debug!("Navigated back to {}", previous);
        state.insert(ROUTE_KEY, previous);
    }
}

fn load(trigger: &Node, state: &mut DataState) {
    let Some(resource) = trigger.property_str("resource") else {
        tracing::warn!("navigation:load triggered without a resource");
        return;
    };
    let provider = trigger.property_str("provider").unwrap_or(providers::FILE);
    state.insert(REQUEST_KEY, format!("{}:{}", provider, resource));
}

fn back_stack(state: &DataState) -> Vec<String> {
    match state.get(BACK_STACK_KEY) {
        Some(joined) if !joined.is_empty() => {
            joined.split(STACK_SEPARATOR).map(str::to_string).collect()
        }
        _ => Vec::new(),
    }
}

fn set_back_stack(state: &mut DataState, stack: &[String]) {
    if stack.is_empty() {
        state.remove(BACK_STACK_KEY);
    } else {
        let joined = stack.join(&STACK_SEPARATOR.to_string());
        state.insert(BACK_STACK_KEY, joined);
    }
}

/// Take the pending load request, if any, as `(provider, resource)`.
///
/// The request is removed from the state whether or not it is well formed.
pub fn take_request(state: &mut DataState) -> Option<(String, String)> {
    let request = state.remove(REQUEST_KEY)?;
    match request.split_once(':') {
        Some((provider, resource)) if !provider.is_empty() && !resource.is_empty() => {
            Some((provider.to_string(), resource.to_string()))
        }
        _ => {
            tracing::warn!("Malformed navigation request: {:?}", request);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Tree;
    use crate::registry::Registry;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .add_library(library())
            .add_library(crate::library::layout::library());
        registry
    }

    fn host_tree() -> Tree {
        let json = r#"{
            "component": "navigation:host",
            "properties": {
                "start": "home",
                "screens": [
                    {"component": "navigation:screen", "properties": {"route": "home"}, "children": [
                        {"component": "layout:text", "properties": {"text": "Home"}}
                    ]},
                    {"component": "navigation:screen", "properties": {"route": "settings"}, "children": [
                        {"component": "layout:text", "properties": {"text": "Settings"}}
                    ]}
                ]
            }
        }"#;
        Tree::Node(serde_json::from_str(json).unwrap())
    }

    fn rendered(registry: &Registry, state: &mut DataState) -> String {
        registry
            .render(&host_tree(), state)
            .element()
            .map(|element| element.text_content())
            .unwrap_or_default()
    }

    #[test]
    fn test_host_starts_at_start_route() {
        let registry = registry();
        let mut state = DataState::new();
        assert_eq!(rendered(&registry, &mut state), "Home");
        assert_eq!(state.get(ROUTE_KEY), Some("home"));
    }

    #[test]
    fn test_navigate_and_back() {
        let registry = registry();
        let mut state = DataState::new();
        rendered(&registry, &mut state);

        let button = Node::new("layout:button").with_property("destination", "settings");
        registry.action("navigation:navigate").unwrap().invoke(&button, &mut state);
        assert_eq!(rendered(&registry, &mut state), "Settings");

        registry.action("navigation:back").unwrap().invoke(&button, &mut state);
        assert_eq!(rendered(&registry, &mut state), "Home");
        assert!(!state.contains_key(BACK_STACK_KEY));
    }

    #[test]
    fn test_back_on_empty_stack_is_noop() {
        let mut state: DataState = [(ROUTE_KEY, "home")].into_iter().collect();
        back(&Node::new("layout:button"), &mut state);
        assert_eq!(state.get(ROUTE_KEY), Some("home"));
    }

    #[test]
    fn test_back_stack_keeps_order() {
        let mut state = DataState::new();
        for destination in ["a", "b", "c"] {
            navigate(
                &Node::new("layout:button").with_property("destination", destination),
                &mut state,
            );
        }
        assert_eq!(back_stack(&state), vec!["a", "b"]);
        back(&Node::new("layout:button"), &mut state);
        assert_eq!(state.get(ROUTE_KEY), Some("b"));
    }

    #[test]
    fn test_unknown_route_shows_message() {
        let registry = registry();
        let mut state: DataState = [(ROUTE_KEY, "nowhere")].into_iter().collect();
        assert_eq!(rendered(&registry, &mut state), "No screen for route: nowhere");
    }

    #[test]
    fn test_load_writes_request() {
        let mut state = DataState::new();
        let trigger = Node::new("layout:button")
            .with_property("provider", "http")
            .with_property("resource", "https://example.com/tree.json");
        load(&trigger, &mut state);

        assert_eq!(
            take_request(&mut state),
            Some(("http".to_string(), "https://example.com/tree.json".to_string()))
        );
        assert!(take_request(&mut state).is_none());
    }

    #[test]
    fn test_load_defaults_to_file_provider() {
        let mut state = DataState::new();
        load(
            &Node::new("layout:button").with_property("resource", "screens/next.json"),
            &mut state,
        );
        assert_eq!(state.get(REQUEST_KEY), Some("file:screens/next.json"));
    }

    #[test]
    fn test_malformed_request_is_dropped() {
        let mut state: DataState = [(REQUEST_KEY, "no-separator")].into_iter().collect();
        assert!(take_request(&mut state).is_none());
        assert!(!state.contains_key(REQUEST_KEY));
    }
}
