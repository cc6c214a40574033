//! Prelude module for convenient imports.
//!
//! ```
//! use sdui::prelude::*;
//!
//! fn greet(_node: &Node, _cx: &mut RenderContext<'_>) -> Element {
//!     Element::Text("hello".to_string())
//! }
//!
//! let mut registry = Registry::new();
//! registry.add_library(Library::new("demo").with_component("greet", greet));
//! let render = registry.render(&Tree::Node(Node::new("demo:greet")), &mut DataState::new());
//! assert_eq!(render.element().map(Element::text_content).as_deref(), Some("hello"));
//! ```

// Content model
pub use crate::node::{ComponentKey, Node, Tree, Value};
pub use crate::state::DataState;

// Dispatch
pub use crate::library::{ActionHandler, ComponentHandler, Library, MethodHandler};
pub use crate::registry::Registry;
pub use crate::render::{Action, ActionChain, Element, Render, RenderContext};

// Loading
pub use crate::loader::{LoadError, LoadState, TreeLoad};
pub use crate::providers::NodeProvider;

// Errors and configuration
pub use crate::config::Config;
pub use crate::error::{ProviderError, RegistryError, SduiError, SduiResult};
