//! Handler capability traits.
//!
//! Each trait has a single method and a blanket impl for the matching
//! closure or `fn` signature, so libraries can register plain functions.

use crate::node::Node;
use crate::render::{Element, RenderContext};
use crate::state::DataState;

/// Renders a node into an [`Element`].
pub trait ComponentHandler: Send + Sync {
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Element;
}

impl<F> ComponentHandler for F
where
    F: Fn(&Node, &mut RenderContext<'_>) -> Element + Send + Sync,
{
    fn render(&self, node: &Node, cx: &mut RenderContext<'_>) -> Element {
        self(node, cx)
    }
}

/// Performs a side effect, usually a state mutation.
pub trait ActionHandler: Send + Sync {
    fn invoke(&self, node: &Node, state: &mut DataState);
}

impl<F> ActionHandler for F
where
    F: Fn(&Node, &mut DataState) + Send + Sync,
{
    fn invoke(&self, node: &Node, state: &mut DataState) {
        self(node, state)
    }
}

/// Evaluates a node against the state into a string result.
pub trait MethodHandler: Send + Sync {
    fn call(&self, node: &Node, state: &DataState) -> String;
}

impl<F> MethodHandler for F
where
    F: Fn(&Node, &DataState) -> String + Send + Sync,
{
    fn call(&self, node: &Node, state: &DataState) -> String {
        self(node, state)
    }
}
