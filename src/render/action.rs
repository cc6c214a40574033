//! Resolved actions and action chains.

use std::fmt;
use std::sync::Arc;

use crate::library::ActionHandler;
use crate::node::Node;
use crate::state::DataState;

use super::element::Element;

fn noop(_node: &Node, _state: &mut DataState) {}

/// One resolved action. Always invokable: unknown actions resolve to a
/// no-op that remembers the key it failed on.
#[derive(Clone)]
pub struct Action {
    handler: Arc<dyn ActionHandler>,
    unresolved: Option<String>,
}

impl Action {
    pub(crate) fn resolved(handler: Arc<dyn ActionHandler>) -> Self {
        Self {
            handler,
            unresolved: None,
        }
    }

    /// The no-op action used for a missing node reference.
    pub fn noop() -> Self {
        Self::resolved(Arc::new(noop))
    }

    pub(crate) fn unresolved(key: impl Into<String>) -> Self {
        Self {
            handler: Arc::new(noop),
            unresolved: Some(key.into()),
        }
    }

    pub fn invoke(&self, node: &Node, state: &mut DataState) {
        self.handler.invoke(node, state);
    }

    /// The key this action failed to resolve, if it did.
    pub fn unresolved_key(&self) -> Option<&str> {
        self.unresolved.as_deref()
    }

    /// The "unknown action" element to show for an unresolved action.
    pub fn fallback(&self) -> Option<Element> {
        self.unresolved.as_deref().map(Element::unknown_action)
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unresolved {
            Some(key) => write!(f, "Action(unresolved {:?})", key),
            None => write!(f, "Action"),
        }
    }
}

/// An ordered list of actions invoked as one.
///
/// Every step receives the same triggering node and the same state, in the
/// original order. A no-op step never stops the ones after it.
#[derive(Debug, Clone, Default)]
pub struct ActionChain {
    steps: Vec<Action>,
}

impl ActionChain {
    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn invoke(&self, trigger: &Node, state: &mut DataState) {
        for step in &self.steps {
            step.invoke(trigger, state);
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    /// Fallback elements for the steps that did not resolve.
    pub fn fallbacks(&self) -> Vec<Element> {
        self.steps.iter().filter_map(Action::fallback).collect()
    }
}
