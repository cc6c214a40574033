//! Provider results.

use super::Node;

/// What a node provider produced.
///
/// `Ignored` replaces the "ignored node" sentinel: the provider ran for its
/// side effect only (e.g. opening a link) and there is nothing to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    Node(Node),
    Ignored,
}

impl Tree {
    pub fn node(&self) -> Option<&Node> {
        match self {
            Tree::Node(node) => Some(node),
            Tree::Ignored => None,
        }
    }

    pub fn into_node(self) -> Option<Node> {
        match self {
            Tree::Node(node) => Some(node),
            Tree::Ignored => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Tree::Ignored)
    }
}

impl From<Node> for Tree {
    fn from(node: Node) -> Self {
        Tree::Node(node)
    }
}
