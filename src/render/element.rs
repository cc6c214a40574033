//! Render output: a toolkit-neutral element tree.
//!
//! Component handlers produce [`Element`]s; the terminal front end paints
//! them. Elements own everything they need (including resolved action
//! chains), so they outlive the render pass that built them.

use crate::node::Node;

use super::action::ActionChain;

/// What kind of key failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownKind {
    Component,
    Action,
}

impl UnknownKind {
    pub fn label(&self) -> &'static str {
        match self {
            UnknownKind::Component => "UNKNOWN SERVER DRIVEN COMPONENT",
            UnknownKind::Action => "UNKNOWN SERVER DRIVEN ACTION",
        }
    }
}

/// A rendered element.
#[derive(Debug, Clone)]
pub enum Element {
    /// Nothing at all (hidden or empty component).
    Empty,
    /// Children stacked vertically.
    Column(Vec<Element>),
    /// Children laid out side by side.
    Row(Vec<Element>),
    /// Children inside a titled border.
    Card {
        title: Option<String>,
        content: Vec<Element>,
    },
    Text(String),
    /// Clickable element. `trigger` is the node passed to every action of
    /// `on_click` when it fires.
    Button {
        trigger: Node,
        on_click: ActionChain,
        content: Vec<Element>,
    },
    /// Editable text bound to a state key.
    TextField {
        key: String,
        label: Option<String>,
        value: String,
    },
    /// Blank vertical space, in rows.
    Spacer(u16),
    /// Visible fallback for a key that did not resolve.
    Unknown { kind: UnknownKind, key: String },
}

impl Element {
    pub fn unknown_component(key: impl Into<String>) -> Self {
        Element::Unknown {
            kind: UnknownKind::Component,
            key: key.into(),
        }
    }

    pub fn unknown_action(key: impl Into<String>) -> Self {
        Element::Unknown {
            kind: UnknownKind::Action,
            key: key.into(),
        }
    }

    /// Whether the element takes keyboard focus.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Element::Button { .. } | Element::TextField { .. })
    }

    /// Direct child elements.
    pub fn children(&self) -> &[Element] {
        match self {
            Element::Column(children) | Element::Row(children) => children,
            Element::Card { content, .. } | Element::Button { content, .. } => content,
            _ => &[],
        }
    }

    /// Interactive elements in depth-first order, the order focus moves in.
    pub fn focusables(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_focusables(&mut found);
        found
    }

    fn collect_focusables<'a>(&'a self, found: &mut Vec<&'a Element>) {
        if self.is_interactive() {
            found.push(self);
            return;
        }
        for child in self.children() {
            child.collect_focusables(found);
        }
    }

    /// Concatenated text of this element and its descendants, used as the
    /// label of buttons and in tests.
    pub fn text_content(&self) -> String {
        match self {
            Element::Text(text) => text.clone(),
            Element::TextField { value, .. } => value.clone(),
            Element::Unknown { kind, key } => format!("{}\n{}", kind.label(), key),
            _ => self
                .children()
                .iter()
                .map(Element::text_content)
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
