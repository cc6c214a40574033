//! The built-in `layout` library.
//!
//! | Type | Properties | Renders |
//! |------|------------|---------|
//! | `column` | children | children stacked vertically |
//! | `row` | children | children side by side |
//! | `card` | `title`, children | children inside a titled border |
//! | `text` | `text`, `bind` | `bind` names a state key whose value is shown, `text` is the fallback |
//! | `button` | `text`, `onClick`, children | clickable element running the `onClick` chain |
//! | `text_field` | `key`, `label` | editable text bound to state key `key` |
//! | `spacer` | `size` | `size` blank rows (default 1) |

use super::Library;
use crate::node::Node;
use crate::render::{Element, RenderContext};

pub const NAMESPACE: &str = "layout";

pub fn library() -> Library {
    Library::new(NAMESPACE)
        .with_component("column", column)
        .with_component("row", row)
        .with_component("card", card)
        .with_component("text", text)
        .with_component("button", button)
        .with_component("text_field", text_field)
        .with_component("spacer", spacer)
}

fn column(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    Element::Column(cx.render_children(node))
}

fn row(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    Element::Row(cx.render_children(node))
}

fn card(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    Element::Card {
        title: node.property_str("title").map(str::to_string),
        content: cx.render_children(node),
    }
}

fn text(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    let bound = node
        .property_str("bind")
        .and_then(|key| cx.state().get(key))
        .map(str::to_string);
    let text = bound
        .or_else(|| node.property("text").and_then(|value| value.to_text()))
        .unwrap_or_default();
    Element::Text(text)
}

fn button(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    let on_click = cx.resolve_actions(node.property_nodes("onClick"));
    let mut content = cx.render_children(node);
    if content.is_empty() {
        if let Some(label) = node.property("text").and_then(|value| value.to_text()) {
            content.push(Element::Text(label));
        }
    }
    content.extend(on_click.fallbacks());
    Element::Button {
        trigger: node.clone(),
        on_click,
        content,
    }
}

fn text_field(node: &Node, cx: &mut RenderContext<'_>) -> Element {
    let Some(key) = node.property_str("key") else {
        tracing::warn!("{} without a 'key' property", node.component());
        return Element::Empty;
    };
    Element::TextField {
        key: key.to_string(),
        label: node.property_str("label").map(str::to_string),
        value: cx.state().get(key).unwrap_or_default().to_string(),
    }
}

fn spacer(node: &Node, _cx: &mut RenderContext<'_>) -> Element {
    let size = node.property_u64("size").unwrap_or(1);
    Element::Spacer(u16::try_from(size).unwrap_or(u16::MAX))
}
