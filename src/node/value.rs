//! Property values carried by a [`Node`].

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::Node;

const COMPONENT_FIELD: &str = "component";

/// A node property value.
///
/// JSON objects that carry a `component` become [`Value::Node`], arrays
/// that contain such objects (and empty arrays) become [`Value::Nodes`].
/// Both are parsed as strictly as `children`: a malformed nested node fails
/// the whole tree. Anything else structured (style maps, string lists) is
/// kept verbatim as [`Value::Data`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Node(Box<Node>),
    Nodes(Vec<Node>),
    Data(serde_json::Value),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Value::from_json(raw).map_err(de::Error::custom)
    }
}

fn is_node_object(value: &serde_json::Value) -> bool {
    value
        .as_object()
        .is_some_and(|object| object.contains_key(COMPONENT_FIELD))
}

impl Value {
    /// Classify a raw JSON value.
    pub fn from_json(raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        use serde_json::Value as Json;

        Ok(match raw {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n),
            Json::String(s) => Value::String(s),
            object @ Json::Object(_) if is_node_object(&object) => {
                Value::Node(Box::new(serde_json::from_value(object)?))
            }
            Json::Array(items) if items.is_empty() || items.iter().any(is_node_object) => {
                Value::Nodes(serde_json::from_value(Json::Array(items))?)
            }
            other => Value::Data(other),
        })
    }

    /// The string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload. Strings `"true"`/`"false"` are accepted since
    /// method handlers produce strings.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The number as an unsigned integer, if it is one.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Scalar rendered as text; `None` for nodes and structured data.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Nodes held by this value: one for [`Value::Node`], all of them for
    /// [`Value::Nodes`], none otherwise.
    pub fn nodes(&self) -> &[Node] {
        match self {
            Value::Node(node) => std::slice::from_ref(node.as_ref()),
            Value::Nodes(nodes) => nodes,
            _ => &[],
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value.into())
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(Box::new(node))
    }
}

impl From<Vec<Node>> for Value {
    fn from(nodes: Vec<Node>) -> Self {
        Value::Nodes(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse("null"), Value::Null);
        assert_eq!(parse("true"), Value::Bool(true));
        assert_eq!(parse("12").as_u64(), Some(12));
        assert_eq!(parse("\"hi\"").as_str(), Some("hi"));
    }

    #[test]
    fn test_object_with_component_is_node() {
        let value = parse(r#"{"component": "actions:log"}"#);
        assert!(matches!(value, Value::Node(_)));
        assert_eq!(value.nodes().len(), 1);
        assert_eq!(value.nodes()[0].component(), "actions:log");
    }

    #[test]
    fn test_array_of_nodes() {
        let value = parse(r#"[{"component": "a:b"}, {"component": "c:d"}]"#);
        assert!(matches!(value, Value::Nodes(_)));
        assert_eq!(value.nodes().len(), 2);
    }

    #[test]
    fn test_other_structures_kept_as_data() {
        let value = parse(r#"{"padding": 4}"#);
        assert!(matches!(value, Value::Data(_)));
        assert!(value.nodes().is_empty());

        let value = parse(r#"["a", "b"]"#);
        assert!(matches!(value, Value::Data(_)));
    }

    #[test]
    fn test_empty_array_is_empty_node_list() {
        assert_eq!(parse("[]"), Value::Nodes(Vec::new()));
    }

    #[test]
    fn test_malformed_nested_action_is_an_error() {
        let err = serde_json::from_str::<Value>(
            r#"[{"component": "actions:log", "properties": "oops"}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{}", err);

        let err = serde_json::from_str::<Value>(r#"{"component": "actions:log", "children": 3}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid type"), "{}", err);
    }

    #[test]
    fn test_malformed_action_fails_the_button_like_children_do() {
        let in_property = serde_json::from_str::<Node>(
            r#"{"component": "layout:button", "properties": {
                "onClick": [{"component": "actions:log", "properties": "oops"}]
            }}"#,
        );
        let in_children = serde_json::from_str::<Node>(
            r#"{"component": "layout:button", "children": [
                {"component": "actions:log", "properties": "oops"}
            ]}"#,
        );
        assert!(in_property.is_err());
        assert!(in_children.is_err());
    }

    #[test]
    fn test_array_mixing_nodes_and_data_is_an_error() {
        assert!(serde_json::from_str::<Value>(r#"[{"component": "a:b"}, "loose"]"#).is_err());
    }

    #[test]
    fn test_string_bool_coercion() {
        assert_eq!(Value::from("true").as_bool(), Some(true));
        assert_eq!(Value::from("nope").as_bool(), None);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(Value::from(3u64).to_text(), Some("3".to_string()));
        assert_eq!(Value::from(false).to_text(), Some("false".to_string()));
        assert_eq!(Value::Null.to_text(), None);
    }
}
