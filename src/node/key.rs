//! Namespaced component keys (`"<library>:<type>"`).

use std::fmt;

/// A parsed `"<namespace>:<type>"` key.
///
/// Parsing never fails loudly: a key that does not contain exactly one `:`
/// with a non-empty namespace and type yields `None`, and dispatch treats it
/// as "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentKey<'a> {
    namespace: &'a str,
    kind: &'a str,
}

impl<'a> ComponentKey<'a> {
    /// Separator between namespace and type.
    pub const SEPARATOR: char = ':';

    /// Parse a raw key.
    ///
    /// ```
    /// use sdui::node::ComponentKey;
    ///
    /// let key = ComponentKey::parse("layout:button").unwrap();
    /// assert_eq!(key.namespace(), "layout");
    /// assert_eq!(key.kind(), "button");
    /// assert!(ComponentKey::parse("layout").is_none());
    /// assert!(ComponentKey::parse("a:b:c").is_none());
    /// ```
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (namespace, kind) = raw.split_once(Self::SEPARATOR)?;
        if namespace.is_empty() || kind.is_empty() || kind.contains(Self::SEPARATOR) {
            return None;
        }
        Some(Self { namespace, kind })
    }

    /// The library namespace half.
    pub fn namespace(&self) -> &'a str {
        self.namespace
    }

    /// The component or action type half.
    pub fn kind(&self) -> &'a str {
        self.kind
    }
}

impl fmt::Display for ComponentKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace, Self::SEPARATOR, self.kind)
    }
}
