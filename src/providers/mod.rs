//! Node providers: turning a resource identifier into a tree.
//!
//! Providers are registered globally on the registry under a short type
//! string. The identifier is opaque to the registry; each provider decides
//! whether it is JSON text, a path or a URL.
//!
//! | Type | Identifier | Result |
//! |------|------------|--------|
//! | `json` | raw JSON text | parsed tree |
//! | `file` | path, relative to the resource root | parsed file contents |
//! | `http` | URL | parsed response body |
//! | `link` | URL | opens it, always [`Tree::Ignored`] |

mod file;
mod http;
mod json;
mod link;

pub use file::FileProvider;
pub use http::HttpProvider;
pub use json::JsonProvider;
pub use link::{LinkProvider, SystemOpener, UrlOpener};

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::node::{Node, Tree};

/// Provider type names of the built-in providers.
pub const JSON: &str = "json";
pub const FILE: &str = "file";
pub const LINK: &str = "link";
pub const HTTP: &str = "http";

/// Converts a resource identifier into a tree.
#[async_trait]
pub trait NodeProvider: Send + Sync {
    async fn provide(&self, resource: &str) -> Result<Tree, ProviderError>;
}

/// Parse JSON text into a content tree.
pub fn parse_tree(json: &str) -> Result<Tree, ProviderError> {
    let node: Node = serde_json::from_str(json)?;
    Ok(Tree::Node(node))
}
