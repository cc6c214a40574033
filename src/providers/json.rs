//! The `json` provider: the identifier is the tree itself.

use async_trait::async_trait;

use super::{parse_tree, NodeProvider};
use crate::error::ProviderError;
use crate::node::Tree;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonProvider;

#[async_trait]
impl NodeProvider for JsonProvider {
    async fn provide(&self, resource: &str) -> Result<Tree, ProviderError> {
        parse_tree(resource)
    }
}
