//! The `http` provider: fetches a tree from a server.

use async_trait::async_trait;

use super::{parse_tree, NodeProvider};
use crate::error::ProviderError;
use crate::node::Tree;

#[derive(Debug, Clone, Default)]
pub struct HttpProvider {
    client: reqwest::Client,
}

impl HttpProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NodeProvider for HttpProvider {
    async fn provide(&self, resource: &str) -> Result<Tree, ProviderError> {
        let request_failed = |e: reqwest::Error| ProviderError::Http {
            url: resource.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(resource).send().await.map_err(request_failed)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::HttpStatus {
                url: resource.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.text().await.map_err(request_failed)?;
        parse_tree(&body)
    }
}
