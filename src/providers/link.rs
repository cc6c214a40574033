//! The `link` provider: opens a URL and produces no content.
//!
//! This lets a navigation-shaped node trigger a side effect through the
//! same lookup used for content. The result is always [`Tree::Ignored`].

use async_trait::async_trait;

use super::NodeProvider;
use crate::error::ProviderError;
use crate::node::Tree;

/// Hands URLs to something that can open them.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkProvider<O = SystemOpener> {
    opener: O,
}

impl<O: UrlOpener> LinkProvider<O> {
    pub fn new(opener: O) -> Self {
        Self { opener }
    }
}

#[async_trait]
impl<O: UrlOpener> NodeProvider for LinkProvider<O> {
    async fn provide(&self, resource: &str) -> Result<Tree, ProviderError> {
        tracing::info!("Opening link {}", resource);
        self.opener
            .open(resource)
            .map_err(|e| ProviderError::LinkOpen {
                url: resource.to_string(),
                message: e.to_string(),
            })?;
        Ok(Tree::Ignored)
    }
}
