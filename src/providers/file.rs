//! The `file` provider: reads a tree from disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{parse_tree, NodeProvider};
use crate::error::ProviderError;
use crate::node::Tree;

/// Reads trees relative to a resource root. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an identifier to the path that will be read.
    pub fn resolve(&self, resource: &str) -> PathBuf {
        let path = Path::new(resource);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[async_trait]
impl NodeProvider for FileProvider {
    async fn provide(&self, resource: &str) -> Result<Tree, ProviderError> {
        let path = self.resolve(resource);
        tracing::debug!("Reading tree from {}", path.display());
        let contents = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ProviderError::Io { path, source })?;
        parse_tree(&contents)
    }
}
