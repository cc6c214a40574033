//! Node provider errors.
//!
//! Everything that can go wrong while turning a resource identifier into a
//! tree. These surface as `LoadState::Error` and never crash the host.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

/// Failure while producing a tree from a resource.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The payload is not a valid node tree.
    #[error("Invalid node tree: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Reading a tree file failed.
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote request failed before a response was received.
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    /// The remote server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// The link could not be handed to the system opener.
    #[error("Could not open link {url}: {message}")]
    LinkOpen { url: String, message: String },
}

impl ProviderError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProviderError::InvalidJson(_) => ErrorCategory::Content,
            ProviderError::Io { .. } | ProviderError::LinkOpen { .. } => ErrorCategory::System,
            ProviderError::Http { .. } | ProviderError::HttpStatus { .. } => {
                ErrorCategory::Network
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProviderError::InvalidJson(_) => "PROVIDER_INVALID_JSON",
            ProviderError::Io { .. } => "PROVIDER_IO",
            ProviderError::Http { .. } => "PROVIDER_HTTP",
            ProviderError::HttpStatus { .. } => "PROVIDER_HTTP_STATUS",
            ProviderError::LinkOpen { .. } => "PROVIDER_LINK_OPEN",
        }
    }
}
