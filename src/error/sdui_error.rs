//! Unified error type for the sdui crate.

use thiserror::Error;

use super::category::ErrorCategory;
use super::provider::ProviderError;
use super::registry::RegistryError;

/// Unified error type.
///
/// Consolidates the registry and provider errors with the I/O errors of the
/// terminal front end, so the binary can propagate all of them with `?`.
#[derive(Debug, Error)]
pub enum SduiError {
    /// Misconfigured registry (fatal).
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Tree could not be produced.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Terminal or log file I/O.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SduiError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SduiError::Registry(err) => err.category(),
            SduiError::Provider(err) => err.category(),
            SduiError::Io(_) => ErrorCategory::System,
        }
    }

    /// Whether this error must abort the UI root.
    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SduiError::Registry(err) => err.error_code(),
            SduiError::Provider(err) => err.error_code(),
            SduiError::Io(_) => "SYS_IO",
        }
    }

    /// Get a user-facing message, prefixed with the category description.
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.category().description(), self)
    }
}
