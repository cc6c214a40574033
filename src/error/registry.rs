//! Registry lookup errors.
//!
//! Method and provider lookups are global and unforgiving: a miss means the
//! host registered the wrong set of handlers.

use thiserror::Error;

use super::category::ErrorCategory;

/// Fatal configuration errors raised by the dispatch registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No method handler registered under this name.
    #[error("No MethodHandler for method: {name}")]
    UnknownMethod { name: String },

    /// No node provider registered under this type.
    #[error("No NodeProvider for type: {provider_type}")]
    UnknownProvider { provider_type: String },
}

impl RegistryError {
    /// Registry errors are always configuration errors.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }

    /// Always true; kept as a method so callers read the intent.
    pub fn is_fatal(&self) -> bool {
        self.category().is_fatal()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::UnknownMethod { .. } => "REG_UNKNOWN_METHOD",
            RegistryError::UnknownProvider { .. } => "REG_UNKNOWN_PROVIDER",
        }
    }
}
