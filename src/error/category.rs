//! Error category classification.
//!
//! Categories drive the propagation policy: configuration errors abort the
//! UI root early, content errors degrade to a visible fallback.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Integrator mistakes (unknown method, unknown provider type).
    /// Fatal: caught during integration, never expected with live data.
    Configuration,

    /// Bad payloads delivered by the server (invalid JSON, wrong shape).
    /// Recoverable: shown as an error view for the affected screen.
    Content,

    /// Network failures while fetching a remote tree.
    Network,

    /// OS-level failures (filesystem, terminal, browser launch).
    System,
}

impl ErrorCategory {
    /// Returns true if errors in this category must abort the UI root.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCategory::Configuration)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Content => "content",
            ErrorCategory::Network => "network",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Client configuration problem",
            ErrorCategory::Content => "Invalid server-driven content",
            ErrorCategory::Network => "Network connectivity issue",
            ErrorCategory::System => "System error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
