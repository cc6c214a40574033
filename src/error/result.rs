//! Result type alias for sdui operations.

use super::sdui_error::SduiError;

/// Type alias for Results using [`SduiError`].
///
/// # Example
///
/// ```ignore
/// use sdui::error::SduiResult;
///
/// fn bootstrap(registry: &Registry) -> SduiResult<TreeLoad> {
///     registry.load("file", "files/navigation/app-navigation.json")
/// }
/// ```
pub type SduiResult<T> = Result<T, SduiError>;
