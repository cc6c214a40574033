//! Error handling for the resolution engine.
//!
//! Two families of errors with opposite propagation policies:
//!
//! | Family | Example | Policy |
//! |--------|---------|--------|
//! | [`RegistryError`] | unknown method, unknown provider type | fatal, abort early |
//! | [`ProviderError`] | invalid JSON, missing file, HTTP 500 | `LoadState::Error`, host keeps running |
//!
//! Unknown components and actions are not errors at all: dispatch renders a
//! visible fallback element instead (see [`crate::render`]).

mod category;
mod provider;
mod registry;
mod result;
mod sdui_error;

pub use category::ErrorCategory;
pub use provider::ProviderError;
pub use registry::RegistryError;
pub use result::SduiResult;
pub use sdui_error::SduiError;
