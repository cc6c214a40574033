//! Configuration for one UI root.
//!
//! Defaults come from [`Config::default`], environment variables override
//! them via [`Config::from_env`], and command-line arguments override both
//! (see [`crate::cli`]).
//!
//! # Example
//!
//! ```
//! use sdui::config::Config;
//!
//! let config = Config::default()
//!     .with_bootstrap_resource("screens/home.json")
//!     .with_debug(true);
//! assert_eq!(config.bootstrap_provider, "file");
//! assert_eq!(config.log_filter(), "sdui=debug");
//! ```

use std::path::PathBuf;

/// Root navigation tree loaded at startup.
pub const DEFAULT_BOOTSTRAP_RESOURCE: &str = "files/navigation/app-navigation.json";

/// Provider used for the bootstrap resource.
pub const DEFAULT_BOOTSTRAP_PROVIDER: &str = "file";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Resource identifier of the root tree
    pub bootstrap_resource: String,
    /// Provider type used to load `bootstrap_resource`
    pub bootstrap_provider: String,
    /// Directory relative paths of the `file` provider resolve against
    pub resource_root: PathBuf,
    /// Verbose logging
    pub debug: bool,
    /// Log file override (default: `<cache dir>/sdui/sdui.log`)
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bootstrap_resource: DEFAULT_BOOTSTRAP_RESOURCE.to_string(),
            bootstrap_provider: DEFAULT_BOOTSTRAP_PROVIDER.to_string(),
            resource_root: PathBuf::from("."),
            debug: false,
            log_file: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bootstrap_resource(mut self, resource: impl Into<String>) -> Self {
        self.bootstrap_resource = resource.into();
        self
    }

    pub fn with_bootstrap_provider(mut self, provider: impl Into<String>) -> Self {
        self.bootstrap_provider = provider.into();
        self
    }

    pub fn with_resource_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.resource_root = root.into();
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overridden by `SDUI_BOOTSTRAP`, `SDUI_PROVIDER`,
    /// `SDUI_RESOURCE_ROOT`, `SDUI_DEBUG` and `SDUI_LOG_FILE`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(resource) = std::env::var("SDUI_BOOTSTRAP") {
            config.bootstrap_resource = resource;
        }
        if let Ok(provider) = std::env::var("SDUI_PROVIDER") {
            config.bootstrap_provider = provider;
        }
        if let Ok(root) = std::env::var("SDUI_RESOURCE_ROOT") {
            config.resource_root = PathBuf::from(root);
        }
        if let Ok(debug) = std::env::var("SDUI_DEBUG") {
            config.debug = matches!(debug.as_str(), "1" | "true" | "yes");
        }
        if let Ok(path) = std::env::var("SDUI_LOG_FILE") {
            config.log_file = Some(PathBuf::from(path));
        }
        config
    }

    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "sdui=debug"
        } else {
            "sdui=info"
        }
    }

    /// Where logs are written, if a location can be determined.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("sdui").join("sdui.log")))
    }
}
