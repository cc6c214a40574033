//! Log setup.
//!
//! The terminal owns stdout and stderr while the UI runs, so logs go to a
//! file. `RUST_LOG` takes precedence over [`Config::log_filter`]. When no log
//! file can be opened, events are discarded.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber. Returns the log file path in use, if any.
///
/// Calling this twice is harmless: the second subscriber is not installed.
pub fn init(config: &Config) -> Option<PathBuf> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    let Some(path) = config.log_path() else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::sink))
            .try_init();
        return None;
    };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), e);
            return None;
        }
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();

    tracing::info!(path = ?path, "Logging initialized");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("sdui.log");
        let config = Config::default().with_log_file(&path);

        assert_eq!(init(&config), Some(path.clone()));
        assert!(path.exists());
    }
}
