//! Command-line argument parsing.
//!
//! Flags override the environment-derived [`Config`]; anything not
//! recognised is ignored.

use std::path::PathBuf;

use crate::config::Config;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the UI (default)
    Run(RunArgs),
}

/// Overrides collected for a UI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunArgs {
    /// Bootstrap resource (positional)
    pub resource: Option<String>,
    /// `--provider <type>`
    pub provider: Option<String>,
    /// `--root <dir>`
    pub root: Option<PathBuf>,
    /// `--debug`
    pub debug: bool,
}

impl RunArgs {
    /// Layer these overrides over `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(resource) = self.resource {
            config.bootstrap_resource = resource;
        }
        if let Some(provider) = self.provider {
            config.bootstrap_provider = provider;
        }
        if let Some(root) = self.root {
            config.resource_root = root;
        }
        if self.debug {
            config.debug = true;
        }
        config
    }
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use sdui::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sdui".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut run = RunArgs::default();
    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--debug" | "-d" => run.debug = true,
            "--root" => run.root = args.next().map(PathBuf::from),
            "--provider" | "-p" => run.provider = args.next(),
            flag if flag.starts_with('-') => {}
            resource => run.resource = Some(resource.to_string()),
        }
    }
    CliCommand::Run(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["sdui".to_string()];
        all.extend(args.iter().map(|arg| arg.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flag() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["screens/home.json", "-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::Run(RunArgs::default()));
    }

    #[test]
    fn test_parse_run_overrides() {
        let command = parse(&[
            "--provider",
            "http",
            "--root",
            "/srv/ui",
            "--debug",
            "https://example.com/tree.json",
        ]);
        assert_eq!(
            command,
            CliCommand::Run(RunArgs {
                resource: Some("https://example.com/tree.json".to_string()),
                provider: Some("http".to_string()),
                root: Some(PathBuf::from("/srv/ui")),
                debug: true,
            })
        );
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::Run(RunArgs::default()));
    }

    #[test]
    fn test_apply_overrides_config() {
        let config = RunArgs {
            resource: Some("screens/home.json".to_string()),
            provider: None,
            root: Some(PathBuf::from("demo")),
            debug: true,
        }
        .apply(Config::default());

        assert_eq!(config.bootstrap_resource, "screens/home.json");
        assert_eq!(config.bootstrap_provider, "file");
        assert_eq!(config.resource_root, PathBuf::from("demo"));
        assert!(config.debug);
    }

    #[test]
    fn test_apply_without_debug_keeps_env_debug() {
        let config = RunArgs::default().apply(Config::default().with_debug(true));
        assert!(config.debug);
    }
}
