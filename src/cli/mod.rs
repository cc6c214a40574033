//! Command-line interface.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use sdui::cli::{parse_args, run_cli_command};
//!
//! let run = run_cli_command(parse_args(std::env::args()));
//! let config = run.apply(sdui::config::Config::from_env());
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunArgs};
pub use version::{handle_help_command, handle_version_command, VERSION};

/// Handle the informational commands, which exit the process, and return
/// the overrides of a UI run otherwise.
pub fn run_cli_command(command: CliCommand) -> RunArgs {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => handle_help_command(),
        CliCommand::Run(args) => args,
    }
}
