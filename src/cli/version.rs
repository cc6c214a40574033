//! `--version` and `--help` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: sdui [OPTIONS] [RESOURCE]

Render a server-driven UI tree in the terminal.

Arguments:
  [RESOURCE]             Bootstrap resource (default: files/navigation/app-navigation.json)

Options:
  -p, --provider <TYPE>  Provider for RESOURCE: file, json, http or link (default: file)
      --root <DIR>       Directory relative file resources resolve against
  -d, --debug            Verbose logging
  -h, --help             Print help
  -V, --version          Print version

Environment:
  SDUI_BOOTSTRAP, SDUI_PROVIDER, SDUI_RESOURCE_ROOT, SDUI_DEBUG, SDUI_LOG_FILE, RUST_LOG";

/// Print the version string and exit successfully.
pub fn handle_version_command() -> ! {
    println!("sdui {}", VERSION);
    std::process::exit(0)
}

/// Print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("sdui {}\n\n{}", VERSION, USAGE);
    std::process::exit(0)
}
