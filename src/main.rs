use sdui::app::{self, App};
use sdui::cli::{self, VERSION};
use sdui::config::Config;
use sdui::logging;
use sdui::registry::Registry;
use sdui::terminal::{setup_panic_hook, TerminalManager};

use color_eyre::Result;

fn main() -> Result<()> {
    // Informational flags exit before any initialization
    let run_args = cli::run_cli_command(cli::parse_args(std::env::args()));

    color_eyre::install()?;

    let config = run_args.apply(Config::from_env());
    let log_path = logging::init(&config);
    tracing::info!(version = VERSION, log = ?log_path, "Starting sdui");
    tracing::debug!(?config, "Resolved configuration");

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let _enter = runtime.enter();

    let mut app = App::new(Registry::with_defaults(&config));
    tracing::debug!(registry = ?app.registry(), "Registry ready");

    // An unknown bootstrap provider is fatal before the terminal is touched
    if let Err(e) = app.start_load(&config.bootstrap_provider, &config.bootstrap_resource) {
        tracing::error!(code = e.error_code(), "{}", e);
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(app::run(manager.terminal(), &mut app));
    manager.restore();

    if let Err(e) = &result {
        tracing::error!(code = e.error_code(), "{}", e);
        eprintln!("{}", e.user_message());
    }
    tracing::info!("Exiting");
    Ok(result?)
}
