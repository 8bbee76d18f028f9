//! FavHub: bookmark tree manager
//!
//! Main entry point: loads configuration, initializes logging, and runs
//! one CLI command against the stored bookmark tree.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use favhub_cli::Cli;
use favhub_cli::output;
use favhub_core::config::AppConfig;
use favhub_core::error::AppError;

fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(&config) {
        tracing::debug!(kind = %e.kind, "Command failed");
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay, and environment
fn load_configuration(config_path: &str) -> Result<AppConfig, AppError> {
    let env = std::env::var("FAVHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let overlay = format!("config/{env}.toml");

    let overlay = std::path::Path::new(&overlay)
        .exists()
        .then_some(overlay.as_str());
    AppConfig::load_layered(config_path, overlay)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
