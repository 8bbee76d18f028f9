//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use favhub_core::config::AppConfig;
use favhub_core::error::AppError;
use favhub_storage::providers::build_provider;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration and check that storage opens
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => match build_provider(&config.storage) {
            Ok(store) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Storage", store.provider_type());
                output::print_kv("Data root", &config.storage.data_root);
                output::print_kv("State key", &config.storage.state_key);
                output::print_kv("Unresolved paths", &format!("{:?}", config.view.unresolved_path));
                output::print_kv("Notice TTL (ms)", &config.notice.ttl_ms.to_string());
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
    }

    Ok(())
}
