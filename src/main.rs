mod cli_messages;
mod config;
mod consts;
mod environment;
mod error_classifier;
mod events;
mod feeds;
mod fusion;
mod logging;
mod mock_series;
mod network;
mod panel;
mod runtime;
mod session;
mod ui;
mod workers;

use crate::config::{Config, clear_config, get_config_path};
use crate::environment::Environment;
use crate::session::{SessionOptions, SnapshotFormat, run_snapshot, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Terminal dashboard for XRP market data and XRP Ledger health
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open the interactive dashboard
    Dashboard {
        /// Seconds between automatic refreshes (0 disables polling)
        #[arg(long, value_name = "SECS")]
        poll_interval: Option<u64>,

        /// Disable background colors
        #[arg(long, action = clap::ArgAction::SetTrue)]
        no_background: bool,

        /// Never touch the network; every panel shows its fallback data
        #[arg(long, action = clap::ArgAction::SetTrue)]
        offline: bool,
    },
    /// Refresh every panel once and print the result
    Snapshot {
        /// Print a JSON document instead of text
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,

        /// Never touch the network; every panel shows its fallback data
        #[arg(long, action = clap::ArgAction::SetTrue)]
        offline: bool,
    },
    /// Delete the configuration file
    ResetConfig,
}

/// `PULSE_ENVIRONMENT`, when set to a known network name.
fn environment_override() -> Option<Environment> {
    let value = std::env::var("PULSE_ENVIRONMENT").ok()?;
    match value.parse::<Environment>() {
        Ok(environment) => Some(environment),
        Err(()) => {
            print_cmd_warn!(
                "Unknown PULSE_ENVIRONMENT",
                "'{}' is not one of mainnet, testnet, local; using the configured network",
                value
            );
            None
        }
    }
}

/// Load the config file, falling back to defaults when it cannot be read.
fn load_config(path: &std::path::Path) -> Config {
    match Config::load_or_create(path) {
        Ok(config) => config,
        Err(e) => {
            print_cmd_warn!("Ignoring config file", "{}: {}", path.display(), e);
            Config::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    logging::init_max_level();

    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Dashboard {
            poll_interval,
            no_background,
            offline,
        } => {
            let config = load_config(&config_path);
            let with_background = config.with_background_color && !no_background;
            let session = setup_session(
                config,
                SessionOptions {
                    environment: environment_override(),
                    poll_interval_secs: poll_interval,
                    offline,
                },
            );
            run_tui_mode(session, with_background).await
        }
        Command::Snapshot { json, offline } => {
            let session = setup_session(
                load_config(&config_path),
                SessionOptions {
                    environment: environment_override(),
                    poll_interval_secs: None,
                    offline,
                },
            );
            let format = if json {
                SnapshotFormat::Json
            } else {
                SnapshotFormat::Text
            };
            run_snapshot(session, format).await
        }
        Command::ResetConfig => {
            print_cmd_info!("Resetting configuration", "{}", config_path.display());
            clear_config(&config_path)?;
            print_cmd_success!("Configuration cleared", "");
            Ok(())
        }
    }
}
