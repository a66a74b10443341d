//! Session setup and initialization

use crate::config::Config;
use crate::environment::{Endpoints, Environment};
use crate::feeds;
use crate::network::{HttpTransport, OfflineTransport, Transport};
use crate::panel::PanelSet;
use std::sync::Arc;
use std::time::Duration;

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Network the ledger panels read from
    pub environment: Environment,
    /// Base URLs after config overrides
    pub endpoints: Endpoints,
    /// Every panel, mounted with its default payload
    pub panels: PanelSet,
    /// Shared by every panel request
    pub transport: Arc<dyn Transport>,
    /// Timed refresh interval, if enabled
    pub poll_interval: Option<Duration>,
    /// True when no request will reach the network
    pub offline: bool,
}

/// Options that come from the command line rather than the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Overrides the config file's environment
    pub environment: Option<Environment>,
    /// Overrides the config file's poll interval; 0 disables polling
    pub poll_interval_secs: Option<u64>,
    pub offline: bool,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Resolves the environment and endpoints
/// 2. Picks the transport (HTTP or offline)
/// 3. Mounts every panel with its default payload
pub fn setup_session(config: Config, options: SessionOptions) -> SessionData {
    let mut config = config;
    if let Some(environment) = options.environment {
        config.environment = environment;
    }
    if let Some(secs) = options.poll_interval_secs {
        config.poll_interval_secs = secs;
    }

    let endpoints = config.endpoints();
    let transport: Arc<dyn Transport> = if options.offline {
        Arc::new(OfflineTransport)
    } else {
        Arc::new(HttpTransport::new())
    };
    let panels = feeds::mount_all(&endpoints, config.cached_threshold());

    SessionData {
        environment: config.environment,
        endpoints,
        panels,
        transport,
        poll_interval: config.poll_interval(),
        offline: options.offline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_override_config() {
        let session = setup_session(
            Config::default(),
            SessionOptions {
                environment: Some(Environment::Local),
                poll_interval_secs: Some(0),
                offline: true,
            },
        );
        assert_eq!(session.environment, Environment::Local);
        assert_eq!(session.endpoints.xrpl_rpc, "http://localhost:5005/");
        assert_eq!(session.poll_interval, None);
        assert_eq!(session.panels.ids().len(), 6);
        assert!(session.offline);
    }

    #[test]
    fn test_config_used_without_options() {
        let config = Config {
            environment: Environment::Testnet,
            ..Config::default()
        };
        let session = setup_session(config, SessionOptions::default());
        assert_eq!(session.environment, Environment::Testnet);
        assert_eq!(session.poll_interval, Some(Duration::from_secs(60)));
    }
}
