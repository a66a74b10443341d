//! Application configuration.

use crate::consts::cli_consts::panel;
use crate::environment::{Endpoints, Environment};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = ".xrpl-pulse";
const CONFIG_FILE: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub environment: Environment,

    /// Seconds between automatic refreshes. 0 disables polling.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Responses faster than this are shown as cached.
    #[serde(default = "default_cached_threshold_ms")]
    pub cached_threshold_ms: u64,

    #[serde(default = "default_with_background_color")]
    pub with_background_color: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coingecko_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xrpl_rpc_url: Option<String>,
}

fn default_poll_interval_secs() -> u64 {
    panel::DEFAULT_POLL_INTERVAL_SECS
}

fn default_cached_threshold_ms() -> u64 {
    panel::CACHED_LATENCY_THRESHOLD_MS
}

fn default_with_background_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            poll_interval_secs: default_poll_interval_secs(),
            cached_threshold_ms: default_cached_threshold_ms(),
            with_background_color: default_with_background_color(),
            coingecko_url: None,
            xrpl_rpc_url: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Like [`Config::load_from_file`], but a missing file is created with the
    /// defaults so there is something to edit.
    pub fn load_or_create(path: &Path) -> Result<Self, std::io::Error> {
        if !path.exists() {
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }
        Self::load_from_file(path)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Endpoints for the configured environment, with any URL overrides applied.
    pub fn endpoints(&self) -> Endpoints {
        let mut endpoints = Endpoints::for_environment(self.environment);
        if let Some(url) = &self.coingecko_url {
            endpoints.coingecko = url.clone();
        }
        if let Some(url) = &self.xrpl_rpc_url {
            endpoints.xrpl_rpc = url.clone();
        }
        endpoints
    }

    pub fn poll_interval(&self) -> Option<Duration> {
        match self.poll_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    pub fn cached_threshold(&self) -> Duration {
        Duration::from_millis(self.cached_threshold_ms)
    }
}

/// `~/.xrpl-pulse/config.json`
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Delete the configuration file.
pub fn clear_config(path: &Path) -> std::io::Result<()> {
    // Check that the path ends with config.json
    if !path.ends_with(CONFIG_FILE) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Path must end with config.json",
        ));
    }

    // If no file exists, return OK
    if !path.exists() {
        println!("No config file found at {}", path.display());
        return Ok(());
    }

    fs::remove_file(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample_config() -> Config {
        Config {
            environment: Environment::Testnet,
            poll_interval_secs: 30,
            cached_threshold_ms: 50,
            with_background_color: false,
            coingecko_url: Some("http://localhost:8080/api/v3".to_string()),
            xrpl_rpc_url: None,
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample_config();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::default().save(&path).unwrap();
        let config2 = sample_config();
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Fields left out of the file take their defaults.
    fn test_missing_fields_take_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"environment": "local"}"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.environment, Environment::Local);
        assert_eq!(config.poll_interval(), Some(Duration::from_secs(60)));
        assert_eq!(config.cached_threshold(), Duration::from_millis(100));
        assert!(config.with_background_color);
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_DIR).join(CONFIG_FILE);

        let config = Config::load_or_create(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        sample_config().save(&path).unwrap();

        assert_eq!(Config::load_or_create(&path).unwrap(), sample_config());
    }

    #[test]
    fn test_zero_interval_disables_polling() {
        let config = Config {
            poll_interval_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.poll_interval(), None);
    }

    #[test]
    fn test_endpoint_overrides() {
        let endpoints = sample_config().endpoints();
        assert_eq!(endpoints.coingecko, "http://localhost:8080/api/v3");
        assert_eq!(endpoints.xrpl_rpc, Environment::Testnet.xrpl_rpc_url());
    }

    #[test]
    fn test_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        clear_config(&path).unwrap();
        assert!(!path.exists());
        // Clearing twice is fine.
        clear_config(&path).unwrap();
        assert!(clear_config(&dir.path().join("other.json")).is_err());
    }
}
