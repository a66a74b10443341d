use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the upstream networks the dashboard can read from.
#[derive(Clone, Default, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// XRPL mainnet public cluster.
    #[default]
    Mainnet,
    /// XRPL altnet (testnet).
    Testnet,
    /// A rippled node on this machine.
    Local,
}

impl Environment {
    /// Returns the XRPL JSON-RPC URL associated with the environment.
    pub fn xrpl_rpc_url(&self) -> String {
        match self {
            Environment::Mainnet => "https://s1.ripple.com:51234/".to_string(),
            Environment::Testnet => "https://s.altnet.rippletest.net:51234/".to_string(),
            Environment::Local => "http://localhost:5005/".to_string(),
        }
    }

    /// Market data always comes from CoinGecko; only the ledger differs.
    pub fn coingecko_url(&self) -> String {
        "https://api.coingecko.com/api/v3".to_string()
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Environment::Mainnet),
            "testnet" | "altnet" => Ok(Environment::Testnet),
            "local" => Ok(Environment::Local),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Mainnet => write!(f, "Mainnet"),
            Environment::Testnet => write!(f, "Testnet"),
            Environment::Local => write!(f, "Local"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, RPC: {}", self, self.xrpl_rpc_url())
    }
}

/// Base URLs every feed builds its requests from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub coingecko: String,
    pub xrpl_rpc: String,
}

impl Endpoints {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            coingecko: environment.coingecko_url(),
            xrpl_rpc: environment.xrpl_rpc_url(),
        }
    }

    /// Join a CoinGecko path onto the base URL.
    pub fn coingecko_path(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.coingecko.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment() {
        assert_eq!("mainnet".parse::<Environment>(), Ok(Environment::Mainnet));
        assert_eq!("TESTNET".parse::<Environment>(), Ok(Environment::Testnet));
        assert_eq!("altnet".parse::<Environment>(), Ok(Environment::Testnet));
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert!("devnet".parse::<Environment>().is_err());
    }

    #[test]
    fn test_coingecko_path_joins_cleanly() {
        let endpoints = Endpoints {
            coingecko: "https://example.test/api/v3/".to_string(),
            xrpl_rpc: String::new(),
        };
        assert_eq!(
            endpoints.coingecko_path("/global"),
            "https://example.test/api/v3/global"
        );
    }
}
