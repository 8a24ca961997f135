use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, time::Duration};
use tracing::info;

use crate::core::errors::ClientError;

/// Canonical gas cost of a plain value transfer.
pub const DEFAULT_GAS: u64 = 21_000;

/// Node client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// RPC endpoint URL (e.g. "http://localhost:8545")
    pub endpoint: String,

    /// Gas quantity used by the fee calculator
    #[serde(default = "ClientConfig::default_gas")]
    pub gas: u64,

    /// Request timeout (seconds)
    #[serde(default = "ClientConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    node: ClientConfig,
}

impl ClientConfig {
    fn default_gas() -> u64 {
        DEFAULT_GAS
    }

    fn default_timeout_secs() -> u64 {
        30
    }

    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            gas: Self::default_gas(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }

    /// Reads `PARITY_RPC_URL` (required), `PARITY_GAS_LIMIT` and
    /// `PARITY_RPC_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ClientError> {
        let endpoint = env::var("PARITY_RPC_URL")
            .map_err(|_| ClientError::Config("PARITY_RPC_URL is not set".to_string()))?;

        let mut config = Self::new(endpoint.trim());
        if let Ok(gas) = env::var("PARITY_GAS_LIMIT") {
            config.gas = gas
                .trim()
                .parse()
                .map_err(|e| ClientError::Config(format!("Invalid PARITY_GAS_LIMIT: {}", e)))?;
        }
        if let Ok(secs) = env::var("PARITY_RPC_TIMEOUT_SECS") {
            config.timeout_secs = secs.trim().parse().map_err(|e| {
                ClientError::Config(format!("Invalid PARITY_RPC_TIMEOUT_SECS: {}", e))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document with a `[node]` table.
    pub fn from_toml_str(content: &str) -> Result<Self, ClientError> {
        let file: ConfigFile = toml::from_str(content)?;
        file.node.validate()?;
        Ok(file.node)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ClientError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded node config from {} (RPC: {})", path.display(), config.endpoint);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        reqwest::Url::parse(self.endpoint.trim()).map_err(|e| ClientError::InvalidUrl {
            url: self.endpoint.clone(),
            reason: e.to_string(),
        })?;
        if self.gas == 0 {
            return Err(ClientError::Config("gas must be greater than zero".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout_secs must be greater than zero".to_string()));
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8545")
    }
}
