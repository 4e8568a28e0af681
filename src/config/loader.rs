//! Configuration loading from disk.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::EchoConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid bind address {address:?}: {reason}")]
    InvalidBindAddress { address: String, reason: String },
}

impl EchoConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: EchoConfig = toml::from_str(&content)?;

        validate(&config)?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Semantic checks serde cannot express.
fn validate(config: &EchoConfig) -> Result<(), ConfigError> {
    config
        .listener
        .bind_address
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidBindAddress {
            address: config.listener.bind_address.clone(),
            reason: e.to_string(),
        })?;

    Ok(())
}
