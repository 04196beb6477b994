use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;

pub const DEFAULT_CONFIG_FILE: &str = "ferrous-dig.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values passed on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub nameservers: Option<Vec<String>>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from `config_path`, or from `ferrous-dig.toml` when it
    /// exists, then applies CLI overrides. Missing default file means defaults.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(nameservers) = overrides.nameservers {
            self.resolver.nameservers = nameservers;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be greater than 0".to_string(),
            ));
        }
        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "resolver.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.resolver.attempts == 0 {
            return Err(ConfigError::Validation(
                "resolver.attempts must be greater than 0".to_string(),
            ));
        }
        for server in &self.resolver.nameservers {
            server.parse::<SocketAddr>().map_err(|_| {
                ConfigError::Validation(format!(
                    "resolver.nameservers entry '{}' is not an ip:port address",
                    server
                ))
            })?;
        }
        Ok(())
    }
}
