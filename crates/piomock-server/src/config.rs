use crate::cli::Args;
use crate::error::{ConfigError, ConfigResult};
use piomock_api::MockConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for both servers
    pub bind_address: String,

    /// Engine (query) server port
    pub engine_port: u16,

    /// Event server port
    pub event_port: u16,

    /// Access key required on ingestion requests
    pub access_key: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let defaults = MockConfig::default();
        Self {
            bind_address: defaults.bind_address,
            engine_port: defaults.engine_port,
            event_port: defaults.event_port,
            access_key: defaults.access_key,
        }
    }
}

impl ServerConfig {
    /// Load configuration from multiple sources: defaults, then the config
    /// file if given, then CLI arguments (which carry env overrides via
    /// clap's env fallbacks).
    pub fn load(args: &Args) -> ConfigResult<Self> {
        let mut config = if let Some(config_file) = args.config_file() {
            Self::from_file(config_file)?
        } else {
            Self::default()
        };

        config.merge_with_args(args);

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Apply CLI argument overrides
    fn merge_with_args(&mut self, args: &Args) {
        if let Some(bind_address) = &args.bind_address {
            self.bind_address = bind_address.clone();
        }
        if let Some(engine_port) = args.engine_port {
            self.engine_port = engine_port;
        }
        if let Some(event_port) = args.event_port {
            self.event_port = event_port;
        }
        if let Some(access_key) = &args.access_key {
            self.access_key = access_key.clone();
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.as_mock_config()
            .validate()
            .map_err(ConfigError::Validation)
    }

    /// Convert into the API layer's configuration
    pub fn as_mock_config(&self) -> MockConfig {
        MockConfig {
            bind_address: self.bind_address.clone(),
            engine_port: self.engine_port,
            event_port: self.event_port,
            access_key: self.access_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_api_defaults() {
        let config = ServerConfig::default();

        assert_eq!(config.engine_port, 8000);
        assert_eq!(config.event_port, 7070);
        assert_eq!(config.access_key, "123");
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let args = Args::parse_from([
            "piomock-server",
            "--event-port",
            "9070",
            "--access-key",
            "secret",
        ]);

        let config = ServerConfig::load(&args).unwrap();

        assert_eq!(config.engine_port, 8000);
        assert_eq!(config.event_port, 9070);
        assert_eq!(config.access_key, "secret");
    }

    #[test]
    fn test_from_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            engine_port = 9000
            access_key = "abc"
            "#,
        )
        .unwrap();

        assert_eq!(config.engine_port, 9000);
        assert_eq!(config.event_port, 7070);
        assert_eq!(config.access_key, "abc");
    }

    #[test]
    fn test_validation_rejects_empty_access_key() {
        let config = ServerConfig {
            access_key: String::new(),
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
