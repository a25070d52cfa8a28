//! Configuration for the mock servers

use serde::{Deserialize, Serialize};

/// Mock server configuration
///
/// Passed into each service at construction time; there is no ambient
/// global configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    /// Bind address for both servers
    pub bind_address: String,

    /// Engine (query) server port
    pub engine_port: u16,

    /// Event server port
    pub event_port: u16,

    /// Shared access key checked against the `accessKey` query parameter
    /// on every ingestion request
    pub access_key: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            engine_port: 8000,
            event_port: 7070,
            access_key: "123".to_string(),
        }
    }
}

impl MockConfig {
    /// Get the full engine server address
    pub fn engine_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.engine_port)
    }

    /// Get the full event server address
    pub fn event_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.event_port)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.engine_port == 0 {
            return Err("Engine port cannot be 0".to_string());
        }

        if self.event_port == 0 {
            return Err("Event port cannot be 0".to_string());
        }

        if self.engine_port == self.event_port {
            return Err("Engine and event ports must differ".to_string());
        }

        if self.access_key.is_empty() {
            return Err("Access key cannot be empty".to_string());
        }

        Ok(())
    }
}
