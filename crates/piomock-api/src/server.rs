//! Mock server implementation

use crate::{
    config::MockConfig,
    error::{ApiError, Result},
    handlers::AppState,
    routes::{create_engine_router, create_event_router},
};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

/// The pair of mock servers: engine (query) and event ingestion
pub struct MockServer {
    config: MockConfig,
    engine_app: Router,
    event_app: Router,
}

impl MockServer {
    /// Create a new mock server pair from a configuration
    pub fn new(config: MockConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Config validation failed: {e}")))?;

        info!(
            engine_address = %config.engine_address(),
            event_address = %config.event_address(),
            "Initializing mock servers"
        );

        let engine_app = create_engine_router();
        let event_app = create_event_router(AppState::new(config.clone()));

        Ok(Self {
            config,
            engine_app,
            event_app,
        })
    }

    /// Bind both listeners and serve until one of them fails
    pub async fn serve(self) -> Result<()> {
        let engine_listener = Self::bind(&self.config.engine_address()).await?;
        let event_listener = Self::bind(&self.config.event_address()).await?;

        info!(
            engine_address = %self.config.engine_address(),
            event_address = %self.config.event_address(),
            "Mock servers listening"
        );

        tokio::try_join!(
            Self::run(engine_listener, self.engine_app, "engine"),
            Self::run(event_listener, self.event_app, "event"),
        )?;

        Ok(())
    }

    async fn bind(addr: &str) -> Result<TcpListener> {
        let socket_addr: SocketAddr = addr
            .parse()
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Invalid address '{addr}': {e}")))?;

        TcpListener::bind(&socket_addr)
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("Failed to bind to {socket_addr}: {e}")))
    }

    async fn run(listener: TcpListener, app: Router, name: &'static str) -> Result<()> {
        axum::serve(listener, app)
            .await
            .map_err(|e| ApiError::Internal(anyhow::anyhow!("{name} server error: {e}")))
    }

    /// Get server configuration
    pub fn config(&self) -> &MockConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MockConfig {
            access_key: String::new(),
            ..Default::default()
        };

        assert!(MockServer::new(config).is_err());
    }

    #[test]
    fn test_new_keeps_config() {
        let config = MockConfig {
            access_key: "secret".to_string(),
            ..Default::default()
        };

        let server = MockServer::new(config).unwrap();
        assert_eq!(server.config().access_key, "secret");
    }
}
