//! # piomock-server
//!
//! Binary crate for the PredictionIO mock servers.
//!
//! Wires configuration (TOML file, environment, CLI flags) and logging
//! around [`piomock_api::MockServer`], which runs the engine (query) server
//! and the event server on their configured ports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use piomock_api::MockServer;
//! use piomock_server::config::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> piomock_server::Result<()> {
//!     let config = ServerConfig::default();
//!     config.validate()?;
//!     let server = MockServer::new(config.as_mock_config())?;
//!     server.serve().await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cli::{Args, Commands};
pub use config::ServerConfig;
pub use error::{ConfigError, Result, ServerError};
