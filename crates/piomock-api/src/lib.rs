//! # piomock-api
//!
//! HTTP layer for the PredictionIO mock servers.
//!
//! This crate exposes the two services as axum routers and the `MockServer`
//! that drives both: an engine (query) server answering `POST /queries.json`
//! with a fixed item list, and an event server that validates inbound event
//! records with [`piomock_core`] before responding with canned bodies. Read
//! and delete endpoints return fixed literals; nothing is stored.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use piomock_api::{MockConfig, MockServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = MockServer::new(MockConfig::default())?;
//!     server.serve().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod routes;
pub mod server;

// Re-export public API
pub use config::MockConfig;
pub use error::{ApiError, Result};
pub use routes::{create_engine_router, create_event_router};
pub use server::MockServer;
