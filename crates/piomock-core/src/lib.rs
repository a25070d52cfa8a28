//! # piomock-core
//!
//! Validation engine for the PredictionIO mock servers.
//!
//! This crate is the pure, I/O-free half of the mock: it decides whether an
//! inbound event payload is well-formed before the HTTP layer responds with
//! success or failure. Nothing here touches the network or the clock; every
//! check is a deterministic function of its inputs.
//!
//! ## Key Components
//!
//! - **EventRecord**: the typed event submitted to the ingestion service
//! - **ValidationError**: the rejection taxonomy (diagnostics only; the wire
//!   surfaces every kind identically)
//! - **Validation**: request preconditions, field-shape, semantic and
//!   timestamp rules, plus batch orchestration

pub mod error;
pub mod event;
pub mod timestamp;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, ValidationError};
pub use event::{
    EventRecord, ALL_EVENT_FIELDS, OPTIONAL_EVENT_FIELDS, REQUIRED_EVENT_FIELDS,
    RESERVED_EVENT_NAMES,
};
pub use timestamp::verify_event_time;
pub use validation::{is_json_content_type, validate_batch, validate_event, verify_request};

/// Common type alias for convenience
pub type Json = serde_json::Value;
