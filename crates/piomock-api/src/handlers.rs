//! HTTP handlers for both mock services

use crate::{config::MockConfig, error::Result, fixtures};
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use piomock_core::{
    is_json_content_type, validate_batch, validate_event, verify_request, ValidationError,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<MockConfig>,
}

impl AppState {
    /// Create state from a configuration
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Query parameters carried by ingestion requests
#[derive(Debug, Deserialize)]
pub struct IngestParams {
    #[serde(rename = "accessKey")]
    pub access_key: Option<String>,
}

fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::CONTENT_TYPE)?.to_str().ok()
}

/// Engine query endpoint. Returns the fixed item list when the request is
/// declared as JSON; the body itself is never inspected.
pub async fn execute_query(headers: HeaderMap) -> Result<Json<Value>> {
    if !content_type(&headers).is_some_and(is_json_content_type) {
        return Err(ValidationError::UnsupportedMediaType.into());
    }

    info!("returning canned query result");
    Ok(Json(fixtures::query_result()))
}

/// Ingest a single event
pub async fn create_event(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>)> {
    verify_request(
        content_type(&headers),
        params.access_key.as_deref(),
        &state.config.access_key,
    )?;

    let payload: Value = serde_json::from_slice(&body)?;
    let record = validate_event(&payload)?;

    info!(event = %record.event, "accepted event");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "eventId": fixtures::PLACEHOLDER_EVENT_ID })),
    ))
}

/// Ingest a batch of events. Request-level preconditions run once; each
/// event in the body gets its own verdict slot, in input order.
pub async fn create_batch_events(
    State(state): State<AppState>,
    Query(params): Query<IngestParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>)> {
    verify_request(
        content_type(&headers),
        params.access_key.as_deref(),
        &state.config.access_key,
    )?;

    let payload: Vec<Value> = serde_json::from_slice(&body)?;
    let results: Vec<Value> = validate_batch(&payload)
        .into_iter()
        .map(|verdict| match verdict {
            Ok(record) => {
                debug!(event = %record.event, "accepted batch event");
                json!({ "status": 201, "eventId": fixtures::BATCH_EVENT_ID })
            }
            Err(error) => {
                debug!(%error, "rejected batch event");
                json!({ "status": 400, "message": fixtures::BATCH_INVALID_MESSAGE })
            }
        })
        .collect();

    info!(count = results.len(), "processed event batch");
    Ok((StatusCode::OK, Json(Value::Array(results))))
}

/// Fetch-one stub; the requested ID is logged and ignored
pub async fn get_event(Path(event_id): Path<String>) -> Json<Value> {
    let event_id = event_id.strip_suffix(".json").unwrap_or(&event_id);
    info!(event_id = %event_id, "returning stub event");
    Json(fixtures::stub_event())
}

/// List stub. Responds 201 to a GET; the upstream server does the same and
/// clients may depend on it, so the quirk is preserved.
pub async fn list_events() -> (StatusCode, Json<Value>) {
    info!("returning stub event list");
    (StatusCode::CREATED, Json(fixtures::stub_event_list()))
}

/// Delete stub; nothing is deleted
pub async fn delete_event(Path(event_id): Path<String>) -> Json<Value> {
    let event_id = event_id.strip_suffix(".json").unwrap_or(&event_id);
    info!(event_id = %event_id, "pretending to delete event");
    Json(json!({}))
}
