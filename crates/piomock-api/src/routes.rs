//! Router definitions for the two mock services

use crate::handlers::{
    create_batch_events, create_event, delete_event, execute_query, get_event, list_events,
    AppState,
};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Create the engine (query) service router
pub fn create_engine_router() -> Router {
    Router::new()
        .route("/queries.json", post(execute_query))
        .layer(TraceLayer::new_for_http())
}

/// Create the event service router
///
/// The fetch and delete routes use a whole-segment capture, so the original
/// `/events/<id>.json` paths match with the `.json` suffix riding along in
/// the captured ID; the stub handlers ignore it either way.
pub fn create_event_router(state: AppState) -> Router {
    Router::new()
        .route("/events.json", post(create_event).get(list_events))
        .route("/batch/events.json", post(create_batch_events))
        .route("/events/{event_id}", get(get_event).delete(delete_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
