//! Canned response bodies
//!
//! Everything the read-side endpoints return is a fixed literal; field names
//! and values are part of the wire contract and must not drift.

use serde_json::{json, Value};

/// Placeholder event ID returned on single-event acceptance.
/// Generated-looking, but constant.
pub const PLACEHOLDER_EVENT_ID: &str = "DzyxzpzxAlRNdiDxyChMHgAAAUvpc5HbsI8ZBhEjsvw";

/// Placeholder event ID returned per accepted batch slot
pub const BATCH_EVENT_ID: &str = "fakeID";

/// Rejection message used per failed batch slot
pub const BATCH_INVALID_MESSAGE: &str = "Invalid event";

/// Fixed item list returned by the query endpoint
pub fn query_result() -> Value {
    json!({ "items": ["foo", "bar"] })
}

/// Fixed record returned by the single-event fetch stub. The requested
/// event ID is ignored; there is no real lookup.
pub fn stub_event() -> Value {
    json!({
        "event": "register",
        "entityType": "user",
        "entityId": "foo",
        "eventId": "fake1",
        "eventTime": "2004-12-13T21:39:45.618Z",
    })
}

/// Fixed two-record list returned by the list-events stub
pub fn stub_event_list() -> Value {
    json!([
        {
            "event": "id1",
            "entityType": "random",
            "entityId": "random1",
            "eventId": "fake1",
            "eventTime": "2004-12-13T21:39:45.618Z",
        },
        {
            "event": "id2",
            "entityType": "random",
            "entityId": "random2",
            "eventId": "fake2",
            "eventTime": "2004-12-13T21:39:45.618Z",
        }
    ])
}
