//! Request and event validation rules

use crate::error::{Result, ValidationError};
use crate::event::EventRecord;
use crate::timestamp::verify_event_time;
use serde_json::Value;
use tracing::debug;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Verify request-level preconditions.
///
/// Runs exactly once per request no matter how many events the body carries:
/// the declared content type must be JSON and the presented access key must
/// match the configured one exactly. Checked in that order.
pub fn verify_request(
    content_type: Option<&str>,
    access_key: Option<&str>,
    expected_key: &str,
) -> Result<()> {
    if !content_type.is_some_and(is_json_content_type) {
        debug!(content_type = ?content_type, "event request is not of JSON type");
        return Err(ValidationError::UnsupportedMediaType);
    }

    if access_key != Some(expected_key) {
        debug!("access key does not match");
        return Err(ValidationError::Unauthorized);
    }

    Ok(())
}

/// Whether a Content-Type header value declares JSON, ignoring parameters
/// such as `charset`.
pub fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|essence| essence.eq_ignore_ascii_case(JSON_CONTENT_TYPE))
}

/// Validate one event payload, producing the typed record on success.
///
/// Shape first, then semantic rules, then the optional timestamp; the first
/// failing check wins. Later checks dereference fields whose presence the
/// shape check already confirmed.
pub fn validate_event(value: &Value) -> Result<EventRecord> {
    let record = EventRecord::from_value(value)?;

    validate_semantics(&record)?;

    if let Some(event_time) = &record.event_time {
        verify_event_time(event_time)?;
    }

    Ok(record)
}

/// Enforce the business rules beyond field shape.
fn validate_semantics(record: &EventRecord) -> Result<()> {
    if record.has_reserved_prefix() && !record.is_reserved_name() {
        debug!(event = %record.event, "event name shouldn't start with $");
        return Err(ValidationError::reserved_name(&record.event));
    }

    if record.event == "$unset" {
        let names_anything = record
            .properties
            .as_ref()
            .is_some_and(|properties| !properties.is_empty());
        if !names_anything {
            debug!("unset event's properties cannot be empty");
            return Err(ValidationError::EmptyUnsetProperties);
        }
    }

    Ok(())
}

/// Validate a sequence of event payloads independently.
///
/// Verdict `i` corresponds strictly to input `i`; one event's failure never
/// aborts processing of its siblings.
pub fn validate_batch(values: &[Value]) -> Vec<Result<EventRecord>> {
    values.iter().map(validate_event).collect()
}
