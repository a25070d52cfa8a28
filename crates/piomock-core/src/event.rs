//! The event record submitted to the ingestion service

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields every event record must carry
pub const REQUIRED_EVENT_FIELDS: [&str; 3] = ["event", "entityType", "entityId"];

/// Fields an event record may carry
pub const OPTIONAL_EVENT_FIELDS: [&str; 4] = [
    "targetEntityType",
    "targetEntityId",
    "properties",
    "eventTime",
];

/// The full allowed field set (required plus optional)
pub const ALL_EVENT_FIELDS: [&str; 7] = [
    "event",
    "entityType",
    "entityId",
    "targetEntityType",
    "targetEntityId",
    "properties",
    "eventTime",
];

/// Event names starting with `$` that the server supports
pub const RESERVED_EVENT_NAMES: [&str; 3] = ["$set", "$unset", "$delete"];

/// A single event record
///
/// The record exists only for the duration of one validation call; the mock
/// never persists it. `event_time` is kept as the raw wire string and
/// validated separately rather than normalized into a datetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Event name; `$`-prefixed names are reserved
    pub event: String,
    /// Type of the entity the event is about
    pub entity_type: String,
    /// Identifier of the entity the event is about
    pub entity_id: String,
    /// Type of the target entity, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_entity_type: Option<String>,
    /// Identifier of the target entity, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_entity_id: Option<String>,
    /// Free-form event properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    /// Raw event timestamp string, validated but not normalized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,
}

impl EventRecord {
    /// Build a record from a raw JSON value, performing shape validation.
    ///
    /// The key set of the input must be a superset of the required fields
    /// and a subset of the full allowed field set. Which missing or
    /// unexpected field gets named in the diagnostic depends on iteration
    /// order; the verdict does not.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::invalid_field("event record", "a JSON object"))?;

        for required in REQUIRED_EVENT_FIELDS {
            if !object.contains_key(required) {
                return Err(ValidationError::missing_field(required));
            }
        }

        for field in object.keys() {
            if !ALL_EVENT_FIELDS.contains(&field.as_str()) {
                return Err(ValidationError::unexpected_field(field));
            }
        }

        let event = required_string(object, "event")?;
        if event.is_empty() {
            return Err(ValidationError::invalid_field(
                "event",
                "a non-empty string",
            ));
        }

        Ok(Self {
            event,
            entity_type: required_string(object, "entityType")?,
            entity_id: required_string(object, "entityId")?,
            target_entity_type: optional_string(object, "targetEntityType")?,
            target_entity_id: optional_string(object, "targetEntityId")?,
            properties: optional_map(object, "properties")?,
            event_time: optional_string(object, "eventTime")?,
        })
    }

    /// Whether the event name carries the reserved `$` prefix
    pub fn has_reserved_prefix(&self) -> bool {
        self.event.starts_with('$')
    }

    /// Whether the event name is on the reserved allow-list
    pub fn is_reserved_name(&self) -> bool {
        RESERVED_EVENT_NAMES.contains(&self.event.as_str())
    }
}

fn required_string(object: &Map<String, Value>, field: &'static str) -> Result<String> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::invalid_field(field, "a string")),
        None => Err(ValidationError::missing_field(field)),
    }
}

fn optional_string(object: &Map<String, Value>, field: &'static str) -> Result<Option<String>> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::invalid_field(field, "a string")),
        None => Ok(None),
    }
}

fn optional_map(
    object: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Map<String, Value>>> {
    match object.get(field) {
        Some(Value::Object(map)) => Ok(Some(map.clone())),
        Some(_) => Err(ValidationError::invalid_field(field, "a JSON object")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_value_minimal_record() {
        let value = json!({
            "event": "register",
            "entityType": "user",
            "entityId": "foo",
        });

        let record = EventRecord::from_value(&value).unwrap();

        assert_eq!(record.event, "register");
        assert_eq!(record.entity_type, "user");
        assert_eq!(record.entity_id, "foo");
        assert_eq!(record.target_entity_type, None);
        assert_eq!(record.properties, None);
        assert_eq!(record.event_time, None);
    }

    #[test]
    fn test_from_value_full_record() {
        let value = json!({
            "event": "rate",
            "entityType": "user",
            "entityId": "u1",
            "targetEntityType": "item",
            "targetEntityId": "i1",
            "properties": {"rating": 5},
            "eventTime": "2015-01-02T00:00:00.000Z",
        });

        let record = EventRecord::from_value(&value).unwrap();

        assert_eq!(record.target_entity_type.as_deref(), Some("item"));
        assert_eq!(record.target_entity_id.as_deref(), Some("i1"));
        assert_eq!(record.properties.unwrap()["rating"], json!(5));
        assert_eq!(
            record.event_time.as_deref(),
            Some("2015-01-02T00:00:00.000Z")
        );
    }

    #[test]
    fn test_from_value_missing_required_field() {
        for missing in REQUIRED_EVENT_FIELDS {
            let mut object = json!({
                "event": "register",
                "entityType": "user",
                "entityId": "foo",
            });
            object.as_object_mut().unwrap().remove(missing);

            let actual = EventRecord::from_value(&object).unwrap_err();
            assert_eq!(actual, ValidationError::missing_field(missing));
        }
    }

    #[test]
    fn test_from_value_unexpected_field() {
        let value = json!({
            "event": "register",
            "entityType": "user",
            "entityId": "foo",
            "bogus": true,
        });

        let actual = EventRecord::from_value(&value).unwrap_err();
        assert_eq!(actual, ValidationError::unexpected_field("bogus"));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        assert!(EventRecord::from_value(&json!("register")).is_err());
        assert!(EventRecord::from_value(&json!([1, 2, 3])).is_err());
        assert!(EventRecord::from_value(&json!(null)).is_err());
    }

    #[test]
    fn test_from_value_rejects_empty_event_name() {
        let value = json!({
            "event": "",
            "entityType": "user",
            "entityId": "foo",
        });

        let actual = EventRecord::from_value(&value).unwrap_err();
        assert_eq!(
            actual,
            ValidationError::invalid_field("event", "a non-empty string")
        );
    }

    #[test]
    fn test_from_value_rejects_non_string_required_field() {
        let value = json!({
            "event": "register",
            "entityType": "user",
            "entityId": 42,
        });

        let actual = EventRecord::from_value(&value).unwrap_err();
        assert_eq!(actual, ValidationError::invalid_field("entityId", "a string"));
    }

    #[test]
    fn test_from_value_rejects_non_object_properties() {
        let value = json!({
            "event": "$set",
            "entityType": "user",
            "entityId": "foo",
            "properties": [1, 2],
        });

        let actual = EventRecord::from_value(&value).unwrap_err();
        assert_eq!(
            actual,
            ValidationError::invalid_field("properties", "a JSON object")
        );
    }

    #[test]
    fn test_reserved_name_helpers() {
        let value = json!({
            "event": "$set",
            "entityType": "user",
            "entityId": "foo",
        });
        let record = EventRecord::from_value(&value).unwrap();

        assert!(record.has_reserved_prefix());
        assert!(record.is_reserved_name());
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let value = json!({
            "event": "rate",
            "entityType": "user",
            "entityId": "u1",
            "targetEntityId": "i1",
        });

        let record: EventRecord = serde_json::from_value(value.clone()).unwrap();
        let serialized = serde_json::to_value(&record).unwrap();

        assert_eq!(serialized, value);
    }
}
