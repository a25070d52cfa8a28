//! Event timestamp validation

use crate::error::{Result, ValidationError};
use chrono::DateTime;

/// Maximum timezone offset magnitude, in minutes. Offsets of a full day or
/// more are non-physical and rejected even if a lenient parser accepts them.
const MAX_OFFSET_MINUTES: i32 = 1440;

/// Validate an `eventTime` string.
///
/// Only fully-qualified timestamps are accepted: calendar date, time of day
/// and an explicit timezone offset, with fractional seconds optional. The
/// two canonical shapes are `2015-01-02T00:00:00Z` and
/// `2015-01-02T00:00:00.000Z` with `Z` standing for any syntactic offset.
/// Date-only strings and zone-less datetimes fail, as do offsets whose
/// magnitude reaches a full day.
pub fn verify_event_time(value: &str) -> Result<()> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .map_err(|_| ValidationError::invalid_timestamp(value))?;

    let offset_minutes = parsed.offset().local_minus_utc() / 60;
    if offset_minutes.abs() >= MAX_OFFSET_MINUTES {
        return Err(ValidationError::invalid_timestamp(value));
    }

    Ok(())
}
