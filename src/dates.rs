use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;

/// Parse one of the date shapes the upstream emits. Timestamps without an
/// offset and bare days are taken as UTC.
pub(crate) fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return Some(date.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(date.and_utc());
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(date.and_utc());
    }
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_hms_opt(0, 0, 0).map(|date| date.and_utc());
    }
    None
}

/// serde adapter for optional-and-nullable date fields: absent (with
/// `#[serde(default)]`) and `null` become `None`, a string must match one
/// of the accepted formats.
pub(crate) fn optional<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => match parse(&raw) {
            Some(date) => Ok(Some(date)),
            None => Err(D::Error::custom(format!("unrecognized date: {raw:?}"))),
        },
    }
}
