//! Ready-made date hooks for [`Deserializer::with_date_decoder`] and
//! [`Serializer::with_date_encoder`].
//!
//! ```
//! use jb_json::{Deserializer, Serializer, date};
//!
//! let de = Deserializer::new().with_date_decoder(date::from_unix_timestamp);
//! let ser = Serializer::new().with_date_encoder(date::to_unix_timestamp);
//! ```
//!
//! [`Deserializer::with_date_decoder`]: crate::Deserializer::with_date_decoder
//! [`Serializer::with_date_encoder`]: crate::Serializer::with_date_encoder

use chrono::{DateTime, SecondsFormat, Utc};
use jb_reflect::value::{Date, JsonValue};

/// Reads seconds since the Unix epoch. Fractional seconds are kept to the
/// millisecond; numeric strings are accepted.
pub fn from_unix_timestamp(value: &JsonValue) -> Option<Date> {
    let seconds = match value {
        JsonValue::Number(number) => {
            if let Some(seconds) = number.as_i64() {
                return DateTime::from_timestamp(seconds, 0);
            }
            number.as_f64()?
        }
        JsonValue::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

/// Writes whole seconds since the Unix epoch.
pub fn to_unix_timestamp(date: &Date) -> Option<JsonValue> {
    Some(JsonValue::from(date.timestamp()))
}

/// Reads an RFC 3339 string, converting its offset to UTC.
pub fn from_rfc3339(value: &JsonValue) -> Option<Date> {
    let text = value.as_str()?;
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|date| date.with_timezone(&Utc))
}

/// Writes an RFC 3339 string with a `Z` suffix and as many fractional
/// digits as needed.
pub fn to_rfc3339(date: &Date) -> Option<JsonValue> {
    Some(JsonValue::String(
        date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unix_timestamps() {
        let date = from_unix_timestamp(&json!(86_400)).unwrap();
        assert_eq!(date.to_rfc3339(), "1970-01-02T00:00:00+00:00");
        assert_eq!(to_unix_timestamp(&date), Some(json!(86_400)));

        let date = from_unix_timestamp(&json!("1.5")).unwrap();
        assert_eq!(date.timestamp_millis(), 1_500);

        assert_eq!(from_unix_timestamp(&json!(null)), None);
        assert_eq!(from_unix_timestamp(&json!("soon")), None);
    }

    #[test]
    fn rfc3339() {
        let date = from_rfc3339(&json!("2024-02-29T12:00:00+02:00")).unwrap();
        assert_eq!(to_rfc3339(&date), Some(json!("2024-02-29T10:00:00Z")));
        assert_eq!(from_rfc3339(&json!(1)), None);
    }
}
