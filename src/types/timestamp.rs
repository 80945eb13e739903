//! Lenient timestamp decoding.
//!
//! The API reports times either as RFC 3339 strings or as milliseconds since
//! the Unix epoch. Both decode to `DateTime<Utc>`; serialization stays RFC 3339.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(DateTime<Utc>),
    EpochMillis(i64),
}

/// Deserializes an optional timestamp from RFC 3339 text or epoch milliseconds.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<WireTimestamp>::deserialize(deserializer)? {
        None => Ok(None),
        Some(WireTimestamp::Text(time)) => Ok(Some(time)),
        Some(WireTimestamp::EpochMillis(millis)) => DateTime::from_timestamp_millis(millis)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "super::deserialize")]
        at: Option<DateTime<Utc>>,
    }

    fn parse(value: serde_json::Value) -> Result<Option<DateTime<Utc>>, serde_json::Error> {
        serde_json::from_value::<Stamped>(value).map(|s| s.at)
    }

    #[test]
    fn test_rfc3339_and_epoch_millis_agree() {
        let text = parse(json!({"at": "2024-01-15T10:30:00Z"})).unwrap();
        let millis = parse(json!({"at": 1_705_314_600_000_i64})).unwrap();
        assert!(text.is_some());
        assert_eq!(text, millis);
    }

    #[test]
    fn test_null_and_missing_are_none() {
        assert_eq!(parse(json!({"at": null})).unwrap(), None);
        assert_eq!(parse(json!({})).unwrap(), None);
    }

    #[test]
    fn test_unparseable_text_is_rejected() {
        assert!(parse(json!({"at": "yesterday"})).is_err());
    }
}
