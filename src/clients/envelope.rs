//! Response envelope unwrapping.
//!
//! The API may wrap a payload in an object under a top-level `data` key, or
//! return the payload directly. Two list endpoints nest one level further
//! (`data.datasets` and `data.logs`); that extra step is configured per
//! endpoint with [`Envelope::DataField`] rather than applied globally.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::errors::SchlepError;

/// Key of the optional outer wrapper object.
pub const DATA_KEY: &str = "data";

/// How to locate the payload inside a parsed response.
///
/// # Example
///
/// ```rust
/// use schlep_engine::clients::Envelope;
/// use serde_json::json;
///
/// let wrapped = json!({"data": {"job_id": "j1"}});
/// let bare = json!({"job_id": "j1"});
/// assert_eq!(Envelope::Data.payload(&wrapped), Envelope::Data.payload(&bare));
///
/// let nested = json!({"data": {"datasets": [{"name": "a"}]}});
/// assert_eq!(
///     Envelope::DataField("datasets").payload(&nested),
///     &json!([{"name": "a"}])
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Envelope {
    /// Use `data` when present, otherwise the whole value.
    Data,
    /// Resolve [`Envelope::Data`], then descend into the named key when present.
    DataField(&'static str),
}

impl Envelope {
    /// Returns the payload of `value` without copying or mutating it.
    #[must_use]
    pub fn payload<'v>(&self, value: &'v Value) -> &'v Value {
        let data = descend(value, DATA_KEY);
        match self {
            Self::Data => data,
            Self::DataField(key) => descend(data, key),
        }
    }

    /// Decodes the payload of `value` into `T`.
    ///
    /// Unknown fields are ignored and absent `Option` fields decode to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SchlepError::Json`] if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, value: &Value) -> Result<T, SchlepError> {
        Ok(T::deserialize(self.payload(value))?)
    }
}

fn descend<'v>(value: &'v Value, key: &str) -> &'v Value {
    value.get(key).unwrap_or(value)
}

/// Decodes `value` using the default `data` envelope.
///
/// # Errors
///
/// Returns [`SchlepError::Json`] if the payload does not match `T`.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, SchlepError> {
    Envelope::Data.decode(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Job {
        job_id: Option<String>,
        status: Option<String>,
        progress: Option<u8>,
    }

    #[test]
    fn test_decode_unwraps_data_key() {
        let value = json!({"data": {"job_id": "j1", "status": "done"}, "request_id": "r"});
        let job: Job = decode(&value).unwrap();
        assert_eq!(job.job_id.as_deref(), Some("j1"));
        assert_eq!(job.status.as_deref(), Some("done"));
    }

    #[test]
    fn test_decode_without_data_key_uses_whole_value() {
        let value = json!({"job_id": "u1", "status": "processing"});
        let job: Job = decode(&value).unwrap();
        assert_eq!(job.job_id.as_deref(), Some("u1"));
    }

    #[test]
    fn test_decode_ignores_unknown_and_missing_fields() {
        let value = json!({"job_id": "j2", "unexpected": {"nested": true}});
        let job: Job = decode(&value).unwrap();
        assert_eq!(
            job,
            Job {
                job_id: Some("j2".to_string()),
                status: None,
                progress: None,
            }
        );
    }

    #[test]
    fn test_data_field_descends_into_nested_key() {
        let value = json!({"data": {"datasets": [{"name": "a"}]}});
        let datasets: Vec<serde_json::Map<String, Value>> =
            Envelope::DataField("datasets").decode(&value).unwrap();
        assert_eq!(datasets.len(), 1);
        assert_eq!(datasets[0].get("name"), Some(&json!("a")));
    }

    #[test]
    fn test_data_field_falls_back_when_key_missing() {
        let value = json!({"data": ["line 1", "line 2"]});
        let logs: Vec<String> = Envelope::DataField("logs").decode(&value).unwrap();
        assert_eq!(logs, vec!["line 1", "line 2"]);

        let bare = json!({"logs": ["only"]});
        let logs: Vec<String> = Envelope::DataField("logs").decode(&bare).unwrap();
        assert_eq!(logs, vec!["only"]);
    }

    #[test]
    fn test_data_on_non_object_is_whole_value() {
        let value = json!([1, 2, 3]);
        assert_eq!(Envelope::Data.payload(&value), &value);
    }

    #[test]
    fn test_decode_type_mismatch_is_json_error() {
        let value = json!({"data": "not an object"});
        let result: Result<Job, _> = decode(&value);
        assert!(matches!(result, Err(SchlepError::Json(_))));
    }

    #[test]
    fn test_repeated_decode_is_idempotent() {
        let value = json!({"data": {"job_id": "j3", "progress": 50}});
        let snapshot = value.clone();

        let first: Job = decode(&value).unwrap();
        let second: Job = decode(&value).unwrap();

        assert_eq!(first, second);
        assert_eq!(value, snapshot);
    }
}
