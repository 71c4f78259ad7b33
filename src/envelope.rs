//! Response envelope shared by every endpoint

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `{ data, message, message_code }` as returned on success
///
/// `data` is passed through exactly as received; use [`Envelope::decode_data`]
/// to project it onto one of the entity types.
///
/// The body itself must be a JSON object with string (or null) `message` fields. A 2xx
/// body that is a bare array or string is a `Serialization` error, not passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub data: T,
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub message_code: String,
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Envelope<Value> {
    /// `data.token` when it is a non-empty string
    pub fn token(&self) -> Option<&str> {
        self.data
            .get("token")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty())
    }

    /// Re-read `data` as a typed value
    pub fn decode_data<U: DeserializeOwned>(&self) -> Result<U> {
        Ok(U::deserialize(&self.data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_passes_data_through() {
        let body = json!({
            "data": {"token": "abc.def.ghi", "extra": [1, 2]},
            "message": "ok",
            "message_code": "OK"
        });

        let envelope: Envelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.token(), Some("abc.def.ghi"));
        assert_eq!(envelope.data["extra"], json!([1, 2]));
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.message_code, "OK");
    }

    #[test]
    fn test_envelope_tolerates_missing_fields() {
        let envelope: Envelope =
            serde_json::from_value(json!({"message": null, "message_code": null})).unwrap();
        assert_eq!(envelope.data, Value::Null);
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.message_code, "");
        assert_eq!(envelope.token(), None);
    }

    #[test]
    fn test_token_requires_non_empty_string() {
        for data in [json!({"token": ""}), json!({"token": 42}), json!([]), json!("token")] {
            let envelope = Envelope {
                data,
                message: String::new(),
                message_code: String::new(),
            };
            assert_eq!(envelope.token(), None);
        }
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        assert!(serde_json::from_value::<Envelope>(json!(["a"])).is_err());
        assert!(serde_json::from_value::<Envelope>(json!("ok")).is_err());
        assert!(serde_json::from_value::<Envelope>(json!({"message": 1})).is_err());
    }

    #[test]
    fn test_decode_data() {
        let envelope: Envelope =
            serde_json::from_value(json!({"data": ["a", "b"], "message": "", "message_code": ""}))
                .unwrap();
        let items: Vec<String> = envelope.decode_data().unwrap();
        assert_eq!(items, ["a", "b"]);

        assert!(envelope.decode_data::<u32>().is_err());
    }
}
