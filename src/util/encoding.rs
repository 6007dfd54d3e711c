//! Embedded-data URI encoding
//!
//! Token and collection metadata is stored on-chain as a self-contained
//! `data:` URI instead of a pointer to an external JSON file:
//!
//! ```text
//! data:application/json;base64,<base64(compact JSON)>
//! ```
//!
//! Metadata viewers decode this byte-for-byte, so the JSON is compact, keeps
//! the field order of the serialized type and uses the standard base64
//! alphabet with padding.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Prefix of every JSON data URI produced by this crate
pub const JSON_DATA_URI_PREFIX: &str = "data:application/json;base64,";

#[derive(Debug, Error)]
pub enum DataUriError {
    #[error("Not a base64 JSON data URI")]
    MissingPrefix,
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `value` to compact JSON and wrap it in a base64 data URI.
pub fn encode_json_data_uri<T: Serialize>(value: &T) -> Result<String, DataUriError> {
    let json = serde_json::to_vec(value)?;
    Ok(format!("{}{}", JSON_DATA_URI_PREFIX, STANDARD.encode(json)))
}

/// Decode the raw JSON text carried by a data URI.
pub fn decode_json_data_uri_text(uri: &str) -> Result<String, DataUriError> {
    let payload = uri
        .strip_prefix(JSON_DATA_URI_PREFIX)
        .ok_or(DataUriError::MissingPrefix)?;
    let bytes = STANDARD.decode(payload.trim())?;
    serde_json::from_slice::<serde_json::Value>(&bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Decode a data URI back into a typed value.
pub fn decode_json_data_uri<T: DeserializeOwned>(uri: &str) -> Result<T, DataUriError> {
    let payload = uri
        .strip_prefix(JSON_DATA_URI_PREFIX)
        .ok_or(DataUriError::MissingPrefix)?;
    let bytes = STANDARD.decode(payload.trim())?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Sample {
        name: String,
        image: String,
    }

    #[test]
    fn test_encode_is_compact_and_ordered() {
        let sample = Sample {
            name: "X".to_string(),
            image: "I".to_string(),
        };
        let uri = encode_json_data_uri(&sample).unwrap();
        // base64 of {"name":"X","image":"I"}
        assert_eq!(
            uri,
            "data:application/json;base64,eyJuYW1lIjoiWCIsImltYWdlIjoiSSJ9"
        );
    }

    #[test]
    fn test_decode_text() {
        let uri = "data:application/json;base64,eyJuYW1lIjoiWCIsImltYWdlIjoiSSJ9";
        assert_eq!(
            decode_json_data_uri_text(uri).unwrap(),
            r#"{"name":"X","image":"I"}"#
        );
        let decoded: Sample = decode_json_data_uri(uri).unwrap();
        assert_eq!(decoded.name, "X");
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        let sample = Sample {
            name: "Été ☀".to_string(),
            image: "https://example.com/a.png".to_string(),
        };
        let uri = encode_json_data_uri(&sample).unwrap();
        let decoded: Sample = decode_json_data_uri(&uri).unwrap();
        assert_eq!(decoded, sample);
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            decode_json_data_uri_text("https://example.com/meta.json"),
            Err(DataUriError::MissingPrefix)
        ));
        assert!(matches!(
            decode_json_data_uri_text("data:application/json;base64,@@@"),
            Err(DataUriError::Base64(_))
        ));
        // base64 of "not json"
        assert!(matches!(
            decode_json_data_uri_text("data:application/json;base64,bm90IGpzb24="),
            Err(DataUriError::Json(_))
        ));
    }
}
