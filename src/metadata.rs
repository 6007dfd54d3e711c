//! Collection and token metadata documents
//!
//! Field names and declaration order are part of the on-chain format: they
//! are what marketplaces read out of the embedded data URI.

use crate::util::encoding::{decode_json_data_uri, encode_json_data_uri, DataUriError};
use serde::{Deserialize, Serialize};

/// Contract-level metadata for a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    /// Artist website, empty when not provided
    pub external_link: String,
}

impl CollectionMetadata {
    pub fn to_data_uri(&self) -> Result<String, DataUriError> {
        encode_json_data_uri(self)
    }

    pub fn from_data_uri(uri: &str) -> Result<Self, DataUriError> {
        decode_json_data_uri(uri)
    }
}

/// Per-token metadata for a single artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl TokenMetadata {
    pub fn to_data_uri(&self) -> Result<String, DataUriError> {
        encode_json_data_uri(self)
    }

    pub fn from_data_uri(uri: &str) -> Result<Self, DataUriError> {
        decode_json_data_uri(uri)
    }
}
