//! Base64 (standard alphabet, padded) encoding for binary columns.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::ModelError;

pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&STANDARD.encode(bytes))
}

pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
    let encoded = String::deserialize(d)?;
    decode(&encoded).map_err(serde::de::Error::custom)
}

/// Decode a client-supplied payload. Accepts an optional `data:<mime>;base64,` prefix.
pub fn decode(encoded: &str) -> Result<Vec<u8>, ModelError> {
    let trimmed = encoded.trim();
    let payload = match trimmed.split_once(";base64,") {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => trimmed,
    };
    STANDARD
        .decode(payload)
        .map_err(|e| ModelError::Validation(format!("'blob' is not valid base64: {e}")))
}
