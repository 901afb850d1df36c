//! Decoding of the docker-credentials API response.
//!
//! The API answers with the same shape as a docker `config.json` auths
//! section: a map from registry hostname to a base64-encoded
//! `user:pass` blob.

use std::collections::HashMap;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use crate::error::{CredentialError, Result};

/// Wire response: `{"auths": {"<registry>": {"auth": "<base64>"}}}`.
///
/// A missing `auths` key is treated as an empty map rather than a
/// malformed response, matching what the API is allowed to send.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct CredentialBundle {
    #[serde(default)]
    pub auths: HashMap<String, RegistryAuth>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RegistryAuth {
    #[serde(default)]
    pub auth: String,
}

/// The username/password pair extracted from an auth blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryCredential {
    pub username: String,
    pub password: String,
}

/// Parse the response body and extract the credential for `registry_host`.
pub fn decode_credentials(raw: &[u8], registry_host: &str) -> Result<RegistryCredential> {
    let bundle: CredentialBundle = serde_json::from_slice(raw)?;

    let entry = bundle
        .auths
        .get(registry_host)
        .filter(|entry| !entry.auth.is_empty())
        .ok_or_else(|| CredentialError::NoCredentialsForRegistry(registry_host.to_string()))?;

    let blob = decode_auth_blob(&entry.auth)?;
    split_credential(&blob, registry_host)
}

/// Base64-decode the wire representation of an auth blob to raw bytes.
fn decode_auth_blob(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded)
        .map_err(|e| CredentialError::MalformedResponse(format!("invalid base64 auth blob: {}", e)))
}

/// Split a decoded `user:pass` blob at its first colon.
///
/// Everything after the first colon belongs to the password, including
/// further colons and any trailing newline. Nothing is trimmed.
fn split_credential(blob: &[u8], registry_host: &str) -> Result<RegistryCredential> {
    let colon = blob
        .iter()
        .position(|&b| b == b':')
        .ok_or_else(|| CredentialError::InvalidCredentialFormat(registry_host.to_string()))?;

    let as_utf8 = |bytes: &[u8]| {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|_| CredentialError::InvalidCredentialFormat(registry_host.to_string()))
    };

    Ok(RegistryCredential {
        username: as_utf8(&blob[..colon])?,
        password: as_utf8(&blob[colon + 1..])?,
    })
}
