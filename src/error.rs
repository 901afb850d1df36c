//! Error handling module for the DigitalOcean credential helper

use thiserror::Error;

/// Errors produced while exchanging an API token for registry credentials.
///
/// Every variant is terminal: nothing is retried internally and no partial
/// credentials accompany an error. Messages carry enough context for the
/// caller to log the cause, but never the token or the decoded credential
/// values.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The requested registry hostname is not the DigitalOcean registry.
    #[error("not a DigitalOcean registry: {0}")]
    UnsupportedRegistry(String),
    /// The server address or request headers could not be assembled.
    #[error("failed to build credentials request: {0}")]
    RequestConstruction(String),
    /// The request could not be sent or the connection failed.
    #[error("failed to get credentials from API: {0}")]
    Network(#[source] reqwest::Error),
    /// The API answered with a status other than 200.
    #[error("failed to get credentials from API: {0}")]
    UnexpectedStatus(String),
    /// The response body was not the expected JSON/base64 wire shape.
    #[error("failed to decode credentials response: {0}")]
    MalformedResponse(String),
    /// The response had no (or an empty) auth entry for the registry.
    #[error("no credentials for registry {0:?}")]
    NoCredentialsForRegistry(String),
    /// The decoded auth blob is not a `user:pass` pair.
    #[error("invalid credentials for registry {0:?}")]
    InvalidCredentialFormat(String),
}

impl From<reqwest::Error> for CredentialError {
    fn from(err: reqwest::Error) -> Self {
        CredentialError::Network(err)
    }
}

impl From<serde_json::Error> for CredentialError {
    fn from(err: serde_json::Error) -> Self {
        CredentialError::MalformedResponse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CredentialError>;
