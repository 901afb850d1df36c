//! One-shot execution of the credentials request over an injected client.

use reqwest::{Client, Request, StatusCode};

use crate::error::{CredentialError, Result};

/// Executes a single credentials request and validates the response status.
///
/// Wraps a [`reqwest::Client`] supplied at construction time so tests and
/// callers can substitute their own transport; `Client` is cheaply
/// cloneable and safe for concurrent use. No retries and no timeout beyond
/// what the client itself is configured with.
#[derive(Debug, Clone)]
pub struct ExchangeClient {
    client: Client,
}

impl ExchangeClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Send the request and return the raw response body.
    ///
    /// Any status other than 200 is fatal; the body of an error response
    /// is not inspected for structured detail.
    pub async fn execute(&self, request: Request) -> Result<Vec<u8>> {
        let response = self
            .client
            .execute(request)
            .await
            .map_err(CredentialError::Network)?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(status = %status, "credentials request rejected");
            return Err(CredentialError::UnexpectedStatus(status.to_string()));
        }

        let body = response.bytes().await.map_err(CredentialError::Network)?;
        Ok(body.to_vec())
    }
}

impl Default for ExchangeClient {
    fn default() -> Self {
        Self::new(Client::new())
    }
}
