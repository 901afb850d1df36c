//! The credential helper façade.

use reqwest::Client;
use url::Url;

use crate::config::HelperConfig;
use crate::error::Result;
use crate::registry::credentials::{RegistryCredential, decode_credentials};
use crate::registry::exchange::ExchangeClient;
use crate::registry::request::{DO_API_ENDPOINT, build_credential_request};

/// Exchanges a DigitalOcean API token for short-lived registry
/// credentials.
///
/// One instance holds the immutable [`HelperConfig`], the account API
/// endpoint, and the HTTP client; [`get`](Self::get) calls are otherwise
/// stateless and safe to run concurrently.
#[derive(Debug)]
pub struct DigitalOceanCredentialHelper {
    config: HelperConfig,
    api_endpoint: Url,
    exchange: ExchangeClient,
}

impl DigitalOceanCredentialHelper {
    /// Helper with defaults: token from the environment, production API
    /// endpoint, fresh HTTP client.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> DigitalOceanCredentialHelperBuilder {
        DigitalOceanCredentialHelperBuilder::new()
    }

    /// Resolve basic-auth credentials for `server_address`.
    ///
    /// Validates that the address names the DigitalOcean registry, performs
    /// one authenticated round trip to the account API, and splits the
    /// returned auth blob into username and password. The first failure
    /// short-circuits; an error never carries partial credentials.
    pub async fn get(&self, server_address: &str) -> Result<RegistryCredential> {
        let request = build_credential_request(server_address, &self.config, &self.api_endpoint)?;
        let (registry_host, request) = request.into_parts();

        tracing::debug!(
            registry = %registry_host,
            expiry_seconds = self.config.expiry_seconds(),
            read_write = self.config.read_write(),
            "requesting registry credentials"
        );

        let body = self.exchange.execute(request).await?;
        let credential = decode_credentials(&body, &registry_host)?;

        tracing::debug!(registry = %registry_host, "registry credentials resolved");
        Ok(credential)
    }
}

impl Default for DigitalOceanCredentialHelper {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder wiring the helper's construction-time dependencies.
///
/// The endpoint and HTTP client are injected here instead of living in
/// mutable process-wide state, so concurrent helpers (and tests pointing
/// at a local server) cannot interfere with each other.
#[derive(Debug, Default)]
pub struct DigitalOceanCredentialHelperBuilder {
    config: Option<HelperConfig>,
    api_endpoint: Option<Url>,
    client: Option<Client>,
}

impl DigitalOceanCredentialHelperBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: HelperConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Override the account API endpoint (scheme + host), e.g. to point
    /// at a local test server.
    pub fn with_api_endpoint(mut self, endpoint: Url) -> Self {
        self.api_endpoint = Some(endpoint);
        self
    }

    /// Override the HTTP transport.
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> DigitalOceanCredentialHelper {
        let api_endpoint = self.api_endpoint.unwrap_or_else(|| {
            // The constant is a valid URL; parsing it cannot fail.
            Url::parse(DO_API_ENDPOINT).unwrap()
        });
        DigitalOceanCredentialHelper {
            config: self.config.unwrap_or_else(HelperConfig::from_env),
            api_endpoint,
            exchange: ExchangeClient::new(self.client.unwrap_or_default()),
        }
    }
}
