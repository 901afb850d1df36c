//! Validation of the target registry and construction of the
//! authenticated credentials request.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request};
use url::Url;

use crate::config::HelperConfig;
use crate::error::{CredentialError, Result};

/// The only registry hostname this helper serves. Exact match, no
/// subdomain or alternate-domain matching.
pub const DO_REGISTRY_HOST: &str = "registry.digitalocean.com";

/// Production account API endpoint.
pub const DO_API_ENDPOINT: &str = "https://api.digitalocean.com";

pub(crate) const CREDENTIALS_PATH: &str = "/v2/registry/docker-credentials";

/// A validated, ready-to-send credentials request.
#[derive(Debug)]
pub struct CredentialRequest {
    registry_host: String,
    request: Request,
}

impl CredentialRequest {
    /// Hostname extracted from the server address, used later to look up
    /// the auth entry in the response.
    pub fn registry_host(&self) -> &str {
        &self.registry_host
    }

    pub(crate) fn into_parts(self) -> (String, Request) {
        (self.registry_host, self.request)
    }

    #[cfg(test)]
    fn request(&self) -> &Request {
        &self.request
    }
}

/// Build the authenticated GET request for `server_address`.
///
/// The address is parsed as host-or-host:port (a scheme is prefixed when
/// absent) and its hostname must equal [`DO_REGISTRY_HOST`], otherwise the
/// exchange is rejected before any network activity. Query parameters are
/// only present when they carry a non-default value.
pub fn build_credential_request(
    server_address: &str,
    config: &HelperConfig,
    api_endpoint: &Url,
) -> Result<CredentialRequest> {
    let registry_host = parse_registry_host(server_address)?;
    if registry_host != DO_REGISTRY_HOST {
        return Err(CredentialError::UnsupportedRegistry(registry_host));
    }

    let mut url = api_endpoint.join(CREDENTIALS_PATH).map_err(|e| {
        CredentialError::RequestConstruction(format!("invalid API endpoint: {}", e))
    })?;
    if config.expiry_seconds() > 0 || config.read_write() {
        let mut query = url.query_pairs_mut();
        if config.expiry_seconds() > 0 {
            query.append_pair("expiry_seconds", &config.expiry_seconds().to_string());
        }
        if config.read_write() {
            query.append_pair("read_write", "true");
        }
    }

    let mut request = Request::new(Method::GET, url);
    request
        .headers_mut()
        .insert(ACCEPT, HeaderValue::from_static("application/json"));
    let mut bearer =
        HeaderValue::from_str(&format!("Bearer {}", config.token())).map_err(|e| {
            CredentialError::RequestConstruction(format!("invalid authorization header: {}", e))
        })?;
    // Keep the token out of any transport-level logging.
    bearer.set_sensitive(true);
    request.headers_mut().insert(AUTHORIZATION, bearer);

    Ok(CredentialRequest {
        registry_host,
        request,
    })
}

fn parse_registry_host(server_address: &str) -> Result<String> {
    let with_scheme = if server_address.contains("://") {
        server_address.to_string()
    } else {
        format!("https://{}", server_address)
    };
    let url = Url::parse(&with_scheme).map_err(|e| {
        CredentialError::RequestConstruction(format!(
            "failed to parse registry URL {:?}: {}",
            server_address, e
        ))
    })?;
    url.host_str()
        .map(str::to_string)
        .ok_or_else(|| {
            CredentialError::RequestConstruction(format!(
                "registry URL {:?} has no hostname",
                server_address
            ))
        })
}
