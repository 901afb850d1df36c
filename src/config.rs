//! Configuration for the credential exchange

use std::fmt;

/// Environment variable consulted when no explicit token is configured.
pub const TOKEN_ENV_VAR: &str = "DIGITALOCEAN_TOKEN";

/// Immutable configuration for one helper instance.
///
/// Built once through [`HelperConfigBuilder`] and shared read-only by every
/// subsequent exchange. The token is an opaque secret: it is excluded from
/// the `Debug` output and never logged by this crate.
#[derive(Clone)]
pub struct HelperConfig {
    token: String,
    expiry_seconds: u64,
    read_write: bool,
}

impl HelperConfig {
    pub fn builder() -> HelperConfigBuilder {
        HelperConfigBuilder::new()
    }

    /// Config with defaults only: token from `DIGITALOCEAN_TOKEN`,
    /// no explicit expiry, read-only credentials.
    pub fn from_env() -> Self {
        Self::builder().build()
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    /// Requested credential lifetime in seconds; 0 means the API default.
    pub fn expiry_seconds(&self) -> u64 {
        self.expiry_seconds
    }

    /// Whether push-capable credentials are requested.
    pub fn read_write(&self) -> bool {
        self.read_write
    }
}

impl fmt::Debug for HelperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperConfig")
            .field("token", &"<redacted>")
            .field("expiry_seconds", &self.expiry_seconds)
            .field("read_write", &self.read_write)
            .finish()
    }
}

/// Builder applying configuration directives in call order.
///
/// Later calls override earlier ones for the same field. When no explicit
/// token is given, [`build`](Self::build) falls back to the
/// `DIGITALOCEAN_TOKEN` environment variable; an empty or missing value is
/// accepted here and only surfaces as an authentication failure at
/// exchange time.
#[derive(Debug, Default)]
pub struct HelperConfigBuilder {
    token: Option<String>,
    expiry_seconds: u64,
    read_write: bool,
}

impl HelperConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Lifetime of the returned credentials in seconds. 0 (the default)
    /// requests credentials that do not expire.
    pub fn with_expiry_seconds(mut self, seconds: u64) -> Self {
        self.expiry_seconds = seconds;
        self
    }

    /// Request read-write (push-capable) credentials instead of the
    /// default read-only ones.
    pub fn with_read_write(mut self, read_write: bool) -> Self {
        self.read_write = read_write;
        self
    }

    pub fn build(self) -> HelperConfig {
        let token = self
            .token
            .unwrap_or_else(|| std::env::var(TOKEN_ENV_VAR).unwrap_or_default());
        HelperConfig {
            token,
            expiry_seconds: self.expiry_seconds,
            read_write: self.read_write,
        }
    }
}
