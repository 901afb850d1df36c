//! DigitalOcean Docker Credential Helper Library
//!
//! Implements the "get" half of the docker credential-helper contract for
//! the DigitalOcean container registry: given a registry server address,
//! exchange a DigitalOcean API token for a short-lived username/password
//! pair usable for registry basic auth.
//!
//! ```no_run
//! use docker_credential_digitalocean::{DigitalOceanCredentialHelper, HelperConfig};
//!
//! # async fn example() -> docker_credential_digitalocean::Result<()> {
//! let helper = DigitalOceanCredentialHelper::builder()
//!     .with_config(
//!         HelperConfig::builder()
//!             .with_expiry_seconds(3600)
//!             .with_read_write(true)
//!             .build(),
//!     )
//!     .build();
//! let cred = helper.get("registry.digitalocean.com/my-team").await?;
//! println!("{}", cred.username);
//! # Ok(())
//! # }
//! ```
//!
//! The subprocess framing of the credential-helper protocol (reading the
//! server URL from stdin, writing `{ServerURL, Username, Secret}` JSON to
//! stdout) and the `store`/`erase` operations are out of scope.

pub mod config;
pub mod error;
pub mod helper;
pub mod registry;

pub use config::{HelperConfig, HelperConfigBuilder};
pub use error::{CredentialError, Result};
pub use helper::DigitalOceanCredentialHelper;
pub use registry::{DO_API_ENDPOINT, DO_REGISTRY_HOST, RegistryCredential};
