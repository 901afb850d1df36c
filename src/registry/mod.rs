//! Registry credential exchange: request building, HTTP execution, and
//! response decoding.

pub mod credentials;
pub mod exchange;
pub mod request;

pub use credentials::RegistryCredential;
pub use exchange::ExchangeClient;
pub use request::{CredentialRequest, DO_API_ENDPOINT, DO_REGISTRY_HOST};
