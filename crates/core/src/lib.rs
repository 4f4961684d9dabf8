//! fhir-core: configuration types for FHIR REST clients
//!
//! This crate holds the pieces shared by client implementations: the
//! client configuration, base URL validation and path resolution, and
//! the configuration error type.

pub mod base_url;
pub mod config;
pub mod error;

pub use base_url::BaseUrl;
pub use config::{BASE_URL_VAR, ClientConfig, FHIR_BASE_URL, TIMEOUT_VAR};
pub use error::ConfigurationError;
