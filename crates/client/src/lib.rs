//! fhir-client: HTTP client factory for FHIR REST servers
//!
//! Builds [`reqwest`] clients bound to a FHIR base URL with a set of
//! default headers. Requests take paths relative to the base URL; the
//! response, transport errors included, comes straight from reqwest.
//!
//! ```rust,no_run
//! use fhir_client::{ClientConfig, create_client};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = create_client(ClientConfig::default())?;
//! let patient: serde_json::Value = client.get("/Patient/123").send().await?.json().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod factory;

pub use client::FhirClient;
pub use factory::{ClientFactory, create_client, fhir_api};

// Re-export configuration types
pub use fhir_core::{BaseUrl, ClientConfig, ConfigurationError, FHIR_BASE_URL};

/// Re-export commonly used types
pub use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
