//! Client construction and the process-wide shared client

use std::sync::OnceLock;

use fhir_core::{ClientConfig, ConfigurationError};

use crate::client::FhirClient;

static FHIR_API: OnceLock<FhirClient> = OnceLock::new();

/// Create a configured FHIR client.
///
/// Fails with [`ConfigurationError`] when the base URL is not an absolute
/// `http`/`https` URL.
pub fn create_client(config: ClientConfig) -> Result<FhirClient, ConfigurationError> {
    FhirClient::new(config)
}

/// The shared client, built from the environment on first use.
///
/// Every successful call returns the same instance. A failed build is not
/// cached, so a later call tries again.
pub fn fhir_api() -> Result<&'static FhirClient, ConfigurationError> {
    if let Some(client) = FHIR_API.get() {
        return Ok(client);
    }

    let client = create_client(ClientConfig::from_env()?)?;
    Ok(FHIR_API.get_or_init(|| client))
}

/// Produces clients that all share one configuration
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    config: ClientConfig,
}

impl ClientFactory {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Load the factory configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Ok(Self::new(ClientConfig::from_env()?))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a new client from the factory configuration
    pub fn create(&self) -> Result<FhirClient, ConfigurationError> {
        create_client(self.config.clone())
    }
}
