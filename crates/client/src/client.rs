//! FHIR REST client bound to a base URL

use fhir_core::{BaseUrl, ClientConfig, ConfigurationError};
use reqwest::{Method, RequestBuilder};

/// HTTP client for a single FHIR server.
///
/// Paths are resolved against the configured base URL and the default
/// headers go out with every request. A header set on the request builder
/// replaces the default of the same name. Cloning is cheap; clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct FhirClient {
    http: reqwest::Client,
    base_url: BaseUrl,
    config: ClientConfig,
}

impl FhirClient {
    /// Build a client from a configuration. Performs no network I/O.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigurationError> {
        let base_url = BaseUrl::parse(config.base_url())?;

        // reqwest only fills in default headers the request does not already carry
        let mut builder =
            reqwest::Client::builder().default_headers(config.default_headers().clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ConfigurationError::Backend(e.to_string()))?;

        tracing::info!(
            base_url = %base_url,
            default_headers = config.default_headers().len(),
            "FHIR client created"
        );

        Ok(Self {
            http,
            base_url,
            config,
        })
    }

    /// The base URL exactly as configured
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get underlying reqwest client
    pub fn inner(&self) -> &reqwest::Client {
        &self.http
    }

    /// Resolve a request path against the base URL
    pub fn url(&self, path: &str) -> String {
        self.base_url.join(path)
    }

    /// Start a request with any method.
    ///
    /// A resolved URL that fails to parse is reported by reqwest when the
    /// request is built or sent.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "FHIR request");
        self.http.request(method, url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }
}
