//! Client configuration

use std::time::Duration;

use http::header::{CACHE_CONTROL, HeaderMap, HeaderName, HeaderValue};

use crate::error::ConfigurationError;

/// Built-in FHIR server endpoint
pub const FHIR_BASE_URL: &str = "https://fhir-bootcamp.medblocks.com/fhir";

/// Environment variable overriding the base URL
pub const BASE_URL_VAR: &str = "FHIR_BASE_URL";

/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_VAR: &str = "FHIR_TIMEOUT_SECS";

/// Base URL and default headers for a FHIR client.
///
/// The base URL is fixed once the config exists and is only validated when
/// a client is created from it. Header names are case-insensitive; adding
/// a name twice keeps the last value.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    default_headers: HeaderMap,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create a configuration with no default headers
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: HeaderMap::new(),
            timeout: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through a variable lookup, starting from the
    /// built-in defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_VAR) {
            config.base_url = base_url;
        }

        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigurationError::InvalidEnv {
                    var: TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Add a default header, replacing any existing value for the same name
    pub fn with_header(mut self, name: &str, value: &str) -> Result<Self, ConfigurationError> {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            ConfigurationError::InvalidHeaderName {
                name: name.to_string(),
            }
        })?;
        let header_value =
            HeaderValue::from_str(value).map_err(|_| ConfigurationError::InvalidHeaderValue {
                name: name.to_string(),
            })?;

        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Add several default headers
    pub fn with_headers<I, K, V>(self, headers: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        headers
            .into_iter()
            .try_fold(self, |config, (name, value)| {
                config.with_header(name.as_ref(), value.as_ref())
            })
    }

    /// Set the request timeout passed to the HTTP client
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for ClientConfig {
    /// The medblocks bootcamp server, with caching disabled
    fn default() -> Self {
        let mut config = Self::new(FHIR_BASE_URL);
        config
            .default_headers
            .insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url(), FHIR_BASE_URL);
        assert_eq!(config.default_headers().len(), 1);
        assert_eq!(config.default_headers()[CACHE_CONTROL], "no-cache");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_new_has_no_headers() {
        let config = ClientConfig::new("http://localhost:8080/fhir");
        assert_eq!(config.base_url(), "http://localhost:8080/fhir");
        assert!(config.default_headers().is_empty());
    }

    #[test]
    fn test_header_names_case_insensitive() {
        let config = ClientConfig::new(FHIR_BASE_URL)
            .with_header("Cache-Control", "no-cache")
            .unwrap()
            .with_header("cache-control", "max-age=0")
            .unwrap();

        assert_eq!(config.default_headers().len(), 1);
        assert_eq!(config.default_headers()["CACHE-CONTROL"], "max-age=0");
    }

    #[test]
    fn test_with_headers() {
        let config = ClientConfig::new(FHIR_BASE_URL)
            .with_headers([
                ("Accept", "application/fhir+json"),
                ("Prefer", "return=representation"),
            ])
            .unwrap();

        assert_eq!(config.default_headers()["accept"], "application/fhir+json");
        assert_eq!(config.default_headers()["prefer"], "return=representation");
    }

    #[test]
    fn test_invalid_header_name() {
        let result = ClientConfig::default().with_header("Bad Header", "x");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidHeaderName { name }) if name == "Bad Header"
        ));
    }

    #[test]
    fn test_invalid_header_value() {
        let result = ClientConfig::default().with_header("X-Trace", "line\nbreak");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidHeaderValue { name }) if name == "X-Trace"
        ));
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.base_url(), FHIR_BASE_URL);
        assert_eq!(config.default_headers()[CACHE_CONTROL], "no-cache");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://localhost:8080/fhir"),
            (TIMEOUT_VAR, " 15 "),
        ]))
        .unwrap();

        assert_eq!(config.base_url(), "http://localhost:8080/fhir");
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        // default headers survive a base URL override
        assert_eq!(config.default_headers()[CACHE_CONTROL], "no-cache");
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup_from(&[(TIMEOUT_VAR, "soon")]));
        match result {
            Err(ConfigurationError::InvalidEnv { var, value, .. }) => {
                assert_eq!(var, TIMEOUT_VAR);
                assert_eq!(value, "soon");
            }
            other => panic!("expected InvalidEnv, got {other:?}"),
        }
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(5));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }
}
