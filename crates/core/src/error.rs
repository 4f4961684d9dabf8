use thiserror::Error;

/// Errors raised while building a FHIR client from its configuration
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Base URL must not be empty")]
    EmptyBaseUrl,

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Base URL '{url}' has surrounding whitespace or control characters")]
    UnexpectedWhitespace { url: String },

    #[error("Base URL '{url}' must not carry a query or fragment")]
    QueryOrFragment { url: String },

    #[error("Unsupported scheme '{scheme}' in base URL '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Base URL '{url}' cannot be used as a base")]
    CannotBeABase { url: String },

    #[error("Invalid header name: {name}")]
    InvalidHeaderName { name: String },

    #[error("Invalid value for header: {name}")]
    InvalidHeaderValue { name: String },

    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidEnv {
        var: String,
        value: String,
        reason: String,
    },

    #[error("Failed to build HTTP client: {0}")]
    Backend(String),
}
