//! Absolute base URL and request path resolution

use std::fmt;

use url::Url;

use crate::error::ConfigurationError;

/// Schemes the HTTP client can speak
const SUPPORTED_SCHEMES: [&str; 2] = ["http", "https"];

/// A validated absolute base URL.
///
/// Keeps the string it was parsed from so callers get back exactly what
/// they configured. Request paths are joined onto that string rather than
/// resolved with RFC 3986 rules, which would drop the `/fhir` prefix for
/// paths starting with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    raw: String,
    url: Url,
}

impl BaseUrl {
    /// Parse and validate a base URL
    pub fn parse(input: &str) -> Result<Self, ConfigurationError> {
        if input.trim().is_empty() {
            return Err(ConfigurationError::EmptyBaseUrl);
        }

        // url strips these silently, but join() works on the raw string
        if input != input.trim() || input.contains(['\t', '\r', '\n']) {
            return Err(ConfigurationError::UnexpectedWhitespace {
                url: input.to_string(),
            });
        }

        let url = Url::parse(input).map_err(|source| ConfigurationError::InvalidBaseUrl {
            url: input.to_string(),
            source,
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigurationError::CannotBeABase {
                url: input.to_string(),
            });
        }

        if !SUPPORTED_SCHEMES.contains(&url.scheme()) {
            return Err(ConfigurationError::UnsupportedScheme {
                url: input.to_string(),
                scheme: url.scheme().to_string(),
            });
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(ConfigurationError::QueryOrFragment {
                url: input.to_string(),
            });
        }

        Ok(Self {
            raw: input.to_string(),
            url,
        })
    }

    /// The base URL exactly as configured
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed form of the base URL
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Resolve a request path against this base.
    ///
    /// Absolute URLs pass through untouched and an empty path yields the
    /// base itself. Anything else is appended with exactly one `/` between
    /// base and path.
    pub fn join(&self, path: &str) -> String {
        if path.is_empty() {
            return self.raw.clone();
        }
        if is_absolute_url(path) {
            return path.to_string();
        }

        format!(
            "{}/{}",
            self.raw.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// `scheme://...` where scheme is `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_absolute_url(path: &str) -> bool {
    let Some((scheme, _)) = path.split_once("://") else {
        return false;
    };

    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
