use std::fmt;

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("endpoint is empty")]
    Empty,
    #[error("endpoint is not a valid url: {0}")]
    Invalid(String),
    #[error("endpoint scheme must be http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("endpoint must not carry a query or fragment")]
    HasQueryOrFragment,
}

/// Base address of the shortening service, e.g. `https://api.example.com/v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Endpoint {
    pub fn parse(raw: &str) -> Result<Self, EndpointError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EndpointError::Empty);
        }
        let mut base = Url::parse(trimmed).map_err(|err| EndpointError::Invalid(err.to_string()))?;
        match base.scheme() {
            "http" | "https" => {}
            other => return Err(EndpointError::UnsupportedScheme(other.to_string())),
        }
        if base.host_str().is_none_or(str::is_empty) {
            return Err(EndpointError::Invalid("missing host".to_string()));
        }
        if base.query().is_some() || base.fragment().is_some() {
            return Err(EndpointError::HasQueryOrFragment);
        }
        let path = base.path().trim_end_matches('/').to_string();
        base.set_path(&path);
        Ok(Self { base })
    }

    /// `{endpoint}/create-url`
    pub fn create_url(&self) -> Url {
        self.join(&["create-url"])
    }

    /// `{endpoint}/redirect-url/{short_url}`, with `short_url` as a single
    /// percent-encoded path segment.
    pub fn redirect_url(&self, short_url: &str) -> Url {
        self.join(&["redirect-url", short_url])
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // http(s) urls always have a path, so this cannot fail.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base.as_str().trim_end_matches('/'))
    }
}
