use std::time::Duration;

use engine_logging::engine_debug;

use crate::{CreateError, CreateUrlRequest, CreateUrlResponse, Endpoint, FailureKind};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    /// Upper bound for a whole request. `None` waits for the service indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Shortener: Send + Sync {
    /// Asks the service for a short URL for `long_url`.
    async fn create(&self, long_url: &str) -> Result<String, CreateError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestShortener {
    endpoint: Endpoint,
    client: reqwest::Client,
}

impl ReqwestShortener {
    pub fn new(endpoint: Endpoint, settings: &ClientSettings) -> Result<Self, CreateError> {
        let mut builder = reqwest::Client::builder().connect_timeout(settings.connect_timeout);
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| CreateError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait::async_trait]
impl Shortener for ReqwestShortener {
    async fn create(&self, long_url: &str) -> Result<String, CreateError> {
        let target = self.endpoint.create_url();
        engine_debug!("POST {}", target);

        let response = self
            .client
            .post(target)
            .json(&CreateUrlRequest { url: long_url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CreateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: CreateUrlResponse = serde_json::from_slice(&body)
            .map_err(|err| CreateError::new(FailureKind::MalformedResponse, err.to_string()))?;
        if parsed.short_url.trim().is_empty() {
            return Err(CreateError::new(
                FailureKind::MalformedResponse,
                "shortUrl is empty",
            ));
        }

        Ok(parsed.short_url)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CreateError {
    if err.is_timeout() {
        return CreateError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return CreateError::new(FailureKind::MalformedResponse, err.to_string());
    }
    CreateError::new(FailureKind::Network, err.to_string())
}
