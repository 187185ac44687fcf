use std::fmt;

use serde::{Deserialize, Serialize};

pub type RequestId = u64;

/// Body of `POST {endpoint}/create-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateUrlRequest<'a> {
    pub url: &'a str,
}

/// Success body of `POST {endpoint}/create-url`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUrlResponse {
    pub short_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    CreateCompleted {
        request_id: RequestId,
        result: Result<String, CreateError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct CreateError {
    pub kind: FailureKind,
    pub message: String,
}

impl CreateError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    HttpStatus(u16),
    Timeout,
    Network,
    MalformedResponse,
    /// The request was lost inside the client before it completed.
    Aborted,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::MalformedResponse => write!(f, "malformed response"),
            FailureKind::Aborted => write!(f, "aborted"),
        }
    }
}
