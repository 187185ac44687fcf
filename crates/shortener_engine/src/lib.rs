//! Shortener engine: HTTP calls to the shortening service and effect execution.
mod client;
mod endpoint;
mod engine;
mod types;

pub use client::{ClientSettings, ReqwestShortener, Shortener};
pub use endpoint::{Endpoint, EndpointError};
pub use engine::{EngineError, EngineEvents, EngineHandle};
pub use types::{CreateError, CreateUrlRequest, CreateUrlResponse, EngineEvent, FailureKind, RequestId};
