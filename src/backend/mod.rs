// src/backend/mod.rs

use async_trait::async_trait;
use thiserror::Error;

use crate::types::{AnalysisRequest, AnalysisResult, ExampleIdea};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("analysis endpoint returned status {0}")]
    Http(u16),
    #[error("request timed out")]
    Timeout,
    #[error("malformed response body: {0}")]
    Parse(String),
    #[error("{0}")]
    Network(String),
}

/// Boundary to the roast service. The HTTP implementation talks to the real
/// endpoints; tests substitute [`MockBackend`].
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError>;

    async fn random_example(&self) -> Result<ExampleIdea, ClientError>;
}

pub mod http;
pub mod mocks;

pub use http::HttpBackend;
pub use mocks::MockBackend;
