use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{AnalysisBackend, ClientError};
use crate::types::{AnalysisRequest, AnalysisResult, ExampleIdea};

/// Canned backend for tests. Counts calls and can delay its answer to
/// exercise the stale-response path.
pub struct MockBackend {
    response: Result<AnalysisResult, ClientError>,
    example: Option<ExampleIdea>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockBackend {
    pub fn with_result(result: AnalysisResult) -> Self {
        Self {
            response: Ok(result),
            example: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_error(error: ClientError) -> Self {
        Self {
            response: Err(error),
            example: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_example(mut self, example: ExampleIdea) -> Self {
        self.example = Some(example);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of times `analyze` has been invoked.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisBackend for MockBackend {
    async fn analyze(&self, _request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone()
    }

    async fn random_example(&self) -> Result<ExampleIdea, ClientError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.example.clone().ok_or(ClientError::Http(404))
    }
}
