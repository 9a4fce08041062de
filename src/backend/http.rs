use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{AnalysisBackend, ClientError};
use crate::config::ClientConfig;
use crate::types::{AnalysisRequest, AnalysisResult, ExampleIdea};

/// reqwest-backed implementation of [`AnalysisBackend`].
pub struct HttpBackend {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Reads the body as text before parsing so a malformed 2xx body maps to
    /// `Parse` rather than being folded into a transport error.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| {
            debug!(error = %e, "failed to parse response body");
            ClientError::Parse(e.to_string())
        })
    }

    fn transport_error(e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ClientError> {
        let url = format!("{}/analyze-startup", self.base_url);
        debug!(name = %request.name, "submitting startup for analysis");

        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!(status, "analysis endpoint returned an error status");
            return Err(ClientError::Http(status));
        }

        Self::decode(response).await
    }

    async fn random_example(&self) -> Result<ExampleIdea, ClientError> {
        let url = format!("{}/random-example", self.base_url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Self::transport_error)?;

        if !response.status().is_success() {
            return Err(ClientError::Http(response.status().as_u16()));
        }

        Self::decode(response).await
    }
}
