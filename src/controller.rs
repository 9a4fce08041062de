// src/controller.rs

use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::backend::{AnalysisBackend, ClientError};
use crate::types::{AnalysisRequest, ExampleIdea, LifecycleState};

pub const HTTP_FAILURE_MESSAGE: &str =
    "Failed to analyze your startup. Even our servers are skeptical.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Try again!";
pub const TIMEOUT_FAILURE_MESSAGE: &str =
    "The roast timed out. Even our servers gave up waiting.";

struct Inner {
    state: LifecycleState,
    // Monotonic tag for the current request; a completion only commits if its
    // tag still matches.
    generation: u64,
}

/// Owns the analysis lifecycle. `submit` dispatches at most one request at a
/// time; `reset` abandons whatever is showing (or in flight) and returns to
/// idle. A response that arrives after a reset, or after a newer submit, is
/// discarded without touching visible state.
pub struct RequestController<B: AnalysisBackend + 'static> {
    backend: Arc<B>,
    inner: Arc<Mutex<Inner>>,
}

impl<B: AnalysisBackend + 'static> RequestController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            inner: Arc::new(Mutex::new(Inner {
                state: LifecycleState::Idle,
                generation: 0,
            })),
        }
    }

    /// Snapshot of the current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.lock().state.clone()
    }

    /// Validate, transition to `Loading`, and dispatch the analysis call.
    ///
    /// Invalid input (empty after trimming, over the length caps) is a no-op:
    /// the form is expected to disable submission, but the controller stays
    /// safe when invoked anyway. A submit while a request is already in
    /// flight is ignored without issuing a second call.
    ///
    /// Returns the handle of the spawned request task so callers can await
    /// completion; `None` when nothing was dispatched.
    pub fn submit(&self, name: &str, description: &str) -> Option<JoinHandle<()>> {
        let request = match AnalysisRequest::new(name, description) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "ignoring submit with invalid input");
                return None;
            }
        };

        let generation = {
            let mut inner = self.lock();
            if inner.state.is_loading() {
                debug!("ignoring submit while a request is in flight");
                return None;
            }
            inner.generation += 1;
            inner.state = LifecycleState::Loading;
            inner.generation
        };

        let backend = Arc::clone(&self.backend);
        let shared = Arc::clone(&self.inner);

        Some(tokio::spawn(async move {
            let outcome = backend.analyze(&request).await;

            let mut inner = shared.lock().expect("lifecycle state lock poisoned");
            if inner.generation != generation {
                debug!(generation, "discarding stale analysis response");
                return;
            }

            inner.state = match outcome {
                Ok(result) => LifecycleState::Success(result),
                Err(err) => {
                    warn!(error = %err, "analysis request failed");
                    LifecycleState::Failed(failure_message(&err))
                }
            };
        }))
    }

    /// Return to `Idle`, dropping any result or error. Legal in every state;
    /// calling this mid-flight abandons the request client-side by bumping
    /// the generation so its completion can no longer commit.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = LifecycleState::Idle;
    }

    /// Fetch a prefill idea from the random-example endpoint. Failures are
    /// deliberately swallowed; the form just stays as it is.
    pub async fn fetch_example(&self) -> Option<ExampleIdea> {
        match self.backend.random_example().await {
            Ok(example) => Some(example),
            Err(err) => {
                debug!(error = %err, "random example fetch failed");
                None
            }
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("lifecycle state lock poisoned")
    }
}

/// Map a backend error to the copy shown next to the submit control. The raw
/// HTTP status never reaches the user; transport errors surface their own
/// description when they have one.
pub fn failure_message(err: &ClientError) -> String {
    match err {
        ClientError::Http(_) => HTTP_FAILURE_MESSAGE.to_string(),
        ClientError::Timeout => TIMEOUT_FAILURE_MESSAGE.to_string(),
        ClientError::Parse(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        ClientError::Network(message) => {
            if message.trim().is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                message.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::types::{AnalysisResult, Verdict};
    use std::time::Duration;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            verdict: Verdict::Trash,
            score: 2.5,
            roast: "There are literally 47 dog walking apps.".to_string(),
            name_rating: "Cringe".to_string(),
            competitors: vec!["Rover".to_string(), "Wag".to_string()],
            advice: None,
            market_size: None,
            originality_score: None,
            execution_difficulty: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_input_is_a_no_op() {
        let controller = RequestController::new(MockBackend::with_result(sample_result()));

        assert!(controller.submit("", "does things").is_none());
        assert!(controller.submit("Thing", "   ").is_none());
        assert!(controller.state().is_idle());
    }

    #[tokio::test]
    async fn test_submit_transitions_to_success() {
        let controller = RequestController::new(MockBackend::with_result(sample_result()));

        let handle = controller.submit("Uber for Dogs", "On-demand dog walking").unwrap();
        assert!(controller.state().is_loading());

        handle.await.unwrap();
        assert_eq!(controller.state(), LifecycleState::Success(sample_result()));
    }

    #[tokio::test]
    async fn test_http_error_uses_fixed_copy() {
        let controller = RequestController::new(MockBackend::with_error(ClientError::Http(500)));

        let handle = controller.submit("Uber for Dogs", "On-demand dog walking").unwrap();
        handle.await.unwrap();

        assert_eq!(
            controller.state(),
            LifecycleState::Failed(HTTP_FAILURE_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_loading_is_ignored() {
        let backend =
            MockBackend::with_result(sample_result()).with_delay(Duration::from_millis(50));
        let controller = RequestController::new(backend);

        let handle = controller.submit("Uber for Dogs", "On-demand dog walking").unwrap();
        assert!(controller.submit("Another", "Something else").is_none());

        handle.await.unwrap();
        assert_eq!(controller.backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_response() {
        let backend =
            MockBackend::with_result(sample_result()).with_delay(Duration::from_millis(50));
        let controller = RequestController::new(backend);

        let handle = controller.submit("Uber for Dogs", "On-demand dog walking").unwrap();
        controller.reset();
        assert!(controller.state().is_idle());

        handle.await.unwrap();
        assert!(controller.state().is_idle());
    }

    #[tokio::test]
    async fn test_reset_from_success_clears_result() {
        let controller = RequestController::new(MockBackend::with_result(sample_result()));

        let handle = controller.submit("Uber for Dogs", "On-demand dog walking").unwrap();
        handle.await.unwrap();
        assert!(controller.state().result().is_some());

        controller.reset();
        assert_eq!(controller.state(), LifecycleState::Idle);
    }

    #[tokio::test]
    async fn test_fetch_example_swallows_errors() {
        let controller = RequestController::new(MockBackend::with_error(ClientError::Http(500)));
        assert_eq!(controller.fetch_example().await, None);
    }

    #[test]
    fn test_failure_message_mapping() {
        assert_eq!(failure_message(&ClientError::Http(503)), HTTP_FAILURE_MESSAGE);
        assert_eq!(
            failure_message(&ClientError::Parse("eof".to_string())),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            failure_message(&ClientError::Network("connection refused".to_string())),
            "connection refused"
        );
        assert_eq!(
            failure_message(&ClientError::Network("  ".to_string())),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(failure_message(&ClientError::Timeout), TIMEOUT_FAILURE_MESSAGE);
    }
}
