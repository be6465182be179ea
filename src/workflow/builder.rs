use std::time::Duration;

use log::info;

use super::error::SubmissionError;
use super::workflow::SubmissionWorkflow;
use crate::config;

/// A builder for constructing a [`SubmissionWorkflow`] with a fluent
/// interface.
///
/// Only the endpoint is required; without it the builder falls back to the
/// configured default (environment override, then the compiled-in URL). The
/// workflow itself enforces no timeout, so `build()` leaves the transport
/// defaults untouched unless [`with_timeout`](Self::with_timeout) is called.
///
/// # Example
/// ```
/// use newsprobe::SubmissionWorkflow;
///
/// let workflow = SubmissionWorkflow::builder()
///     .with_endpoint("http://127.0.0.1:5000/predict")
///     .build()?;
/// assert_eq!(workflow.endpoint(), "http://127.0.0.1:5000/predict");
/// # Ok::<(), newsprobe::SubmissionError>(())
/// ```
#[derive(Debug, Default)]
pub struct SubmissionWorkflowBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl SubmissionWorkflowBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prediction endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets a request timeout on the underlying HTTP client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Uses a caller-supplied HTTP client instead of building one.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Builds the workflow, constructing the HTTP client if none was given.
    pub fn build(self) -> Result<SubmissionWorkflow, SubmissionError> {
        let endpoint = self.endpoint.unwrap_or_else(config::default_endpoint);

        let client = match (self.client, self.timeout) {
            (Some(client), _) => client,
            (None, Some(timeout)) => reqwest::Client::builder().timeout(timeout).build()?,
            (None, None) => reqwest::Client::new(),
        };

        info!("Workflow configured for endpoint {}", endpoint);
        Ok(SubmissionWorkflow::from_parts(endpoint, client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::WorkflowState;

    #[test]
    fn test_builder_overrides_endpoint() {
        let workflow = SubmissionWorkflowBuilder::new()
            .with_endpoint("http://example.com/predict")
            .build()
            .unwrap();
        assert_eq!(workflow.endpoint(), "http://example.com/predict");
    }

    #[test]
    fn test_built_workflow_starts_idle() {
        let workflow = SubmissionWorkflowBuilder::new()
            .with_timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(workflow.latest_result().is_none());
    }
}
