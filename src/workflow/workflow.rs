use std::time::Instant;

use log::{error, info};
use reqwest::multipart::Form;
use serde::Deserialize;

use super::builder::SubmissionWorkflowBuilder;
use super::error::SubmissionError;
use super::input::{ImageFile, SubmissionInput, ValidatedInput};
use super::result::{ExportArtifact, Label, PredictionResult, SoftmaxPair};
use super::WorkflowInfo;

/// Lifecycle state of the workflow.
///
/// Transitions: Idle → Submitting on a valid submit, Submitting → Succeeded
/// on success, Submitting → Failed on any error, and Succeeded/Failed → Idle
/// on reset (or back to Submitting on the next valid submit). There is no
/// terminal state; the workflow is reusable indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Success payload of the prediction endpoint.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    label: Label,
    softmax: [f64; 2],
}

/// Failure payload of the prediction endpoint.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Clone)]
struct CompletedSubmission {
    text: String,
    result: PredictionResult,
}

/// Drives one text-plus-image submission to a remote fake-news detection
/// endpoint: validate → serialize → send → await → interpret.
///
/// The workflow owns the latest [`PredictionResult`]; each success overwrites
/// it and [`reset`](Self::reset) clears it. Nothing is persisted outside the
/// instance.
///
/// # Example
/// ```no_run
/// use newsprobe::{ImageFile, SubmissionInput, SubmissionWorkflow};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut workflow = SubmissionWorkflow::builder()
///     .with_endpoint("http://127.0.0.1:5000/predict")
///     .build()?;
///
/// let image = ImageFile::from_path("headline.jpg".as_ref())?;
/// let input = SubmissionInput::new("Breaking: moon made of cheese", Some(image));
///
/// let result = workflow.submit(input).await?;
/// println!(
///     "{}: fake {} / real {}",
///     result.label,
///     result.softmax.fake_percent(),
///     result.softmax.real_percent()
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SubmissionWorkflow {
    endpoint: String,
    client: reqwest::Client,
    state: WorkflowState,
    latest: Option<CompletedSubmission>,
}

impl SubmissionWorkflow {
    /// Creates a new SubmissionWorkflowBuilder for fluent construction.
    pub fn builder() -> SubmissionWorkflowBuilder {
        SubmissionWorkflowBuilder::new()
    }

    /// Creates a workflow for `endpoint` with default transport settings.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::from_parts(endpoint.into(), reqwest::Client::new())
    }

    pub(crate) fn from_parts(endpoint: String, client: reqwest::Client) -> Self {
        Self {
            endpoint,
            client,
            state: WorkflowState::Idle,
            latest: None,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// The result of the most recent successful submission, if any.
    pub fn latest_result(&self) -> Option<&PredictionResult> {
        self.latest.as_ref().map(|submission| &submission.result)
    }

    /// Returns information about the workflow's current state.
    pub fn info(&self) -> WorkflowInfo {
        WorkflowInfo {
            endpoint: self.endpoint.clone(),
            state: self.state,
            has_result: self.latest.is_some(),
        }
    }

    /// Validates the input and issues one multipart POST to the endpoint.
    ///
    /// # Arguments
    /// * `input` - The text and image captured from the caller
    ///
    /// # Errors
    /// * [`SubmissionError::InFlight`] if a submission is already pending
    /// * [`SubmissionError::Validation`] if text and/or image are missing;
    ///   no network call is made
    /// * [`SubmissionError::Server`] on a non-success status, carrying the
    ///   JSON body's `error` field when present
    /// * [`SubmissionError::Transport`] when the request or response decode
    ///   fails
    ///
    /// On success the result is stored as the latest submission together
    /// with the trimmed text; on failure the previous result is left
    /// untouched.
    pub async fn submit(
        &mut self,
        input: SubmissionInput,
    ) -> Result<PredictionResult, SubmissionError> {
        if self.state == WorkflowState::Submitting {
            return Err(SubmissionError::InFlight);
        }

        let ValidatedInput { text, image } = input.into_validated()?;
        info!(
            "Submitting {} chars of text and image '{}' ({} bytes) to {}",
            text.chars().count(),
            image.file_name(),
            image.bytes().len(),
            self.endpoint
        );
        self.state = WorkflowState::Submitting;

        match self.dispatch(&text, image).await {
            Ok(result) => {
                info!(
                    "Prediction received: {} in {:.2}s",
                    result.label, result.elapsed_seconds
                );
                self.latest = Some(CompletedSubmission {
                    text,
                    result: result.clone(),
                });
                self.state = WorkflowState::Succeeded;
                Ok(result)
            }
            Err(err) => {
                error!("Submission failed: {}", err);
                self.state = WorkflowState::Failed;
                Err(err)
            }
        }
    }

    async fn dispatch(
        &self,
        text: &str,
        image: ImageFile,
    ) -> Result<PredictionResult, SubmissionError> {
        let form = Form::new()
            .text("text", text.to_owned())
            .part("image", image.into_part()?);

        let started = Instant::now();
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| status.to_string());
            return Err(SubmissionError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: PredictResponse = response.json().await?;
        // Duration covers dispatch through the fully parsed JSON body.
        let elapsed = started.elapsed().as_secs_f64();

        let [fake, real] = decoded.softmax;
        let softmax = SoftmaxPair::new(fake, real)?;
        Ok(PredictionResult::new(decoded.label, softmax, elapsed))
    }

    /// Clears the latest result and export artifact and returns to Idle.
    /// No network interaction.
    pub fn reset(&mut self) {
        self.latest = None;
        self.state = WorkflowState::Idle;
    }

    /// The export snapshot of the latest result, if one exists.
    pub fn export_artifact(&self) -> Option<ExportArtifact> {
        self.latest
            .as_ref()
            .map(|submission| ExportArtifact::new(&submission.text, &submission.result))
    }

    /// Pretty-printed JSON bytes of the export artifact, absent until a
    /// submission has succeeded.
    pub fn export_result(&self) -> Option<Vec<u8>> {
        self.export_artifact()
            .and_then(|artifact| artifact.to_pretty_json().ok())
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: WorkflowState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> SubmissionInput {
        SubmissionInput::new("some headline", Some(ImageFile::new("a.jpg", vec![1, 2, 3])))
    }

    #[tokio::test]
    async fn test_overlapping_submission_is_refused() {
        let mut workflow = SubmissionWorkflow::new("http://127.0.0.1:1/predict");
        workflow.force_state(WorkflowState::Submitting);

        let err = workflow.submit(sample_input()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::InFlight));
    }

    #[tokio::test]
    async fn test_invalid_input_keeps_state_idle() {
        let mut workflow = SubmissionWorkflow::new("http://127.0.0.1:1/predict");
        let err = workflow.submit(SubmissionInput::new("", None)).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Validation(_)));
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(workflow.latest_result().is_none());
    }

    #[test]
    fn test_reset_from_idle() {
        let mut workflow = SubmissionWorkflow::new("http://127.0.0.1:1/predict");
        workflow.reset();
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(workflow.export_result().is_none());
    }

    #[test]
    fn test_info_snapshot() {
        let workflow = SubmissionWorkflow::new("http://127.0.0.1:1/predict");
        let info = workflow.info();
        assert_eq!(info.endpoint, "http://127.0.0.1:1/predict");
        assert_eq!(info.state, WorkflowState::Idle);
        assert!(!info.has_result);
    }
}
