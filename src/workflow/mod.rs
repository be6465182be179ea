mod error;
mod input;
mod result;
mod workflow;
pub mod builder;

pub use builder::SubmissionWorkflowBuilder;
pub use error::{MissingInput, SubmissionError};
pub use input::{ImageFile, SubmissionInput};
pub use result::{ExportArtifact, ExportSoftmax, InvalidSoftmax, Label, PredictionResult, SoftmaxPair};
pub use workflow::{SubmissionWorkflow, WorkflowState};

/// Information about the current state and configuration of a workflow
#[derive(Debug, Clone)]
pub struct WorkflowInfo {
    /// URL the workflow submits to
    pub endpoint: String,
    /// Current lifecycle state
    pub state: WorkflowState,
    /// Whether a result from a successful submission is held
    pub has_result: bool,
}
