//! A client-side submission workflow for a remote fake-news detection
//! service: validate a text-plus-image input, issue one multipart request,
//! interpret the returned label and softmax pair, and produce presentation
//! output and a JSON export artifact.
//!
//! # Basic Usage
//!
//! ```no_run
//! use newsprobe::{ImageFile, SubmissionInput, SubmissionWorkflow};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut workflow = SubmissionWorkflow::builder()
//!     .with_endpoint("http://127.0.0.1:5000/predict")
//!     .build()?;
//!
//! let image = ImageFile::from_path("headline.jpg".as_ref())?;
//! let input = SubmissionInput::new("Breaking: moon made of cheese", Some(image));
//!
//! let result = workflow.submit(input).await?;
//! println!("Predicted label: {}", result.label);
//! println!("Fake: {}", result.softmax.fake_percent());
//! println!("Real: {}", result.softmax.real_percent());
//! # Ok(())
//! # }
//! ```
//!
//! # Exporting Results
//!
//! After a successful submission the workflow holds a downloadable JSON
//! snapshot of the result; it is absent before the first success and after
//! a reset:
//!
//! ```
//! use newsprobe::SubmissionWorkflow;
//!
//! let workflow = SubmissionWorkflow::new("http://127.0.0.1:5000/predict");
//! assert!(workflow.export_result().is_none());
//! ```

pub mod config;
pub mod preview;
pub mod render;
pub mod workflow;

pub use workflow::{
    ExportArtifact, ExportSoftmax, ImageFile, InvalidSoftmax, Label, MissingInput,
    PredictionResult, SoftmaxPair, SubmissionError, SubmissionInput, SubmissionWorkflow,
    SubmissionWorkflowBuilder, WorkflowInfo, WorkflowState,
};

pub fn init_logger() {
    env_logger::init();
}
