use std::fmt;

use super::result::InvalidSoftmax;

/// Represents the different ways a submission attempt can fail.
///
/// Every variant is terminal for the current attempt; none are retried and
/// the workflow remains usable for a new attempt afterwards.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The input was rejected before any network activity took place.
    #[error("invalid submission: {0}")]
    Validation(#[from] MissingInput),
    /// The server answered with a non-success status.
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Transport(String),
    /// A previous submission is still awaiting its response.
    #[error("a submission is already in flight")]
    InFlight,
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

impl From<InvalidSoftmax> for SubmissionError {
    fn from(err: InvalidSoftmax) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

/// Identifies exactly which submission fields were missing.
///
/// A field is missing when the text is empty after trimming whitespace, or
/// when no image was selected at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingInput {
    pub text: bool,
    pub image: bool,
}

impl MissingInput {
    /// Returns true if at least one field is missing.
    pub fn any(&self) -> bool {
        self.text || self.image
    }
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.text, self.image) {
            (true, true) => write!(f, "text and image are missing"),
            (true, false) => write!(f, "text is missing"),
            (false, true) => write!(f, "image is missing"),
            (false, false) => write!(f, "nothing is missing"),
        }
    }
}

impl std::error::Error for MissingInput {}
