use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification outcome reported by the detection service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Fake,
    Real,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Fake => "fake",
            Label::Real => "real",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a response's softmax pair is not a two-class probability
/// distribution.
#[derive(Debug, thiserror::Error)]
#[error("softmax pair [{fake}, {real}] is not a two-class probability distribution")]
pub struct InvalidSoftmax {
    pub fake: f64,
    pub real: f64,
}

/// A probability distribution over {fake, real}.
///
/// Index 0 of the wire pair is the fake-class probability, index 1 the
/// real-class probability. Both values are in [0, 1] and sum to 1.0 within
/// [`SUM_TOLERANCE`](Self::SUM_TOLERANCE); the constructor rejects anything
/// else.
///
/// # Example
/// ```
/// use newsprobe::SoftmaxPair;
///
/// let softmax = SoftmaxPair::new(0.8, 0.2)?;
/// assert_eq!(softmax.fake_percent(), "80.00%");
/// assert_eq!(softmax.real_percent(), "20.00%");
/// # Ok::<(), newsprobe::InvalidSoftmax>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoftmaxPair {
    fake: f64,
    real: f64,
}

impl SoftmaxPair {
    /// Tolerance allowed on the pair's sum.
    pub const SUM_TOLERANCE: f64 = 1e-3;

    pub fn new(fake: f64, real: f64) -> Result<Self, InvalidSoftmax> {
        let in_range = (0.0..=1.0).contains(&fake) && (0.0..=1.0).contains(&real);
        if !in_range || (fake + real - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(InvalidSoftmax { fake, real });
        }
        Ok(Self { fake, real })
    }

    pub fn fake(&self) -> f64 {
        self.fake
    }

    pub fn real(&self) -> f64 {
        self.real
    }

    /// The fake-class probability formatted as "NN.NN%".
    pub fn fake_percent(&self) -> String {
        format_percent(self.fake)
    }

    /// The real-class probability formatted as "NN.NN%".
    pub fn real_percent(&self) -> String {
        format_percent(self.real)
    }
}

fn format_percent(probability: f64) -> String {
    format!("{:.2}%", probability * 100.0)
}

/// Outcome of one successful submission.
///
/// One result exists per successful request; the workflow overwrites it on
/// the next success and clears it on reset.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub label: Label,
    pub softmax: SoftmaxPair,
    /// Wall-clock duration of the full round trip in seconds, rounded to
    /// two decimal places. Display-only.
    pub elapsed_seconds: f64,
}

impl PredictionResult {
    pub fn new(label: Label, softmax: SoftmaxPair, elapsed_seconds: f64) -> Self {
        Self {
            label,
            softmax,
            elapsed_seconds: round_to_hundredths(elapsed_seconds.max(0.0)),
        }
    }
}

fn round_to_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}

/// The percentage strings of an exported result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSoftmax {
    pub fake: String,
    pub real: String,
}

/// Downloadable JSON snapshot of the most recent result.
///
/// Serializes to the documented export layout: `text_input`,
/// `predicted_label`, `softmax` with percent strings, and
/// `prediction_time_seconds` with two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub text_input: String,
    pub predicted_label: String,
    pub softmax: ExportSoftmax,
    pub prediction_time_seconds: String,
}

impl ExportArtifact {
    /// File name suggested for saved artifacts.
    pub const DEFAULT_FILENAME: &'static str = "detection_result.json";

    pub fn new(text_input: &str, result: &PredictionResult) -> Self {
        Self {
            text_input: text_input.to_owned(),
            predicted_label: result.label.as_str().to_owned(),
            softmax: ExportSoftmax {
                fake: result.softmax.fake_percent(),
                real: result.softmax.real_percent(),
            },
            prediction_time_seconds: format!("{:.2}", result.elapsed_seconds),
        }
    }

    /// Pretty-prints the artifact with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_formatting() {
        let softmax = SoftmaxPair::new(0.8, 0.2).unwrap();
        assert_eq!(softmax.fake_percent(), "80.00%");
        assert_eq!(softmax.real_percent(), "20.00%");

        let softmax = SoftmaxPair::new(0.1, 0.9).unwrap();
        assert_eq!(softmax.fake_percent(), "10.00%");
        assert_eq!(softmax.real_percent(), "90.00%");

        let softmax = SoftmaxPair::new(0.12345, 0.87655).unwrap();
        assert_eq!(softmax.fake_percent(), "12.35%");
    }

    #[test]
    fn test_softmax_rejects_bad_sum() {
        assert!(SoftmaxPair::new(0.8, 0.8).is_err());
        assert!(SoftmaxPair::new(0.1, 0.1).is_err());
    }

    #[test]
    fn test_softmax_rejects_out_of_range() {
        assert!(SoftmaxPair::new(-0.1, 1.1).is_err());
        assert!(SoftmaxPair::new(1.5, -0.5).is_err());
    }

    #[test]
    fn test_softmax_allows_float_tolerance() {
        assert!(SoftmaxPair::new(0.3333, 0.6667).is_ok());
        assert!(SoftmaxPair::new(0.50001, 0.49999).is_ok());
    }

    #[test]
    fn test_elapsed_is_rounded() {
        let softmax = SoftmaxPair::new(0.5, 0.5).unwrap();
        let result = PredictionResult::new(Label::Fake, softmax, 1.23456);
        assert_eq!(result.elapsed_seconds, 1.23);

        let result = PredictionResult::new(Label::Fake, softmax, 0.005);
        assert_eq!(result.elapsed_seconds, 0.01);
    }

    #[test]
    fn test_label_serde_names() {
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"fake\"");
        let label: Label = serde_json::from_str("\"real\"").unwrap();
        assert_eq!(label, Label::Real);
    }

    #[test]
    fn test_export_layout() {
        let softmax = SoftmaxPair::new(0.8, 0.2).unwrap();
        let result = PredictionResult::new(Label::Fake, softmax, 1.5);
        let artifact = ExportArtifact::new("some headline", &result);

        assert_eq!(artifact.text_input, "some headline");
        assert_eq!(artifact.predicted_label, "fake");
        assert_eq!(artifact.softmax.fake, "80.00%");
        assert_eq!(artifact.softmax.real, "20.00%");
        assert_eq!(artifact.prediction_time_seconds, "1.50");
    }

    #[test]
    fn test_export_json_round_trip() {
        let softmax = SoftmaxPair::new(0.25, 0.75).unwrap();
        let result = PredictionResult::new(Label::Real, softmax, 0.42);
        let artifact = ExportArtifact::new("trusted report", &result);

        let bytes = artifact.to_pretty_json().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        // Two-space indentation on nested keys.
        assert!(text.contains("\n  \"text_input\""));

        let parsed: ExportArtifact = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, artifact);
    }
}
