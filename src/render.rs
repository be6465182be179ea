//! Terminal presentation of a prediction: verdict line, percentage figures,
//! elapsed time, and a proportional two-segment chart.

use crate::workflow::{Label, PredictionResult, SoftmaxPair};

/// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
}

use colors::*;

/// Width of the proportional chart in cells.
pub const CHART_WIDTH: usize = 40;

/// The human-readable classification outcome, colored by class.
pub fn verdict_line(label: Label) -> String {
    match label {
        Label::Fake => format!("🛑 {RED}{BOLD}Fake News Detected{RESET}"),
        Label::Real => format!("✅ {GREEN}{BOLD}News Appears Real{RESET}"),
    }
}

/// A red error message for failed attempts.
pub fn error_line(message: &str) -> String {
    format!("{RED}Error: {message}{RESET}")
}

/// A two-segment proportional chart of the distribution, fake cells in red
/// and real cells in green, with a percentage legend.
pub fn proportion_chart(softmax: &SoftmaxPair) -> String {
    let (fake_cells, real_cells) = segment_widths(softmax, CHART_WIDTH);
    format!(
        "{RED}{}{GREEN}{}{RESET}\n{DIM}Fake {}   Real {}{RESET}",
        "█".repeat(fake_cells),
        "█".repeat(real_cells),
        softmax.fake_percent(),
        softmax.real_percent(),
    )
}

fn segment_widths(softmax: &SoftmaxPair, width: usize) -> (usize, usize) {
    let fake = ((softmax.fake() * width as f64).round() as usize).min(width);
    (fake, width - fake)
}

/// The full result block: verdict, percentages, elapsed time and chart.
pub fn result_summary(result: &PredictionResult) -> String {
    format!(
        "{}\nFake: {}\nReal: {}\n🕒 Prediction time: {:.2} seconds\n{}",
        verdict_line(result.label),
        result.softmax.fake_percent(),
        result.softmax.real_percent(),
        result.elapsed_seconds,
        proportion_chart(&result.softmax),
    )
}
