//! JSON Output

use crate::report::{BatchReport, Report};

/// Generate a prettified JSON report for a single submission.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Generate a prettified JSON report for a batch run.
pub fn generate_json_batch(report: &BatchReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
