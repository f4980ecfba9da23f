#![warn(missing_docs)]
//! Trimmean Report - Submission Reports
//!
//! Wraps calculator and validation output for display:
//! - Per-submission [`Report`] with the raw input echoed back
//! - Error/info [`Message`] lines for the presentation layer
//! - Batch reports with aggregate counts
//! - JSON (machine-readable) output

mod json;
mod report;

pub use json::{generate_json_batch, generate_json_report};
pub use report::{BatchEntry, BatchReport, BatchSummary, Message, MessageKind, Outcome, Report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// Human-readable terminal output
    #[default]
    Human,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
