//! Output Formatting
//!
//! Human-readable output for submission and batch reports.
//!
//! Generates terminal-friendly output with:
//! - Status icons (✓ computed, ✗ invalid)
//! - One line per validation message, prefixed with its field
//! - The elements that survived trimming, when enabled

use trimmean_report::{BatchReport, MessageKind, Outcome, Report};

/// Format a single report for terminal display
///
/// # Arguments
/// * `report` - Submission report
/// * `show_trimmed` - Whether to list the elements that survived trimming
pub fn format_human_output(report: &Report, show_trimmed: bool) -> String {
    let mut output = String::new();
    write_report(&mut output, report, show_trimmed, "");
    output
}

fn write_report(output: &mut String, report: &Report, show_trimmed: bool, indent: &str) {
    match &report.outcome {
        Outcome::Computed { result } => {
            output.push_str(&format!("{}✓ {}\n", indent, result.formatted));
            if show_trimmed {
                // First message repeats the value shown above
                for message in report.messages().iter().skip(1) {
                    output.push_str(&format!("{}  {}\n", indent, message.text));
                }
            }
        }
        Outcome::Invalid { .. } => {
            for message in report.messages() {
                if message.kind != MessageKind::Error {
                    continue;
                }
                match message.field {
                    Some(field) => {
                        output.push_str(&format!("{}✗ {}: {}\n", indent, field, message.text))
                    }
                    None => output.push_str(&format!("{}✗ {}\n", indent, message.text)),
                }
            }
        }
    }
}

/// Format a batch report for terminal display
pub fn format_human_batch(report: &BatchReport, show_trimmed: bool) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("Trimmean Batch Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");

    for entry in &report.entries {
        output.push_str(&format!(
            "Line {}: [{}] percent={} digits={}\n",
            entry.line,
            entry.report.input.array,
            display_field(&entry.report.input.percent),
            display_field(&entry.report.input.digits),
        ));
        write_report(&mut output, &entry.report, show_trimmed, "  ");
    }

    output.push_str(&"-".repeat(60));
    output.push('\n');
    output.push_str(&format!(
        "{} submissions: {} computed, {} invalid\n",
        report.summary.total, report.summary.computed, report.summary.invalid
    ));

    output
}

fn display_field(value: &str) -> &str {
    if value.is_empty() { "(empty)" } else { value }
}
