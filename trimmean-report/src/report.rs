//! Report Data Structures

use serde::{Deserialize, Serialize};
use trimmean_input::{Field, RawInput, ValidationErrors};
use trimmean_stats::TrimmedMean;

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    /// Input was valid and the trimmed mean was computed
    Computed {
        /// Calculator output
        result: TrimmedMean,
    },
    /// Input was rejected; the calculator did not run
    Invalid {
        /// Field-scoped validation messages
        errors: ValidationErrors,
    },
}

/// Severity of a display message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Something the user has to fix
    Error,
    /// Informational line about a computed result
    Info,
}

/// A single line to show the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Error or info
    pub kind: MessageKind,
    /// Field the message refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    /// Text shown to the user
    pub text: String,
}

impl Message {
    /// Error message scoped to `field`
    pub fn error(field: Field, text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            field: Some(field),
            text: text.into(),
        }
    }

    /// Informational message
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            field: None,
            text: text.into(),
        }
    }
}

/// Complete report for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The raw strings as the user entered them
    pub input: RawInput,
    /// Result or validation errors, tagged by `status`
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Report {
    /// Report for a computed result
    pub fn computed(input: RawInput, result: TrimmedMean) -> Self {
        Self {
            input,
            outcome: Outcome::Computed { result },
        }
    }

    /// Report for rejected input
    pub fn invalid(input: RawInput, errors: ValidationErrors) -> Self {
        Self {
            input,
            outcome: Outcome::Invalid { errors },
        }
    }

    /// Whether the calculator produced a result
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Computed { .. })
    }

    /// Computed result, if any
    pub fn result(&self) -> Option<&TrimmedMean> {
        match &self.outcome {
            Outcome::Computed { result } => Some(result),
            Outcome::Invalid { .. } => None,
        }
    }

    /// Validation errors, if any
    pub fn errors(&self) -> Option<&ValidationErrors> {
        match &self.outcome {
            Outcome::Computed { .. } => None,
            Outcome::Invalid { errors } => Some(errors),
        }
    }

    /// Display lines: one error per validation message, or info lines
    /// describing the result
    pub fn messages(&self) -> Vec<Message> {
        match &self.outcome {
            Outcome::Invalid { errors } => errors
                .iter()
                .map(|(field, text)| Message::error(field, text))
                .collect(),
            Outcome::Computed { result } => {
                let mut messages = vec![Message::info(format!("Trimmed mean: {}", result))];
                if result.is_empty() {
                    messages.push(Message::info(format!(
                        "All {} values were trimmed",
                        result.input_len
                    )));
                } else {
                    let kept: Vec<String> = result.trimmed.iter().map(|x| x.to_string()).collect();
                    messages.push(Message::info(format!(
                        "Kept {} of {} values ({} trimmed from each end): {}",
                        result.kept(),
                        result.input_len,
                        result.trim_count,
                        kept.join(", ")
                    )));
                }
                messages
            }
        }
    }
}

/// One line of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based line number in the batch file
    pub line: usize,
    /// Report for that line
    pub report: Report,
}

/// Aggregate counts for a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Submissions in the file
    pub total: usize,
    /// Submissions that produced a result
    pub computed: usize,
    /// Submissions rejected by validation
    pub invalid: usize,
}

/// Reports for every submission in a batch file, in file order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// One entry per submission
    pub entries: Vec<BatchEntry>,
    /// Counts over `entries`
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Build a batch report and its summary
    pub fn new(entries: Vec<BatchEntry>) -> Self {
        let computed = entries.iter().filter(|e| e.report.is_valid()).count();
        let summary = BatchSummary {
            total: entries.len(),
            computed,
            invalid: entries.len() - computed,
        };
        Self { entries, summary }
    }

    /// Whether every submission was valid
    pub fn all_valid(&self) -> bool {
        self.summary.invalid == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimmean_input::{ARRAY_TOO_SHORT, DigitsPolicy, PERCENT_REQUIRED};
    use trimmean_stats::compute_trimmed_mean;

    fn computed_report() -> Report {
        let input = RawInput::new("5,3,1,4,2", "40", "2");
        Report::computed(input, compute_trimmed_mean(&[5.0, 3.0, 1.0, 4.0, 2.0], 40.0, 2))
    }

    #[test]
    fn test_computed_messages() {
        let messages = computed_report().messages();
        assert_eq!(messages.len(), 2);
        assert!(messages.iter().all(|m| m.kind == MessageKind::Info));
        assert_eq!(messages[0].text, "Trimmed mean: 3.00");
        assert_eq!(
            messages[1].text,
            "Kept 3 of 5 values (1 trimmed from each end): 2, 3, 4"
        );
    }

    #[test]
    fn test_invalid_messages_carry_fields() {
        let raw = RawInput::new("1,2", "", "2");
        let errors = raw.parse(DigitsPolicy::Required).validate();
        let report = Report::invalid(raw, errors);

        assert!(!report.is_valid());
        assert!(report.result().is_none());
        assert_eq!(
            report.messages(),
            vec![
                Message::error(Field::Array, ARRAY_TOO_SHORT),
                Message::error(Field::Percent, PERCENT_REQUIRED),
            ]
        );
    }

    #[test]
    fn test_empty_result_message() {
        let input = RawInput::new("1,2,3,4", "100", "2");
        let report = Report::computed(input, compute_trimmed_mean(&[1.0, 2.0, 3.0, 4.0], 100.0, 2));
        let messages = report.messages();
        assert_eq!(messages[0].text, "Trimmed mean: 0.00");
        assert_eq!(messages[1].text, "All 4 values were trimmed");
    }

    #[test]
    fn test_batch_summary() {
        let errors = RawInput::default().parse(DigitsPolicy::Required).validate();
        let invalid = Report::invalid(RawInput::default(), errors);
        let batch = BatchReport::new(vec![
            BatchEntry {
                line: 1,
                report: computed_report(),
            },
            BatchEntry {
                line: 3,
                report: invalid,
            },
        ]);

        assert_eq!(batch.summary.total, 2);
        assert_eq!(batch.summary.computed, 1);
        assert_eq!(batch.summary.invalid, 1);
        assert!(!batch.all_valid());
    }
}
