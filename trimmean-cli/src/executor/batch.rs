//! Batch Evaluation
//!
//! A batch file holds one submission per line as `ARRAY; PERCENT; DIGITS`.
//! Missing trailing fields are empty. Blank lines and `#` comments are skipped.
//!
//! Submissions are independent, so they are evaluated in parallel with Rayon.
//! Output keeps file order.

use super::submit::submit;
use rayon::prelude::*;
use thiserror::Error;
use trimmean_input::{DigitsPolicy, RawInput};
use trimmean_report::{BatchEntry, BatchReport};

/// Field separator within a batch line
pub const FIELD_SEPARATOR: char = ';';

/// Errors in the structure of a batch file
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// A line splits into more than `ARRAY; PERCENT; DIGITS`
    #[error("line {line}: expected at most 3 fields separated by ';', found {found}")]
    TooManyFields {
        /// 1-based line number
        line: usize,
        /// Number of fields on the line
        found: usize,
    },

    /// Only blank lines and comments
    #[error("batch file contains no submissions")]
    NoSubmissions,
}

/// Split batch text into `(line number, raw input)` pairs
pub fn parse_batch(text: &str) -> Result<Vec<(usize, RawInput)>, BatchError> {
    let mut submissions = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(FIELD_SEPARATOR).map(str::trim).collect();
        if fields.len() > 3 {
            return Err(BatchError::TooManyFields {
                line: idx + 1,
                found: fields.len(),
            });
        }

        let field = |i: usize| fields.get(i).copied().unwrap_or("");
        submissions.push((idx + 1, RawInput::new(field(0), field(1), field(2))));
    }

    if submissions.is_empty() {
        return Err(BatchError::NoSubmissions);
    }
    Ok(submissions)
}

/// Evaluate every submission (parallelized with Rayon)
pub fn run_batch(submissions: &[(usize, RawInput)], policy: DigitsPolicy) -> BatchReport {
    let entries: Vec<BatchEntry> = submissions
        .par_iter()
        .map(|(line, raw)| BatchEntry {
            line: *line,
            report: submit(raw, policy),
        })
        .collect();

    let report = BatchReport::new(entries);
    tracing::info!(
        total = report.summary.total,
        computed = report.summary.computed,
        invalid = report.summary.invalid,
        "batch evaluated"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_lines() {
        let text = "# header\n5,3,1,4,2; 40; 2\n\n1 2 3 ; 100\n  1，2，3，4;0;1  \n";
        let submissions = parse_batch(text).unwrap();

        assert_eq!(submissions.len(), 3);
        assert_eq!(submissions[0], (2, RawInput::new("5,3,1,4,2", "40", "2")));
        assert_eq!(submissions[1], (4, RawInput::new("1 2 3", "100", "")));
        assert_eq!(submissions[2], (5, RawInput::new("1，2，3，4", "0", "1")));
    }

    #[test]
    fn test_too_many_fields() {
        let err = parse_batch("1,2,3;10;2\n1,2,3;10;2;extra\n").unwrap_err();
        assert_eq!(err, BatchError::TooManyFields { line: 2, found: 4 });
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn test_no_submissions() {
        assert_eq!(parse_batch("# nothing\n\n"), Err(BatchError::NoSubmissions));
    }

    #[test]
    fn test_run_batch_preserves_order() {
        let submissions: Vec<(usize, RawInput)> = (1..=50)
            .map(|i| (i, RawInput::new(format!("{i},{i},{i}"), "0", "0")))
            .collect();
        let report = run_batch(&submissions, DigitsPolicy::Required);

        assert!(report.all_valid());
        for (i, entry) in report.entries.iter().enumerate() {
            assert_eq!(entry.line, i + 1);
            assert_eq!(entry.report.result().unwrap().formatted, (i + 1).to_string());
        }
    }

    #[test]
    fn test_run_batch_mixed() {
        let submissions = parse_batch("1,2,3;50;2\n1,2;50;2\n1,2,3\n").unwrap();
        let report = run_batch(&submissions, DigitsPolicy::with_default());

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.computed, 1);
        assert_eq!(report.summary.invalid, 2);
    }
}
