//! Single Submission
//!
//! Parses, validates and, when the input is clean, computes one report.

use trimmean_input::{DigitsPolicy, RawInput};
use trimmean_report::Report;

/// Evaluate one submission.
///
/// The calculator only runs when validation produced no messages.
pub fn submit(raw: &RawInput, policy: DigitsPolicy) -> Report {
    let parsed = raw.parse(policy);
    tracing::debug!(
        tokens = parsed.array.len(),
        percent = ?parsed.percent,
        digits = ?parsed.digits,
        "parsed submission"
    );

    match parsed.check() {
        Ok(input) => {
            let result = input.compute();
            tracing::debug!(
                trim_count = result.trim_count,
                kept = result.kept(),
                value = %result.formatted,
                "computed trimmed mean"
            );
            Report::computed(raw.clone(), result)
        }
        Err(errors) => {
            tracing::debug!(errors = errors.error_count(), "submission rejected");
            Report::invalid(raw.clone(), errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trimmean_input::{ARRAY_NOT_NUMERIC, ARRAY_TOO_SHORT, Field};

    #[test]
    fn test_valid_submission() {
        let report = submit(&RawInput::new("5,3,1,4,2", "40", "2"), DigitsPolicy::Required);
        let result = report.result().unwrap();
        assert_eq!(result.formatted, "3.00");
        assert_eq!(result.trimmed, vec![2.0, 3.0, 4.0]);
        assert_eq!(report.input.array, "5,3,1,4,2");
    }

    #[test]
    fn test_invalid_submission_keeps_every_message() {
        let report = submit(&RawInput::new("1,oops", "40", "2"), DigitsPolicy::Required);
        let errors = report.errors().unwrap();
        assert_eq!(
            errors.field(Field::Array),
            &[ARRAY_TOO_SHORT.to_string(), ARRAY_NOT_NUMERIC.to_string()]
        );
    }

    #[test]
    fn test_policy_default_digits() {
        let report = submit(&RawInput::new("1 2 3 4", "0", ""), DigitsPolicy::Default(1));
        assert_eq!(report.result().unwrap().formatted, "2.5");
    }
}
