//! Trimmed Mean
//!
//! Sorts the sample, drops `trim_count` elements from each tail and averages
//! what is left.
//!
//! The trim count is derived from the TOTAL percentage halved and then
//! floored, never from each tail independently: 10% of 11 elements gives
//! `floor(0.55) = 0`, so nothing is dropped.

use crate::rounding::{format_fixed, round_half_away};
use serde::{Deserialize, Serialize};

/// Result of a trimmed mean computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimmedMean {
    /// Mean of the surviving elements, rounded to `digits` places
    pub value: f64,
    /// Unrounded mean of the surviving elements (0.0 when none survive)
    pub mean: f64,
    /// `value` rendered with exactly `digits` decimal places
    pub formatted: String,
    /// Decimal places used for rounding
    pub digits: u32,
    /// Elements removed from EACH tail
    pub trim_count: usize,
    /// Number of elements before trimming
    pub input_len: usize,
    /// Surviving elements, sorted ascending
    pub trimmed: Vec<f64>,
}

impl TrimmedMean {
    /// Number of elements that survived trimming
    pub fn kept(&self) -> usize {
        self.trimmed.len()
    }

    /// Whether trimming removed every element
    pub fn is_empty(&self) -> bool {
        self.trimmed.is_empty()
    }

    /// One-line description, e.g. `3.00 (kept 3 of 5: 2, 3, 4)`
    pub fn summary(&self) -> String {
        if self.trimmed.is_empty() {
            return format!("{} (kept 0 of {})", self.formatted, self.input_len);
        }
        let kept: Vec<String> = self.trimmed.iter().map(|x| x.to_string()).collect();
        format!(
            "{} (kept {} of {}: {})",
            self.formatted,
            self.kept(),
            self.input_len,
            kept.join(", ")
        )
    }
}

impl std::fmt::Display for TrimmedMean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Number of elements to drop from each tail: `floor(len * percent / 100 / 2)`
pub fn trim_count(len: usize, percent: f64) -> usize {
    let raw = (len as f64 * percent / 100.0 / 2.0).floor();
    if raw.is_finite() && raw > 0.0 {
        raw as usize
    } else {
        0
    }
}

/// Compute the trimmed mean of `samples`.
///
/// Callers must uphold: at least 3 finite samples, `percent` in `[0, 100]`,
/// `digits` in `[0, 8]`. When trimming removes every element the value is
/// exactly zero, still rendered with `digits` places.
///
/// # Examples
///
/// ```
/// # use trimmean_stats::compute_trimmed_mean;
/// let result = compute_trimmed_mean(&[5.0, 3.0, 1.0, 4.0, 2.0], 40.0, 2);
/// assert_eq!(result.formatted, "3.00");
/// assert_eq!(result.trimmed, vec![2.0, 3.0, 4.0]);
/// ```
pub fn compute_trimmed_mean(samples: &[f64], percent: f64, digits: u32) -> TrimmedMean {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let count = trim_count(n, percent);

    let trimmed = if count * 2 >= n {
        Vec::new()
    } else {
        sorted[count..n - count].to_vec()
    };

    let mean = if trimmed.is_empty() {
        0.0
    } else {
        trimmed.iter().sum::<f64>() / trimmed.len() as f64
    };

    TrimmedMean {
        value: round_half_away(mean, digits),
        mean,
        formatted: format_fixed(mean, digits),
        digits,
        trim_count: count,
        input_len: n,
        trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic_trim() {
        let result = compute_trimmed_mean(&[5.0, 3.0, 1.0, 4.0, 2.0], 40.0, 2);

        assert_eq!(result.trim_count, 1);
        assert_eq!(result.trimmed, vec![2.0, 3.0, 4.0]);
        assert!((result.value - 3.0).abs() < f64::EPSILON);
        assert_eq!(result.formatted, "3.00");
    }

    #[test]
    fn test_zero_percent_keeps_everything() {
        let result = compute_trimmed_mean(&[1.0, 2.0, 3.0, 10.0], 0.0, 1);

        assert_eq!(result.trim_count, 0);
        assert_eq!(result.kept(), 4);
        assert_eq!(result.formatted, "4.0");
    }

    #[test]
    fn test_percent_is_halved_before_flooring() {
        // 11 * 10 / 100 / 2 = 0.55
        let samples: Vec<f64> = (1..=11).map(|x| x as f64).collect();
        assert_eq!(trim_count(samples.len(), 10.0), 0);

        let result = compute_trimmed_mean(&samples, 10.0, 2);
        assert_eq!(result.kept(), 11);
        assert_eq!(result.formatted, "6.00");
    }

    #[test]
    fn test_full_trim_of_odd_length_keeps_middle() {
        // floor(3 * 100 / 100 / 2) = 1, one element off each end of three
        let result = compute_trimmed_mean(&[1.0, 2.0, 3.0], 100.0, 2);

        assert_eq!(result.trim_count, 1);
        assert_eq!(result.trimmed, vec![2.0]);
        assert_eq!(result.formatted, "2.00");
    }

    #[test]
    fn test_full_trim_of_even_length_is_empty() {
        let result = compute_trimmed_mean(&[1.0, 2.0, 3.0, 4.0], 100.0, 3);

        assert_eq!(result.trim_count, 2);
        assert!(result.is_empty());
        assert_eq!(result.value, 0.0);
        assert_eq!(result.formatted, "0.000");
    }

    #[test]
    fn test_empty_fallback_with_zero_digits() {
        let result = compute_trimmed_mean(&[8.0, 9.0, 1.0, 2.0], 100.0, 0);
        assert_eq!(result.formatted, "0");
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let result = compute_trimmed_mean(&[-4.0, 2.0, 2.0, 2.0, 100.0], 40.0, 2);

        assert_eq!(result.trimmed, vec![2.0, 2.0, 2.0]);
        assert_eq!(result.formatted, "2.00");
    }

    #[test]
    fn test_rounding_to_digits() {
        let result = compute_trimmed_mean(&[1.0, 1.0, 2.0], 0.0, 3);

        assert!((result.mean - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.formatted, "1.333");
        assert!((result.value - 1.333).abs() < 1e-12);
    }

    #[test]
    fn test_summary_lists_kept_elements() {
        let result = compute_trimmed_mean(&[5.0, 3.0, 1.0, 4.0, 2.5], 40.0, 2);
        assert_eq!(result.summary(), "3.17 (kept 3 of 5: 2.5, 3, 4)");

        let empty = compute_trimmed_mean(&[1.0, 2.0, 3.0, 4.0], 100.0, 2);
        assert_eq!(empty.summary(), "0.00 (kept 0 of 4)");
        assert_eq!(empty.to_string(), "0.00");
    }

    proptest! {
        #[test]
        fn prop_idempotent(
            samples in prop::collection::vec(-1.0e6f64..1.0e6, 3..64),
            percent in 0.0f64..=100.0,
            digits in 0u32..=8,
        ) {
            let first = compute_trimmed_mean(&samples, percent, digits);
            let second = compute_trimmed_mean(&samples, percent, digits);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_formatted_round_trips_within_precision(
            samples in prop::collection::vec(-1.0e6f64..1.0e6, 3..64),
            percent in 0.0f64..=100.0,
            digits in 0u32..=8,
        ) {
            let result = compute_trimmed_mean(&samples, percent, digits);
            let parsed: f64 = result.formatted.parse().unwrap();
            prop_assert!((parsed - result.mean).abs() <= 10f64.powi(-(digits as i32)));
        }

        #[test]
        fn prop_trims_symmetrically(
            samples in prop::collection::vec(-1.0e3f64..1.0e3, 3..64),
            percent in 0.0f64..=100.0,
        ) {
            let result = compute_trimmed_mean(&samples, percent, 2);
            let expected = samples.len().saturating_sub(2 * result.trim_count);
            prop_assert_eq!(result.kept(), expected);
            prop_assert!(result.trimmed.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
