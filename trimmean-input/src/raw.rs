//! Raw Form Input
//!
//! The three strings a user types, before any parsing.

use crate::parse::{parse_array, parse_numeric_field};
use crate::validation::{ValidInput, ValidationErrors, check, validate};
use serde::{Deserialize, Serialize};
use trimmean_stats::DEFAULT_DIGITS;

/// What to do when the digits field is left empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DigitsPolicy {
    /// An empty digits field is a validation error
    #[default]
    Required,
    /// An empty digits field falls back to this many places
    Default(u32),
}

impl DigitsPolicy {
    /// Policy that falls back to two decimal places
    pub fn with_default() -> Self {
        DigitsPolicy::Default(DEFAULT_DIGITS)
    }

    fn apply(self, digits: Option<f64>) -> Option<f64> {
        match (digits, self) {
            (None, DigitsPolicy::Default(n)) => Some(n as f64),
            (digits, _) => digits,
        }
    }
}

/// Unparsed user input for one submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawInput {
    /// Delimited list of numbers
    pub array: String,
    /// Total trim percentage
    pub percent: String,
    /// Rounding digits
    pub digits: String,
}

impl RawInput {
    /// Create raw input from the three field strings
    pub fn new(
        array: impl Into<String>,
        percent: impl Into<String>,
        digits: impl Into<String>,
    ) -> Self {
        Self {
            array: array.into(),
            percent: percent.into(),
            digits: digits.into(),
        }
    }

    /// Parse every field, applying `policy` to an empty digits field
    pub fn parse(&self, policy: DigitsPolicy) -> ParsedInput {
        ParsedInput {
            array: parse_array(&self.array),
            percent: parse_numeric_field(&self.percent),
            digits: policy.apply(parse_numeric_field(&self.digits)),
        }
    }
}

/// Parsed but not yet validated input
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// Parsed numbers, `NaN` marking tokens that failed to parse
    pub array: Vec<f64>,
    /// `None` when the field was empty
    pub percent: Option<f64>,
    /// `None` when the field was empty and no default applies
    pub digits: Option<f64>,
}

impl ParsedInput {
    /// Field-scoped validation messages
    pub fn validate(&self) -> ValidationErrors {
        validate(&self.array, self.percent, self.digits)
    }

    /// Consume into [`ValidInput`] or the accumulated errors
    pub fn check(self) -> Result<ValidInput, ValidationErrors> {
        check(self.array, self.percent, self.digits)
    }
}
