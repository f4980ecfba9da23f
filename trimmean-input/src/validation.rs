//! Field Validation
//!
//! Checks parsed input before it reaches the calculator. Every applicable
//! message is accumulated per field, so a caller can show several problems at
//! once (a short array that also contains a non-number reports both).
//!
//! [`check`] is the only way to obtain a [`ValidInput`], which in turn is the
//! only input [`compute_checked`] accepts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trimmean_stats::{MAX_DIGITS, MAX_PERCENT, MIN_SAMPLES, TrimmedMean, compute_trimmed_mean};

/// Array has fewer than three elements
pub const ARRAY_TOO_SHORT: &str = "At least 3 numbers are required";
/// Array contains a token that did not parse as a finite number
pub const ARRAY_NOT_NUMERIC: &str = "Array must contain only numbers";
/// Percent field was left empty
pub const PERCENT_REQUIRED: &str = "Percent is required";
/// Percent is not a number or lies outside [0, 100]
pub const PERCENT_OUT_OF_RANGE: &str = "Percent must be between 0 and 100";
/// Digits field was left empty
pub const DIGITS_REQUIRED: &str = "Digits is required";
/// Digits is not a number or lies outside [0, 8]
pub const DIGITS_OUT_OF_RANGE: &str = "Digits must be between 0 and 8";

/// Input field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The delimited list of numbers
    Array,
    /// Total trim percentage
    Percent,
    /// Rounding digits
    Digits,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Array, Field::Percent, Field::Digits];

    /// Lowercase field name
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Array => "array",
            Field::Percent => "percent",
            Field::Digits => "digits",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-scoped validation messages.
///
/// Every field is always present; an empty list means the field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, Vec<String>>,
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self {
            fields: Field::ALL.iter().map(|&f| (f, Vec::new())).collect(),
        }
    }
}

impl ValidationErrors {
    /// Create an empty (valid) set of errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to `field`
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    /// Messages recorded for `field`, in the order they were added
    pub fn field(&self, field: Field) -> &[String] {
        self.fields.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `field` has no messages
    pub fn is_field_valid(&self, field: Field) -> bool {
        self.field(field).is_empty()
    }

    /// Whether every field is valid
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(Vec::is_empty)
    }

    /// Total number of messages across all fields
    pub fn error_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// All messages as `(field, message)` pairs in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.fields
            .iter()
            .flat_map(|(field, messages)| messages.iter().map(move |m| (*field, m.as_str())))
    }
}

/// Input that passed validation.
///
/// Fields are private so the calculator's preconditions cannot be bypassed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidInput {
    array: Vec<f64>,
    percent: f64,
    digits: u32,
}

impl ValidInput {
    /// Validated numbers, in input order
    pub fn array(&self) -> &[f64] {
        &self.array
    }

    /// Total trim percentage in `[0, 100]`
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Rounding digits in `[0, 8]`
    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Run the calculator on this input
    pub fn compute(&self) -> TrimmedMean {
        compute_checked(self)
    }
}

/// Validate parsed input, accumulating every applicable message per field.
pub fn validate(array: &[f64], percent: Option<f64>, digits: Option<f64>) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if array.len() < MIN_SAMPLES {
        errors.push(Field::Array, ARRAY_TOO_SHORT);
    }
    if array.iter().any(|x| !x.is_finite()) {
        errors.push(Field::Array, ARRAY_NOT_NUMERIC);
    }

    match percent {
        None => errors.push(Field::Percent, PERCENT_REQUIRED),
        Some(p) if !in_range(p, MAX_PERCENT) => errors.push(Field::Percent, PERCENT_OUT_OF_RANGE),
        Some(_) => {}
    }

    match digits {
        None => errors.push(Field::Digits, DIGITS_REQUIRED),
        Some(d) if !in_range(d, MAX_DIGITS as f64) => {
            errors.push(Field::Digits, DIGITS_OUT_OF_RANGE)
        }
        Some(_) => {}
    }

    errors
}

/// NaN is never in range
fn in_range(value: f64, max: f64) -> bool {
    (0.0..=max).contains(&value)
}

/// Validate and, when every field is clean, build a [`ValidInput`].
///
/// Fractional digits are truncated toward zero.
pub fn check(
    array: Vec<f64>,
    percent: Option<f64>,
    digits: Option<f64>,
) -> Result<ValidInput, ValidationErrors> {
    let errors = validate(&array, percent, digits);
    match (errors.is_valid(), percent, digits) {
        (true, Some(percent), Some(digits)) => Ok(ValidInput {
            array,
            percent,
            digits: digits.trunc() as u32,
        }),
        _ => Err(errors),
    }
}

/// Compute the trimmed mean of validated input
pub fn compute_checked(input: &ValidInput) -> TrimmedMean {
    compute_trimmed_mean(&input.array, input.percent, input.digits)
}
