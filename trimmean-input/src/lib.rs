#![warn(missing_docs)]
//! Trimmean Input - Parsing and Validation
//!
//! Gates raw user text before it reaches the calculator:
//! - Lenient parsing: malformed numbers become `NaN`, never an error
//! - Field-scoped validation that accumulates every applicable message
//! - A typed [`ValidInput`] that is the calculator's only checked entry point

mod parse;
mod raw;
mod validation;

pub use parse::{parse_array, parse_number_prefix, parse_numeric_field};
pub use raw::{DigitsPolicy, ParsedInput, RawInput};
pub use validation::{
    ARRAY_NOT_NUMERIC, ARRAY_TOO_SHORT, DIGITS_OUT_OF_RANGE, DIGITS_REQUIRED, Field,
    PERCENT_OUT_OF_RANGE, PERCENT_REQUIRED, ValidInput, ValidationErrors, check, compute_checked,
    validate,
};
