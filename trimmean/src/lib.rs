#![warn(missing_docs)]
//! # Trimmean
//!
//! Trimmed arithmetic mean calculator: sort a sample, drop a symmetric share
//! of the lowest and highest values, average the rest and round the result.
//!
//! - **Lenient parsing**: commas, full-width commas and whitespace all
//!   delimit numbers; malformed tokens never abort, they fail validation
//! - **Accumulated validation**: every problem with every field is reported
//!   at once, keyed by field
//! - **Typed gate**: the calculator's checked entry point only accepts input
//!   that passed validation
//! - **CLI**: one-shot, interactive and parallel batch modes with human or
//!   JSON output
//!
//! ## Quick Start
//!
//! ```
//! use trimmean::{DigitsPolicy, RawInput};
//!
//! let input = RawInput::new("5, 3, 1, 4, 2", "40", "2")
//!     .parse(DigitsPolicy::Required)
//!     .check()
//!     .expect("valid input");
//! let result = input.compute();
//!
//! assert_eq!(result.formatted, "3.00");
//! assert_eq!(result.trimmed, vec![2.0, 3.0, 4.0]);
//! ```

// Re-export stats
pub use trimmean_stats::{
    DEFAULT_DIGITS, MAX_DIGITS, MAX_PERCENT, MIN_SAMPLES, TrimmedMean, compute_trimmed_mean,
    format_fixed, round_half_away, trim_count,
};

// Re-export input types
pub use trimmean_input::{
    DigitsPolicy, Field, ParsedInput, RawInput, ValidInput, ValidationErrors, check,
    compute_checked, parse_array, parse_numeric_field, validate,
};

// Re-export report types
pub use trimmean_report::{
    BatchReport, Message, MessageKind, Outcome, OutputFormat, Report, generate_json_report,
};

// Re-export the submit pipeline
pub use trimmean_cli::{TrimmeanConfig, submit};

/// Run the Trimmean CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() {
///     trimmean::run().unwrap();
/// }
/// ```
pub use trimmean_cli::run;
