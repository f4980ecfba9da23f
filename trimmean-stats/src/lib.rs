#![warn(missing_docs)]
//! Trimmean Statistical Engine
//!
//! Computes the symmetric trimmed arithmetic mean of a sample:
//! - Sorting and tail trimming driven by a total trim percentage
//! - Arithmetic mean of the surviving elements
//! - Fixed-point rounding with round-half-away-from-zero semantics
//!
//! Inputs are expected to be validated by the caller (see `trimmean-input`).

mod rounding;
mod trimmed;

pub use rounding::{format_fixed, round_half_away};
pub use trimmed::{TrimmedMean, compute_trimmed_mean, trim_count};

/// Minimum number of samples a trimmed mean is computed over
pub const MIN_SAMPLES: usize = 3;

/// Upper bound of the total trim percentage
pub const MAX_PERCENT: f64 = 100.0;

/// Largest supported number of decimal places
pub const MAX_DIGITS: u32 = 8;

/// Decimal places used when a caller allows the digits field to be omitted
pub const DEFAULT_DIGITS: u32 = 2;
