//! Fixed-Point Rounding
//!
//! Rounds to a number of decimal places with round-half-away-from-zero and
//! renders the result with exactly that many places.

/// Round `value` to `digits` decimal places, ties away from zero.
///
/// Returns `value` unchanged when scaling by `10^digits` would overflow.
/// A result of negative zero is normalized to `0.0`.
pub fn round_half_away(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format `value` with exactly `digits` decimal places.
///
/// # Examples
///
/// ```
/// # use trimmean_stats::format_fixed;
/// assert_eq!(format_fixed(3.0, 2), "3.00");
/// assert_eq!(format_fixed(2.5, 0), "3");
/// assert_eq!(format_fixed(-0.001, 2), "0.00");
/// ```
pub fn format_fixed(value: f64, digits: u32) -> String {
    format!("{:.*}", digits as usize, round_half_away(value, digits))
}
