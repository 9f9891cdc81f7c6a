//! Helper methods for the accuracy of floating point calculations.

/// Round a value to a number of decimal digits.
///
/// Halfway cases are rounded away from zero. Values that are too large to be scaled are returned
/// as is, as they don't have any decimals to round.
///
/// # Arguments
///
/// * `value`: Value to round.
/// * `precision`: Number of decimal digits to keep.
///
/// # Return value
///
/// The multiple of `10^-precision` closest to `value`.
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let scale = 10_f64.powi(i32::try_from(precision).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / scale;
    // Avoid reporting "-0"
    if rounded == 0_f64 { 0_f64 } else { rounded }
}

/// Whether a value has no fractional part.
///
/// Meant for values that were rounded with `round_to_precision` before, such that values very
/// close to an integer have become that integer.
pub fn is_integral(value: f64) -> bool {
    value.floor() == value.ceil()
}
