//! # Floating point numbers
//!
//! Assumed to have a better performance than rational numbers in the simplex algorithm. Correctness
//! guarantees are harder to give due to (accumulating) rounding errors; results are rounded to a
//! fixed number of decimals before they are reported, see `numerical_precision`.
use crate::data::number_types::traits::Field;

pub mod numerical_precision;

impl Field for f64 {
    fn from_coefficient(value: f64) -> Self {
        value
    }

    fn to_float(&self) -> f64 {
        *self
    }

    fn or_zero_if_undefined(self) -> Self {
        if self.is_nan() { 0_f64 } else { self }
    }
}
