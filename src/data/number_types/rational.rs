//! # Rational numbers
//!
//! Arbitrary precision rationals, used by the exact tableau backend. Pivoting with them never
//! loses precision, at the cost of numerators and denominators that may grow during long pivot
//! sequences.
//!
//! It appears that in practice, no fast solvers use rational numbers.
use std::str::FromStr;

use num::{BigInt, BigRational};
use num_traits::{ToPrimitive, Zero};

use crate::data::number_types::traits::Field;

/// Except for the finiteness of the machine, this is correct.
impl Field for BigRational {
    fn from_coefficient(value: f64) -> Self {
        from_decimal(value)
    }

    fn to_float(&self) -> f64 {
        ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}

/// Exact value of the shortest decimal representation of a float.
///
/// The conversion goes through the decimal text of the value, such that `0.1` becomes `1/10`
/// rather than the binary fraction closest to it. The coefficients that are provided by users are
/// typically written in decimal notation, so this is the value they meant.
///
/// # Arguments
///
/// * `value`: A finite float. Non-finite values have no rational value and map to zero.
fn from_decimal(value: f64) -> BigRational {
    debug_assert!(value.is_finite());

    // The `Display` implementation never uses scientific notation
    let text = value.to_string();
    let (integral, fractional) = text.split_once('.').unwrap_or((text.as_str(), ""));

    match BigInt::from_str(&format!("{integral}{fractional}")) {
        Ok(numerator) => {
            let denominator = num_traits::pow(BigInt::from(10), fractional.len());
            BigRational::new(numerator, denominator)
        },
        Err(_) => BigRational::zero(),
    }
}
