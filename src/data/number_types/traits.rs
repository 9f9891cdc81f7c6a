//! # Traits
//!
//! The field the simplex method works in. The contract is "mathematically exact", but not every
//! implementation keeps it: `f64` arithmetic rounds after every operation. That is a fundamental
//! property of finite representations; the rational implementation doesn't suffer from it.
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Zero};

/// Basic field operations with Self and with references to Self.
///
/// All methods containing pivoting logic are defined over this trait. The ordering is partial only
/// because of `f64`; the solver never produces `NaN` values from finite input.
pub trait Field:
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    One + // Multiplicative identity
    Neg<Output=Self> + // Additive inverse
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
    Send +
    Sync +
    'static
{
    /// Create a field element from a finite input coefficient.
    ///
    /// # Arguments
    ///
    /// * `value`: A finite float, as provided by the user of the crate.
    fn from_coefficient(value: f64) -> Self;

    /// Closest `f64` approximation of this value.
    ///
    /// Used when results leave the solver, after which they are rounded to a decimal precision.
    fn to_float(&self) -> f64;

    /// Replace a value that carries no information by zero.
    ///
    /// Only floating point arithmetic can produce such values (overflowing intermediate results).
    fn or_zero_if_undefined(self) -> Self {
        self
    }
}

/// A reference to a variable that is in a `Field`.
///
/// Used in the inner loops of the tableau implementations, such that arbitrary precision values
/// are not cloned for every multiplication.
pub trait FieldRef<Deref>:
    Neg<Output=Deref> + // Additive inverse
    Add<Self, Output=Deref> +
    Sub<Self, Output=Deref> +
    Mul<Self, Output=Deref> +
    Div<Self, Output=Deref> +
    // Necessary for the operator traits. References are sized anyways.
    Sized
{
}

impl<T, Deref> FieldRef<Deref> for T
where
    T: Neg<Output=Deref> + Add<Output=Deref> + Sub<Output=Deref> + Mul<Output=Deref> + Div<Output=Deref>,
{
}
