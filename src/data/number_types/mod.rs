//! # Number types
//!
//! The simplex method is written once, over an abstract ordered field. This module defines that
//! field and provides the two implementations the solver is instantiated with: plain `f64` values
//! and exact rational numbers.
//!
//! A benefit of this approach is that the same pivoting code can run without round-off (useful on
//! degenerate problems and for testing), while the fast floating point variant is the default.
pub mod traits;
pub mod rational;
pub mod float;
