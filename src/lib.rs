//! # A linear and mixed integer program solver
//!
//! Linear programs are solved using the Simplex Method as described in the book Combinatorial
//! Optimization by Christos H. Papadimitriou and Kenneth Steiglitz. Integer and binary variables
//! are handled by branch and bound, optionally exploring the tree with a pool of workers.
//!
//! ```
//! use mipsolve::{ConstraintType, LinearProgram, MixedIntegerProgram, Objective, Solve, SolverConfig, State};
//!
//! let lp = LinearProgram::new(
//!     Objective::Maximize,
//!     4_f64,
//!     vec![5_f64, 7_f64],
//!     vec![vec![1_f64, 1_f64], vec![4_f64, 9_f64]],
//!     vec![ConstraintType::Less, ConstraintType::Less],
//!     vec![11_f64, 61_f64],
//!     &[],
//! )?;
//! let solution = MixedIntegerProgram::new(lp, &[1, 2], &[])?.solve(&SolverConfig::default());
//!
//! assert_eq!(solution.state, State::Solved);
//! assert_eq!(solution.objective_value, 65_f64);
//! assert_eq!(solution.x, vec![8_f64, 3_f64]);
//! # Ok::<(), mipsolve::InconsistencyError>(())
//! ```
#![warn(missing_docs)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod algorithm;
pub mod config;
pub mod data;
pub mod error;

pub use crate::algorithm::Solve;
pub use crate::algorithm::branch_and_bound::MixedIntegerProgram;
pub use crate::algorithm::branch_and_bound::frontier::{BreadthFirst, DepthFirst, Frontier};
pub use crate::algorithm::simplex::Simplex;
pub use crate::config::{Backend, SolverConfig};
pub use crate::data::linear_program::elements::{ConstraintType, Objective};
pub use crate::data::linear_program::general_form::LinearProgram;
pub use crate::data::linear_program::solution::{Solution, State};
pub use crate::error::{ConfigError, InconsistencyError};

#[cfg(test)]
mod tests;
