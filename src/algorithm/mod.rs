//! # Algorithms
use crate::config::SolverConfig;
use crate::data::linear_program::solution::Solution;

pub mod branch_and_bound;
pub mod relaxation;
pub mod simplex;

/// A problem formulation that can be solved.
///
/// Implemented for linear programs, solved with the simplex method, and for mixed integer
/// programs, solved with branch and bound over linear relaxations.
pub trait Solve {
    /// Solve this problem.
    ///
    /// # Arguments
    ///
    /// * `config`: Numeric backend, rounding precision, cycling threshold and number of workers.
    ///
    /// # Return value
    ///
    /// The outcome. Infeasibility and unboundedness are reported through its state.
    fn solve(&self, config: &SolverConfig) -> Solution;
}
