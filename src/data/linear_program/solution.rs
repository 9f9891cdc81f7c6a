//! # Representation of solutions
//!
//! Solving never fails with an error once a problem is accepted. Whether a solution was found is
//! described by the `State`; the values are only meaningful for `State::Solved`.
use std::fmt;

use itertools::Itertools;

use crate::data::linear_program::elements::Objective;

/// Progress of a solver.
///
/// A solver starts in `Zero`, is `Solving` while it runs and ends in one of the other three states.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum State {
    /// Nothing happened yet.
    Zero,
    /// Solving started, but hasn't finished.
    Solving,
    /// An optimal solution was found.
    Solved,
    /// The objective value can be improved without limit.
    Unbounded,
    /// No solution exists, or the simplex method got stuck cycling.
    NoSolution,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Zero => "zero",
            State::Solving => "solving",
            State::Solved => "solved",
            State::Unbounded => "unbounded",
            State::NoSolution => "no solution",
        })
    }
}

/// Outcome of solving a linear program, in terms of the variables and constraints of that program.
///
/// All values are rounded to the precision of the `SolverConfig` that was used.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// How solving ended.
    pub state: State,
    /// Direction of optimization of the problem that was solved.
    pub objective: Objective,
    /// Objective value including the constant, `NaN` when no solution was found.
    pub objective_value: f64,
    /// One value per variable, all zero when no solution was found.
    pub x: Vec<f64>,
    /// Pivots for a linear program, evaluated nodes for branch and bound.
    pub iterations: usize,
    /// Reduced cost of each variable.
    ///
    /// Expressed for the maximization problem that is solved internally: for a minimization
    /// problem, these are the reduced costs of the negated objective. Empty when not solved.
    pub reduced_cost: Vec<f64>,
    /// Shadow price of each constraint, in the same convention as `reduced_cost`.
    pub shadow_price: Vec<f64>,
}

impl Solution {
    /// A solution for a problem that couldn't be solved.
    pub(crate) fn unsolved(state: State, objective: Objective, nr_variables: usize, iterations: usize) -> Self {
        Self {
            state,
            objective,
            objective_value: f64::NAN,
            x: vec![0_f64; nr_variables],
            iterations,
            reduced_cost: Vec::new(),
            shadow_price: Vec::new(),
        }
    }

    /// Whether an optimal solution was found.
    pub fn is_solved(&self) -> bool {
        self.state == State::Solved
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} after {} iterations", self.state, self.iterations)?;
        if self.is_solved() {
            write!(f, ": {} {} at x = ({})", self.objective, self.objective_value, self.x.iter().join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::solution::{Solution, State};

    #[test]
    fn display() {
        let solution = Solution {
            state: State::Solved,
            objective: Objective::Maximize,
            objective_value: 65_f64,
            x: vec![8_f64, 3_f64],
            iterations: 7,
            reduced_cost: Vec::new(),
            shadow_price: Vec::new(),
        };
        assert_eq!(solution.to_string(), "solved after 7 iterations: max 65 at x = (8, 3)");

        let solution = Solution::unsolved(State::NoSolution, Objective::Minimize, 3, 2);
        assert_eq!(solution.to_string(), "no solution after 2 iterations");
        assert!(solution.objective_value.is_nan());
        assert_eq!(solution.x, vec![0_f64; 3]);
    }
}
