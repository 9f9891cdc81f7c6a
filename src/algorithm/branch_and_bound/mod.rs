//! # Branch and bound
//!
//! Integer and binary variables are handled by solving linear relaxations over a tree of
//! subproblems. Binary variables are branched on first, by fixing them at zero and one. Other
//! integer variables follow, by bounding them from above and below around their relaxed value.
//!
//! Nodes are evaluated by a pool of workers, or in the calling thread when the configuration asks
//! for zero workers.
use itertools::Itertools;

use crate::algorithm::Solve;
use crate::algorithm::branch_and_bound::frontier::{DepthFirst, Frontier};
use crate::algorithm::branch_and_bound::node::Node;
use crate::algorithm::branch_and_bound::search::Search;
use crate::config::SolverConfig;
use crate::data::linear_program::check_indices;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::error::{InconsistencyError, VariableKind};

pub mod explore;
pub mod frontier;
pub mod node;
pub mod search;

/// A linear program of which some variables need to take integer values.
#[derive(Clone, Debug, PartialEq)]
pub struct MixedIntegerProgram {
    lp: LinearProgram,
    /// Indices starting at 1, sorted and deduplicated.
    integer_variables: Vec<usize>,
    /// Indices starting at 1, sorted and deduplicated. These are integer and between 0 and 1.
    binary_variables: Vec<usize>,
}

impl MixedIntegerProgram {
    /// Create a new mixed integer program.
    ///
    /// # Arguments
    ///
    /// * `lp`: Linear program without the integrality constraints.
    /// * `integer_variables`: Indices, starting at 1, of the variables that need to be integer.
    /// * `binary_variables`: Indices, starting at 1, of the variables that need to be 0 or 1. These
    /// may also be listed as integer variables.
    ///
    /// # Return value
    ///
    /// The program, or an error if an index doesn't refer to a variable.
    pub fn new(
        lp: LinearProgram,
        integer_variables: &[usize],
        binary_variables: &[usize],
    ) -> Result<Self, InconsistencyError> {
        let nr_variables = lp.nr_variables();
        let integer_variables = check_indices(VariableKind::Integer, integer_variables, nr_variables)?;
        let binary_variables = check_indices(VariableKind::Binary, binary_variables, nr_variables)?;

        Ok(Self { lp, integer_variables, binary_variables })
    }

    /// The problem without integrality constraints.
    pub fn relaxation(&self) -> &LinearProgram {
        &self.lp
    }

    /// Variables to branch on, indexed from 0: the binary variables, then the remaining integers.
    fn branching_order(&self) -> Vec<usize> {
        self.binary_variables.iter()
            .chain(self.integer_variables.iter().filter(|variable| !self.binary_variables.contains(variable)))
            .map(|&variable| variable - 1)
            .collect()
    }

    /// Whether a row of the relaxation already implies that a binary variable is at most one.
    ///
    /// That is the case for a row `x_v + (other nonnegative terms) <= 1` (or `= 1`), that has no
    /// negative coefficients and doesn't involve free variables.
    fn has_implied_upper_bound(&self, variable: usize) -> bool {
        let lp = &self.lp;
        lp.constraints().iter()
            .zip(lp.constraint_types())
            .zip(lp.b())
            .any(|((row, &constraint_type), &rhs)| {
                rhs == 1_f64
                    && row[variable] == 1_f64
                    && constraint_type != ConstraintType::Greater
                    && !row.iter().enumerate().any(|(j, &coefficient)| {
                        coefficient < 0_f64
                            || (coefficient != 0_f64 && lp.free_variables().contains(&(j + 1)))
                    })
            })
    }

    /// The relaxation with an explicit upper bound for every binary variable that needs one.
    fn root(&self) -> LinearProgram {
        let mut lp = self.lp.clone();
        let bounds = self.binary_variables.iter()
            .map(|&variable| variable - 1)
            .filter(|&variable| !self.has_implied_upper_bound(variable))
            .collect::<Vec<_>>();
        for &variable in &bounds {
            lp.add_bound(variable, ConstraintType::Less, 1_f64);
        }
        if !bounds.is_empty() {
            log::debug!(
                "Added upper bounds for binary variables {}",
                bounds.iter().map(|variable| format!("x{}", variable + 1)).join(", "),
            );
        }

        lp
    }

    /// Solve, taking nodes from the frontier in the order of `FR`.
    ///
    /// # Return value
    ///
    /// The best solution satisfying all integrality constraints. Its iteration count is the number
    /// of nodes evaluated.
    pub fn solve_with_frontier<FR: Frontier>(&self, config: &SolverConfig) -> Solution {
        let order = self.branching_order();
        let search = Search::new(self.lp.objective(), order, self.binary_variables.len(), *config);
        let root = Node::root(self.root());

        let state = if config.threads == 0 {
            explore::sequential::<FR>(&search, root)
        } else {
            explore::parallel::<FR>(search.clone(), root, config.threads)
        };

        let solution = search.finish(state, self.lp.nr_variables(), self.lp.nr_constraints());
        log::debug!("Branch and bound finished: {solution}");
        solution
    }
}

impl Solve for MixedIntegerProgram {
    fn solve(&self, config: &SolverConfig) -> Solution {
        self.solve_with_frontier::<DepthFirst>(config)
    }
}
