//! # Node evaluation
//!
//! Solving a single node and deciding what happens next: pruning it, accepting its solution as the
//! new incumbent or branching on it. Both the sequential and the parallel exploration go through
//! `Search::evaluate`.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::algorithm::Solve;
use crate::algorithm::branch_and_bound::node::{Branch, Node};
use crate::config::SolverConfig;
use crate::data::linear_program::elements::{BoundDirection, Objective};
use crate::data::linear_program::solution::{Solution, State};
use crate::data::number_types::float::numerical_precision::is_integral;

/// Everything about the search that doesn't change while exploring.
#[derive(Clone, Debug)]
pub struct Search {
    objective: Objective,
    /// Variables to branch on (indices from 0), one per level of the tree.
    order: Vec<usize>,
    /// The first levels branch on binary variables.
    nr_binary: usize,
    config: SolverConfig,
}

/// Everything about the search that is shared between the workers.
#[derive(Debug, Default)]
pub struct SearchState {
    /// Best solution satisfying all integrality constraints found so far.
    incumbent: Mutex<Option<Solution>>,
    unbounded: AtomicBool,
    iterations: AtomicUsize,
}

impl SearchState {
    /// Whether some relaxation was found to be unbounded.
    pub fn is_unbounded(&self) -> bool {
        self.unbounded.load(Ordering::Acquire)
    }

    /// Number of nodes evaluated so far.
    pub fn iterations(&self) -> usize {
        self.iterations.load(Ordering::Acquire)
    }

    /// Take the final results out of the state.
    pub fn into_incumbent(self) -> Option<Solution> {
        self.incumbent.into_inner()
    }

    /// Move the results into a new state, leaving this one without an incumbent.
    pub fn take(&self) -> Self {
        Self {
            incumbent: Mutex::new(self.incumbent.lock().take()),
            unbounded: AtomicBool::new(self.is_unbounded()),
            iterations: AtomicUsize::new(self.iterations()),
        }
    }
}

impl Search {
    /// Create the search context.
    ///
    /// # Arguments
    ///
    /// * `objective`: Direction of optimization, deciding which incumbent is better.
    /// * `order`: Binary variables, followed by the other integer variables, indexed from 0.
    /// * `nr_binary`: Number of binary variables at the start of `order`.
    /// * `config`: Used for every relaxation that is solved.
    pub fn new(objective: Objective, order: Vec<usize>, nr_binary: usize, config: SolverConfig) -> Self {
        debug_assert!(nr_binary <= order.len());

        Self { objective, order, nr_binary, config }
    }

    #[allow(missing_docs)]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve the relaxation of a node and decide on its children.
    ///
    /// # Arguments
    ///
    /// * `node`: Node that was taken from the frontier.
    /// * `state`: Incumbent and flags shared by all workers.
    ///
    /// # Return value
    ///
    /// The children that should be explored, empty if the node was pruned.
    pub fn evaluate(&self, mut node: Node, state: &SearchState) -> Vec<Node> {
        state.iterations.fetch_add(1, Ordering::AcqRel);
        let Some(lp) = node.take_lp() else {
            return Vec::new();
        };

        let mut solution = lp.solve(&self.config);
        for (variable, value) in node.fixings() {
            solution.x[variable] = value;
        }

        match solution.state {
            State::Solved => {},
            State::Unbounded => {
                log::debug!("Node {node} is unbounded, stopping the search");
                state.unbounded.store(true, Ordering::Release);
                return Vec::new();
            },
            other => {
                log::debug!("Node {node} pruned, relaxation has {other}");
                return Vec::new();
            },
        }

        {
            let mut incumbent = state.incumbent.lock();
            if let Some(best) = incumbent.as_ref() {
                if !self.objective.improves(solution.objective_value, best.objective_value) {
                    log::debug!(
                        "Node {node} pruned, bound {} doesn't improve on {}",
                        solution.objective_value, best.objective_value,
                    );
                    return Vec::new();
                }
            }
            if self.order.iter().all(|&variable| is_integral(solution.x[variable])) {
                log::debug!("Node {node} accepted with objective value {}", solution.objective_value);
                *incumbent = Some(solution);
                return Vec::new();
            }
        }

        if node.level() >= self.order.len() || state.is_unbounded() {
            return Vec::new();
        }
        let variable = self.order[node.level()];
        let binary = node.level() < self.nr_binary;
        let parent = Arc::new(node);

        if binary {
            log::debug!("Node {parent} branches on binary x{}", variable + 1);
            [(Branch::Left, 0_f64), (Branch::Right, 1_f64)].into_iter()
                .map(|(branch, value)| {
                    let mut child = lp.clone();
                    child.fix_variable(variable, value);
                    Node::child(&parent, branch, child, Some((variable, value)))
                })
                .collect()
        } else {
            let value = solution.x[variable];
            log::debug!("Node {parent} branches on x{} = {value}", variable + 1);
            [(Branch::Left, BoundDirection::Upper, value.floor()), (Branch::Right, BoundDirection::Lower, value.ceil())]
                .into_iter()
                .map(|(branch, direction, bound)| {
                    let mut child = lp.clone();
                    child.add_bound(variable, direction.constraint_type(), bound);
                    Node::child(&parent, branch, child, None)
                })
                .collect()
        }
    }

    /// Assemble the outcome of the search.
    ///
    /// # Arguments
    ///
    /// * `state`: State after all nodes were evaluated.
    /// * `nr_variables`: Number of variables of the problem.
    /// * `nr_constraints`: Number of constraints of the problem, before bounds were added.
    pub fn finish(&self, state: SearchState, nr_variables: usize, nr_constraints: usize) -> Solution {
        let iterations = state.iterations();
        if state.is_unbounded() {
            return Solution::unsolved(State::Unbounded, self.objective, nr_variables, iterations);
        }

        match state.into_incumbent() {
            Some(mut solution) => {
                solution.iterations = iterations;
                solution.shadow_price.truncate(nr_constraints);
                solution
            },
            None => Solution::unsolved(State::NoSolution, self.objective, nr_variables, iterations),
        }
    }
}
