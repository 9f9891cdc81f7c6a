//! A negative right hand side remains once no column improves the objective, which is repaired by a
//! dual pivot.
//!
//! min 2 x1 + x2
//! s.t. 5 x1 - x2 >= 2
//!      -3 x1 + 2 x2 >= -1
use crate::algorithm::Solve;
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::State;
use crate::tests::{configs, init_logging};

fn general_form() -> LinearProgram {
    LinearProgram::new(
        Objective::Minimize,
        0_f64,
        vec![2_f64, 1_f64],
        vec![vec![5_f64, -1_f64], vec![-3_f64, 2_f64]],
        vec![ConstraintType::Greater, ConstraintType::Greater],
        vec![2_f64, -1_f64],
        &[],
    ).unwrap()
}

#[test]
fn solve() {
    init_logging();

    for config in configs() {
        let solution = general_form().solve(&config);
        assert_eq!(solution.state, State::Solved, "{config:?}");
        assert_abs_diff_eq!(solution.objective_value, 1_f64, epsilon = 1e-9);
        for (actual, expected) in solution.x.iter().zip([0.428_571_4, 0.142_857_1]) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
        }
        // Duals of the maximization of -2 x1 - x2: b y equals the optimum, -1
        assert_eq!(solution.shadow_price, vec![-1_f64, -1_f64]);
        assert_eq!(solution.reduced_cost, vec![0_f64, 0_f64]);
        // Pivots that set up the initial basis are not counted, leaving only the dual pivot
        assert_eq!(solution.iterations, 1);
    }
}
