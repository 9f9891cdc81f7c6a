//! Maximization with a degenerate dual: the third variable stays out of the basis.
//!
//! max 5 x1 + 4.5 x2 + 6 x3
//! s.t. 6 x1 + 5 x2 + 8 x3 <= 60
//!      10 x1 + 20 x2 + 10 x3 <= 150
//!      x1 <= 8
use crate::algorithm::Solve;
use crate::config::{Backend, SolverConfig};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::State;
use crate::tests::{configs, init_logging};

fn general_form() -> LinearProgram {
    LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![5_f64, 4.5, 6_f64],
        vec![vec![6_f64, 5_f64, 8_f64], vec![10_f64, 20_f64, 10_f64], vec![1_f64, 0_f64, 0_f64]],
        vec![ConstraintType::Less; 3],
        vec![60_f64, 150_f64, 8_f64],
        &[],
    ).unwrap()
}

#[test]
fn solve() {
    init_logging();

    for config in configs() {
        let solution = general_form().solve(&config);
        assert_eq!(solution.state, State::Solved, "{config:?}");
        assert_abs_diff_eq!(solution.objective_value, 51.428_571_4, epsilon = 1e-9);
        for (actual, expected) in solution.x.iter().zip([6.428_571_4, 4.285_714_3, 0_f64]) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
        }
        for (actual, expected) in solution.shadow_price.iter().zip([0.785_714_3, 0.028_571_4, 0_f64]) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
        }
        for (actual, expected) in solution.reduced_cost.iter().zip([0_f64, 0_f64, 0.571_428_6]) {
            assert_abs_diff_eq!(*actual, expected, epsilon = 1e-9);
        }
        assert_eq!(solution.iterations, 3);
    }
}

#[test]
fn precision() {
    let config = SolverConfig::default().with_precision(2).with_backend(Backend::Rational);
    let solution = general_form().solve(&config);
    assert_eq!(solution.objective_value, 51.43);
    assert_eq!(solution.x, vec![6.43, 4.29, 0_f64]);
}
