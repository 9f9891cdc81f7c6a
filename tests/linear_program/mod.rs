use approx::assert_abs_diff_eq;

use mipsolve::{Backend, ConstraintType, InconsistencyError, LinearProgram, Objective, Simplex, Solve, SolverConfig, State};
use mipsolve::algorithm::simplex::tableau::dense::Dense;
use mipsolve::algorithm::simplex::tableau::revised::Revised;

use crate::init_logging;

/// min 3 + 2 x1 - x2 with x1 free.
fn lp() -> LinearProgram {
    LinearProgram::new(
        Objective::Minimize,
        3_f64,
        vec![2_f64, -1_f64],
        vec![vec![1_f64, 1_f64], vec![3_f64, 2_f64], vec![1_f64, 2_f64]],
        vec![ConstraintType::Greater, ConstraintType::Less, ConstraintType::Equal],
        vec![-2_f64, 4_f64, 23_f64],
        &[1],
    ).unwrap()
}

#[test]
fn free_variable() {
    init_logging();

    for backend in [Backend::Double, Backend::Rational, Backend::Revised] {
        let solution = lp().solve(&SolverConfig::default().with_backend(backend));
        assert_eq!(solution.state, State::Solved);
        assert_eq!(solution.objective, Objective::Minimize);
        assert_eq!(solution.objective_value, -76_f64);
        assert_eq!(solution.x, vec![-27_f64, 25_f64]);
        assert_eq!(solution.shadow_price, vec![-5_f64, 0_f64, 3_f64]);
        assert_eq!(solution.to_string(), "solved after 2 iterations: min -76 at x = (-27, 25)");
    }
}

#[test]
fn standard_form_directly() {
    let c = [13_f64, 6_f64, 2_f64, 0_f64, 0_f64];
    let a = [
        vec![5_f64, 1_f64, -4_f64, 1_f64, 0_f64],
        vec![1_f64, 2_f64, 8_f64, 0_f64, 1_f64],
    ];
    let b = [20_f64, 30_f64];
    let config = SolverConfig::default();

    let mut dense = Simplex::<Dense<f64>>::new(&c, &a, &b, &config).unwrap();
    let mut revised = Simplex::<Revised<f64>>::new(&c, &a, &b, &config).unwrap();
    assert_eq!(dense.solve(), State::Solved);
    assert_eq!(revised.solve(), State::Solved);
    assert_abs_diff_eq!(dense.max(), 101.111_111_1, epsilon = 1e-6);
    assert_abs_diff_eq!(revised.max(), 101.111_111_1, epsilon = 1e-6);
    for (&d, &r) in dense.x().iter().zip(revised.x()) {
        assert_abs_diff_eq!(d, r, epsilon = 1e-6);
    }
    assert_abs_diff_eq!(dense.x()[1], 14.444_444_4, epsilon = 1e-6);
}

#[test]
fn infeasible_and_unbounded() {
    let infeasible = LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![1_f64],
        vec![vec![1_f64], vec![1_f64]],
        vec![ConstraintType::Greater, ConstraintType::Less],
        vec![5_f64, 2_f64],
        &[],
    ).unwrap();
    assert_eq!(infeasible.solve(&SolverConfig::default()).state, State::NoSolution);

    let unbounded = LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![1_f64],
        vec![vec![1_f64]],
        vec![ConstraintType::Greater],
        vec![0_f64],
        &[],
    ).unwrap();
    let solution = unbounded.solve(&SolverConfig::default());
    assert_eq!(solution.state, State::Unbounded);
    assert!(solution.objective_value.is_nan());
}

#[test]
fn inconsistent_input() {
    let result = LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![1_f64, 2_f64],
        vec![vec![1_f64, 1_f64]],
        vec![ConstraintType::Less],
        vec![1_f64, 2_f64],
        &[],
    );
    assert_eq!(result, Err(InconsistencyError::RowCount { name: "b", len: 2, nr_rows: 1 }));

    let result = LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![1_f64, 2_f64],
        vec![vec![1_f64, 1_f64]],
        vec![ConstraintType::Less],
        vec![1_f64],
        &[3],
    );
    assert!(matches!(result, Err(InconsistencyError::VariableIndex { index: 3, .. })));
    if let Err(error) = result {
        assert_eq!(error.to_string(), "free variable index 3 is outside of the range 1..=2");
    }
}
