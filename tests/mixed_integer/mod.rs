use mipsolve::{BreadthFirst, ConstraintType, DepthFirst, LinearProgram, MixedIntegerProgram, Objective, Solve, SolverConfig, State};

use crate::init_logging;

/// max 4 + 5 x1 + 7 x2, integer.
fn program() -> MixedIntegerProgram {
    let lp = LinearProgram::new(
        Objective::Maximize,
        4_f64,
        vec![5_f64, 7_f64],
        vec![vec![1_f64, 1_f64], vec![4_f64, 9_f64]],
        vec![ConstraintType::Less, ConstraintType::Less],
        vec![11_f64, 61_f64],
        &[],
    ).unwrap();
    MixedIntegerProgram::new(lp, &[1, 2], &[]).unwrap()
}

/// Exhaustive enumeration of the integer points of `program`.
fn enumerate() -> (f64, Vec<f64>) {
    let mut best = (f64::NEG_INFINITY, Vec::new());
    for x1 in 0..=11 {
        for x2 in 0..=11 {
            let (x1, x2) = (f64::from(x1), f64::from(x2));
            if x1 + x2 <= 11_f64 && 4_f64 * x1 + 9_f64 * x2 <= 61_f64 {
                let value = 4_f64 + 5_f64 * x1 + 7_f64 * x2;
                if value > best.0 {
                    best = (value, vec![x1, x2]);
                }
            }
        }
    }
    best
}

#[test]
fn matches_enumeration() {
    init_logging();

    let (objective_value, x) = enumerate();
    for threads in [0, 1, 4] {
        let config = SolverConfig::default().with_threads(threads);
        for solution in [
            program().solve_with_frontier::<DepthFirst>(&config),
            program().solve_with_frontier::<BreadthFirst>(&config),
        ] {
            assert_eq!(solution.state, State::Solved);
            assert_eq!(solution.objective_value, objective_value);
            assert_eq!(solution.x, x);
        }
    }
}

#[test]
fn unbounded_relaxation() {
    let lp = LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![1_f64, 1_f64],
        vec![vec![1_f64, -1_f64]],
        vec![ConstraintType::Less],
        vec![1_f64],
        &[],
    ).unwrap();
    let program = MixedIntegerProgram::new(lp, &[1], &[]).unwrap();
    for threads in [0, 2] {
        let solution = program.solve(&SolverConfig::default().with_threads(threads));
        assert_eq!(solution.state, State::Unbounded);
        assert_eq!(solution.iterations, 1);
    }
}

#[test]
fn binary_bounds() {
    // Without the implicit upper bound, x1 would be 3
    let lp = LinearProgram::new(
        Objective::Maximize,
        0_f64,
        vec![1_f64, 0.5],
        vec![vec![1_f64, 1_f64]],
        vec![ConstraintType::Less],
        vec![3_f64],
        &[],
    ).unwrap();
    let program = MixedIntegerProgram::new(lp, &[], &[1]).unwrap();
    let solution = program.solve(&SolverConfig::default());
    assert_eq!(solution.state, State::Solved);
    assert_eq!(solution.objective_value, 2_f64);
    assert_eq!(solution.x, vec![1_f64, 2_f64]);
    assert_eq!(solution.shadow_price.len(), 1);
}
