//! # Scenario tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn general_form()`
//! * `fn standard_form()`
//! * `fn mixed_integer_program()`
use crate::config::{Backend, SolverConfig};

mod problem_2;
mod problem_6;

/// Every backend, each with and without workers for branch and bound.
fn configs() -> Vec<SolverConfig> {
    [Backend::Double, Backend::Rational, Backend::Revised].into_iter()
        .flat_map(|backend| [0, 2].map(|threads| SolverConfig::default().with_backend(backend).with_threads(threads)))
        .collect()
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
