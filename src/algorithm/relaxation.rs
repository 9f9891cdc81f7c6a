//! # Solving linear programs
//!
//! A linear program in general form is brought into standard form, solved with the simplex method
//! on the configured tableau backend and translated back.
use num::BigRational;

use crate::algorithm::Solve;
use crate::algorithm::simplex::Simplex;
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::tableau::dense::Dense;
use crate::algorithm::simplex::tableau::revised::Revised;
use crate::config::{Backend, SolverConfig};
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::general_form::LinearProgram;
use crate::data::linear_program::solution::{Solution, State};
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::float::numerical_precision::round_to_precision;

impl Solve for LinearProgram {
    fn solve(&self, config: &SolverConfig) -> Solution {
        let standard_form = self.to_standard_form();
        match config.backend {
            Backend::Double => solve_standard_form::<Dense<f64>>(self, &standard_form, config),
            Backend::Rational => solve_standard_form::<Dense<BigRational>>(self, &standard_form, config),
            Backend::Revised => solve_standard_form::<Revised<f64>>(self, &standard_form, config),
        }
    }
}

fn solve_standard_form<T: Tableau>(lp: &LinearProgram, standard_form: &StandardForm, config: &SolverConfig) -> Solution {
    let mut simplex = Simplex::<T>::from_validated(
        standard_form.cost(),
        standard_form.constraints(),
        standard_form.b(),
        config,
    );
    let state = simplex.solve();
    if state != State::Solved {
        return Solution::unsolved(state, lp.objective(), lp.nr_variables(), simplex.iterations());
    }

    let max = match lp.objective() {
        Objective::Maximize => simplex.max(),
        Objective::Minimize => -simplex.max(),
    };

    Solution {
        state,
        objective: lp.objective(),
        objective_value: round_to_precision(lp.constant() + max, config.precision),
        x: standard_form.to_original(simplex.x(), config.precision),
        iterations: simplex.iterations(),
        reduced_cost: simplex.reduced_cost()[..lp.nr_variables()].to_vec(),
        shadow_price: simplex.shadow_price().to_vec(),
    }
}
