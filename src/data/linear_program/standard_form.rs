//! # Standard form
//!
//! A linear program in `StandardForm` is maximized, has only equality constraints and only
//! nonnegative variables. It is what the simplex method works on.
use crate::data::number_types::float::numerical_precision::round_to_precision;

/// A linear program: maximize `c x` subject to `A x = b` and `x >= 0`.
///
/// Derived from a general linear program. The first columns correspond to the variables of that
/// program, followed by the negative parts of its free variables and the slack and surplus
/// variables of its inequalities.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm {
    cost: Vec<f64>,
    constraints: Vec<Vec<f64>>,
    b: Vec<f64>,

    nr_original_variables: usize,
    /// For each free variable, its index and the column of its negative part.
    free_columns: Vec<(usize, usize)>,
}

impl StandardForm {
    /// Create a new linear program in standard form.
    pub(crate) fn new(
        cost: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        b: Vec<f64>,
        nr_original_variables: usize,
        free_columns: Vec<(usize, usize)>,
    ) -> Self {
        debug_assert!(constraints.iter().all(|row| row.len() == cost.len()));
        debug_assert_eq!(constraints.len(), b.len());
        debug_assert!(nr_original_variables <= cost.len());

        Self { cost, constraints, b, nr_original_variables, free_columns }
    }

    /// Get the cost vector, to be maximized.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }
    /// Get the constraint matrix.
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }
    /// Get the constraint vector `b`.
    pub fn b(&self) -> &[f64] {
        &self.b
    }
    /// Get the number of variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }
    /// Get the number of constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Translate a solution back to the variables of the general linear program.
    ///
    /// # Arguments
    ///
    /// * `x`: Value of every variable of this linear program.
    /// * `precision`: Number of decimal digits to round the free variables to.
    pub fn to_original(&self, x: &[f64], precision: u32) -> Vec<f64> {
        debug_assert_eq!(x.len(), self.nr_variables());

        let mut original = x[..self.nr_original_variables].to_vec();
        for &(variable, negative_part) in &self.free_columns {
            original[variable] = round_to_precision(original[variable] - x[negative_part], precision);
        }

        original
    }
}
