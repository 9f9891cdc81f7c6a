//! # Pivot rules
//!
//! Strategies for choosing the column that enters the basis in the primal simplex method. Once the
//! column has been selected, the leaving row is found by the ratio test, independent of the
//! strategy.
use crate::algorithm::simplex::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Create a fresh rule for a single solve.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with the relative profits in row `0`.
    /// * `nr_variables`: Only columns `0..nr_variables` are candidates.
    ///
    /// # Return value
    ///
    /// A column with a strictly positive relative profit, if there is one.
    fn select_primal_pivot_column<T: Tableau>(&mut self, tableau: &T, nr_variables: usize) -> Option<usize>;
}

/// Pivot on the column with the largest relative profit, the lowest index among equals.
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<T: Tableau>(&mut self, tableau: &T, nr_variables: usize) -> Option<usize> {
        let mut best = None;
        for column in 0..nr_variables {
            match best {
                Some(current) if tableau.compare((0, column), (0, current)).is_le() => {},
                _ => best = Some(column),
            }
        }

        best.filter(|&column| tableau.is_positive(0, column))
    }
}

/// Simply pivot on the first column, which has a positive relative profit.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<T: Tableau>(&mut self, tableau: &T, nr_variables: usize) -> Option<usize> {
        (0..nr_variables).find(|&column| tableau.is_positive(0, column))
    }
}
