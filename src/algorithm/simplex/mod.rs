//! # The Simplex algorithm
//!
//! Solves linear programs in standard form: maximize `c x` subject to `A x = b` and `x >= 0`. The
//! algorithm is implemented on a full tableau as described in chapters 2 and 4 of Combinatorial
//! Optimization, a book by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! Columns `0..n` of the tableau are the variables, column `n` is the right hand side. After it
//! come the columns tracking the dual values of rows without a slack variable and, while searching
//! for a feasible basis, the artificial variables.
use std::fmt;

use num_traits::{One, Zero};

use crate::algorithm::simplex::cycling::CyclingGuard;
use crate::algorithm::simplex::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::algorithm::simplex::tableau::Tableau;
use crate::config::SolverConfig;
use crate::data::linear_program::check_dimensions;
use crate::data::linear_program::solution::State;
use crate::data::number_types::float::numerical_precision::round_to_precision;
use crate::data::number_types::traits::Field;
use crate::error::InconsistencyError;

pub mod cycling;
pub mod strategy;
pub mod tableau;

/// The simplex method on a tableau `T`, choosing entering columns with the pivot rule `PR`.
///
/// An instance solves a single problem: `solve` can be called more than once, but only the first
/// call does any work.
pub struct Simplex<T: Tableau, PR = LargestCoefficient> {
    tableau: T,
    nr_variables: usize,
    /// Basic column of each constraint row, the row below the cost row coming first.
    basis: Vec<Option<usize>>,
    /// Per original constraint, the column whose relative profit gives the shadow price and the
    /// coefficient of that column in the original row.
    dual_columns: Vec<Option<(usize, T::F)>>,
    /// Columns from this index onwards are artificial.
    first_artificial: usize,

    pivot_rule: PR,
    cycling: CyclingGuard,
    precision: u32,

    state: State,
    iterations: usize,
    max: f64,
    x: Vec<f64>,
    reduced_cost: Vec<f64>,
    shadow_price: Vec<f64>,
}

impl<T, PR> Simplex<T, PR>
where
    T: Tableau,
    PR: PivotRule,
{
    /// Create a new solver for a problem in standard form.
    ///
    /// # Arguments
    ///
    /// * `c`: Profit of each variable, to be maximized.
    /// * `a`: Constraint matrix, one row per constraint and one column per variable.
    /// * `b`: Right hand side of each constraint.
    /// * `config`: Rounding precision and cycling threshold.
    ///
    /// # Return value
    ///
    /// The solver, or an error if the dimensions don't match or a value is not finite.
    pub fn new(c: &[f64], a: &[Vec<f64>], b: &[f64], config: &SolverConfig) -> Result<Self, InconsistencyError> {
        check_dimensions(c, a, b)?;

        Ok(Self::from_validated(c, a, b, config))
    }

    /// Create a new solver for input of which the dimensions are known to match.
    pub(crate) fn from_validated(c: &[f64], a: &[Vec<f64>], b: &[f64], config: &SolverConfig) -> Self {
        let nr_variables = c.len();
        let nr_constraints = a.len();

        let convert = |values: &[f64]| values.iter().map(|&value| T::F::from_coefficient(value)).collect::<Vec<_>>();
        let mut rows = Vec::with_capacity(1 + nr_constraints);
        let mut cost_row = convert(c);
        cost_row.push(T::F::zero());
        rows.push(cost_row);
        for (row, &rhs) in a.iter().zip(b) {
            let mut values = convert(row);
            values.push(T::F::from_coefficient(rhs));
            rows.push(values);
        }

        // A slack or surplus variable tracks the dual value of its row
        let mut dual_columns = vec![None; nr_constraints];
        for (column, &cost) in c.iter().enumerate() {
            if cost != 0_f64 {
                continue;
            }
            let mut nonzero = a.iter().enumerate().filter(|(_, row)| row[column] != 0_f64);
            if let (Some((row, values)), None) = (nonzero.next(), nonzero.next()) {
                dual_columns[row] = Some((column, T::F::from_coefficient(values[column])));
            }
        }

        Self {
            // At most one dual tracking column and one artificial column per row
            tableau: T::new(rows, 2 * nr_constraints),
            nr_variables,
            basis: vec![None; nr_constraints],
            dual_columns,
            first_artificial: nr_variables + 1,

            pivot_rule: PR::new(),
            cycling: CyclingGuard::new(nr_variables, config.cycling_threshold),
            precision: config.precision,

            state: State::Zero,
            iterations: 0,
            max: f64::NAN,
            x: vec![0_f64; nr_variables],
            reduced_cost: Vec::new(),
            shadow_price: Vec::new(),
        }
    }

    /// Run the simplex method.
    ///
    /// # Return value
    ///
    /// The final state: `Solved`, `Unbounded` or `NoSolution`.
    pub fn solve(&mut self) -> State {
        if self.state != State::Zero {
            return self.state;
        }
        self.state = State::Solving;

        self.preprocess();
        self.initialize_basis();
        log::trace!("Initial basis:\n{self}");

        while self.primal_step() {}
        if self.state == State::Solving {
            self.cycling.reset();
            while self.dual_step() {}
        }

        self.extract();
        if self.state == State::Solving {
            self.state = State::Solved;
        }
        log::debug!("Simplex finished as {} after {} iterations", self.state, self.iterations);

        self.state
    }

    /// Make all right hand sides nonnegative and add the dual tracking columns.
    ///
    /// Rows with a zero right hand side are negated only when they have no positive coefficient.
    fn preprocess(&mut self) {
        let rhs = self.nr_variables;
        let mut negated = vec![false; self.basis.len()];
        for row in 1..self.tableau.nr_rows() {
            let keep = self.tableau.is_positive(row, rhs)
                || (self.tableau.is_zero(row, rhs) && self.tableau.exists_positive_in_row(row, rhs));
            if !keep {
                self.tableau.negate_row(row);
                negated[row - 1] = true;
            }
        }

        for (index, entry) in self.dual_columns.iter_mut().enumerate() {
            if entry.is_none() {
                let column = self.tableau.increase_columns();
                self.tableau.set(index + 1, column, T::F::one());
                let coefficient = if negated[index] { -T::F::one() } else { T::F::one() };
                *entry = Some((column, coefficient));
            }
        }
        self.first_artificial = self.tableau.nr_columns();
    }

    /// Find a basic column for every row, adding artificial columns where needed.
    fn initialize_basis(&mut self) {
        let n = self.nr_variables;
        let m = self.basis.len();

        let mut selected = vec![false; n];
        let mut count = 0;
        for column in (0..n).rev() {
            if count >= m {
                break;
            }
            if let Some(row) = self.single_positive_row(column) {
                if self.basis[row - 1].is_none() {
                    self.pivot(row, column);
                    selected[column] = true;
                    count += 1;
                }
            }
        }

        if count < m {
            for column in (0..n).filter(|&column| !selected[column]) {
                if let Some(row) = self.select_primal_pivot_row(column) {
                    if self.basis[row - 1].is_none() {
                        self.pivot(row, column);
                        count += 1;
                    }
                }
            }
        }

        for row in 1..=m {
            if self.basis[row - 1].is_none() {
                let column = self.tableau.increase_columns();
                self.tableau.set(row, column, T::F::one());
                self.basis[row - 1] = Some(column);
            }
        }
        if count < m {
            log::debug!("Added {} artificial variables", m - count);
        }
    }

    /// The only row with a positive value in the column, if there is exactly one.
    fn single_positive_row(&self, column: usize) -> Option<usize> {
        let mut positive = (1..self.tableau.nr_rows()).filter(|&row| self.tableau.is_positive(row, column));
        match (positive.next(), positive.next()) {
            (Some(row), None) => Some(row),
            _ => None,
        }
    }

    /// A single pivot of the primal simplex method.
    ///
    /// # Return value
    ///
    /// Whether another step should be taken.
    fn primal_step(&mut self) -> bool {
        let Some(column) = self.pivot_rule.select_primal_pivot_column(&self.tableau, self.nr_variables) else {
            return self.drive_out_artificials();
        };
        let Some(row) = self.select_primal_pivot_row(column) else {
            log::debug!("Column {column} can be increased without bound");
            self.state = State::Unbounded;
            return self.drive_out_artificials();
        };

        if self.cycling.record(column) {
            log::warn!("Cycling detected after {} iterations, pivoting on column {column}", self.iterations);
            self.state = State::NoSolution;
            return false;
        }

        self.iterations += 1;
        self.pivot(row, column);
        true
    }

    /// Determine the row to pivot on.
    ///
    /// Determine the row to pivot on, given the column. This is the row with the positive but
    /// minimal ratio between the current constraint vector and the column.
    ///
    /// When there are multiple choices for the pivot row, Bland's anti cycling algorithm is used
    /// to avoid cycles.
    ///
    /// # Arguments
    ///
    /// * `column`: Column that enters the basis.
    ///
    /// # Return value
    ///
    /// Index of the row to pivot on. If not found, the problem is optimal.
    fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        let rhs = self.nr_variables;

        // (chosen index, minimum ratio), ties are decided by the leaving column
        let mut min_values: Option<(usize, T::F)> = None;
        for row in 1..self.tableau.nr_rows() {
            if !self.tableau.is_positive(row, column) {
                continue;
            }
            let ratio = self.tableau.get(row, rhs) / self.tableau.get(row, column);
            let better = match &min_values {
                None => true,
                Some((min_row, min_ratio)) => {
                    ratio < *min_ratio || (ratio == *min_ratio && self.basis[row - 1] < self.basis[min_row - 1])
                },
            };
            if better {
                min_values = Some((row, ratio));
            }
        }

        min_values.map(|(row, _)| row)
    }

    /// Replace artificial basic columns by real ones.
    ///
    /// If no artificial column could be replaced, the rows without any value that are held by an
    /// artificial column are removed. Afterwards, the artificial columns are dropped.
    ///
    /// # Return value
    ///
    /// Whether any pivot was made.
    fn drive_out_artificials(&mut self) -> bool {
        let rhs = self.nr_variables;

        let mut pivoted = false;
        for row in 1..self.tableau.nr_rows() {
            if !self.is_artificial(self.basis[row - 1]) {
                continue;
            }
            let candidate = (0..rhs).find(|&column| {
                !self.tableau.is_zero(row, column)
                    && !(self.tableau.is_negative(row, column) && self.tableau.is_positive(row, rhs))
            });
            if let Some(column) = candidate {
                self.pivot(row, column);
                pivoted = true;
            }
        }

        if !pivoted {
            self.remove_redundant_rows();
        }
        self.tableau.truncate_columns(self.first_artificial);

        pivoted
    }

    fn remove_redundant_rows(&mut self) {
        let mut row = 1;
        while row < self.tableau.nr_rows() {
            if self.is_artificial(self.basis[row - 1])
                && !self.tableau.exists_non_zero_in_row(row, self.nr_variables + 1) {
                log::debug!("Removing redundant row {row}");
                self.tableau.remove_row(row);
                self.basis.remove(row - 1);
            } else {
                row += 1;
            }
        }
    }

    /// Pivot on every row with a negative right hand side.
    ///
    /// # Return value
    ///
    /// Whether another round should be made.
    fn dual_step(&mut self) -> bool {
        let rhs = self.nr_variables;

        let mut pivoted = false;
        for row in 1..self.tableau.nr_rows() {
            if !self.tableau.is_negative(row, rhs) {
                continue;
            }
            let Some(column) = self.select_dual_pivot_column(row) else {
                continue;
            };

            if self.cycling.record(row) {
                log::warn!("Cycling detected after {} iterations, pivoting on row {row}", self.iterations);
                self.state = State::NoSolution;
                return false;
            }

            self.iterations += 1;
            self.pivot(row, column);
            pivoted = true;
        }

        pivoted
    }

    /// The nonbasic column with a negative value in this row that has the smallest ratio between
    /// its relative profit and that value.
    fn select_dual_pivot_column(&self, row: usize) -> Option<usize> {
        let mut min_values: Option<(usize, T::F)> = None;
        for column in 0..self.nr_variables {
            if !self.tableau.is_negative(row, column) || self.basis.contains(&Some(column)) {
                continue;
            }
            let ratio = self.tableau.get(0, column) / self.tableau.get(row, column);
            if min_values.as_ref().is_none_or(|(_, min_ratio)| ratio < *min_ratio) {
                min_values = Some((column, ratio));
            }
        }

        min_values.map(|(column, _)| column)
    }

    fn pivot(&mut self, row: usize, column: usize) {
        self.tableau.gaussian_pivot(row, column);
        self.basis[row - 1] = Some(column);
        log::trace!("Pivoted on ({row}, {column}):\n{self}");
    }

    fn is_artificial(&self, basic: Option<usize>) -> bool {
        matches!(basic, Some(column) if column >= self.first_artificial)
    }

    fn round(&self, value: &T::F) -> f64 {
        round_to_precision(value.to_float(), self.precision)
    }

    /// Read the solution and the dual values from the tableau.
    ///
    /// Detects infeasibility: a negative value, or an artificial variable that is still positive.
    fn extract(&mut self) {
        let rhs = self.nr_variables;

        self.max = self.round(&-self.tableau.get(0, rhs));
        self.x = vec![0_f64; self.nr_variables];
        for row in 1..self.tableau.nr_rows() {
            let value = self.round(&self.tableau.get(row, rhs));
            let basic = self.basis[row - 1];
            let infeasible = value < 0_f64 || match basic {
                Some(column) => column >= self.first_artificial && value > 0_f64,
                None => true,
            };
            if infeasible {
                log::debug!("Row {row} has value {value} for basic column {basic:?}");
                self.state = State::NoSolution;
            }
            if let Some(column) = basic.filter(|&column| column < self.nr_variables) {
                self.x[column] = value;
            }
        }

        self.reduced_cost = (0..self.nr_variables)
            .map(|column| self.round(&-self.tableau.get(0, column)))
            .collect();
        self.shadow_price = self.dual_columns.iter()
            .map(|entry| entry.as_ref().map_or(0_f64, |(column, coefficient)| {
                self.round(&(-self.tableau.get(0, *column) / coefficient))
            }))
            .collect();
    }

    /// Current state of the solver.
    pub fn state(&self) -> State {
        self.state
    }

    /// Optimal objective value, `NaN` before solving.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Value of each variable.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Number of pivots, not counting those that find the initial basis.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Reduced cost of each variable, empty before solving.
    pub fn reduced_cost(&self) -> &[f64] {
        &self.reduced_cost
    }

    /// Shadow price of each constraint, empty before solving.
    pub fn shadow_price(&self) -> &[f64] {
        &self.shadow_price
    }
}

impl<T: Tableau, PR> fmt::Display for Simplex<T, PR> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rhs = self.nr_variables;
        let nr_columns = self.tableau.nr_columns();
        let column_width = 10;
        let counter_width = 8;

        writeln!(f, "Tableau ({}, {} iterations):", self.state, self.iterations)?;
        // Column counter
        write!(f, "{0:width$}", "", width = counter_width)?;
        write!(f, "{0:^width$}", "b", width = column_width)?;
        write!(f, "|")?;
        for column in (0..nr_columns).filter(|&column| column != rhs) {
            write!(f, "{0:^width$}", column, width = column_width)?;
        }
        writeln!(f)?;

        let separator = "-".repeat(counter_width + nr_columns * column_width + 1);
        writeln!(f, "{separator}")?;

        for row in 0..self.tableau.nr_rows() {
            let label = match row {
                0 => "cost".to_string(),
                _ => self.basis[row - 1].map_or_else(|| "-".to_string(), |column| column.to_string()),
            };
            write!(f, "{0:>width$}", format!("{label}  |"), width = counter_width)?;
            write!(f, "{0:^width$.8}", self.tableau.get(row, rhs).to_string(), width = column_width)?;
            write!(f, "|")?;
            for column in (0..nr_columns).filter(|&column| column != rhs) {
                write!(f, "{0:^width$.8}", self.tableau.get(row, column).to_string(), width = column_width)?;
            }
            writeln!(f)?;

            if row == 0 {
                writeln!(f, "{separator}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use num::BigRational;

    use crate::algorithm::simplex::Simplex;
    use crate::algorithm::simplex::strategy::pivot_rule::FirstProfitable;
    use crate::algorithm::simplex::tableau::dense::Dense;
    use crate::algorithm::simplex::tableau::revised::Revised;
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::config::SolverConfig;
    use crate::data::linear_program::solution::State;
    use crate::error::InconsistencyError;

    /// Maximize `5 x1 + 4 x2 + 6 x3` with a slack for each of the first three rows and a surplus
    /// for the last one.
    fn fixture() -> (Vec<f64>, Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![5_f64, 4_f64, 6_f64, 0_f64, 0_f64, 0_f64, 0_f64],
            vec![
                vec![1_f64, 1_f64, 1_f64, 1_f64, 0_f64, 0_f64, 0_f64],
                vec![1_f64, 0.5, 0_f64, 0_f64, 1_f64, 0_f64, 0_f64],
                vec![3_f64, 0_f64, 1_f64, 0_f64, 0_f64, 1_f64, 0_f64],
                vec![0_f64, -2_f64, -3_f64, 0_f64, 0_f64, 0_f64, -1_f64],
            ],
            vec![60_f64, 32_f64, 43_f64, -86_f64],
        )
    }

    fn solve_fixture<T: Tableau>() {
        let (c, a, b) = fixture();
        let mut simplex = Simplex::<T>::new(&c, &a, &b, &SolverConfig::default()).unwrap();
        assert_eq!(simplex.state(), State::Zero);
        assert_eq!(simplex.solve(), State::Solved);
        assert_abs_diff_eq!(simplex.max(), 237.769_230_8, epsilon = 1e-6);
        assert_abs_diff_eq!(simplex.x()[0], 13.153_846_2, epsilon = 1e-6);
        assert_abs_diff_eq!(simplex.x()[1], 37.692_307_7, epsilon = 1e-6);
        assert_abs_diff_eq!(simplex.x()[2], 3.538_461_5, epsilon = 1e-6);
        assert_abs_diff_eq!(simplex.x()[3], 5.615_384_6, epsilon = 1e-6);
        assert_eq!(simplex.iterations(), 3);

        let reduced_cost = [0_f64, 0_f64, 0_f64, 0_f64, 1.538_461_5, 1.153_846_2, 1.615_384_6];
        for (&actual, expected) in simplex.reduced_cost().iter().zip(reduced_cost) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-6);
        }
        let shadow_price = [0_f64, 1.538_461_5, 1.153_846_2, -1.615_384_6];
        assert_eq!(simplex.shadow_price().len(), shadow_price.len());
        for (&actual, expected) in simplex.shadow_price().iter().zip(shadow_price) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-6);
        }
    }

    fn negated_fixture_is_infeasible<T: Tableau>() {
        let (c, a, b) = fixture();
        let b = b.into_iter().map(|value| -value).collect::<Vec<_>>();
        let mut simplex = Simplex::<T>::new(&c, &a, &b, &SolverConfig::default()).unwrap();
        assert_eq!(simplex.solve(), State::NoSolution);
    }

    #[test]
    fn dense_double() {
        solve_fixture::<Dense<f64>>();
        negated_fixture_is_infeasible::<Dense<f64>>();
    }

    #[test]
    fn dense_rational() {
        solve_fixture::<Dense<BigRational>>();
        negated_fixture_is_infeasible::<Dense<BigRational>>();
    }

    #[test]
    fn revised_double() {
        solve_fixture::<Revised<f64>>();
        negated_fixture_is_infeasible::<Revised<f64>>();
    }

    #[test]
    fn degenerate_origin() {
        let c = [5_f64, 4_f64, 6_f64, 0_f64, 0_f64, 0_f64];
        let a = [
            vec![1_f64, 1_f64, 1_f64, 1_f64, 0_f64, 0_f64],
            vec![3_f64, 2_f64, 4_f64, 0_f64, 1_f64, 0_f64],
            vec![2_f64, 1_f64, 0_f64, 0_f64, 0_f64, 1_f64],
        ];
        let mut simplex = Simplex::<Dense<f64>>::new(&c, &a, &[0_f64; 3], &SolverConfig::default()).unwrap();
        assert_eq!(simplex.solve(), State::Solved);
        assert_abs_diff_eq!(simplex.max(), 0_f64);
        assert!(simplex.x().iter().all(|&value| value == 0_f64));
    }

    #[test]
    fn unbounded() {
        // max x1 subject to x1 - x2 = 1
        let mut simplex = Simplex::<Dense<f64>>::new(&[1_f64, 0_f64], &[vec![1_f64, -1_f64]], &[1_f64], &SolverConfig::default())
            .unwrap();
        assert_eq!(simplex.solve(), State::Unbounded);
    }

    #[test]
    fn redundant_row() {
        // The second row equals the first one
        let mut simplex = Simplex::<Dense<f64>>::new(
            &[1_f64, 1_f64],
            &[vec![1_f64, 2_f64], vec![1_f64, 2_f64]],
            &[4_f64, 4_f64],
            &SolverConfig::default(),
        ).unwrap();
        assert_eq!(simplex.solve(), State::Solved);
        assert_abs_diff_eq!(simplex.max(), 4_f64);
        assert_eq!(simplex.x(), &[4_f64, 0_f64]);
        assert_eq!(simplex.shadow_price(), &[1_f64, 0_f64]);
    }

    #[test]
    fn solve_is_single_use() {
        let (c, a, b) = fixture();
        let mut simplex = Simplex::<Dense<f64>, FirstProfitable>::new(&c, &a, &b, &SolverConfig::default()).unwrap();
        assert_eq!(simplex.solve(), State::Solved);
        let iterations = simplex.iterations();
        assert_eq!(simplex.solve(), State::Solved);
        assert_eq!(simplex.iterations(), iterations);
        assert_abs_diff_eq!(simplex.max(), 237.769_230_8, epsilon = 1e-6);
    }

    #[test]
    fn display() {
        let (c, a, b) = fixture();
        let mut simplex = Simplex::<Dense<f64>>::new(&c, &a, &b, &SolverConfig::default()).unwrap();
        simplex.solve();
        let dump = simplex.to_string();
        assert!(dump.starts_with("Tableau (solved, 3 iterations):"));
        assert!(dump.contains("cost  |"));
    }

    #[test]
    fn inconsistent_input() {
        let result = Simplex::<Dense<f64>>::new(&[1_f64], &[vec![1_f64, 2_f64]], &[1_f64], &SolverConfig::default());
        assert!(matches!(result, Err(InconsistencyError::ColumnCount { row: 1, len: 2, nr_variables: 1 })));

        let result = Simplex::<Dense<f64>>::new(&[1_f64], &[vec![1_f64]], &[], &SolverConfig::default());
        assert!(matches!(result, Err(InconsistencyError::RowCount { name: "b", len: 0, nr_rows: 1 })));

        let result = Simplex::<Dense<f64>>::new(&[f64::NAN], &[vec![1_f64]], &[1_f64], &SolverConfig::default());
        assert!(matches!(result, Err(InconsistencyError::NotFinite { name: "c", .. })));
    }
}
