//! # Revised tableau
//!
//! Values are stored column by column. A column that is a unit vector, which is the case for every
//! basic column, is not stored at all; only the row of its `1` is kept. Pivoting therefore never
//! touches the basic columns and memory of columns entering the basis is released.
use itertools::Itertools;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::{Field, FieldRef};

/// A single tableau column.
#[derive(Clone, Debug, PartialEq)]
enum Column<F> {
    /// All values are zero. Newly activated columns start out this way.
    Zero,
    /// The unit vector with its `1` in the given row.
    Identity(usize),
    /// Any other column, one value per row.
    Values(Vec<F>),
}

impl<F: Field> Column<F> {
    fn from_values(values: Vec<F>) -> Self {
        let nonzero = values.iter().positions(|value| !value.is_zero()).collect::<Vec<_>>();
        match nonzero.as_slice() {
            [] => Column::Zero,
            [row] if values[*row].is_one() => Column::Identity(*row),
            _ => Column::Values(values),
        }
    }
}

/// Column major storage with symbolic unit columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Revised<F> {
    columns: Vec<Column<F>>,
    nr_rows: usize,
}

impl<F> Revised<F>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    /// Store all values of a column explicitly, such that any of them can be written.
    fn materialize(&mut self, column: usize) {
        let values = match &self.columns[column] {
            Column::Values(_) => return,
            Column::Zero => vec![F::zero(); self.nr_rows],
            &Column::Identity(row) => {
                let mut values = vec![F::zero(); self.nr_rows];
                values[row] = F::one();
                values
            },
        };

        self.columns[column] = Column::Values(values);
    }

    /// Whether the column is stored symbolically as the unit vector of the row.
    fn is_identity_at(&self, column: usize, row: usize) -> bool {
        matches!(self.columns[column], Column::Identity(one) if one == row)
    }
}

impl<F> Tableau for Revised<F>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    type F = F;

    fn new(rows: Vec<Vec<F>>, reserve: usize) -> Self {
        debug_assert!(!rows.is_empty());
        let nr_rows = rows.len();
        let nr_columns = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let mut transposed = (0..nr_columns)
            .map(|_| Vec::with_capacity(nr_rows))
            .collect::<Vec<_>>();
        for row in rows {
            for (column, value) in transposed.iter_mut().zip(row) {
                column.push(value);
            }
        }

        let mut columns = Vec::with_capacity(nr_columns + reserve);
        columns.extend(transposed.into_iter().map(Column::from_values));

        Self { columns, nr_rows }
    }

    fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    fn get(&self, row: usize, column: usize) -> F {
        debug_assert!(row < self.nr_rows);

        match &self.columns[column] {
            Column::Zero => F::zero(),
            &Column::Identity(one) => if one == row { F::one() } else { F::zero() },
            Column::Values(values) => values[row].clone(),
        }
    }

    fn set(&mut self, row: usize, column: usize, value: F) {
        debug_assert!(row < self.nr_rows);

        match &self.columns[column] {
            Column::Zero if value.is_zero() => return,
            Column::Zero if value.is_one() => {
                self.columns[column] = Column::Identity(row);
                return;
            },
            &Column::Identity(one) if (one == row && value.is_one()) || (one != row && value.is_zero()) => return,
            _ => {},
        }

        self.materialize(column);
        if let Column::Values(values) = &mut self.columns[column] {
            values[row] = value;
        }
    }

    fn gaussian_pivot(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns());

        let pivot = self.get(row, column);
        if pivot.is_zero() {
            return;
        }

        // The column that was basic in the pivot row stops being a unit vector
        for j in 0..self.columns.len() {
            if j != column && self.is_identity_at(j, row) {
                self.materialize(j);
            }
        }

        let pivot_column = (0..self.nr_rows).map(|i| self.get(i, column)).collect::<Vec<_>>();
        let normalize = !pivot.is_one();
        for (j, entry) in self.columns.iter_mut().enumerate() {
            if j == column {
                continue;
            }
            // Zero columns and the other unit columns have a zero in the pivot row
            let Column::Values(values) = entry else { continue };
            if values[row].is_zero() {
                continue;
            }

            if normalize {
                values[row] = &values[row] / &pivot;
            }
            let pivot_row_value = values[row].clone();
            for (i, value) in values.iter_mut().enumerate() {
                let factor = &pivot_column[i];
                if i == row || factor.is_zero() {
                    continue;
                }
                *value = (&*value - &(factor * &pivot_row_value)).or_zero_if_undefined();
            }
        }

        self.columns[column] = Column::Identity(row);
    }

    fn negate_row(&mut self, row: usize) {
        for j in 0..self.columns.len() {
            if self.is_identity_at(j, row) {
                self.materialize(j);
            }
            if let Column::Values(values) = &mut self.columns[j] {
                values[row] = -&values[row];
            }
        }
    }

    fn remove_row(&mut self, row: usize) {
        debug_assert!(row > 0, "the cost row can't be removed");

        for entry in &mut self.columns {
            let replacement = match entry {
                Column::Identity(one) if *one == row => Some(Column::Zero),
                Column::Identity(one) => {
                    if *one > row {
                        *one -= 1;
                    }
                    None
                },
                Column::Values(values) => {
                    values.remove(row);
                    None
                },
                Column::Zero => None,
            };
            if let Some(replacement) = replacement {
                *entry = replacement;
            }
        }
        self.nr_rows -= 1;
    }

    fn increase_columns(&mut self) -> usize {
        self.columns.push(Column::Zero);
        self.columns.len() - 1
    }

    fn truncate_columns(&mut self, nr_columns: usize) {
        debug_assert!(nr_columns <= self.columns.len());

        self.columns.truncate(nr_columns);
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::tableau::dense::Dense;
    use crate::algorithm::simplex::tableau::revised::{Column, Revised};
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::algorithm::simplex::tableau::test::{from_test_data, to_test_data};

    const ROWS: [&[f64]; 4] = [
        &[5_f64, 4_f64, 6_f64, 0_f64, 0_f64],
        &[1_f64, 1_f64, 1_f64, 1_f64, 60_f64],
        &[1_f64, 0.5, 0_f64, 0_f64, 32_f64],
        &[3_f64, 0_f64, 1_f64, 0_f64, 43_f64],
    ];

    #[test]
    fn unit_columns_are_symbolic() {
        let mut tableau = from_test_data::<Revised<f64>>(&ROWS, 1);
        assert_eq!(tableau.columns[3], Column::Identity(1));
        assert!(matches!(tableau.columns[0], Column::Values(_)));

        tableau.gaussian_pivot(3, 0);
        assert_eq!(tableau.columns[0], Column::Identity(3));
        assert_eq!(tableau.columns[3], Column::Identity(1));

        // The leaving column is stored again
        tableau.gaussian_pivot(1, 2);
        assert!(matches!(tableau.columns[3], Column::Values(_)));
        assert_eq!(tableau.columns[2], Column::Identity(1));
    }

    #[test]
    fn consistent_writes_keep_columns_symbolic() {
        let mut tableau = from_test_data::<Revised<f64>>(&ROWS, 1);
        let column = tableau.increase_columns();
        assert_eq!(tableau.columns[column], Column::Zero);
        tableau.set(0, column, 0_f64);
        assert_eq!(tableau.columns[column], Column::Zero);
        tableau.set(2, column, 1_f64);
        assert_eq!(tableau.columns[column], Column::Identity(2));
        tableau.set(3, column, 0_f64);
        assert_eq!(tableau.columns[column], Column::Identity(2));

        tableau.set(3, column, 2_f64);
        assert!(matches!(tableau.columns[column], Column::Values(_)));
        assert_eq!(tableau.get(2, column), 1_f64);
        assert_eq!(tableau.get(3, column), 2_f64);
    }

    #[test]
    fn removing_the_row_of_a_unit_column() {
        let mut tableau = from_test_data::<Revised<f64>>(&ROWS, 1);
        tableau.remove_row(1);
        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.columns[3], Column::Zero);

        let column = tableau.increase_columns();
        tableau.set(2, column, 1_f64);
        tableau.remove_row(1);
        assert_eq!(tableau.columns[column], Column::Identity(1));
        assert_eq!(tableau.nr_rows(), 2);
    }

    #[test]
    fn same_values_as_dense() {
        let mut revised = from_test_data::<Revised<f64>>(&ROWS, 0);
        let mut dense = from_test_data::<Dense<f64>>(&ROWS, 0);
        for (row, column) in [(3, 0), (2, 1), (1, 2), (2, 3), (3, 1)] {
            revised.gaussian_pivot(row, column);
            dense.gaussian_pivot(row, column);
            assert_eq!(to_test_data(&revised), to_test_data(&dense));
        }
        revised.negate_row(2);
        dense.negate_row(2);
        assert_eq!(to_test_data(&revised), to_test_data(&dense));
    }
}
