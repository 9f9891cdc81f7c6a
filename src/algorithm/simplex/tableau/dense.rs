//! # Dense tableau
//!
//! Every value is stored, row by row. This is the simplest representation and the fastest one for
//! the small and dense problems this crate targets. It is used with both `f64` and exact rational
//! values.
use std::mem;

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::{Field, FieldRef};

/// Columns are added to the backing rows in chunks of this size once the reserve is exhausted.
const COLUMN_CHUNK: usize = 16;

/// Row major storage of all values.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense<F> {
    /// The cost row followed by the constraint rows.
    ///
    /// All rows have the same length, which can be larger than `nr_columns` once columns were
    /// deactivated. Those values are stale and overwritten when the column is activated again.
    rows: Vec<Vec<F>>,
    nr_columns: usize,
}

impl<F> Tableau for Dense<F>
where
    F: Field,
    for<'r> &'r F: FieldRef<F>,
{
    type F = F;

    fn new(rows: Vec<Vec<F>>, reserve: usize) -> Self {
        debug_assert!(!rows.is_empty());
        let nr_columns = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let rows = rows.into_iter()
            .map(|mut row| {
                row.reserve_exact(reserve);
                row
            })
            .collect();

        Self { rows, nr_columns }
    }

    fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    fn get(&self, row: usize, column: usize) -> F {
        debug_assert!(column < self.nr_columns);

        self.rows[row][column].clone()
    }

    fn set(&mut self, row: usize, column: usize, value: F) {
        debug_assert!(column < self.nr_columns);

        self.rows[row][column] = value;
    }

    fn gaussian_pivot(&mut self, row: usize, column: usize) {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns);

        if self.rows[row][column].is_zero() {
            return;
        }

        let width = self.nr_columns;
        let mut pivot_row = mem::take(&mut self.rows[row]);
        let pivot = pivot_row[column].clone();
        if !pivot.is_one() {
            for (j, value) in pivot_row[..width].iter_mut().enumerate() {
                if value.is_zero() {
                    continue;
                }
                *value = if j == column { F::one() } else { &*value / &pivot };
            }
        }

        for (i, other) in self.rows.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let factor = other[column].clone();
            if factor.is_zero() {
                continue;
            }

            for (j, pivot_row_value) in pivot_row[..width].iter().enumerate() {
                if pivot_row_value.is_zero() {
                    continue;
                }
                other[j] = if j == column {
                    F::zero()
                } else {
                    (&other[j] - &(&factor * pivot_row_value)).or_zero_if_undefined()
                };
            }
        }

        self.rows[row] = pivot_row;
    }

    fn negate_row(&mut self, row: usize) {
        for value in &mut self.rows[row][..self.nr_columns] {
            *value = -&*value;
        }
    }

    fn remove_row(&mut self, row: usize) {
        debug_assert!(row > 0, "the cost row can't be removed");

        self.rows.remove(row);
    }

    fn increase_columns(&mut self) -> usize {
        let column = self.nr_columns;
        for row in &mut self.rows {
            if column < row.len() {
                row[column] = F::zero();
            } else {
                if row.len() == row.capacity() {
                    row.reserve_exact(COLUMN_CHUNK);
                }
                row.push(F::zero());
            }
        }
        self.nr_columns += 1;

        column
    }

    fn truncate_columns(&mut self, nr_columns: usize) {
        debug_assert!(nr_columns <= self.nr_columns);

        self.nr_columns = nr_columns;
    }

    fn is_zero(&self, row: usize, column: usize) -> bool {
        self.rows[row][column].is_zero()
    }

    fn is_positive(&self, row: usize, column: usize) -> bool {
        self.rows[row][column] > F::zero()
    }

    fn is_negative(&self, row: usize, column: usize) -> bool {
        self.rows[row][column] < F::zero()
    }
}
