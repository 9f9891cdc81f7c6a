//! # Simplex tableau storage
//!
//! The simplex method works on a single matrix. Row `0` holds the relative profit of every column
//! and, in the right hand side column, the negated objective value. The other rows hold the
//! constraints. Columns are the variables, followed by the right hand side column and any columns
//! that are added while solving.
//!
//! Storage is abstracted behind the `Tableau` trait, such that the same pivoting logic runs on
//! different numeric representations.
use std::cmp::Ordering;

use num_traits::Zero;

use crate::data::number_types::traits::Field;

pub mod dense;
pub mod revised;

/// Matrix storage for the simplex method.
///
/// Rows and columns are indexed from `0`. The logical number of columns can grow (when reserved
/// columns are activated) and shrink again, the logical number of rows can only shrink.
pub trait Tableau {
    /// Values stored in the tableau.
    type F: Field;

    /// Create a new tableau.
    ///
    /// # Arguments
    ///
    /// * `rows`: The cost row followed by the constraint rows. All rows have the same length.
    /// * `reserve`: Number of columns that might be added later on.
    fn new(rows: Vec<Vec<Self::F>>, reserve: usize) -> Self;

    /// Number of rows, including the cost row.
    fn nr_rows(&self) -> usize;
    /// Number of active columns.
    fn nr_columns(&self) -> usize;

    /// Read a single value.
    fn get(&self, row: usize, column: usize) -> Self::F;
    /// Overwrite a single value.
    fn set(&mut self, row: usize, column: usize, value: Self::F);

    /// Make the column a unit vector with the `1` in the given row.
    ///
    /// The pivot row is divided by the pivot value, after which a multiple of it is subtracted from
    /// all other rows (the cost row included) such that their value in the pivot column becomes
    /// zero.
    ///
    /// Pivoting on a zero value does nothing.
    ///
    /// # Arguments
    ///
    /// * `row`: Row of the pivot.
    /// * `column`: Column of the pivot.
    fn gaussian_pivot(&mut self, row: usize, column: usize);

    /// Multiply all values in a row by `-1`.
    fn negate_row(&mut self, row: usize);

    /// Remove a row, moving all rows below it up by one.
    fn remove_row(&mut self, row: usize);

    /// Activate a new column of zeros.
    ///
    /// # Return value
    ///
    /// The index of the new column.
    fn increase_columns(&mut self) -> usize;

    /// Deactivate all columns from `nr_columns` onwards.
    fn truncate_columns(&mut self, nr_columns: usize);

    /// Whether a value equals zero.
    fn is_zero(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_zero()
    }

    /// Whether a value is strictly larger than zero.
    fn is_positive(&self, row: usize, column: usize) -> bool {
        self.get(row, column) > Self::F::zero()
    }

    /// Whether a value is strictly smaller than zero.
    fn is_negative(&self, row: usize, column: usize) -> bool {
        self.get(row, column) < Self::F::zero()
    }

    /// Whether any of the columns `0..end` have a positive value in this row.
    fn exists_positive_in_row(&self, row: usize, end: usize) -> bool {
        (0..end).any(|column| self.is_positive(row, column))
    }

    /// Whether any of the columns `0..end` have a nonzero value in this row.
    fn exists_non_zero_in_row(&self, row: usize, end: usize) -> bool {
        (0..end).any(|column| !self.is_zero(row, column))
    }

    /// Compare two values of the tableau.
    ///
    /// Values that can't be compared (only possible with floats) are considered equal.
    fn compare(&self, (row_a, column_a): (usize, usize), (row_b, column_b): (usize, usize)) -> Ordering {
        self.get(row_a, column_a)
            .partial_cmp(&self.get(row_b, column_b))
            .unwrap_or(Ordering::Equal)
    }
}
