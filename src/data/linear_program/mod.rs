//! # Representing linear programs
//!
//! This module contains different representations of linear programs. Linear programs in general
//! form may contain any type of constraint and free variables, while linear programs in standard
//! form contain equality constraints and nonnegative variables only.
use itertools::Itertools;

use crate::error::{InconsistencyError, VariableKind};

pub mod elements;
pub mod general_form;
pub mod solution;
pub mod standard_form;

/// Check that a cost vector, constraint matrix and right hand side fit together.
///
/// All values need to be finite.
pub(crate) fn check_dimensions(cost: &[f64], constraints: &[Vec<f64>], b: &[f64]) -> Result<(), InconsistencyError> {
    if b.len() != constraints.len() {
        return Err(InconsistencyError::RowCount { name: "b", len: b.len(), nr_rows: constraints.len() });
    }
    if let Some((index, row)) = constraints.iter().find_position(|row| row.len() != cost.len()) {
        return Err(InconsistencyError::ColumnCount { row: index + 1, len: row.len(), nr_variables: cost.len() });
    }

    check_finite("c", cost)?;
    check_finite("A", constraints.iter().flatten())?;
    check_finite("b", b)
}

pub(crate) fn check_finite<'a>(
    name: &'static str,
    values: impl IntoIterator<Item = &'a f64>,
) -> Result<(), InconsistencyError> {
    match values.into_iter().find(|value| !value.is_finite()) {
        Some(&value) => Err(InconsistencyError::NotFinite { name, value }),
        None => Ok(()),
    }
}

/// Check that variable indices, which start at `1`, refer to existing variables.
///
/// # Return value
///
/// The indices sorted and without duplicates.
pub(crate) fn check_indices(
    kind: VariableKind,
    indices: &[usize],
    nr_variables: usize,
) -> Result<Vec<usize>, InconsistencyError> {
    if let Some(&index) = indices.iter().find(|&&index| index == 0 || index > nr_variables) {
        return Err(InconsistencyError::VariableIndex { kind, index, nr_variables });
    }

    Ok(indices.iter().copied().sorted_unstable().dedup().collect())
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::{check_dimensions, check_indices};
    use crate::error::{InconsistencyError, VariableKind};

    #[test]
    fn dimensions() {
        assert_eq!(check_dimensions(&[1_f64, 2_f64], &[vec![1_f64, 0_f64]], &[3_f64]), Ok(()));
        assert_eq!(check_dimensions(&[], &[], &[]), Ok(()));
        assert_eq!(
            check_dimensions(&[1_f64, 2_f64], &[vec![1_f64, 0_f64], vec![1_f64]], &[3_f64, 4_f64]),
            Err(InconsistencyError::ColumnCount { row: 2, len: 1, nr_variables: 2 }),
        );
        assert_eq!(
            check_dimensions(&[1_f64], &[vec![f64::INFINITY]], &[3_f64]),
            Err(InconsistencyError::NotFinite { name: "A", value: f64::INFINITY }),
        );
    }

    #[test]
    fn indices() {
        assert_eq!(check_indices(VariableKind::Integer, &[3, 1, 3], 3), Ok(vec![1, 3]));
        assert_eq!(
            check_indices(VariableKind::Binary, &[1, 4], 3),
            Err(InconsistencyError::VariableIndex { kind: VariableKind::Binary, index: 4, nr_variables: 3 }),
        );
        assert!(check_indices(VariableKind::Free, &[0], 3).is_err());
    }
}
