//! # Error reporting
//!
//! Errors are only returned when a problem is constructed or when configuration is read. Once a
//! problem is accepted, solving it never fails: infeasibility, unboundedness and numerical trouble
//! are reported through `State`.
use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Kinds of variable index sets that can be provided with a problem.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum VariableKind {
    Free,
    Integer,
    Binary,
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VariableKind::Free => "free",
            VariableKind::Integer => "integer",
            VariableKind::Binary => "binary",
        })
    }
}

/// An `InconsistencyError` is returned when the description of a linear program doesn't fit
/// together.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant
/// only for descriptions of linear programs, and is never created after construction.
///
/// Relations are an enum, so unlike in loosely typed inputs, a missing relation can't be
/// represented and doesn't need a variant here.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InconsistencyError {
    /// A vector that should have one value per constraint has a different length.
    #[error("{name} has length {len}, but the constraint matrix has {nr_rows} rows")]
    RowCount {
        /// Which input vector is affected.
        name: &'static str,
        /// Length of that vector.
        len: usize,
        /// Number of rows in the constraint matrix.
        nr_rows: usize,
    },
    /// A constraint matrix row has a different length than the cost vector.
    #[error("row {row} of the constraint matrix has {len} coefficients, but there are {nr_variables} variables")]
    ColumnCount {
        /// Index of the row, starting at 1.
        row: usize,
        /// Length of the row.
        len: usize,
        /// Length of the cost vector.
        nr_variables: usize,
    },
    /// A variable index (these start at 1) doesn't refer to a variable.
    #[error("{kind} variable index {index} is outside of the range 1..={nr_variables}")]
    VariableIndex {
        /// The index set that contained the index.
        kind: VariableKind,
        /// The offending index.
        index: usize,
        /// Number of variables in the problem.
        nr_variables: usize,
    },
    /// Infinite and NaN values can't be pivoted on.
    #[error("{name} contains the non-finite value {value}")]
    NotFinite {
        /// Which input contains the value.
        name: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Reading a `SolverConfig` from the environment failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable that should hold a nonnegative integer doesn't.
    #[error("environment variable {name} has value \"{value}\", which is not a nonnegative integer")]
    Number {
        /// Name of the environment variable.
        name: &'static str,
        /// Its value.
        value: String,
        /// Why parsing failed.
        #[source]
        source: ParseIntError,
    },
    /// The backend name is not known.
    #[error("unknown simplex backend \"{0}\", expected \"double\", \"rational\" or \"revised\"")]
    Backend(String),
}

#[cfg(test)]
mod test {
    use crate::error::{InconsistencyError, VariableKind};

    #[test]
    fn messages() {
        let error = InconsistencyError::RowCount { name: "b", len: 2, nr_rows: 3 };
        assert_eq!(error.to_string(), "b has length 2, but the constraint matrix has 3 rows");

        let error = InconsistencyError::VariableIndex {
            kind: VariableKind::Free,
            index: 0,
            nr_variables: 2,
        };
        assert_eq!(error.to_string(), "free variable index 0 is outside of the range 1..=2");
    }
}
