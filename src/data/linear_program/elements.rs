//! # Building blocks to describe linear programs.
use std::fmt;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// Sign of the slack (for `<=`) or surplus (for `>=`) variable that makes the row an equality.
    ///
    /// # Return value
    ///
    /// `None` for equality rows, as those need no extra variable.
    pub fn slack_coefficient(self) -> Option<f64> {
        match self {
            ConstraintType::Equal => None,
            ConstraintType::Greater => Some(-1_f64),
            ConstraintType::Less => Some(1_f64),
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of a bound.
///
/// Used when branching on an integer variable: the left child gets an upper bound, the right child
/// a lower bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BoundDirection {
    /// In the case of a variable, `x >= b`.
    Lower,
    /// In the case of a variable, `x <= b`.
    Upper,
}

impl BoundDirection {
    /// The constraint row expressing this bound on a single variable.
    pub fn constraint_type(self) -> ConstraintType {
        match self {
            BoundDirection::Lower => ConstraintType::Greater,
            BoundDirection::Upper => ConstraintType::Less,
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Whether `candidate` is a strictly better objective value than `incumbent`.
    pub fn improves(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        })
    }
}
