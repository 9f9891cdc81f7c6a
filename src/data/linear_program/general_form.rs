//! # General form
//!
//! Linear programs as they are provided by the user of this crate: any direction of optimization,
//! any type of constraint, a constant in the objective and possibly free variables.
use std::fmt;

use itertools::Itertools;

use crate::data::linear_program::{check_dimensions, check_finite, check_indices};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::standard_form::StandardForm;
use crate::error::{InconsistencyError, VariableKind};

/// A linear program in general form.
///
/// Optimizes `constant + cost x`, subject to one (in)equality per row of the constraint matrix.
/// Variables are nonnegative, unless they are free.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    objective: Objective,
    constant: f64,
    cost: Vec<f64>,

    /// One row per constraint, one column per variable.
    constraints: Vec<Vec<f64>>,
    constraint_types: Vec<ConstraintType>,
    b: Vec<f64>,

    /// Indices of the variables without sign restriction, starting at 1. Sorted and deduplicated.
    free_variables: Vec<usize>,
}

impl LinearProgram {
    /// Create a new linear program in general form.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to maximize or minimize.
    /// * `constant`: Constant term of the objective function.
    /// * `cost`: Cost of each variable.
    /// * `constraints`: Coefficients, one row per constraint.
    /// * `constraint_types`: Relation of each row.
    /// * `b`: Right hand side of each row.
    /// * `free_variables`: Indices, starting at 1, of variables that may become negative.
    ///
    /// # Return value
    ///
    /// The linear program, or a description of the first inconsistency found.
    pub fn new(
        objective: Objective,
        constant: f64,
        cost: Vec<f64>,
        constraints: Vec<Vec<f64>>,
        constraint_types: Vec<ConstraintType>,
        b: Vec<f64>,
        free_variables: &[usize],
    ) -> Result<Self, InconsistencyError> {
        check_dimensions(&cost, &constraints, &b)?;
        if constraint_types.len() != constraints.len() {
            return Err(InconsistencyError::RowCount {
                name: "constraint types",
                len: constraint_types.len(),
                nr_rows: constraints.len(),
            });
        }
        check_finite("constant", [&constant])?;
        let free_variables = check_indices(VariableKind::Free, free_variables, cost.len())?;

        Ok(Self { objective, constant, cost, constraints, constraint_types, b, free_variables })
    }

    /// Convert this linear program into standard form.
    ///
    /// Minimization becomes maximization of the negated cost. Every free variable gets a column for
    /// its negative part, every inequality a slack or surplus column.
    pub fn to_standard_form(&self) -> StandardForm {
        let n = self.nr_variables();
        let nr_slacks = self.constraint_types.iter()
            .filter(|constraint_type| constraint_type.slack_coefficient().is_some())
            .count();
        let width = n + self.free_variables.len() + nr_slacks;

        let mut cost = self.cost.clone();
        if self.objective == Objective::Minimize {
            cost.iter_mut().for_each(|value| *value = -*value);
        }
        cost.resize(width, 0_f64);
        let mut constraints = self.constraints.iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(width, 0_f64);
                row
            })
            .collect::<Vec<_>>();

        let mut free_columns = Vec::with_capacity(self.free_variables.len());
        for (offset, &variable) in self.free_variables.iter().enumerate() {
            let (variable, column) = (variable - 1, n + offset);
            cost[column] = -cost[variable];
            for row in &mut constraints {
                row[column] = -row[variable];
            }
            free_columns.push((variable, column));
        }

        let mut column = n + self.free_variables.len();
        for (row, constraint_type) in constraints.iter_mut().zip(&self.constraint_types) {
            if let Some(coefficient) = constraint_type.slack_coefficient() {
                row[column] = coefficient;
                column += 1;
            }
        }
        log::trace!("Standard form of {} rows and {width} columns, {} free", self.nr_constraints(), free_columns.len());

        StandardForm::new(cost, constraints, self.b.clone(), n, free_columns)
    }

    /// Eliminate a variable by fixing it at a value.
    ///
    /// Its contribution moves into the objective constant and the right hand sides, after which all
    /// its coefficients are zero.
    ///
    /// # Arguments
    ///
    /// * `variable`: Index of the variable, starting at 0.
    /// * `value`: Value to fix it at.
    pub(crate) fn fix_variable(&mut self, variable: usize, value: f64) {
        debug_assert!(variable < self.nr_variables());

        self.constant += value * self.cost[variable];
        self.cost[variable] = 0_f64;
        for (row, rhs) in self.constraints.iter_mut().zip(&mut self.b) {
            if row[variable] != 0_f64 {
                *rhs -= value * row[variable];
                row[variable] = 0_f64;
            }
        }
    }

    /// Append a constraint.
    pub(crate) fn add_constraint(&mut self, row: Vec<f64>, constraint_type: ConstraintType, rhs: f64) {
        debug_assert_eq!(row.len(), self.nr_variables());

        self.constraints.push(row);
        self.constraint_types.push(constraint_type);
        self.b.push(rhs);
    }

    /// Append the constraint `x_variable (relation) rhs`, with the variable index starting at 0.
    pub(crate) fn add_bound(&mut self, variable: usize, constraint_type: ConstraintType, rhs: f64) {
        let mut row = vec![0_f64; self.nr_variables()];
        row[variable] = 1_f64;
        self.add_constraint(row, constraint_type, rhs);
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }
    /// Constant term of the objective function.
    pub fn constant(&self) -> f64 {
        self.constant
    }
    /// Cost of each variable.
    pub fn cost(&self) -> &[f64] {
        &self.cost
    }
    /// Constraint coefficients, one row per constraint.
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.constraints
    }
    /// Relation of each constraint.
    pub fn constraint_types(&self) -> &[ConstraintType] {
        &self.constraint_types
    }
    /// Right hand side of each constraint.
    pub fn b(&self) -> &[f64] {
        &self.b
    }
    /// Free variable indices, starting at 1.
    pub fn free_variables(&self) -> &[usize] {
        &self.free_variables
    }
    /// The number of variables in this linear program.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }
    /// The number of constraints in this linear program.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }
}

fn write_terms(f: &mut fmt::Formatter<'_>, coefficients: &[f64]) -> fmt::Result {
    let terms = coefficients.iter()
        .enumerate()
        .filter(|&(_, &coefficient)| coefficient != 0_f64)
        .map(|(j, coefficient)| format!("{coefficient} x{}", j + 1))
        .join(" + ");
    if terms.is_empty() {
        write!(f, "0")
    } else {
        write!(f, "{terms}")
    }
}

impl fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} + ", self.objective, self.constant)?;
        write_terms(f, &self.cost)?;
        writeln!(f)?;

        for ((row, constraint_type), rhs) in self.constraints.iter().zip(&self.constraint_types).zip(&self.b) {
            write!(f, "  ")?;
            write_terms(f, row)?;
            writeln!(f, " {constraint_type} {rhs}")?;
        }
        if !self.free_variables.is_empty() {
            writeln!(f, "  free: {}", self.free_variables.iter().map(|j| format!("x{j}")).join(", "))?;
        }

        Ok(())
    }
}
