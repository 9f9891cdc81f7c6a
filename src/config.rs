//! # Solver configuration
//!
//! All settings are carried in a `SolverConfig` value that is passed to the solvers explicitly.
//! Reading them from the environment is opt-in, through `SolverConfig::from_env`.
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Number of decimal digits that results are rounded to.
pub const DEFAULT_PRECISION: u32 = 7;
/// Number of repeated pivots on the same index that counts towards detecting cycling.
pub const DEFAULT_CYCLING_THRESHOLD: usize = 5;
/// Worker threads used for branch and bound.
pub const DEFAULT_THREADS: usize = 2;

/// Environment variable names read by `SolverConfig::from_env`.
pub const PRECISION_VARIABLE: &str = "MIPSOLVE_PRECISION";
#[allow(missing_docs)]
pub const CYCLING_THRESHOLD_VARIABLE: &str = "MIPSOLVE_CYCLING_THRESHOLD";
#[allow(missing_docs)]
pub const BACKEND_VARIABLE: &str = "MIPSOLVE_BACKEND";
#[allow(missing_docs)]
pub const THREADS_VARIABLE: &str = "MIPSOLVE_THREADS";

/// Numeric representation of the simplex tableau.
///
/// The choice is made once for each linear program that is solved.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Backend {
    /// Dense, row major `f64` values.
    #[default]
    Double,
    /// Dense, row major, exact rational values.
    Rational,
    /// Column major `f64` values, with basis columns stored as a reference to a unit vector.
    Revised,
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" => Ok(Backend::Double),
            "rational" => Ok(Backend::Rational),
            "revised" => Ok(Backend::Revised),
            _ => Err(ConfigError::Backend(name.to_string())),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Double => "double",
            Backend::Rational => "rational",
            Backend::Revised => "revised",
        })
    }
}

/// Settings shared by the simplex method and branch and bound.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SolverConfig {
    /// Number of decimal digits of the objective value, the solution and the dual values.
    pub precision: u32,
    /// Pivots on a single index before that index counts as possibly cycling.
    ///
    /// Cycling is assumed once half of the indices reached this count, or a single index reached
    /// ten times this count.
    pub cycling_threshold: usize,
    /// Tableau representation.
    pub backend: Backend,
    /// Size of the worker pool exploring the branch and bound tree.
    ///
    /// With `0` workers, the tree is explored in the calling thread.
    pub threads: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            cycling_threshold: DEFAULT_CYCLING_THRESHOLD,
            backend: Backend::default(),
            threads: DEFAULT_THREADS,
        }
    }
}

impl SolverConfig {
    /// Round results to this many decimal digits.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Set the cycling guard threshold.
    pub fn with_cycling_threshold(mut self, cycling_threshold: usize) -> Self {
        self.cycling_threshold = cycling_threshold;
        self
    }

    #[allow(missing_docs)]
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Explore the branch and bound tree with this many workers, `0` meaning the calling thread.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Read the configuration from the environment.
    ///
    /// Variables that are not set keep their default value.
    ///
    /// # Return value
    ///
    /// The configuration, or an error describing the first variable that couldn't be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let number = |name: &'static str| -> Result<Option<usize>, ConfigError> {
            lookup(name)
                .map(|value| value.trim().parse::<usize>()
                    .map_err(|source| ConfigError::Number { name, value, source }))
                .transpose()
        };

        let mut config = Self::default();
        if let Some(precision) = number(PRECISION_VARIABLE)? {
            config.precision = u32::try_from(precision).unwrap_or(u32::MAX);
        }
        if let Some(threshold) = number(CYCLING_THRESHOLD_VARIABLE)? {
            config.cycling_threshold = threshold;
        }
        if let Some(threads) = number(THREADS_VARIABLE)? {
            config.threads = threads;
        }
        if let Some(name) = lookup(BACKEND_VARIABLE) {
            config.backend = name.parse()?;
        }

        Ok(config)
    }
}
