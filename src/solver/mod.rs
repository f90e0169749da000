//! Matrix inversion routines.
//!
//! The cache treats inversion as an opaque, deterministic collaborator: any
//! type implementing [`Inverter`] can be plugged into
//! [`cached_solve`](crate::cache::cached_solve). [`GaussJordan`] is the
//! routine used when nothing else is supplied.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod gauss_jordan;

pub use gauss_jordan::GaussJordan;

use crate::config::SolverConfig;
use crate::error::{MatcacheError, Result};
use crate::matrix::Matrix;

/// Default pivot tolerance, relative to the largest entry of the input.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Options forwarded to the inversion routine on a cache miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOptions {
    /// Pivots with `|pivot| <= tolerance * max|a_ij|` are treated as zero.
    /// Must be finite and non-negative.
    pub tolerance: f64,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl SolveOptions {
    /// Override the pivot tolerance. Checked by [`validate`](Self::validate)
    /// before any inversion runs.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> Result<()> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(MatcacheError::Config(format!(
                "solver tolerance must be finite and non-negative, got {}",
                self.tolerance
            )))
        }
    }
}

impl From<&SolverConfig> for SolveOptions {
    fn from(config: &SolverConfig) -> Self {
        Self {
            tolerance: config.tolerance,
        }
    }
}

/// A routine that computes the inverse of a square matrix.
///
/// Implementations must not mutate their input and must return the same
/// result for the same matrix and options. Failures are reported as
/// [`MatcacheError::Dimension`](crate::error::MatcacheError::Dimension) for
/// non-square input and
/// [`MatcacheError::NotInvertible`](crate::error::MatcacheError::NotInvertible)
/// for singular input. Invalid options are reported as
/// [`MatcacheError::Config`](crate::error::MatcacheError::Config).
pub trait Inverter {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix>;
}

impl<T: Inverter + ?Sized> Inverter for &T {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        (**self).invert(matrix, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_tolerance() {
        assert!(SolveOptions::default().validate().is_ok());
        assert!(SolveOptions::default().with_tolerance(0.0).validate().is_ok());
        assert!(SolveOptions::default().with_tolerance(-1e-12).validate().is_err());
        assert!(SolveOptions::default().with_tolerance(f64::NAN).validate().is_err());
    }
}
