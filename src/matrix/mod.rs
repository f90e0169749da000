//! Matrix representation shared by the cache and the solver.
//!
//! Matrices are plain `ndarray` values: the cache stores them, clones them
//! and hands them back without caring about layout.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use ndarray::Array2;

/// A dense two-dimensional matrix of `f64`.
pub type Matrix = Array2<f64>;

/// Returns true when the matrix has as many rows as columns.
pub fn is_square(m: &Matrix) -> bool {
    m.nrows() == m.ncols()
}

/// The `n x n` identity matrix.
pub fn identity(n: usize) -> Matrix {
    Array2::eye(n)
}

/// Element-wise comparison within an absolute tolerance.
///
/// Matrices of different shapes are never equal.
pub fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= tol)
}
