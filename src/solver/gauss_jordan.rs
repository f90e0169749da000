// Gauss-Jordan elimination with partial pivoting
// Author: kelexine (https://github.com/kelexine)

use crate::error::{MatcacheError, Result};
use crate::matrix::{identity, is_square, Matrix};
use crate::solver::{Inverter, SolveOptions};
use tracing::{debug, trace};

/// Inverts a matrix by reducing `[A | I]` to `[I | A^-1]`.
///
/// A pivot is treated as zero when `|pivot| <= tolerance * max|a_ij|`, so
/// the singularity decision does not depend on the scale of the input.
#[derive(Debug, Default, Clone, Copy)]
pub struct GaussJordan;

impl GaussJordan {
    /// Create the routine (it carries no state)
    pub fn new() -> Self {
        Self
    }
}

impl Inverter for GaussJordan {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        options.validate()?;

        let (rows, cols) = matrix.dim();
        if rows == 0 || !is_square(matrix) {
            return Err(MatcacheError::Dimension { rows, cols });
        }

        if let Some(((row, col), value)) = matrix.indexed_iter().find(|(_, v)| !v.is_finite()) {
            debug!("Non-finite entry {} at ({}, {})", value, row, col);
            return Err(MatcacheError::NotInvertible {
                pivot_index: col,
                pivot_value: *value,
            });
        }

        let n = rows;
        let max_abs = matrix.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let threshold = options.tolerance * max_abs;
        debug!(
            "Inverting {}x{} matrix (tolerance {:e}, pivot threshold {:e})",
            n, n, options.tolerance, threshold
        );

        let mut a = matrix.to_owned();
        let mut inv = identity(n);

        for col in 0..n {
            // Largest magnitude in the column at or below the diagonal
            let mut pivot_row = col;
            for row in (col + 1)..n {
                if a[[row, col]].abs() > a[[pivot_row, col]].abs() {
                    pivot_row = row;
                }
            }

            let pivot_value = a[[pivot_row, col]];
            if pivot_value.abs() <= threshold {
                debug!("Singular pivot at column {}: {:e}", col, pivot_value);
                return Err(MatcacheError::NotInvertible {
                    pivot_index: col,
                    pivot_value,
                });
            }

            if pivot_row != col {
                trace!("Swapping rows {} and {}", col, pivot_row);
                swap_rows(&mut a, col, pivot_row);
                swap_rows(&mut inv, col, pivot_row);
            }

            let scale = 1.0 / pivot_value;
            a.row_mut(col).mapv_inplace(|x| x * scale);
            inv.row_mut(col).mapv_inplace(|x| x * scale);

            let pivot_a = a.row(col).to_owned();
            let pivot_inv = inv.row(col).to_owned();
            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[[row, col]];
                if factor == 0.0 {
                    continue;
                }
                a.row_mut(row).scaled_add(-factor, &pivot_a);
                inv.row_mut(row).scaled_add(-factor, &pivot_inv);
            }
        }

        Ok(inv)
    }
}

fn swap_rows(m: &mut Matrix, i: usize, j: usize) {
    for col in 0..m.ncols() {
        m.swap([i, col], [j, col]);
    }
}
