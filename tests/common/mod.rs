// Shared test helpers
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use matcache::{GaussJordan, Inverter, Matrix, Result, SolveOptions};
use ndarray::array;
use std::cell::Cell;

/// Wraps GaussJordan and counts how often the routine is actually invoked
#[derive(Default)]
pub struct CountingInverter {
    calls: Cell<usize>,
    last_options: Cell<Option<SolveOptions>>,
}

impl CountingInverter {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_options(&self) -> Option<SolveOptions> {
        self.last_options.get()
    }
}

impl Inverter for CountingInverter {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        self.calls.set(self.calls.get() + 1);
        self.last_options.set(Some(*options));
        GaussJordan.invert(matrix, options)
    }
}

pub fn sample_matrix() -> Matrix {
    array![[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]
}

pub fn sample_inverse() -> Matrix {
    array![[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]]
}
