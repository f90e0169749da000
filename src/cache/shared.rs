// Thread-safe handle around a CacheableMatrix
// Author: kelexine (https://github.com/kelexine)
//
// The whole lookup, inversion and store sequence runs under one lock so a
// concurrent set_matrix can never interleave with a solve and two threads
// never compute the same inverse twice.

use crate::cache::matrix::CacheableMatrix;
use crate::cache::models::CacheStats;
use crate::cache::solve::cached_solve;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::solver::{Inverter, SolveOptions};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, `Send + Sync` handle to a shared [`CacheableMatrix`]
#[derive(Debug, Clone)]
pub struct SharedCacheableMatrix {
    inner: Arc<Mutex<CacheableMatrix>>,
}

impl SharedCacheableMatrix {
    pub fn new(value: Matrix) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheableMatrix::new(value))),
        }
    }

    /// Replace the matrix and invalidate the cached inverse
    pub fn set_matrix(&self, value: Matrix) {
        self.inner.lock().set_matrix(value);
    }

    /// Copy of the current matrix
    pub fn matrix(&self) -> Matrix {
        self.inner.lock().matrix().clone()
    }

    /// Copy of the cached inverse, if any
    pub fn cached_inverse(&self) -> Option<Matrix> {
        self.inner.lock().cached_inverse().cloned()
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }

    /// Cached inverse, computing it under the lock on a miss
    pub fn solve<I>(&self, inverter: &I, options: &SolveOptions) -> Result<Matrix>
    where
        I: Inverter + ?Sized,
    {
        let mut guard = self.inner.lock();
        cached_solve(&mut guard, inverter, options)
    }
}

impl From<CacheableMatrix> for SharedCacheableMatrix {
    fn from(container: CacheableMatrix) -> Self {
        Self {
            inner: Arc::new(Mutex::new(container)),
        }
    }
}
