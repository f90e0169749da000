// Matrix container with an invalidating inverse slot
// Author: kelexine (https://github.com/kelexine)

use crate::cache::models::CacheStats;
use crate::matrix::Matrix;
use crate::metrics;
use tracing::debug;

/// Holds a matrix together with its (optional) cached inverse.
///
/// Replacing the matrix through [`set_matrix`](Self::set_matrix) always
/// clears the cached inverse, so the two fields never describe different
/// matrices. The inverse slot is filled by
/// [`cached_solve`](crate::cache::cached_solve).
#[derive(Debug, Clone)]
pub struct CacheableMatrix {
    value: Matrix,
    cached_inverse: Option<Matrix>,
    stats: CacheStats,
}

impl CacheableMatrix {
    /// Create a container holding `value` with an empty cache
    pub fn new(value: Matrix) -> Self {
        Self {
            value,
            cached_inverse: None,
            stats: CacheStats::default(),
        }
    }

    /// Replace the matrix and drop any cached inverse
    pub fn set_matrix(&mut self, value: Matrix) {
        self.value = value;
        if self.cached_inverse.take().is_some() {
            debug!("Matrix replaced, cached inverse invalidated");
            self.stats.invalidations += 1;
            metrics::record_invalidation();
        }
    }

    /// Current matrix
    pub fn matrix(&self) -> &Matrix {
        &self.value
    }

    /// Store an inverse for the current matrix, overwriting any prior one.
    /// The caller is trusted to pass the inverse of [`matrix`](Self::matrix).
    pub fn set_cached_inverse(&mut self, inverse: Matrix) {
        self.cached_inverse = Some(inverse);
    }

    /// Cached inverse, or `None` if none was computed since the last `set_matrix`
    pub fn cached_inverse(&self) -> Option<&Matrix> {
        self.cached_inverse.as_ref()
    }

    /// True while an inverse is cached for the current matrix
    pub fn is_cached(&self) -> bool {
        self.cached_inverse.is_some()
    }

    /// Snapshot of this container's cache statistics
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub(crate) fn stats_mut(&mut self) -> &mut CacheStats {
        &mut self.stats
    }

    /// Consume the container, returning the matrix
    pub fn into_matrix(self) -> Matrix {
        self.value
    }
}

impl From<Matrix> for CacheableMatrix {
    fn from(value: Matrix) -> Self {
        Self::new(value)
    }
}
