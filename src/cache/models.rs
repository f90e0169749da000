//! Cache statistics and outcome models.

// Author: kelexine (https://github.com/kelexine)

/// Statistics for inverse cache operations on a single container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from the cached inverse.
    pub hits: u64,
    /// Requests that found no cached inverse.
    pub misses: u64,
    /// Successful calls into the inversion routine.
    pub computes: u64,
    /// Cached inverses dropped because the matrix was replaced.
    pub invalidations: u64,
    /// Inversion attempts that returned an error.
    pub failures: u64,
}

impl CacheStats {
    /// Fraction of requests served from cache, or `0.0` before any request.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// How a solve request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// Returned the stored inverse without computation.
    Hit,
    /// Invoked the inversion routine and stored its result.
    Computed,
}

impl CacheOutcome {
    /// True when the inverse was served from cache
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheOutcome::Hit)
    }
}
