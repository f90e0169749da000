// Metrics module for Prometheus observability
// Author: kelexine (https://github.com/kelexine)

mod registry;

pub use registry::{gather_metrics, CACHE_OPERATIONS, INVERSION_DURATION, REGISTRY};

/// Helper to record a cache hit
pub fn record_cache_hit() {
    CACHE_OPERATIONS.with_label_values(&["hit"]).inc();
}

pub fn record_cache_miss() {
    CACHE_OPERATIONS.with_label_values(&["miss"]).inc();
}

/// Helper to record a cached inverse dropped by a matrix replacement
pub fn record_invalidation() {
    CACHE_OPERATIONS.with_label_values(&["invalidate"]).inc();
}

pub fn record_failure() {
    CACHE_OPERATIONS.with_label_values(&["failure"]).inc();
}

/// Helper to record how long the inversion routine took
pub fn record_inversion(duration_secs: f64) {
    INVERSION_DURATION.observe(duration_secs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_helpers_increment_counters() {
        let before = CACHE_OPERATIONS.with_label_values(&["invalidate"]).get();
        record_invalidation();
        let after = CACHE_OPERATIONS.with_label_values(&["invalidate"]).get();
        assert!(after >= before + 1.0);
    }
}
