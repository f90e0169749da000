// Prometheus metrics registry and collectors
// Author: kelexine (https://github.com/kelexine)

use lazy_static::lazy_static;
use prometheus::{
    register_counter_vec_with_registry, register_histogram_with_registry, CounterVec, Encoder,
    Histogram, HistogramOpts, Opts, Registry, TextEncoder,
};

lazy_static! {
    /// Global Prometheus registry
    pub static ref REGISTRY: Registry = Registry::new();

    // ============================================================================
    // CACHE METRICS
    // ============================================================================

    /// Inverse cache operations
    pub static ref CACHE_OPERATIONS: CounterVec = register_counter_vec_with_registry!(
        Opts::new("matcache_cache_operations_total", "Total inverse cache operations"),
        &["operation"], // operation: hit, miss, invalidate, failure
        REGISTRY
    ).unwrap();

    // ============================================================================
    // SOLVER METRICS
    // ============================================================================

    /// Time spent inside the inversion routine on cache misses
    pub static ref INVERSION_DURATION: Histogram = register_histogram_with_registry!(
        HistogramOpts::new(
            "matcache_inversion_duration_seconds",
            "Matrix inversion duration in seconds"
        )
        .buckets(vec![0.00001, 0.0001, 0.001, 0.01, 0.1, 1.0, 10.0]),
        REGISTRY
    ).unwrap();
}

/// Gather all metrics and return as Prometheus text format
pub fn gather_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    if encoder.encode(&metric_families, &mut buffer).is_err() {
        return String::new();
    }
    String::from_utf8(buffer).unwrap_or_default()
}
