// Cache container and statistics tests - public APIs only
// Author: kelexine (https://github.com/kelexine)

mod common;

use common::{sample_matrix, CountingInverter};
use matcache::metrics::{gather_metrics, CACHE_OPERATIONS};
use matcache::{cached_solve, CacheStats, CacheableMatrix, SharedCacheableMatrix, SolveOptions};
use ndarray::array;

#[test]
fn test_cache_stats_initialization() {
    let container = CacheableMatrix::new(sample_matrix());
    let stats = container.stats();

    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 0);
    assert_eq!(stats.computes, 0);
    assert_eq!(stats.hit_rate(), 0.0);
}

#[test]
fn test_cache_stats_track_lifecycle() {
    let inverter = CountingInverter::default();
    let opts = SolveOptions::default();
    let mut container = CacheableMatrix::new(sample_matrix());

    cached_solve(&mut container, &inverter, &opts).unwrap();
    cached_solve(&mut container, &inverter, &opts).unwrap();
    cached_solve(&mut container, &inverter, &opts).unwrap();
    container.set_matrix(array![[1.0, 0.0], [0.0, 1.0]]);
    cached_solve(&mut container, &inverter, &opts).unwrap();

    assert_eq!(
        container.stats(),
        CacheStats {
            hits: 2,
            misses: 2,
            computes: 2,
            invalidations: 1,
            failures: 0,
        }
    );
    assert_eq!(container.stats().hit_rate(), 0.5);
}

#[test]
fn test_getters_are_pure() {
    let mut container = CacheableMatrix::new(sample_matrix());
    container.solve().unwrap();
    let before = container.stats();

    let _ = container.matrix();
    let _ = container.cached_inverse();
    let _ = container.cached_inverse();

    assert_eq!(container.stats(), before);
    assert_eq!(container.matrix(), &sample_matrix());
}

#[test]
fn test_repeated_set_matrix_stays_empty() {
    let mut container = CacheableMatrix::from(sample_matrix());
    container.set_matrix(array![[3.0]]);
    container.set_matrix(array![[5.0]]);

    assert!(container.cached_inverse().is_none());
    assert_eq!(container.into_matrix(), array![[5.0]]);
}

#[test]
fn test_shared_container_matches_owned() {
    let shared = SharedCacheableMatrix::from(CacheableMatrix::new(sample_matrix()));
    let mut owned = CacheableMatrix::new(sample_matrix());

    let a = shared.solve(&CountingInverter::default(), &SolveOptions::default()).unwrap();
    let b = owned.solve().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_hits_are_exported_as_metrics() {
    let before = CACHE_OPERATIONS.with_label_values(&["hit"]).get();

    let mut container = CacheableMatrix::new(sample_matrix());
    container.solve().unwrap();
    container.solve().unwrap();

    let after = CACHE_OPERATIONS.with_label_values(&["hit"]).get();
    assert!(after >= before + 1.0);
    assert!(gather_metrics().contains("matcache_cache_operations_total"));
}
