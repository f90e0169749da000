// Cache-aware inversion
// Author: kelexine (https://github.com/kelexine)

use crate::cache::matrix::CacheableMatrix;
use crate::cache::models::CacheOutcome;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::metrics;
use crate::solver::{Inverter, SolveOptions};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Return the inverse of the container's matrix, computing it only on a miss.
///
/// `options` are forwarded to `inverter` when computation happens and are
/// ignored on a hit. Inversion errors propagate unchanged and leave the
/// cache empty.
pub fn cached_solve<I>(
    container: &mut CacheableMatrix,
    inverter: &I,
    options: &SolveOptions,
) -> Result<Matrix>
where
    I: Inverter + ?Sized,
{
    cached_solve_with_outcome(container, inverter, options).map(|(inverse, _)| inverse)
}

/// Like [`cached_solve`], also reporting whether the result came from cache.
pub fn cached_solve_with_outcome<I>(
    container: &mut CacheableMatrix,
    inverter: &I,
    options: &SolveOptions,
) -> Result<(Matrix, CacheOutcome)>
where
    I: Inverter + ?Sized,
{
    if let Some(inverse) = container.cached_inverse() {
        info!("getting cached data");
        let inverse = inverse.clone();
        container.stats_mut().hits += 1;
        metrics::record_cache_hit();
        return Ok((inverse, CacheOutcome::Hit));
    }

    let (rows, cols) = container.matrix().dim();
    debug!("Cache miss for {}x{} matrix", rows, cols);
    container.stats_mut().misses += 1;
    metrics::record_cache_miss();

    let started = Instant::now();
    let inverse = match inverter.invert(container.matrix(), options) {
        Ok(inverse) => inverse,
        Err(e) => {
            warn!("Inversion failed: {}", e);
            container.stats_mut().failures += 1;
            metrics::record_failure();
            return Err(e);
        }
    };
    metrics::record_inversion(started.elapsed().as_secs_f64());

    container.set_cached_inverse(inverse.clone());
    container.stats_mut().computes += 1;
    Ok((inverse, CacheOutcome::Computed))
}

impl CacheableMatrix {
    /// Inverse via [`GaussJordan`](crate::solver::GaussJordan) with default options
    pub fn solve(&mut self) -> Result<Matrix> {
        cached_solve(self, &crate::solver::GaussJordan, &SolveOptions::default())
    }
}
