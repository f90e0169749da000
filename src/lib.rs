// matcache - Memoized matrix inversion
// Author: kelexine (https://github.com/kelexine)

pub mod cache;
pub mod config;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod solver;
pub mod utils;

pub use cache::{cached_solve, CacheOutcome, CacheStats, CacheableMatrix, SharedCacheableMatrix};
pub use error::{MatcacheError, Result};
pub use matrix::Matrix;
pub use solver::{GaussJordan, Inverter, SolveOptions};
