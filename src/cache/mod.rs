// Inverse cache module
// Author: kelexine (https://github.com/kelexine)

pub mod matrix;
pub mod models;
pub mod shared;
pub mod solve;

pub use matrix::CacheableMatrix;
pub use models::{CacheOutcome, CacheStats};
pub use shared::SharedCacheableMatrix;
pub use solve::{cached_solve, cached_solve_with_outcome};
