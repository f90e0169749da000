// Error types for matcache
// Author: kelexine (https://github.com/kelexine)

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatcacheError {
    #[error("Dimension error: expected a non-empty square matrix, got {rows}x{cols}")]
    Dimension { rows: usize, cols: usize },

    #[error("Matrix is not invertible: pivot at index {pivot_index} is zero or too small (value: {pivot_value})")]
    NotInvertible { pivot_index: usize, pivot_value: f64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),
}

impl MatcacheError {
    /// True for input that is not a non-empty square matrix
    pub fn is_dimension(&self) -> bool {
        matches!(self, MatcacheError::Dimension { .. })
    }

    /// True for singular or ill-conditioned input
    pub fn is_not_invertible(&self) -> bool {
        matches!(self, MatcacheError::NotInvertible { .. })
    }
}

pub type Result<T> = std::result::Result<T, MatcacheError>;
