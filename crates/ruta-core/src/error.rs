//! Core error type.

use thiserror::Error;

/// Errors produced by `ruta-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("geometry needs at least 2 points, got {0}")]
    DegenerateGeometry(usize),
}

/// Shorthand result type for `ruta-core`.
pub type CoreResult<T> = Result<T, CoreError>;
