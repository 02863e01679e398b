//! Error types for grid operations

use thiserror::Error;

/// Errors reported by the grid and simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no backing cell buffer (never created, or destroyed).
    #[error("grid is not initialized")]
    NotInitialized,

    /// A cell or output buffer could not be allocated.
    #[error("out of memory")]
    NoMemory,
}

impl From<std::collections::TryReserveError> for GridError {
    fn from(_: std::collections::TryReserveError) -> Self {
        GridError::NoMemory
    }
}
