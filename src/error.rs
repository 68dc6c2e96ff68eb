use thiserror::Error;

/// Errors raised by the percolation model. Both are caller mistakes and are
/// reported before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PercolationError {
    #[error("invalid grid size {size}: must be greater than 0")]
    InvalidArgument { size: i64 },
    #[error("site ({row}, {col}) is outside the {size}x{size} grid")]
    IndexOutOfRange { row: i64, col: i64, size: usize },
}
