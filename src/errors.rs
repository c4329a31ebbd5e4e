//! Matrix errors

/// Everything that can go wrong when building or solving a [`Matrix`](crate::matrix::Matrix).
///
/// Only [`MatrixError::SingularMatrix`] is ever returned to callers as a value;
/// the other variants describe broken call-site contracts and are raised as
/// panics carrying their `Display` text (or as `Err` from the `try_*` twins).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    /// (IndexOutOfRange) A row or column index is past the matrix shape
    #[error("(IndexOutOfRange) entry ({row}, {col}) is outside a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// (DimensionMismatch) The shapes cannot take part in this operation
    #[error("(DimensionMismatch) {operation} is not defined for a {rows}x{cols} matrix")]
    DimensionMismatch {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },
    /// (NonSquare) The operation needs a square matrix
    #[error("(NonSquare) a {rows}x{cols} matrix is not square")]
    NonSquare { rows: usize, cols: usize },
    /// (WrongInitLength) A flat initialiser has the wrong number of values
    #[error("(WrongInitLength) expected {expected} values to fill the matrix, got {found}")]
    WrongInitLength { expected: usize, found: usize },
    /// (SingularMatrix) The determinant is zero, so there is no inverse
    #[error("(SingularMatrix) determinant is zero, the matrix has no inverse")]
    SingularMatrix,
}

/// Convenience alias for `Result<T, MatrixError>`.
pub type Result<T> = core::result::Result<T, MatrixError>;
