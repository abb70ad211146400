use thiserror::Error;

/// Errors reported by the assignment solvers.
///
/// Shape and value errors are detected before any work starts, so no
/// partial result is ever observable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("matrix is not square ({rows} rows, {columns} columns)")]
    NotSquare { rows: usize, columns: usize },
    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("entry at row {row}, column {column} is not finite or too large ({value})")]
    InvalidValue { row: usize, column: usize, value: f64 },
    #[error("reduced costs overflowed while inserting row {row}")]
    Overflow { row: usize },
    #[error("solver interrupted after {completed} out of {total} rows")]
    Interrupted { completed: usize, total: usize },
}

impl SolveError {
    /// Is this error about the dimensions of the matrix?
    pub fn is_shape_error(&self) -> bool {
        matches!(self, Self::NotSquare { .. } | Self::RaggedRow { .. })
    }
}
