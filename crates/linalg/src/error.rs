//! Error types for the swdmd-linalg crate.

/// Error type for all fallible operations in the swdmd-linalg crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LinalgError {
    /// Returned when the relative singular-value cutoff is negative or non-finite.
    #[error("invalid rcond: {value} (must be finite and >= 0)")]
    InvalidTolerance {
        /// The rejected cutoff.
        value: f64,
    },

    /// Returned when a matrix has a zero-length dimension.
    #[error("matrix is empty: shape ({rows}, {cols})")]
    EmptyMatrix {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when a matrix contains NaN or infinity.
    #[error("matrix contains non-finite values")]
    NonFiniteMatrix,

    /// Returned when the SVD iteration limit is reached.
    #[error("SVD failed to converge for matrix of shape ({rows}, {cols})")]
    SvdNotConverged {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when nalgebra rejects the pseudo-inverse request.
    #[error("pseudo-inverse failed: {reason}")]
    PseudoInverseFailed {
        /// Message reported by the decomposition.
        reason: String,
    },
}
