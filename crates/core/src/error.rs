//! Error types for the swdmd-core crate.

use swdmd_linalg::LinalgError;

/// Error type for all fallible operations in the swdmd-core crate.
///
/// Every shape and range problem is caught before any matrix is sliced, so a
/// call either fails with one of these variants or returns a complete result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DmdError {
    /// Pseudo-inverse error.
    #[error(transparent)]
    Linalg(#[from] LinalgError),

    /// Returned when the parameter matrix has no rows or no columns.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the parameter matrix contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when `window_size` is zero.
    #[error("invalid window size: {window_size} (must be >= 1)")]
    InvalidWindowSize {
        /// The rejected window size.
        window_size: usize,
    },

    /// Returned when the window is longer than the parameter history.
    #[error("window size {window_size} exceeds number of iterations {num_iters}")]
    WindowTooLarge {
        /// Requested window size.
        window_size: usize,
        /// Number of iterations in the parameter history.
        num_iters: usize,
    },

    /// Returned when `start_time >= end_time`.
    #[error("empty time range: start_time {start_time} must be < end_time {end_time}")]
    EmptyTimeRange {
        /// Inclusive start of the fitting range.
        start_time: usize,
        /// Exclusive end of the fitting range.
        end_time: usize,
    },

    /// Returned when `end_time + window_size` exceeds the parameter history.
    #[error(
        "time range out of bounds: end_time {end_time} + window_size {window_size} \
         exceeds number of iterations {num_iters}"
    )]
    TimeRangeOutOfBounds {
        /// Exclusive end of the fitting range.
        end_time: usize,
        /// Window size.
        window_size: usize,
        /// Number of iterations in the parameter history.
        num_iters: usize,
    },

    /// Returned when `pred_time_len` is zero.
    #[error("prediction length must be >= 1")]
    InvalidPredictionLength,

    /// Returned when the singular-value cutoff is negative or non-finite.
    #[error("invalid rcond: {value} (must be finite and >= 0)")]
    InvalidRcond {
        /// The rejected cutoff.
        value: f64,
    },

    /// Returned when an array does not have the dimension the operator expects.
    #[error("shape mismatch for {field}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Which dimension disagreed.
        field: String,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },
}
