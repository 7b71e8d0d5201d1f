//! Output of a sliding-window DMD call.

use std::time::Duration;

use ndarray::Array2;

use crate::operator::KoopmanOperator;

/// Predictions plus the operator that produced them.
///
/// Returned by [`sliding_window_dmd()`](crate::sliding_window_dmd).
#[derive(Clone, Debug)]
pub struct SwDmdResult<T> {
    predictions: Array2<T>,
    operator: KoopmanOperator<T>,
    elapsed: Duration,
}

impl<T> SwDmdResult<T> {
    pub(crate) fn new(predictions: Array2<T>, operator: KoopmanOperator<T>, elapsed: Duration) -> Self {
        Self {
            predictions,
            operator,
            elapsed,
        }
    }

    /// Returns the predicted parameters, shape `(num_params, pred_time_len)`.
    pub fn predictions(&self) -> &Array2<T> {
        &self.predictions
    }

    /// Consumes the result and returns the predictions.
    pub fn into_predictions(self) -> Array2<T> {
        self.predictions
    }

    /// Returns the fitted operator.
    pub fn operator(&self) -> &KoopmanOperator<T> {
        &self.operator
    }

    /// Returns the wall-clock time spent in the call.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the number of parameters per predicted vector.
    pub fn num_params(&self) -> usize {
        self.predictions.nrows()
    }

    /// Returns the number of predicted steps.
    pub fn pred_time_len(&self) -> usize {
        self.predictions.ncols()
    }
}
