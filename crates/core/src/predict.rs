//! Autoregressive rollout of a fitted operator.

use ndarray::{Array2, ArrayView1, ArrayView2};
use swdmd_linalg::Scalar;
use tracing::trace;

use crate::error::DmdError;
use crate::operator::{KoopmanOperator, check_len};

impl<T: Scalar> KoopmanOperator<T> {
    /// Rolls the operator forward for `pred_time_len` steps.
    ///
    /// The state is seeded with windowed column `end_time` (the newest window
    /// whose successor was not a fitting target). Each step predicts
    /// `K · state`, then drops the oldest `num_params` block of the state and
    /// appends the prediction. With `pred_time_len = 1` no slide happens.
    ///
    /// Returns shape `(num_params, pred_time_len)`; column `i` is the
    /// prediction for raw time `end_time + window_size + i`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DmdError::InvalidPredictionLength`] | `pred_time_len == 0` |
    /// | [`DmdError::ShapeMismatch`] | `windowed.nrows() != state_dim()` |
    /// | [`DmdError::TimeRangeOutOfBounds`] | `end_time >= windowed.ncols()` |
    pub fn rollout(
        &self,
        windowed: ArrayView2<'_, T>,
        end_time: usize,
        pred_time_len: usize,
    ) -> Result<Array2<T>, DmdError> {
        if pred_time_len == 0 {
            return Err(DmdError::InvalidPredictionLength);
        }
        check_len("windowed rows", self.state_dim(), windowed.nrows())?;
        if end_time >= windowed.ncols() {
            return Err(DmdError::TimeRangeOutOfBounds {
                end_time,
                window_size: self.window_size(),
                num_iters: windowed.ncols() + self.window_size() - 1,
            });
        }

        let num_params = self.num_params();
        let tail = self.state_dim() - num_params;
        let mut state: Vec<T> = windowed.column(end_time).to_vec();
        let mut predictions = Array2::zeros((num_params, pred_time_len));

        for step in 0..pred_time_len {
            if step > 0 {
                state.copy_within(num_params.., 0);
                for (slot, &value) in state[tail..]
                    .iter_mut()
                    .zip(predictions.column(step - 1))
                {
                    *slot = value;
                }
            }
            let next = self.apply(ArrayView1::from(&state[..]))?;
            trace!(step, "rollout step");
            predictions.column_mut(step).assign(&next);
        }

        Ok(predictions)
    }
}
