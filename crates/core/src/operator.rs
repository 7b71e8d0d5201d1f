//! Fitting of the Koopman-like operator `K` with `X_prime ≈ K X`.

use std::ops::Range;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};
use swdmd_linalg::{Scalar, frobenius_norm, pseudo_inverse};
use tracing::debug;

use crate::error::DmdError;

/// A fitted, generally non-square linear operator.
///
/// `K` maps a window of `window_size` stacked parameter vectors (length
/// `num_params * window_size`) to the next parameter vector (length
/// `num_params`). Produced by [`KoopmanOperator::fit()`]; rolled forward with
/// [`KoopmanOperator::rollout()`].
#[derive(Clone, Debug)]
pub struct KoopmanOperator<T> {
    k: Array2<T>,
    window_size: usize,
    rank: usize,
    n_samples: usize,
    residual: T,
}

impl<T: Scalar> KoopmanOperator<T> {
    /// Fits `K = X_prime · pinv(X)` over the half-open `time_range`.
    ///
    /// * `windowed`: output of [`window_embed()`](crate::window_embed) for the same `params`
    /// * `params`: raw history, shape `(num_iters, num_params)`
    /// * `time_range`: `start_time..end_time`; `X` uses windowed columns in
    ///   this range, `X_prime` uses raw rows shifted forward by `window_size`
    /// * `rcond`: relative singular-value cutoff for the pseudo-inverse
    ///
    /// Rank-deficient `X` is fine: the pseudo-inverse yields the minimum-norm
    /// least-squares operator and `K` keeps its full shape.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`DmdError::EmptyData`] | `params` has no rows or no columns |
    /// | [`DmdError::InvalidWindowSize`] | `window_size == 0` |
    /// | [`DmdError::WindowTooLarge`] | `window_size > num_iters` |
    /// | [`DmdError::ShapeMismatch`] | `windowed` is not the embedding of `params` |
    /// | [`DmdError::EmptyTimeRange`] | `start_time >= end_time` |
    /// | [`DmdError::TimeRangeOutOfBounds`] | `end_time + window_size > num_iters` |
    /// | [`DmdError::Linalg`] | invalid `rcond` or SVD failure |
    pub fn fit(
        windowed: ArrayView2<'_, T>,
        params: ArrayView2<'_, T>,
        window_size: usize,
        time_range: Range<usize>,
        rcond: f64,
    ) -> Result<Self, DmdError> {
        let (num_iters, num_params) = params.dim();
        if num_iters == 0 || num_params == 0 {
            return Err(DmdError::EmptyData);
        }
        if window_size == 0 {
            return Err(DmdError::InvalidWindowSize { window_size });
        }
        if window_size > num_iters {
            return Err(DmdError::WindowTooLarge {
                window_size,
                num_iters,
            });
        }
        check_len("windowed rows", num_params * window_size, windowed.nrows())?;
        check_len("windowed columns", num_iters - window_size + 1, windowed.ncols())?;

        let Range {
            start: start_time,
            end: end_time,
        } = time_range;
        if start_time >= end_time {
            return Err(DmdError::EmptyTimeRange {
                start_time,
                end_time,
            });
        }
        if end_time > num_iters - window_size {
            return Err(DmdError::TimeRangeOutOfBounds {
                end_time,
                window_size,
                num_iters,
            });
        }

        let x = windowed.slice(s![.., start_time..end_time]);
        let x_prime = params
            .slice(s![start_time + window_size..end_time + window_size, ..])
            .reversed_axes();

        let pinv = pseudo_inverse(x, rcond)?;
        let k = x_prime.dot(pinv.inverse());
        let residual = frobenius_norm((&x_prime - &k.dot(&x)).view());

        debug!(
            rows = k.nrows(),
            cols = k.ncols(),
            n_samples = end_time - start_time,
            rank = pinv.rank(),
            residual = ?residual,
            "operator fitted"
        );

        Ok(Self {
            k,
            window_size,
            rank: pinv.rank(),
            n_samples: end_time - start_time,
            residual,
        })
    }

    /// Returns the operator matrix, shape `(num_params, num_params * window_size)`.
    pub fn k(&self) -> &Array2<T> {
        &self.k
    }

    /// Consumes the operator and returns its matrix.
    pub fn into_k(self) -> Array2<T> {
        self.k
    }

    /// Returns the number of parameters per time step.
    pub fn num_params(&self) -> usize {
        self.k.nrows()
    }

    /// Returns the window size the operator was fitted with.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the length of a stacked window, `num_params * window_size`.
    pub fn state_dim(&self) -> usize {
        self.k.ncols()
    }

    /// Returns the numerical rank of the `X` matrix used in the fit.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Returns the number of sample columns used in the fit.
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the Frobenius norm of `X_prime - K X` over the fitting range.
    pub fn residual(&self) -> T {
        self.residual
    }

    /// Predicts the next parameter vector from one stacked window.
    ///
    /// # Errors
    ///
    /// [`DmdError::ShapeMismatch`] if `window.len() != state_dim()`.
    pub fn apply(&self, window: ArrayView1<'_, T>) -> Result<Array1<T>, DmdError> {
        check_len("window length", self.state_dim(), window.len())?;
        Ok(self.k.dot(&window))
    }
}

pub(crate) fn check_len(field: &str, expected: usize, got: usize) -> Result<(), DmdError> {
    if expected != got {
        return Err(DmdError::ShapeMismatch {
            field: field.to_string(),
            expected,
            got,
        });
    }
    Ok(())
}
