//! # swdmd-core
//!
//! Sliding-Window Dynamic Mode Decomposition (SW-DMD).
//!
//! Fits a generally non-square Koopman-like operator `K` that maps a window
//! of `window_size` consecutive parameter vectors to the next one,
//!
//! ```text
//! X_prime ≈ K X,    K = X_prime · pinv(X)
//! ```
//!
//! and rolls it forward to extrapolate the parameter trajectory. With
//! `window_size = 1` this is standard DMD.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["params (num_iters × num_params)"] -->|"window_embed()"| B["windowed matrix"]
//!     B -->|"KoopmanOperator::fit()"| C["KoopmanOperator"]
//!     C -->|".rollout()"| D["predictions (num_params × pred_time_len)"]
//! ```
//!
//! ## Quick start
//!
//! ```
//! use ndarray::Array2;
//! use swdmd_core::{SwDmdConfig, sliding_window_dmd};
//!
//! // 10 iterations of 2 parameters: [[0, 1], [2, 3], ..., [18, 19]]
//! let params = Array2::from_shape_fn((10, 2), |(t, p)| (2 * t + p) as f64);
//! // The ramp is exactly rank 2, so cut round-off singular values generously.
//! let config = SwDmdConfig::new(2, 0, 6, 3).with_rcond(1e-10);
//!
//! let result = sliding_window_dmd(params.view(), &config).unwrap();
//! assert_eq!(result.predictions().dim(), (2, 3));
//! assert!((result.predictions()[[0, 0]] - 16.0).abs() < 1e-8);
//! ```
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | `X` | | windowed columns `start_time..end_time` |
//! | `X_prime` | | raw vectors `start_time + w..end_time + w` as columns |
//! | `K` | [`KoopmanOperator::k()`] | operator, shape `(num_params, num_params * w)` |
//! | `X_last` | | windowed column `end_time`, the rollout seed |

mod config;
mod embed;
mod error;
mod operator;
mod predict;
mod result;

use std::time::Instant;

use ndarray::ArrayView2;
use swdmd_linalg::Scalar;
use tracing::info;

pub use config::SwDmdConfig;
pub use embed::window_embed;
pub use error::DmdError;
pub use operator::KoopmanOperator;
pub use result::SwDmdResult;
pub use swdmd_linalg::DEFAULT_RCOND;

/// Runs the full SW-DMD pass: embed, fit, roll forward.
///
/// `params` has shape `(num_iters, num_params)` with time along axis 0. The
/// returned predictions have shape `(num_params, config.pred_time_len())`,
/// column `i` predicting raw time `end_time + window_size + i`.
///
/// The elapsed wall-clock time is returned in [`SwDmdResult::elapsed()`] and
/// emitted as an `info` event (`time elapsed (seconds): ...`). The line is
/// only printed when a `tracing` subscriber is installed with `info` or a more
/// verbose level enabled for `swdmd_core`; the `swdmd` binary needs `-v`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`DmdError::EmptyData`] | `params` has no rows or no columns |
/// | [`DmdError::NonFiniteData`] | any element is NaN or infinite |
/// | [`DmdError::InvalidWindowSize`] | `window_size == 0` |
/// | [`DmdError::WindowTooLarge`] | `window_size > num_iters` |
/// | [`DmdError::EmptyTimeRange`] | `start_time >= end_time` |
/// | [`DmdError::TimeRangeOutOfBounds`] | `end_time + window_size > num_iters` |
/// | [`DmdError::InvalidPredictionLength`] | `pred_time_len == 0` |
/// | [`DmdError::InvalidRcond`] | `rcond` negative or non-finite |
/// | [`DmdError::Linalg`] | SVD failure |
#[tracing::instrument(skip(params), fields(num_iters = params.nrows(), num_params = params.ncols()))]
pub fn sliding_window_dmd<T: Scalar>(
    params: ArrayView2<'_, T>,
    config: &SwDmdConfig,
) -> Result<SwDmdResult<T>, DmdError> {
    let started = Instant::now();

    let (num_iters, num_params) = params.dim();
    if num_iters == 0 || num_params == 0 {
        return Err(DmdError::EmptyData);
    }
    if params.iter().any(|x| !x.is_finite()) {
        return Err(DmdError::NonFiniteData);
    }
    config.validate_for(num_iters)?;

    let windowed = window_embed(params, config.window_size())?;
    let operator = KoopmanOperator::fit(
        windowed.view(),
        params,
        config.window_size(),
        config.time_range(),
        config.rcond(),
    )?;
    let predictions = operator.rollout(
        windowed.view(),
        config.end_time(),
        config.pred_time_len(),
    )?;

    let elapsed = started.elapsed();
    info!(
        elapsed_secs = elapsed.as_secs_f64(),
        "time elapsed (seconds): {:.6}",
        elapsed.as_secs_f64()
    );

    Ok(SwDmdResult::new(predictions, operator, elapsed))
}
