//! Configuration for a sliding-window DMD call.

use std::ops::Range;

use swdmd_linalg::DEFAULT_RCOND;

use crate::error::DmdError;

/// Window, fitting range, and horizon for [`sliding_window_dmd()`](crate::sliding_window_dmd).
///
/// The operator is fitted on windows starting at `start_time..end_time`; the
/// rollout is seeded from the window starting at `end_time`.
///
/// # Example
///
/// ```
/// use swdmd_core::SwDmdConfig;
///
/// let config = SwDmdConfig::new(2, 0, 6, 3).with_rcond(1e-12);
/// assert!(config.validate_for(10).is_ok());
/// assert!(config.validate_for(7).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SwDmdConfig {
    window_size: usize,
    start_time: usize,
    end_time: usize,
    pred_time_len: usize,
    rcond: f64,
}

impl SwDmdConfig {
    /// Creates a configuration with `rcond = DEFAULT_RCOND` (`1e-15`).
    pub fn new(window_size: usize, start_time: usize, end_time: usize, pred_time_len: usize) -> Self {
        Self {
            window_size,
            start_time,
            end_time,
            pred_time_len,
            rcond: DEFAULT_RCOND,
        }
    }

    /// Sets the relative cutoff below which singular values are discarded.
    pub fn with_rcond(mut self, rcond: f64) -> Self {
        self.rcond = rcond;
        self
    }

    // --- Accessors ---

    /// Returns the number of consecutive parameter vectors per window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the inclusive start of the fitting range.
    pub fn start_time(&self) -> usize {
        self.start_time
    }

    /// Returns the exclusive end of the fitting range.
    pub fn end_time(&self) -> usize {
        self.end_time
    }

    /// Returns the fitting range `start_time..end_time`.
    pub fn time_range(&self) -> Range<usize> {
        self.start_time..self.end_time
    }

    /// Returns the number of future steps to predict.
    pub fn pred_time_len(&self) -> usize {
        self.pred_time_len
    }

    /// Returns the relative singular-value cutoff.
    pub fn rcond(&self) -> f64 {
        self.rcond
    }

    /// Validates the configuration on its own.
    ///
    /// Checks that the window is non-empty, the fitting range is non-empty,
    /// at least one step is predicted, and `rcond` is finite and non-negative.
    pub fn validate(&self) -> Result<(), DmdError> {
        if self.window_size == 0 {
            return Err(DmdError::InvalidWindowSize {
                window_size: self.window_size,
            });
        }
        if self.start_time >= self.end_time {
            return Err(DmdError::EmptyTimeRange {
                start_time: self.start_time,
                end_time: self.end_time,
            });
        }
        if self.pred_time_len == 0 {
            return Err(DmdError::InvalidPredictionLength);
        }
        if !self.rcond.is_finite() || self.rcond < 0.0 {
            return Err(DmdError::InvalidRcond { value: self.rcond });
        }
        Ok(())
    }

    /// Validates the configuration against a history of `num_iters` vectors.
    ///
    /// In addition to [`validate()`](Self::validate), requires
    /// `window_size <= num_iters` and `end_time + window_size <= num_iters`,
    /// so that every fitting target and the rollout seed window exist.
    pub fn validate_for(&self, num_iters: usize) -> Result<(), DmdError> {
        self.validate()?;
        if self.window_size > num_iters {
            return Err(DmdError::WindowTooLarge {
                window_size: self.window_size,
                num_iters,
            });
        }
        // window_size <= num_iters here, so the subtraction cannot wrap.
        if self.end_time > num_iters - self.window_size {
            return Err(DmdError::TimeRangeOutOfBounds {
                end_time: self.end_time,
                window_size: self.window_size,
                num_iters,
            });
        }
        Ok(())
    }
}
