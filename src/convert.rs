//! Pure conversion functions: TOML config structs -> library config types.

use anyhow::{Context, Result, bail};

use swdmd_core::SwDmdConfig;

use crate::config::{DmdToml, TrajectoryToml};
use crate::trajectory::TrajectorySpec;

/// Converts the `[dmd]` table into a validated `SwDmdConfig`.
pub fn build_dmd_config(t: &DmdToml) -> Result<SwDmdConfig> {
    let config = SwDmdConfig::new(t.window_size, t.start_time, t.end_time, t.pred_time_len)
        .with_rcond(t.rcond);
    config.validate().context("invalid [dmd] settings")?;
    Ok(config)
}

/// Converts the `[trajectory]` table into a `TrajectorySpec`.
///
/// Gradient descent with step `lr` on curvature `c` converges only for
/// `lr * c < 2`, so the largest curvature bounds the learning rate.
pub fn build_trajectory_spec(t: &TrajectoryToml) -> Result<TrajectorySpec> {
    if t.num_params == 0 {
        bail!("trajectory.num_params must be >= 1");
    }
    if t.num_iters == 0 {
        bail!("trajectory.num_iters must be >= 1");
    }
    if !(t.curvature_min.is_finite() && t.curvature_min > 0.0) {
        bail!(
            "trajectory.curvature_min must be finite and > 0, got {}",
            t.curvature_min
        );
    }
    if !t.curvature_max.is_finite() || t.curvature_max < t.curvature_min {
        bail!(
            "trajectory.curvature_max must be finite and >= curvature_min ({}), got {}",
            t.curvature_min,
            t.curvature_max
        );
    }
    if !(t.learning_rate.is_finite() && t.learning_rate > 0.0) {
        bail!(
            "trajectory.learning_rate must be finite and > 0, got {}",
            t.learning_rate
        );
    }
    if t.learning_rate * t.curvature_max >= 2.0 {
        bail!(
            "trajectory.learning_rate * curvature_max must be < 2, got {}",
            t.learning_rate * t.curvature_max
        );
    }
    if !(t.noise_sd.is_finite() && t.noise_sd >= 0.0) {
        bail!(
            "trajectory.noise_sd must be finite and >= 0, got {}",
            t.noise_sd
        );
    }

    Ok(TrajectorySpec {
        num_params: t.num_params,
        learning_rate: t.learning_rate,
        curvature_min: t.curvature_min,
        curvature_max: t.curvature_max,
        noise_sd: t.noise_sd,
    })
}
