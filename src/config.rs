use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level swdmd configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SwDmdToml {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Window, fitting range, and horizon.
    #[serde(default)]
    pub dmd: DmdToml,

    /// Synthetic optimisation trajectory used by `demo`.
    #[serde(default)]
    pub trajectory: TrajectoryToml,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<SwDmdToml> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DmdToml {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default)]
    pub start_time: usize,
    #[serde(default = "default_end_time")]
    pub end_time: usize,
    #[serde(default = "default_pred_time_len")]
    pub pred_time_len: usize,
    #[serde(default = "default_rcond")]
    pub rcond: f64,
}

impl Default for DmdToml {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            start_time: 0,
            end_time: default_end_time(),
            pred_time_len: default_pred_time_len(),
            rcond: default_rcond(),
        }
    }
}

fn default_window_size() -> usize {
    2
}
fn default_end_time() -> usize {
    40
}
fn default_pred_time_len() -> usize {
    10
}
// Gradient-descent windows are exactly rank deficient; round-off singular values must be cut.
fn default_rcond() -> f64 {
    1e-10
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrajectoryToml {
    #[serde(default = "default_num_params")]
    pub num_params: usize,
    #[serde(default = "default_num_iters")]
    pub num_iters: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
    #[serde(default = "default_curvature_min")]
    pub curvature_min: f64,
    #[serde(default = "default_curvature_max")]
    pub curvature_max: f64,
    #[serde(default)]
    pub noise_sd: f64,
}

impl Default for TrajectoryToml {
    fn default() -> Self {
        Self {
            num_params: default_num_params(),
            num_iters: default_num_iters(),
            learning_rate: default_learning_rate(),
            curvature_min: default_curvature_min(),
            curvature_max: default_curvature_max(),
            noise_sd: 0.0,
        }
    }
}

fn default_num_params() -> usize {
    4
}
fn default_num_iters() -> usize {
    60
}
fn default_learning_rate() -> f64 {
    0.1
}
fn default_curvature_min() -> f64 {
    0.5
}
fn default_curvature_max() -> f64 {
    2.0
}
