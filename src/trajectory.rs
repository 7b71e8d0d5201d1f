//! Synthetic optimisation histories for the `demo` subcommand.
//!
//! Gradient descent on a separable quadratic
//!
//! ```text
//! f(x) = ½ Σ c_i (x_i - x*_i)²,    x[k+1] = x[k] - lr · (∇f(x[k]) + noise)
//! ```
//!
//! is affine in `x`, so two stacked iterates determine the next one exactly.
//! That makes it a natural parameter trajectory for sliding-window DMD.

use anyhow::Result;
use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Settings for [`QuadraticProblem::sample()`] and [`gradient_descent()`].
#[derive(Clone, Debug, PartialEq)]
pub struct TrajectorySpec {
    pub num_params: usize,
    pub learning_rate: f64,
    pub curvature_min: f64,
    pub curvature_max: f64,
    pub noise_sd: f64,
}

/// A random separable convex quadratic.
#[derive(Clone, Debug)]
pub struct QuadraticProblem {
    curvatures: Array1<f64>,
    minimizer: Array1<f64>,
}

impl QuadraticProblem {
    /// Draws curvatures uniformly from `[curvature_min, curvature_max]` and a
    /// minimiser uniformly from `[-1, 1)` per component.
    pub fn sample<R: Rng>(spec: &TrajectorySpec, rng: &mut R) -> Self {
        let curvatures = (0..spec.num_params)
            .map(|_| rng.random_range(spec.curvature_min..=spec.curvature_max))
            .collect();
        let minimizer = (0..spec.num_params)
            .map(|_| rng.random_range(-1.0_f64..1.0))
            .collect();
        Self {
            curvatures,
            minimizer,
        }
    }

    /// Returns the minimiser `x*`.
    pub fn minimizer(&self) -> &Array1<f64> {
        &self.minimizer
    }

    /// Returns `∇f(x) = c ⊙ (x - x*)`.
    pub fn gradient(&self, x: &Array1<f64>) -> Array1<f64> {
        &self.curvatures * &(x - &self.minimizer)
    }
}

/// Runs `n_iters` gradient-descent iterates from a random start.
///
/// Returns shape `(n_iters, num_params)`; row 0 is the starting point.
pub fn gradient_descent<R: Rng>(
    problem: &QuadraticProblem,
    spec: &TrajectorySpec,
    n_iters: usize,
    rng: &mut R,
) -> Result<Array2<f64>> {
    let noise = if spec.noise_sd > 0.0 {
        Some(Normal::new(0.0, spec.noise_sd)?)
    } else {
        None
    };

    let mut history = Array2::zeros((n_iters, spec.num_params));
    if n_iters == 0 {
        return Ok(history);
    }

    let mut x: Array1<f64> = problem
        .minimizer()
        .mapv(|m| m + rng.random_range(-2.0_f64..2.0));
    history.row_mut(0).assign(&x);

    for k in 1..n_iters {
        let mut grad = problem.gradient(&x);
        if let Some(normal) = &noise {
            grad.mapv_inplace(|g| g + normal.sample(rng));
        }
        x.scaled_add(-spec.learning_rate, &grad);
        history.row_mut(k).assign(&x);
    }

    Ok(history)
}
