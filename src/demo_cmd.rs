//! Demo command: extrapolate a synthetic gradient-descent trajectory.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use ndarray::{Array1, Array2, s};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, info_span};

use swdmd_core::{SwDmdConfig, sliding_window_dmd};

use crate::cli::DemoArgs;
use crate::config::{self, SwDmdToml};
use crate::convert;
use crate::trajectory::{QuadraticProblem, TrajectorySpec, gradient_descent};

/// Predicted and true iterates for one demo run.
#[derive(Debug)]
pub struct DemoReport {
    /// Raw iteration index of the first prediction.
    pub first_iter: usize,
    /// Predicted iterates, shape `(num_params, pred_time_len)`.
    pub predictions: Array2<f64>,
    /// True iterates for the same steps.
    pub truth: Array2<f64>,
    /// Numerical rank of the fitting matrix.
    pub rank: usize,
    /// Frobenius norm of the fit residual.
    pub residual: f64,
    /// Wall-clock time of the library call.
    pub elapsed: Duration,
}

impl DemoReport {
    /// Euclidean error of each predicted column.
    pub fn step_errors(&self) -> Array1<f64> {
        let diff = &self.predictions - &self.truth;
        diff.columns()
            .into_iter()
            .map(|c| c.dot(&c).sqrt())
            .collect()
    }
}

/// Run the demo pipeline.
pub fn run(args: DemoArgs) -> Result<()> {
    let _cmd = info_span!("demo").entered();

    // 1. Load settings and apply CLI overrides
    let mut config = match &args.config {
        Some(path) => config::load(path)?,
        None => SwDmdToml::default(),
    };
    apply_overrides(&mut config, &args);

    let dmd_config = convert::build_dmd_config(&config.dmd)?;
    let spec = convert::build_trajectory_spec(&config.trajectory)?;

    // 2. Seed RNG
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // 3. Fit and extrapolate
    let report = run_demo(&dmd_config, &spec, config.trajectory.num_iters, &mut rng)?;

    // 4. Report
    print_report(&report);
    Ok(())
}

fn apply_overrides(config: &mut SwDmdToml, args: &DemoArgs) {
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(w) = args.window_size {
        config.dmd.window_size = w;
    }
    if let Some(start) = args.start_time {
        config.dmd.start_time = start;
    }
    if let Some(end) = args.end_time {
        config.dmd.end_time = end;
    }
    if let Some(p) = args.pred_len {
        config.dmd.pred_time_len = p;
    }
    if let Some(sd) = args.noise_sd {
        config.trajectory.noise_sd = sd;
    }
}

/// Generates a trajectory, fits on its first `num_iters` rows, and compares
/// the rollout against the iterates that follow the fitting range.
pub fn run_demo<R: Rng>(
    dmd_config: &SwDmdConfig,
    spec: &TrajectorySpec,
    num_iters: usize,
    rng: &mut R,
) -> Result<DemoReport> {
    dmd_config
        .validate_for(num_iters)
        .context("[dmd] range does not fit in trajectory.num_iters")?;

    // end_time + window_size <= num_iters after validate_for.
    let first_iter = dmd_config.end_time() + dmd_config.window_size();
    let pred_len = dmd_config.pred_time_len();
    let Some(last_iter) = first_iter.checked_add(pred_len) else {
        bail!("dmd.pred_time_len {pred_len} overflows the iteration index");
    };
    let total = num_iters.max(last_iter);

    let problem = QuadraticProblem::sample(spec, rng);
    let full = gradient_descent(&problem, spec, total, rng)?;
    info!(
        num_iters,
        num_params = spec.num_params,
        "trajectory generated"
    );

    let history = full.slice(s![..num_iters, ..]);
    let result = sliding_window_dmd(history, dmd_config).context("sliding-window DMD failed")?;

    let operator = result.operator();
    let rank = operator.rank();
    let residual = operator.residual();
    let elapsed = result.elapsed();
    info!(rank, residual, "operator fitted");

    let truth = full
        .slice(s![first_iter..last_iter, ..])
        .t()
        .to_owned();

    Ok(DemoReport {
        first_iter,
        predictions: result.into_predictions(),
        truth,
        rank,
        residual,
        elapsed,
    })
}

fn print_report(report: &DemoReport) {
    let errors = report.step_errors();
    println!(
        "operator rank {}, fit residual {:.3e}, elapsed {:.6} s",
        report.rank,
        report.residual,
        report.elapsed.as_secs_f64()
    );
    println!("{:>6} {:>6} {:>12} {:>12} {:>12}", "step", "iter", "|pred|", "|true|", "error");
    for (i, err) in errors.iter().enumerate() {
        let pred = report.predictions.column(i);
        let truth = report.truth.column(i);
        println!(
            "{:>6} {:>6} {:>12.6} {:>12.6} {:>12.3e}",
            i + 1,
            report.first_iter + i,
            pred.dot(&pred).sqrt(),
            truth.dot(&truth).sqrt(),
            err
        );
    }
}
