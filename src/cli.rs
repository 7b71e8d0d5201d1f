use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sliding-window dynamic mode decomposition.
#[derive(Parser)]
#[command(
    name = "swdmd",
    version,
    about = "Sliding-window DMD extrapolation of parameter trajectories"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Fit and extrapolate a synthetic gradient-descent trajectory.
    Demo(DemoArgs),
}

/// Arguments for the `demo` subcommand.
#[derive(clap::Args)]
pub struct DemoArgs {
    /// Path to TOML configuration file (defaults are used when omitted).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override the sliding-window size.
    #[arg(short, long = "window-size")]
    pub window_size: Option<usize>,

    /// Override the inclusive start of the fitting range.
    #[arg(long = "start-time")]
    pub start_time: Option<usize>,

    /// Override the exclusive end of the fitting range.
    #[arg(long = "end-time")]
    pub end_time: Option<usize>,

    /// Override the number of predicted steps.
    #[arg(short, long = "pred-len")]
    pub pred_len: Option<usize>,

    /// Override the standard deviation of the gradient noise.
    #[arg(long = "noise-sd")]
    pub noise_sd: Option<f64>,
}
