use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Pinpoint interactive KNN scatterplot demo.
#[derive(Parser)]
#[command(
    name = "pinpoint",
    version,
    about = "K-nearest-neighbor scatterplot demo"
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
    /// Classify a query point by majority vote among its nearest neighbors.
    Classify(PredictArgs),
    /// Estimate a value for a query point by averaging its nearest neighbors.
    Estimate(PredictArgs),
}

/// Arguments shared by the two prediction subcommands.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "pinpoint.toml")]
    pub config: PathBuf,

    /// Horizontal query coordinate (clamped into [0, 1]).
    #[arg(short = 'x', long = "query-x")]
    pub x: f64,

    /// Vertical query coordinate (clamped into [0, 1]).
    #[arg(short = 'y', long = "query-y")]
    pub y: f64,

    /// Override neighbor count from config.
    #[arg(short, long)]
    pub k: Option<usize>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write a JSON report to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
