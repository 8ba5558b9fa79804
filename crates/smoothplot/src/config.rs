//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use smoothplot_core::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_WINDOW};

/// SmoothPlot: smooth a CSV time series with a centered moving average and plot it.
#[derive(Parser, Debug)]
#[command(name = "smoothplot", version, about, arg_required_else_help = true)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

/// Operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append a centered rolling mean of `Value` as a `smoothed` column.
    Smooth(SmoothArgs),
    /// Plot `smoothed` against `Step` in the terminal.
    Plot(PlotArgs),
}

/// Options for `smooth`.
#[derive(Args, Debug)]
pub struct SmoothArgs {
    /// CSV file with `Step` and `Value` columns.
    #[arg(short, long, default_value = DEFAULT_INPUT_PATH, env = "SMOOTHPLOT_INPUT")]
    pub input: PathBuf,

    /// Where to write the smoothed table (overwritten).
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, env = "SMOOTHPLOT_OUTPUT")]
    pub output: PathBuf,

    /// Rows per window; must be odd.
    #[arg(short, long, default_value_t = DEFAULT_WINDOW, env = "SMOOTHPLOT_WINDOW")]
    pub window: usize,

    /// Quiet mode (no summary line).
    #[arg(short, long)]
    pub quiet: bool,
}

/// Options for `plot`.
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Smoothed CSV file with `Step` and `smoothed` columns.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, env = "SMOOTHPLOT_PLOT_INPUT")]
    pub input: PathBuf,

    /// Start with the raw `Value` series overlaid.
    #[arg(long)]
    pub raw: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
