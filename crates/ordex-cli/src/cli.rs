//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{OptimizeArgs, SweepArgs};

/// Ordex - Expected-value optimizer for ordered uniform draws
#[derive(Parser)]
#[command(name = "ordex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Find the draw count that maximizes expected payout
    Optimize(OptimizeArgs),

    /// Show probability and expected payout for every candidate draw count
    Sweep(SweepArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Plain-text report (just the result lines)
    Minimal,
}
