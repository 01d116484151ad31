//! Sweep command implementation.
//!
//! Prints the expected-value profile for every candidate draw count.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use ordex_math::optimizer::DrawPolicy;

use crate::cli::OutputFormat;
use crate::commands::{validate_payout, validate_population};
use crate::output::{format_currency, format_probability, print_header, print_output};

/// Arguments for the sweep command.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Population size N (number of distinct outcomes)
    #[arg(short = 'n', long, default_value = "60")]
    pub population: u32,

    /// Payout per successful draw
    #[arg(short, long, default_value = "1000000")]
    pub payout: f64,

    /// Show only the top K draw counts by expected value
    #[arg(short, long)]
    pub top: Option<usize>,
}

/// One row of the sweep table.
#[derive(Debug, Serialize, Tabled)]
pub struct SweepRow {
    #[tabled(rename = "Draws (n)")]
    pub n: u32,
    #[tabled(rename = "Probability")]
    pub probability: String,
    #[tabled(rename = "Expected Value")]
    pub expected_value: String,
}

/// Execute the sweep command.
pub fn execute(args: SweepArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let population = validate_population(args.population)?;
    let payout = validate_payout(args.payout)?;

    let policy = DrawPolicy::new(population, payout)?;
    let mut outcomes = policy.sweep();

    if let Some(top) = args.top {
        // Rank by EV but keep the surviving rows in draw-count order
        outcomes.sort_by(|a, b| b.expected_value.total_cmp(&a.expected_value));
        outcomes.truncate(top);
        outcomes.sort_by_key(|o| o.n);
    }

    let rows: Vec<SweepRow> = outcomes
        .iter()
        .map(|o| SweepRow {
            n: o.n,
            probability: format_probability(o.probability),
            expected_value: format_currency(o.expected_value),
        })
        .collect();

    if format == OutputFormat::Table && !quiet {
        print_header("Expected-Value Profile");
    }

    print_output(&rows, format)?;

    Ok(())
}
