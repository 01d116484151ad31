//! Optimize command implementation.
//!
//! Finds the draw count that maximizes expected payout and prints the report.

use anyhow::Result;
use clap::Args;

use ordex_math::optimizer::DrawPolicy;

use crate::cli::OutputFormat;
use crate::commands::{validate_payout, validate_population};
use crate::output::{format_currency, format_probability, print_header, print_output, KeyValue};

/// Arguments for the optimize command.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Population size N (number of distinct outcomes)
    #[arg(short = 'n', long, default_value = "60")]
    pub population: u32,

    /// Payout per successful draw
    #[arg(short, long, default_value = "1000000")]
    pub payout: f64,
}

/// Execute the optimize command.
pub fn execute(args: OptimizeArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    // Validate inputs before touching the core
    let population = validate_population(args.population)?;
    let payout = validate_payout(args.payout)?;

    let policy = DrawPolicy::new(population, payout)?;
    let best = policy.optimize();

    // Minimal format reproduces the classic plain-text report
    if format == OutputFormat::Minimal {
        println!("Optimal n: {}", best.n);
        println!(
            "Maximum Expected Value: {}",
            format_currency(best.expected_value)
        );
        println!(
            "Probability of success at optimal n: {}",
            format_probability(best.probability)
        );
        return Ok(());
    }

    if format == OutputFormat::Table && !quiet {
        print_header("Expected-Value Optimization");
    }

    let results = vec![
        KeyValue::new("Population (N)", population.to_string()),
        KeyValue::new("Payout per Draw", format_currency(payout)),
        KeyValue::new("Optimal n", best.n.to_string()),
        KeyValue::new(
            "Maximum Expected Value",
            format_currency(best.expected_value),
        ),
        KeyValue::new(
            "Probability of Success",
            format_probability(best.probability),
        ),
    ];

    print_output(&results, format)?;

    Ok(())
}
