//! Ordex CLI - Command-line interface for ordered-draw expected-value analytics.
//!
//! # Usage
//!
//! ```bash
//! # Find the draw count that maximizes expected payout
//! ordex optimize --population 60 --payout 1000000
//!
//! # Show the full expected-value profile per draw count
//! ordex sweep --population 60 --payout 1000000 --top 15
//!
//! # Machine-readable output
//! ordex optimize --population 60 --payout 1000000 --format json
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Optimize(args) => commands::optimize::execute(args, format, cli.quiet)?,
        Commands::Sweep(args) => commands::sweep::execute(args, format, cli.quiet)?,
    }

    Ok(())
}
