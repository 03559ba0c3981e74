#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use percolation::PercolationStats;

/// Estimates the percolation threshold of an n-by-n grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Arguments {
    /// Side of the grid.
    #[arg(value_parser = parse_positive)]
    grid_size: usize,

    /// Number of independent trials.
    #[arg(value_parser = parse_positive)]
    trials: usize,

    #[arg(short, long, default_value_t = 1)]
    log_level: usize,
}

fn parse_positive(value: &str) -> Result<usize, String> {
    let parsed: i64 = value
        .parse()
        .map_err(|_| format!("`{value}` is not an integer"))?;
    if parsed < 1 {
        return Err(format!("expected a positive integer, got {parsed}"));
    }
    usize::try_from(parsed).map_err(|err| err.to_string())
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    stderrlog::new()
        .verbosity(args.log_level)
        .module(module_path!())
        .module("percolation")
        .init()
        .context("failed to initialize logging")?;

    let mut stats = PercolationStats::new(args.grid_size, args.trials)?;
    stats.run(&mut rand::thread_rng())?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
