//! Command-line front end for the switchover temperature model.
//!
//! Prints the outdoor temperature, in °F, below which the furnace is cheaper
//! to run than the heat pump.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dual_fuel_models::models::hvac::switchover::SwitchoverError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{FileConfig, InputArgs, Resolved};

#[derive(Debug, Parser)]
#[command(name = "switchover", version)]
#[command(about = "Dual-fuel heat pump to furnace switchover temperature", long_about = None)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    /// TOML file supplying any inputs not given as arguments
    #[arg(long, env = "SWITCHOVER_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Digits after the decimal point, at most 17
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(..=17))]
    precision: u8,

    /// Also print the threshold, COP curve, and per-BTU costs
    #[arg(long)]
    explain: bool,

    /// Log intermediate values to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = run(&cli)?;
    print!("{output}");

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolves inputs, solves, and renders everything destined for stdout.
fn run(cli: &Cli) -> anyhow::Result<String> {
    let file = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };

    let input = Resolved::merge(&cli.inputs, &file)?
        .to_input()
        .map_err(SwitchoverError::from)?;

    let result = input.solve().context("cannot place a switchover")?;

    let precision = usize::from(cli.precision);
    let mut output = format!("{:.*}\n", precision, result.temperature_f());
    if cli.explain {
        output.push_str(&report::explain(&result, precision));
    }

    Ok(output)
}
