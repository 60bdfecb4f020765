//! `lineup` command-line entry point.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lineup::{picker_builder, sample_config, LineupConfig};

/// Picks a four-quarter soccer lineup that satisfies every rule.
#[derive(Debug, Parser)]
#[command(name = "lineup", version, about)]
struct Cli {
    /// TOML or YAML lineup config. Uses the built-in squad when omitted.
    config: Option<PathBuf>,

    /// Accepted rosters to compare before choosing.
    #[arg(long)]
    sample_size: Option<usize>,

    /// Search time limit in milliseconds.
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Seed for a reproducible search.
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the chosen roster.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => LineupConfig::load(path)?,
        None => sample_config(),
    };
    if let Some(sample_size) = cli.sample_size {
        config = config.with_sample_size(sample_size);
    }
    if let Some(millis) = cli.time_limit_ms {
        config = config.with_time_limit_millis(millis);
    }
    if let Some(seed) = cli.seed {
        config = config.with_random_seed(seed);
    }

    let mut builder = picker_builder(&config)?;
    if !cli.quiet {
        #[cfg(feature = "console")]
        lineup::console::init();
        builder = builder.with_progress(|message: &str| println!("{}", message));
    }
    let mut picker = builder.build()?;

    match picker.pick().into_candidate() {
        Some(roster) => {
            print!("{}", roster);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("No roster found");
            Ok(ExitCode::FAILURE)
        }
    }
}
