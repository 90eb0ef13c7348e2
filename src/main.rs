mod average;
mod bench;
mod config;
mod runner;
mod sampler;
mod stats;
mod timing;

use crate::average::Strategy;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with run settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of samples to generate
    #[arg(long)]
    n_samples: Option<usize>,

    /// Seed of the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Summation strategy
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Print phase timings
    #[arg(long)]
    timing: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compare the averaging time of every strategy
    Bench {
        /// Number of repetitions
        #[arg(long)]
        runs: Option<usize>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to load cfg")?,
        None => Config::default(),
    };
    if let Some(n_samples) = args.n_samples {
        cfg.n_samples = n_samples;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
    }
    if let Some(strategy) = args.strategy {
        cfg.strategy = strategy;
    }
    if args.timing {
        cfg.timing = true;
    }
    if let Some(Command::Bench { runs: Some(runs) }) = args.command {
        cfg.runs = runs;
    }
    cfg.validate().context("failed to validate cfg")?;
    log::info!("{cfg:#?}");

    match args.command {
        None => {
            let outcome = runner::run(&cfg).context("failed to run")?;
            println!("average = {}", outcome.average);
            if cfg.timing {
                print!("{}", outcome.timings);
            }
        }
        Some(Command::Bench { .. }) => {
            let report = bench::run_bench(&cfg).context("failed to run bench")?;
            print!("{report}");
        }
    }

    Ok(())
}
