use crate::average::Strategy;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Largest supported number of samples per run.
pub const MAX_N_SAMPLES: usize = 1_000_000_000;

/// Run settings.
///
/// Built from [`Config::default`] or a TOML file (see [`Config::from_file`]),
/// optionally overridden from the command line, and checked with
/// [`Config::validate`] before use.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of samples generated per run.
    pub n_samples: usize,

    /// Lower bound of the sample range (inclusive).
    pub low: f64,
    /// Upper bound of the sample range (exclusive).
    pub high: f64,

    /// Seed of the random number generator (OS-seeded if absent).
    pub seed: Option<u64>,

    /// Summation strategy of a single run.
    pub strategy: Strategy,

    /// Print phase timings after the result.
    pub timing: bool,

    /// Number of repetitions of a benchmark.
    pub runs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n_samples: 100_000_000,
            low: -100.0,
            high: 100.0,
            seed: None,
            strategy: Strategy::default(),
            timing: false,
            runs: 5,
        }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Missing fields take their default values; unknown fields are rejected.
    /// The result is not validated.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;
        Self::from_toml(&contents)
    }

    fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to deserialize config")
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<()> {
        check_num(self.n_samples, 1..=MAX_N_SAMPLES).context("invalid number of samples")?;
        check_range(self.low, self.high).context("invalid sample range")?;
        check_num(self.runs, 1..=1000).context("invalid number of runs")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

fn check_range(low: f64, high: f64) -> Result<()> {
    if !low.is_finite() || !high.is_finite() {
        bail!("bounds must be finite, but are {low} and {high}");
    }
    if low >= high {
        bail!("lower bound must be less than upper bound, but {low} >= {high}");
    }
    Ok(())
}
