use clap::ValueEnum;
use serde::Deserialize;

/// Number of independent partial sums used by [`average_unrolled`].
const LANES: usize = 8;

/// Summation strategy used to compute the mean.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Single running sum, left to right.
    #[default]
    Sequential,
    /// Eight partial sums combined at the end.
    Unrolled,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Sequential, Strategy::Unrolled];

    /// Compute the arithmetic mean of `vals` with this strategy.
    pub fn average(self, vals: &[f64]) -> f64 {
        match self {
            Strategy::Sequential => average(vals.iter().copied()),
            Strategy::Unrolled => average_unrolled(vals),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sequential => "sequential",
            Strategy::Unrolled => "unrolled",
        }
    }
}

/// Compute the arithmetic mean of a sequence of values.
///
/// Values are accumulated left to right in a single `f64` without
/// compensation. An empty sequence yields NaN (`0.0 / 0.0`).
pub fn average<I>(vals: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut sum = 0.0;
    let mut count = 0_usize;
    for val in vals {
        sum += val;
        count += 1;
    }
    sum / count as f64
}

/// Compute the arithmetic mean using eight independent partial sums.
///
/// Each full group of eight values feeds one value into each partial sum.
/// The partial sums are then added in index order and the trailing values
/// (fewer than eight) are added one by one. The summation order differs from
/// [`average`], so results may differ in the last bits.
pub fn average_unrolled(vals: &[f64]) -> f64 {
    let mut sums = [0.0; LANES];

    let chunks = vals.chunks_exact(LANES);
    let rest = chunks.remainder();
    for chunk in chunks {
        for (sum, &val) in sums.iter_mut().zip(chunk) {
            *sum += val;
        }
    }

    let mut sum: f64 = sums.iter().sum();
    for &val in rest {
        sum += val;
    }

    sum / vals.len() as f64
}
