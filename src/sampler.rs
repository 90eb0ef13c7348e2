use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Uniform;

/// Uniform sample generator over the half-open range `[low, high)`.
#[derive(Debug, Clone)]
pub struct Sampler {
    dist: Uniform<f64>,
}

impl Sampler {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let dist = Uniform::new(low, high)
            .with_context(|| format!("invalid sample range [{low}, {high})"))?;
        Ok(Self { dist })
    }

    /// Draw `n_vals` samples from `rng` into a new vector.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R, n_vals: usize) -> Vec<f64> {
        let mut vals = Vec::with_capacity(n_vals);
        for _ in 0..n_vals {
            vals.push(self.dist.sample(rng));
        }
        vals
    }
}

/// Create the random number generator for a run.
///
/// A given `seed` makes the run reproducible, otherwise the generator is
/// seeded from the operating system.
pub fn make_rng(seed: Option<u64>) -> Result<ChaCha12Rng> {
    match seed {
        Some(seed) => Ok(ChaCha12Rng::seed_from_u64(seed)),
        None => ChaCha12Rng::try_from_os_rng().context("failed to seed rng from the OS"),
    }
}
