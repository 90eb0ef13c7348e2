use crate::config::Config;
use crate::sampler::{Sampler, make_rng};
use crate::timing::{Timings, time_phase};
use anyhow::{Context, Result};

/// Result of a single run.
#[derive(Debug)]
pub struct Outcome {
    pub average: f64,
    pub timings: Timings,
}

/// Generate the samples described by `cfg` and compute their mean.
pub fn run(cfg: &Config) -> Result<Outcome> {
    let mut rng = make_rng(cfg.seed).context("failed to create rng")?;
    let sampler = Sampler::new(cfg.low, cfg.high).context("failed to construct sampler")?;

    let mut timings = Timings::default();
    let average = time_phase(&mut timings.total, || {
        let vals = time_phase(&mut timings.creation, || {
            sampler.generate(&mut rng, cfg.n_samples)
        });
        log::info!("generated {} samples", vals.len());

        let average = time_phase(&mut timings.averaging, || cfg.strategy.average(&vals));
        log::info!("averaged samples with {} strategy", cfg.strategy.name());

        average
    });

    Ok(Outcome { average, timings })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::average::Strategy;

    fn small_cfg(strategy: Strategy) -> Config {
        Config {
            n_samples: 10_000,
            seed: Some(2024),
            strategy,
            ..Config::default()
        }
    }

    #[test]
    fn seeded_run_is_reproducible() {
        let cfg = small_cfg(Strategy::Sequential);
        let outcome_a = run(&cfg).unwrap();
        let outcome_b = run(&cfg).unwrap();
        assert_eq!(outcome_a.average, outcome_b.average);
        assert!((-100.0..100.0).contains(&outcome_a.average));
    }

    #[test]
    fn strategies_agree() {
        let seq = run(&small_cfg(Strategy::Sequential)).unwrap().average;
        let unr = run(&small_cfg(Strategy::Unrolled)).unwrap().average;
        assert!((seq - unr).abs() <= 1e-9 * seq.abs().max(1.0));
    }

    #[test]
    fn total_covers_phases() {
        let outcome = run(&small_cfg(Strategy::Unrolled)).unwrap();
        let timings = outcome.timings;
        assert!(timings.total >= timings.creation + timings.averaging);
    }

    #[test]
    fn invalid_range() {
        let cfg = Config {
            low: 1.0,
            high: 0.0,
            ..small_cfg(Strategy::Sequential)
        };
        assert!(run(&cfg).is_err());
    }
}
