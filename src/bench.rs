use crate::average::Strategy;
use crate::config::Config;
use crate::sampler::{Sampler, make_rng};
use crate::stats::Summary;
use crate::timing::time_phase;
use anyhow::{Context, Result};
use std::{fmt, hint::black_box, time::Duration};

/// Averaging times of every strategy over repeated runs.
#[derive(Debug)]
pub struct BenchReport {
    n_samples: usize,
    rows: Vec<(Strategy, Summary)>,
}

/// Time the averaging phase of every strategy on the same samples.
///
/// Each of the `cfg.runs` repetitions draws a fresh sample sequence and
/// averages it once per strategy.
pub fn run_bench(cfg: &Config) -> Result<BenchReport> {
    let mut rng = make_rng(cfg.seed).context("failed to create rng")?;
    let sampler = Sampler::new(cfg.low, cfg.high).context("failed to construct sampler")?;

    let mut secs_vec = vec![Vec::with_capacity(cfg.runs); Strategy::ALL.len()];
    for i_run in 0..cfg.runs {
        let vals = sampler.generate(&mut rng, cfg.n_samples);

        for (strategy, secs) in Strategy::ALL.into_iter().zip(secs_vec.iter_mut()) {
            let mut elapsed = Duration::ZERO;
            let average = time_phase(&mut elapsed, || {
                black_box(strategy.average(black_box(&vals)))
            });
            secs.push(elapsed.as_secs_f64());
            log::debug!("run {i_run}: {} average = {average}", strategy.name());
        }

        let progress = 100.0 * (i_run + 1) as f64 / cfg.runs as f64;
        log::info!("completed {progress:06.2}%");
    }

    let rows = Strategy::ALL
        .into_iter()
        .zip(secs_vec.iter().map(|secs| Summary::from_vals(secs)))
        .collect();

    Ok(BenchReport {
        n_samples: cfg.n_samples,
        rows,
    })
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(60);

        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "SUMMARY ({} samples, averaging time in seconds)",
            self.n_samples
        )?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<12} {:<10} {:<10} {:<10} {:<10} {:<10}",
            "Strategy", "Min", "Max", "Mean", "Median", "StdDev"
        )?;
        writeln!(f, "{}", "-".repeat(60))?;
        for (strategy, summary) in &self.rows {
            writeln!(
                f,
                "{:<12} {:<10.6} {:<10.6} {:<10.6} {:<10.6} {:<10.6}",
                strategy.name(),
                summary.min,
                summary.max,
                summary.mean,
                summary.median,
                summary.std_dev
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(f, "RELATIVE PERFORMANCE (mean time)")?;
        writeln!(f, "{rule}")?;
        let Some((_, baseline)) = self.rows.first() else {
            return Ok(());
        };
        for (strategy, summary) in &self.rows {
            let relative = summary.mean / baseline.mean;
            writeln!(
                f,
                "{:<12} {relative:>6.2}x  ({:.6}s)",
                strategy.name(),
                summary.mean
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_cfg() -> Config {
        Config {
            n_samples: 4096,
            seed: Some(5),
            runs: 3,
            ..Config::default()
        }
    }

    #[test]
    fn every_strategy_is_reported() {
        let report = run_bench(&small_cfg()).unwrap();
        assert_eq!(report.rows.len(), Strategy::ALL.len());
        for (row, strategy) in report.rows.iter().zip(Strategy::ALL) {
            let (row_strategy, summary) = row;
            assert_eq!(*row_strategy, strategy);
            assert!(summary.min >= 0.0);
            assert!(summary.min <= summary.median && summary.median <= summary.max);
        }
    }

    #[test]
    fn report_layout() {
        let report = BenchReport {
            n_samples: 8,
            rows: vec![
                (
                    Strategy::Sequential,
                    Summary::from_vals(&[0.002, 0.004, 0.003]),
                ),
                (
                    Strategy::Unrolled,
                    Summary::from_vals(&[0.001, 0.002, 0.0015]),
                ),
            ],
        };
        let text = report.to_string();
        assert!(text.contains("SUMMARY (8 samples"));
        assert!(text.contains("RELATIVE PERFORMANCE"));
        assert!(text.contains("sequential     1.00x  (0.003000s)"));
        assert!(text.contains("unrolled       0.50x  (0.001500s)"));
    }

    #[test]
    fn invalid_range() {
        let cfg = Config {
            low: 0.0,
            high: 0.0,
            ..small_cfg()
        };
        assert!(run_bench(&cfg).is_err());
    }
}
