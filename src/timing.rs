use std::{
    fmt,
    time::{Duration, Instant},
};

/// Scoped wall-clock timer.
///
/// Writes the time elapsed since [`PhaseTimer::start`] into its slot when
/// dropped, so the measurement is recorded however the scope is left.
pub struct PhaseTimer<'a> {
    start: Instant,
    slot: &'a mut Duration,
}

impl<'a> PhaseTimer<'a> {
    pub fn start(slot: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            slot,
        }
    }
}

impl Drop for PhaseTimer<'_> {
    fn drop(&mut self) {
        *self.slot = self.start.elapsed();
    }
}

/// Run `f` and record its wall-clock duration in `slot`.
pub fn time_phase<T, F: FnOnce() -> T>(slot: &mut Duration, f: F) -> T {
    let _timer = PhaseTimer::start(slot);
    f()
}

/// Elapsed times of the phases of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Timings {
    pub creation: Duration,
    pub averaging: Duration,
    pub total: Duration,
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Data creation: {:.6} seconds", self.creation.as_secs_f64())?;
        writeln!(f, "Averaging:     {:.6} seconds", self.averaging.as_secs_f64())?;
        writeln!(f, "Total:         {:.6} seconds", self.total.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn timer_writes_on_drop() {
        let mut elapsed = Duration::MAX;
        {
            let _timer = PhaseTimer::start(&mut elapsed);
            thread::sleep(Duration::from_millis(5));
        }
        assert!(elapsed >= Duration::from_millis(5));
        assert!(elapsed < Duration::MAX);
    }

    #[test]
    fn time_phase_returns_value() {
        let mut elapsed = Duration::MAX;
        let val = time_phase(&mut elapsed, || 6 * 7);
        assert_eq!(val, 42);
        assert!(elapsed < Duration::from_secs(1));
    }

    #[test]
    fn timer_writes_on_unwind() {
        let mut elapsed = Duration::MAX;
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            time_phase(&mut elapsed, || -> u32 { panic!("phase failed") })
        }));
        assert!(result.is_err());
        assert!(elapsed < Duration::MAX);
    }

    #[test]
    fn timings_format() {
        let timings = Timings {
            creation: Duration::from_millis(1500),
            averaging: Duration::from_micros(250),
            total: Duration::from_secs(2),
        };
        assert_eq!(
            timings.to_string(),
            "Data creation: 1.500000 seconds\n\
             Averaging:     0.000250 seconds\n\
             Total:         2.000000 seconds\n"
        );
    }
}
