//! Time source for search budgets.
//!
//! The search loop only asks "how long have I been running?", so tests can
//! substitute a clock that advances deterministically.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Reports time elapsed since the clock was started.
pub trait Clock {
    fn elapsed(&self) -> Duration;
}

/// Wall-clock time, started when constructed.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    #[inline]
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A clock that advances by a fixed step every time it is read.
///
/// Reading it `n` times reports `n * step` elapsed, which lets tests place a
/// timeout at an exact frame of the search.
#[derive(Debug)]
pub struct SteppingClock {
    step: Duration,
    now: Cell<Duration>,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            now: Cell::new(Duration::ZERO),
        }
    }

    /// A clock that never advances.
    pub fn frozen() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Number of reads so far.
    pub fn reads(&self) -> u32 {
        if self.step.is_zero() {
            0
        } else {
            (self.now.get().as_nanos() / self.step.as_nanos()) as u32
        }
    }
}

impl Clock for SteppingClock {
    fn elapsed(&self) -> Duration {
        let now = self.now.get() + self.step;
        self.now.set(now);
        now
    }
}
