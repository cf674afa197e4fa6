//! Fixed-interval ticker
//!
//! Accumulates wall-clock time and reports how many whole intervals have
//! elapsed. Ticks are never variable-rate: leftover time carries over to the
//! next update.

use std::time::Duration;

use crate::consts::MAX_TICKS_PER_UPDATE;

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    accumulator: Duration,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            running: false,
        }
    }

    pub fn from_millis(interval_ms: u32) -> Self {
        Self::new(Duration::from_millis(u64::from(interval_ms.max(1))))
    }

    /// Begin ticking from a clean phase. Restarting a running ticker keeps
    /// the rate and resets the phase.
    pub fn start(&mut self) {
        self.running = true;
        self.accumulator = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left until the next tick is due (None when stopped)
    pub fn until_next(&self) -> Option<Duration> {
        self.running
            .then(|| self.interval.saturating_sub(self.accumulator))
    }

    /// Feed elapsed time, returns the number of ticks now due.
    ///
    /// At most `MAX_TICKS_PER_UPDATE` ticks are reported per call; a longer
    /// stall drops the excess instead of replaying it.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        self.accumulator += elapsed;
        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_TICKS_PER_UPDATE {
            self.accumulator -= self.interval;
            due += 1;
        }

        if self.accumulator >= self.interval {
            log::warn!(
                "Ticker stalled, dropping {:?} of backlog",
                self.accumulator
            );
            self.accumulator = Duration::ZERO;
        }

        due
    }
}
