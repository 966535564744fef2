//! Fixed-period tick scheduling for the demo models.
//!
//! The models advance on a 100 ms cadence regardless of how often the UI
//! repaints. [`TickTimer`] accumulates wall-clock time between polls and
//! hands out whole ticks, so a fast repaint loop yields mostly zero-tick
//! polls and a slow one yields several ticks at once.

use std::time::{Duration, Instant};

/// Period of one model tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(100);

/// Upper bound on ticks delivered per poll. When the UI stalls longer than
/// this backlog, the remainder is dropped rather than replayed.
pub const MAX_CATCHUP_TICKS: u32 = 10;

/// Converts elapsed wall-clock time into whole ticks.
#[derive(Debug)]
pub struct TickTimer {
    last_poll: Instant,
    accumulated: Duration,
}

impl TickTimer {
    pub fn new() -> Self {
        Self {
            last_poll: Instant::now(),
            accumulated: Duration::ZERO,
        }
    }

    /// Feed elapsed time and take the ticks it completes.
    ///
    /// Sub-period residue carries over to the next call. If the cap of
    /// [`MAX_CATCHUP_TICKS`] is hit, the whole backlog (residue included)
    /// is discarded and counting starts fresh.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;
        let mut ticks = 0;
        while self.accumulated >= TICK_PERIOD && ticks < MAX_CATCHUP_TICKS {
            self.accumulated -= TICK_PERIOD;
            ticks += 1;
        }
        if ticks == MAX_CATCHUP_TICKS {
            self.accumulated = Duration::ZERO;
        }
        ticks
    }

    /// Measure real time since the previous poll and convert it to ticks.
    pub fn poll(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now - self.last_poll;
        self.last_poll = now;
        self.advance(elapsed)
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}
