use crate::constants::TICK_INTERVAL_MS;
use std::time::Duration;

/// Thins display-refresh callbacks down to the nominal tick cadence.
///
/// Time left over after a tick carries into the next one, so the average
/// period stays near `TICK_INTERVAL_MS` whatever the refresh rate. The
/// carry is capped at one period; after a stall the trail resumes instead
/// of catching up.
#[derive(Debug, Default)]
pub struct FramePacer {
    since_tick: Duration,
    primed: bool,
}

impl FramePacer {
    pub fn new() -> Self {
        Self::default()
    }

    fn period() -> Duration {
        Duration::from_millis(TICK_INTERVAL_MS as u64)
    }

    /// Feed the time since the previous frame; returns true when this frame should tick.
    pub fn on_frame(&mut self, dt: Duration) -> bool {
        if !self.primed {
            self.primed = true;
            self.since_tick = Duration::ZERO;
            return true;
        }
        self.since_tick += dt;
        let period = Self::period();
        if self.since_tick >= period {
            self.since_tick = (self.since_tick - period).min(period);
            true
        } else {
            false
        }
    }
}
