//! Gravity clock - turns elapsed time into `Tick` commands
//!
//! The core never reads a wall clock. A host measures elapsed time however it
//! likes and asks the clock how many ticks are due. While the session is not
//! accepting ticks the clock stays reset, so play resumes with a full interval.

use crate::types::GRAVITY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gravity {
    interval_ms: u32,
    elapsed_ms: u32,
}

impl Gravity {
    /// Clock with a fixed interval (clamped to at least 1ms)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Accumulate `elapsed_ms` and return how many ticks are now due.
    ///
    /// `active` is false whenever the session is idle or over; that resets the clock.
    pub fn advance(&mut self, elapsed_ms: u32, active: bool) -> u32 {
        if !active {
            self.reset();
            return 0;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        let due = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        due
    }

    /// Milliseconds until the next tick is due
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms - self.elapsed_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(GRAVITY_MS)
    }
}
