//! Drop scheduler - decides when gravity advances the active piece.
//!
//! The host loop feeds in measured elapsed milliseconds every frame; the
//! scheduler accumulates them and reports at most one due gravity step per
//! call. When a step fires the accumulator resets to zero (the remainder is
//! discarded), matching a "time of last drop" reference that is rebased on
//! every drop, every lock, and every resume from pause.

/// Fixed-interval tick driver for the engine's gravity step.
#[derive(Debug, Clone, Default)]
pub struct DropScheduler {
    acc_ms: u32,
}

impl DropScheduler {
    pub fn new() -> Self {
        Self { acc_ms: 0 }
    }

    /// Accumulate elapsed time; true when one gravity step is due.
    pub fn advance(&mut self, elapsed_ms: u32, interval_ms: u32) -> bool {
        self.acc_ms = self.acc_ms.saturating_add(elapsed_ms);
        if self.acc_ms >= interval_ms {
            self.acc_ms = 0;
            return true;
        }
        false
    }

    /// Rebase the elapsed-time reference.
    ///
    /// Called on initialize, on lock, and on resume from pause so paused
    /// wall-clock time never converts into accumulated drop time.
    pub fn reset(&mut self) {
        self.acc_ms = 0;
    }

    pub fn accumulated_ms(&self) -> u32 {
        self.acc_ms
    }
}
