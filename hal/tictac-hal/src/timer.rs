//! Periodic timer abstraction
//!
//! The firmware is driven by a single free-running hardware timer. Each time
//! the counter expires the timer latches a timeout flag that the main loop
//! polls and acknowledges.

/// Free-running periodic timer with a latched timeout flag
pub trait PeriodicTimer {
    /// Program the period and start counting
    ///
    /// `period_cycles` is the full period in timer input clock cycles.
    /// Implementations handle any off-by-one their counter requires.
    fn start(&mut self, period_cycles: u32);

    /// Check whether the timeout flag is latched
    fn has_expired(&self) -> bool;

    /// Clear the latched timeout flag
    fn acknowledge(&mut self);

    /// Check and clear the timeout flag in one step
    ///
    /// Returns true if a period elapsed since the last acknowledgement.
    fn poll_expired(&mut self) -> bool {
        if self.has_expired() {
            self.acknowledge();
            true
        } else {
            false
        }
    }

    /// Busy-wait until the next timeout, then acknowledge it
    fn wait(&mut self) {
        while !self.poll_expired() {
            core::hint::spin_loop();
        }
    }
}
