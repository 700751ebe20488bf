//! Interval timer
//!
//! Register block (one 32-bit word each, low 16 bits significant):
//!
//! | Offset | Register    |
//! |--------|-------------|
//! | 0x0    | status      |
//! | 0x4    | control     |
//! | 0x8    | period low  |
//! | 0xC    | period high |

use tictac_hal::PeriodicTimer;

use crate::mmio::Register;

/// Status: timeout latched
pub const STATUS_TO: u32 = 1 << 0;
/// Status: counter running
pub const STATUS_RUN: u32 = 1 << 1;

/// Control: interrupt on timeout
pub const CONTROL_ITO: u32 = 1 << 0;
/// Control: reload and keep counting after timeout
pub const CONTROL_CONT: u32 = 1 << 1;
/// Control: start the counter
pub const CONTROL_START: u32 = 1 << 2;

/// The board's interval timer
pub struct Timer {
    status: Register<u32>,
    control: Register<u32>,
    period_low: Register<u32>,
    period_high: Register<u32>,
}

impl Timer {
    /// Create the timer driver
    ///
    /// # Safety
    ///
    /// `base` must point at the timer register block (or four words of
    /// memory standing in for it), see [`Register::new`].
    pub const unsafe fn new(base: usize) -> Self {
        // SAFETY: forwarded from the caller
        unsafe {
            Self {
                status: Register::new(base),
                control: Register::new(base + 0x4),
                period_low: Register::new(base + 0x8),
                period_high: Register::new(base + 0xC),
            }
        }
    }

    /// Check whether the counter is running
    pub fn is_running(&self) -> bool {
        self.status.read() & STATUS_RUN != 0
    }
}

impl PeriodicTimer for Timer {
    fn start(&mut self, period_cycles: u32) {
        // The counter counts down to zero inclusive
        let reload = period_cycles.saturating_sub(1);

        self.period_low.write(reload & 0xFFFF);
        self.period_high.write(reload >> 16);
        self.status.write(0);
        self.control.write(CONTROL_START | CONTROL_CONT | CONTROL_ITO);
    }

    fn has_expired(&self) -> bool {
        self.status.read() & STATUS_TO != 0
    }

    fn acknowledge(&mut self) {
        // Any write clears TO
        self.status.write(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::ptr::{read_volatile, write_volatile};

    #[test]
    fn test_start_programs_period() {
        let mut block = [0u32; 4];
        let base = block.as_mut_ptr();
        let mut timer = unsafe { Timer::new(base as usize) };

        // 16 ms at 30 MHz
        timer.start(480_000);

        unsafe {
            assert_eq!(read_volatile(base.add(2)), 0x52FF);
            assert_eq!(read_volatile(base.add(3)), 0x0007);
            assert_eq!(read_volatile(base.add(1)), 0x0007);
        }
    }

    #[test]
    fn test_poll_acknowledges() {
        let mut block = [0u32; 4];
        let base = block.as_mut_ptr();
        let mut timer = unsafe { Timer::new(base as usize) };

        assert!(!timer.poll_expired());

        unsafe { write_volatile(base, STATUS_TO | STATUS_RUN) };
        assert!(timer.has_expired());
        assert!(timer.poll_expired());

        // Flag cleared by acknowledge
        assert!(!timer.has_expired());
        assert_eq!(unsafe { read_volatile(base) }, 0);
    }

    #[test]
    fn test_running_flag() {
        let mut block = [0u32; 4];
        let base = block.as_mut_ptr();
        let timer = unsafe { Timer::new(base as usize) };

        assert!(!timer.is_running());
        unsafe { write_volatile(base, STATUS_RUN) };
        assert!(timer.is_running());
        assert!(!timer.has_expired());
    }
}
