//! Slide switches

use tictac_hal::SwitchBank;

use crate::map::SWITCH_COUNT;
use crate::mmio::Register;

/// The board's ten slide switches
pub struct Switches {
    data: Register<u32>,
}

impl Switches {
    /// Create the switch driver
    ///
    /// # Safety
    ///
    /// `base` must point at the switch data register (or memory standing
    /// in for it), see [`Register::new`].
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            // SAFETY: forwarded from the caller
            data: unsafe { Register::new(base) },
        }
    }
}

impl SwitchBank for Switches {
    fn read(&self) -> u32 {
        self.data.read() & ((1 << SWITCH_COUNT) - 1)
    }

    fn count(&self) -> u8 {
        SWITCH_COUNT
    }
}
