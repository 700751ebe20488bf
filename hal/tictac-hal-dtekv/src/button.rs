//! Push button (KEY1)

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};

use crate::mmio::Register;

/// Level bit of the button data register
const LEVEL_BIT: u32 = 1 << 0;

/// The board's push button
///
/// Reads high while pressed. No debouncing or edge detection happens here;
/// the game core does edge detection on the sampled level.
pub struct Button {
    data: Register<u32>,
}

impl Button {
    /// Create the button driver
    ///
    /// # Safety
    ///
    /// `base` must point at the button data register (or memory standing
    /// in for it), see [`Register::new`].
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            // SAFETY: forwarded from the caller
            data: unsafe { Register::new(base) },
        }
    }
}

impl ErrorType for Button {
    type Error = Infallible;
}

impl InputPin for Button {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.data.read() & LEVEL_BIT != 0)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
