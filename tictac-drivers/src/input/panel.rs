//! Switch bank plus confirm button
//!
//! Samples the slide switches as one word and the button through an
//! `embedded-hal` input pin.

use embedded_hal::digital::InputPin;
use tictac_core::input::InputSnapshot;
use tictac_core::traits::InputSource;
use tictac_hal::SwitchBank;

/// Input panel of slide switches and one push button
pub struct SwitchPanel<W, B> {
    switches: W,
    button: B,
    /// Bit the button level is reported on
    button_bit: u8,
}

impl<W: SwitchBank, B: InputPin> SwitchPanel<W, B> {
    /// Create a panel reporting the button on `button_bit`
    ///
    /// Bits of 32 and above fall back to bit 0.
    pub fn new(switches: W, button: B, button_bit: u8) -> Self {
        Self {
            switches,
            button,
            button_bit: if button_bit < 32 { button_bit } else { 0 },
        }
    }

    /// Release the underlying peripherals
    pub fn release(self) -> (W, B) {
        (self.switches, self.button)
    }
}

impl<W: SwitchBank, B: InputPin> InputSource for SwitchPanel<W, B> {
    fn snapshot(&mut self) -> InputSnapshot {
        // A pin that cannot be read counts as released
        let pressed = self.button.is_high().unwrap_or(false);
        let buttons = u32::from(pressed) << self.button_bit;
        InputSnapshot::new(self.switches.read(), buttons)
    }
}
