//! Switch input abstractions
//!
//! Slide switches are read as a single word rather than as individual pins,
//! because the game decodes them as a bitfield.

/// Bank of slide switches read as one word
///
/// Bit `n` of the returned word is switch `n`, 1 when the switch is up.
/// Bits above [`SwitchBank::count`] read as zero.
pub trait SwitchBank {
    /// Read the raw switch word
    fn read(&self) -> u32;

    /// Number of physical switches in the bank
    fn count(&self) -> u8;

    /// Check a single switch
    fn is_on(&self, index: u8) -> bool {
        index < self.count() && index < 32 && self.read() & (1 << index) != 0
    }
}
