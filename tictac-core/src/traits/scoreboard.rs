//! Score display trait

/// Errors reported by a score display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScoreError {
    /// Slot index past the last display
    InvalidSlot,
    /// Value is not a decimal digit
    InvalidDigit,
}

/// A row of single-digit displays
pub trait ScoreDisplay {
    /// Number of digit slots
    fn slots(&self) -> u8;

    /// Show a decimal digit in a slot, or blank it with `None`
    fn set_digit(&mut self, slot: u8, digit: Option<u8>) -> Result<(), ScoreError>;

    /// Blank every slot
    fn blank_all(&mut self) -> Result<(), ScoreError> {
        for slot in 0..self.slots() {
            self.set_digit(slot, None)?;
        }
        Ok(())
    }
}
