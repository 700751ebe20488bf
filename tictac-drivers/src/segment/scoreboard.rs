//! Scoreboard over a bank of seven-segment digits

use tictac_core::traits::{ScoreDisplay, ScoreError};
use tictac_hal::SegmentBank;

use super::font::{digit_pattern, BLANK};

/// Score display driving one digit per segment slot
pub struct SegmentScoreboard<B> {
    bank: B,
}

impl<B: SegmentBank> SegmentScoreboard<B> {
    pub fn new(bank: B) -> Self {
        Self { bank }
    }

    /// Release the underlying segment bank
    pub fn release(self) -> B {
        self.bank
    }
}

impl<B: SegmentBank> ScoreDisplay for SegmentScoreboard<B> {
    fn slots(&self) -> u8 {
        self.bank.slots()
    }

    fn set_digit(&mut self, slot: u8, digit: Option<u8>) -> Result<(), ScoreError> {
        if slot >= self.bank.slots() {
            return Err(ScoreError::InvalidSlot);
        }

        let pattern = match digit {
            Some(d) => digit_pattern(d).ok_or(ScoreError::InvalidDigit)?,
            None => BLANK,
        };
        self.bank.write(slot, pattern);
        Ok(())
    }

    fn blank_all(&mut self) -> Result<(), ScoreError> {
        self.bank.blank_all();
        Ok(())
    }
}
