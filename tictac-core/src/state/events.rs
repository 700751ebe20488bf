//! Events that trigger phase transitions

use crate::rules::GameResult;

/// Events that can trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A move was accepted; carries the board evaluation after it
    Placed(GameResult),
    /// Confirm button pressed
    Confirm,
}

impl Event {
    /// Check if this event ends the game
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Placed(result) if result.is_terminal())
    }
}
