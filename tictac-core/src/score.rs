//! Per-player win counters
//!
//! Scores survive board resets but not power loss. They only ever grow,
//! one step per won game, and saturate at `u32::MAX`.

use crate::board::Player;

/// Win counters for both players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Score {
    x: u32,
    o: u32,
}

impl Score {
    pub const fn new() -> Self {
        Self { x: 0, o: 0 }
    }

    /// Wins recorded for a player
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Count one more win for a player
    pub fn record_win(&mut self, player: Player) {
        let counter = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *counter = counter.saturating_add(1);
    }

    /// Tens and ones digit of a player's score
    ///
    /// Scores above 99 show their last two digits.
    pub fn digits(&self, player: Player) -> [u8; 2] {
        let shown = self.get(player) % 100;
        [(shown / 10) as u8, (shown % 10) as u8]
    }
}
