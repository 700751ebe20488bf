//! Configuration type definitions
//!
//! Defaults match the stock DTEK-V setup: 320x240 VGA, 51 px cells,
//! switches 0-2 select the column, switches 3-5 select the row, and a 16 ms
//! tick from the 30 MHz interval timer.

use super::color::Rgb332;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of selector switches per axis
pub const SELECTORS_PER_AXIS: usize = 3;

/// Digits shown per player on the seven-segment display
pub const SCORE_DIGITS: usize = 2;

/// Seven-segment displays available for score digits
pub const SCORE_SLOTS: u8 = 6;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A selector or button bit is 32 or higher
    BitOutOfRange,
    /// Two selectors share a switch
    SelectorOverlap,
    /// Timer period of zero cycles
    ZeroTimerPeriod,
    /// Glyph inset leaves no room inside a cell
    GlyphTooLarge,
    /// Board does not fit on screen
    BoardTooLarge,
    /// Two score digits share a display slot
    ScoreSlotOverlap,
    /// A score digit names a display slot that does not exist
    ScoreSlotOutOfRange,
}

/// Colours used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Palette {
    /// Frame background
    pub background: Rgb332,
    /// Grid lines
    pub grid: Rgb332,
    /// X pieces
    pub x: Rgb332,
    /// O pieces
    pub o: Rgb332,
    /// Pieces on the winning line
    pub win: Rgb332,
    /// Pieces once the game ends in a draw
    pub draw: Rgb332,
    /// Cursor box
    pub cursor: Rgb332,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb332::BLACK,
            grid: Rgb332::WHITE,
            x: Rgb332::BLUE,
            o: Rgb332::RED,
            win: Rgb332::GREEN,
            draw: Rgb332::GREY,
            cursor: Rgb332::YELLOW,
        }
    }
}

impl Palette {
    /// Normal colour of a player's pieces
    pub fn player(&self, player: crate::board::Player) -> Rgb332 {
        match player {
            crate::board::Player::X => self.x,
            crate::board::Player::O => self.o,
        }
    }
}

/// Board geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Screen width
    pub screen_width: u16,
    /// Screen height
    pub screen_height: u16,
    /// Side of one cell, excluding grid lines
    pub cell_size: u16,
    /// Grid line thickness
    pub line_width: u16,
    /// Gap between cell edge and piece glyph
    pub glyph_inset: u16,
    /// Gap between cell edge and cursor box
    pub cursor_inset: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            screen_width: 320,
            screen_height: 240,
            cell_size: 51,
            line_width: 1,
            glyph_inset: 5,
            cursor_inset: 2,
        }
    }
}

impl LayoutConfig {
    /// Side of the whole board including the two inner grid lines
    pub fn board_size(&self) -> u16 {
        self.cell_size * 3 + self.line_width * 2
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let inset = u32::from(self.glyph_inset.max(self.cursor_inset));
        if u32::from(self.cell_size) < inset * 2 + 3 {
            return Err(ConfigError::GlyphTooLarge);
        }
        let board = u32::from(self.cell_size) * 3 + u32::from(self.line_width) * 2;
        if board > u32::from(self.screen_width) || board > u32::from(self.screen_height) {
            return Err(ConfigError::BoardTooLarge);
        }
        Ok(())
    }
}

/// Which input bits drive the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputMapping {
    /// Switch bits selecting column 0, 1, 2
    pub column_switches: [u8; SELECTORS_PER_AXIS],
    /// Switch bits selecting row 0, 1, 2
    pub row_switches: [u8; SELECTORS_PER_AXIS],
    /// Button bit that confirms a move or restart
    pub button: u8,
}

impl Default for InputMapping {
    fn default() -> Self {
        Self {
            column_switches: [0, 1, 2],
            row_switches: [3, 4, 5],
            button: 0,
        }
    }
}

impl InputMapping {
    fn validate(&self) -> Result<(), ConfigError> {
        let selectors = self.column_switches.iter().chain(self.row_switches.iter());

        let mut seen = 0u32;
        for &bit in selectors {
            if bit >= 32 {
                return Err(ConfigError::BitOutOfRange);
            }
            if seen & (1 << bit) != 0 {
                return Err(ConfigError::SelectorOverlap);
            }
            seen |= 1 << bit;
        }

        if self.button >= 32 {
            return Err(ConfigError::BitOutOfRange);
        }
        Ok(())
    }
}

/// Tick source configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimerConfig {
    /// Tick period in timer clock cycles
    pub period_cycles: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        // 16 ms at 30 MHz
        Self {
            period_cycles: 480_000,
        }
    }
}

/// Seven-segment score display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreConfig {
    /// Push scores to the display at all
    pub enabled: bool,
    /// Slots for X's tens and ones digit
    pub x_slots: [u8; SCORE_DIGITS],
    /// Slots for O's tens and ones digit
    pub o_slots: [u8; SCORE_DIGITS],
}

impl Default for ScoreConfig {
    fn default() -> Self {
        // X on the two leftmost displays, O on the two rightmost
        Self {
            enabled: true,
            x_slots: [5, 4],
            o_slots: [1, 0],
        }
    }
}

impl ScoreConfig {
    /// Slots for a player's tens and ones digit
    pub fn slots(&self, player: crate::board::Player) -> [u8; SCORE_DIGITS] {
        match player {
            crate::board::Player::X => self.x_slots,
            crate::board::Player::O => self.o_slots,
        }
    }

    /// Check if a slot shows a score digit
    pub fn uses_slot(&self, slot: u8) -> bool {
        self.x_slots.contains(&slot) || self.o_slots.contains(&slot)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let slots = [self.x_slots[0], self.x_slots[1], self.o_slots[0], self.o_slots[1]];
        if slots.iter().any(|&slot| slot >= SCORE_SLOTS) {
            return Err(ConfigError::ScoreSlotOutOfRange);
        }
        for (i, a) in slots.iter().enumerate() {
            if slots[i + 1..].contains(a) {
                return Err(ConfigError::ScoreSlotOverlap);
            }
        }
        Ok(())
    }
}

/// Complete game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub palette: Palette,
    pub layout: LayoutConfig,
    pub input: InputMapping,
    pub timer: TimerConfig,
    pub score: ScoreConfig,
}

impl GameConfig {
    /// Check the configuration for inconsistent values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()?;
        self.layout.validate()?;
        self.score.validate()?;
        if self.timer.period_cycles == 0 {
            return Err(ConfigError::ZeroTimerPeriod);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_board_centres() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.board_size(), 155);
    }

    #[test]
    fn test_selector_overlap() {
        let mut config = GameConfig::default();
        config.input.row_switches = [2, 3, 4];
        assert_eq!(config.validate(), Err(ConfigError::SelectorOverlap));
    }

    #[test]
    fn test_bit_out_of_range() {
        let mut config = GameConfig::default();
        config.input.column_switches[1] = 32;
        assert_eq!(config.validate(), Err(ConfigError::BitOutOfRange));

        let mut config = GameConfig::default();
        config.input.button = 40;
        assert_eq!(config.validate(), Err(ConfigError::BitOutOfRange));
    }

    #[test]
    fn test_zero_timer_period() {
        let mut config = GameConfig::default();
        config.timer.period_cycles = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimerPeriod));
    }

    #[test]
    fn test_layout_limits() {
        let mut config = GameConfig::default();
        config.layout.glyph_inset = 30;
        assert_eq!(config.validate(), Err(ConfigError::GlyphTooLarge));

        let mut config = GameConfig::default();
        config.layout.cell_size = 80;
        assert_eq!(config.validate(), Err(ConfigError::BoardTooLarge));
    }

    #[test]
    fn test_huge_inset_rejected() {
        let mut config = GameConfig::default();
        config.layout.glyph_inset = 40_000;
        assert_eq!(config.validate(), Err(ConfigError::GlyphTooLarge));

        let mut config = GameConfig::default();
        config.layout.cursor_inset = u16::MAX;
        assert_eq!(config.validate(), Err(ConfigError::GlyphTooLarge));
    }

    #[test]
    fn test_score_slots() {
        let config = ScoreConfig::default();
        assert_eq!(config.slots(Player::X), [5, 4]);
        assert!(config.uses_slot(0));
        assert!(!config.uses_slot(2));

        let mut config = GameConfig::default();
        config.score.o_slots = [4, 0];
        assert_eq!(config.validate(), Err(ConfigError::ScoreSlotOverlap));
    }

    #[test]
    fn test_score_slot_out_of_range() {
        let mut config = GameConfig::default();
        config.score.x_slots = [7, 6];
        assert_eq!(config.validate(), Err(ConfigError::ScoreSlotOutOfRange));

        let mut config = GameConfig::default();
        config.score.o_slots = [SCORE_SLOTS, 0];
        assert_eq!(config.validate(), Err(ConfigError::ScoreSlotOutOfRange));

        let mut config = GameConfig::default();
        config.score.x_slots = [3, 2];
        assert_eq!(config.validate(), Ok(()));
    }
}
