//! Selector switch and button decoding

use crate::board::Coord;
use crate::config::InputMapping;

use super::edge::EdgeDetector;

/// Raw input levels for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    /// Switch word, bit n = switch n
    pub switches: u32,
    /// Button levels, bit n = button n pressed
    pub buttons: u32,
}

impl InputSnapshot {
    pub const fn new(switches: u32, buttons: u32) -> Self {
        Self { switches, buttons }
    }

    /// Level of one button bit
    pub fn button(&self, bit: u8) -> bool {
        bit < 32 && self.buttons & (1 << bit) != 0
    }
}

/// Currently selected cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cursor {
    At(Coord),
    /// No selector, or more than one, active on some axis
    #[default]
    Invalid,
}

impl Cursor {
    pub fn coord(self) -> Option<Coord> {
        match self {
            Cursor::At(coord) => Some(coord),
            Cursor::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Cursor::At(_))
    }
}

/// Decode one axis from its three selector bits
///
/// Returns the position of the single active selector, or `None` if zero
/// or several selectors are active.
pub fn decode_axis(bits: u32, selectors: &[u8; 3]) -> Option<u8> {
    let mut found = None;
    for (position, &bit) in selectors.iter().enumerate() {
        if bit >= 32 || bits & (1 << bit) == 0 {
            continue;
        }
        if found.is_some() {
            return None;
        }
        found = Some(position as u8);
    }
    found
}

/// Decode the cursor from the switch word
///
/// Only the six selector bits named by `mapping` are looked at.
pub fn decode_cursor(switches: u32, mapping: &InputMapping) -> Cursor {
    let column = decode_axis(switches, &mapping.column_switches);
    let row = decode_axis(switches, &mapping.row_switches);

    match (column, row) {
        (Some(column), Some(row)) => Coord::new(column, row).map_or(Cursor::Invalid, Cursor::At),
        _ => Cursor::Invalid,
    }
}

/// Result of decoding one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedInput {
    pub cursor: Cursor,
    /// Confirm button went from released to pressed this tick
    pub pressed: bool,
}

/// Stateful decoder: selector mapping plus the confirm button's edge state
#[derive(Debug, Clone)]
pub struct InputDecoder {
    mapping: InputMapping,
    confirm: EdgeDetector,
}

impl InputDecoder {
    pub fn new(mapping: InputMapping) -> Self {
        Self {
            mapping,
            confirm: EdgeDetector::new(),
        }
    }

    /// Decode one snapshot
    pub fn decode(&mut self, snapshot: InputSnapshot) -> DecodedInput {
        let level = snapshot.button(self.mapping.button);
        DecodedInput {
            cursor: decode_cursor(snapshot.switches, &self.mapping),
            pressed: self.confirm.detect_press(level),
        }
    }
}
