//! Cells, players and coordinates

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of columns (and rows) on the board
pub const BOARD_SIZE: u8 = 3;

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Check if no mark has been placed
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The player owning this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A validated board position
///
/// Both axes are always in `0..BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Coord {
    column: u8,
    row: u8,
}

impl Coord {
    /// Create a coordinate, or `None` if either axis is off the board
    pub const fn new(column: u8, row: u8) -> Option<Self> {
        if column < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Create a coordinate from a row-major index (0-8)
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < (BOARD_SIZE * BOARD_SIZE) as usize {
            Some(Self {
                column: (index % BOARD_SIZE as usize) as u8,
                row: (index / BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    pub const fn column(self) -> u8 {
        self.column
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    /// Row-major index (0-8)
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.column as usize
    }

    /// Iterate over every board position in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..(BOARD_SIZE * BOARD_SIZE) as usize).filter_map(Coord::from_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
    }

    #[test]
    fn test_index_is_row_major() {
        let c = Coord::new(2, 1).unwrap();
        assert_eq!(c.index(), 5);
        assert_eq!(Coord::from_index(5), Some(c));
        assert_eq!(Coord::from_index(9), None);
        assert_eq!(Coord::all().count(), 9);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::from(Player::O).owner(), Some(Player::O));
        assert!(Cell::default().is_empty());
    }
}
