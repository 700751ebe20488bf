//! Board evaluation
//!
//! Evaluation is a pure function of the board. It runs once per accepted
//! move: 8 line checks plus a 9-cell fullness scan.

use crate::board::{Board, Cell, Coord, Player, BOARD_SIZE};

use super::lines::{Line, SCAN_ORDER};

/// Result of evaluating a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameResult {
    /// No winner and at least one empty cell
    InProgress,
    /// A line of three belongs to this player
    WonBy(Player),
    /// Board full with no winning line
    Draw,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

impl GameResult {
    /// The outcome if the game is over
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameResult::InProgress => None,
            GameResult::WonBy(p) => Some(Outcome::WonBy(p)),
            GameResult::Draw => Some(Outcome::Draw),
        }
    }

    /// Check if the game is over
    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::WonBy(p) => GameResult::WonBy(p),
            Outcome::Draw => GameResult::Draw,
        }
    }
}

/// Board-shaped overlay of the cells that formed the winning line
///
/// Marked cells hold the winner's mark; all other cells are empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WinMask {
    cells: [Cell; (BOARD_SIZE * BOARD_SIZE) as usize],
}

impl WinMask {
    /// A mask with no marked cells
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; (BOARD_SIZE * BOARD_SIZE) as usize],
        }
    }

    /// Mask marking one line for `winner`
    pub fn for_line(line: Line, winner: Player) -> Self {
        let mut mask = Self::empty();
        for coord in line.cells() {
            mask.cells[coord.index()] = winner.into();
        }
        mask
    }

    /// Mask value at a position
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if a position is part of the winning line
    pub fn contains(&self, coord: Coord) -> bool {
        !self.get(coord).is_empty()
    }

    /// Check if no cell is marked
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

/// Find the first complete line in scan order
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    SCAN_ORDER.iter().find_map(|&line| {
        let [a, b, c] = line.cells().map(|coord| board.get(coord));
        match a.owner() {
            Some(player) if a == b && b == c => Some((line, player)),
            _ => None,
        }
    })
}

/// Evaluate a board
///
/// Columns are checked first, then rows, then the main and anti diagonals.
/// Only the first complete line is reported in the mask, even if the board
/// (through misuse) holds more than one.
pub fn evaluate(board: &Board) -> (GameResult, WinMask) {
    if let Some((line, player)) = winning_line(board) {
        return (GameResult::WonBy(player), WinMask::for_line(line, player));
    }

    if board.is_full() {
        (GameResult::Draw, WinMask::empty())
    } else {
        (GameResult::InProgress, WinMask::empty())
    }
}
