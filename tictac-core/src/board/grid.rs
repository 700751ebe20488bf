//! The 3x3 grid

use super::cell::{Cell, Coord, Player, BOARD_SIZE};

/// Number of cells on the board
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// Why a move was refused
///
/// A rejected move never changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// No valid cursor (no or multiple selectors active)
    InvalidCoordinate,
    /// Target cell already holds a mark
    Occupied,
    /// The game has already finished
    GameOver,
}

/// Board of 9 cells, stored row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from rows, `rows[row][column]`
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (row, cells) in rows.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                board.cells[row * BOARD_SIZE as usize + column] = *cell;
            }
        }
        board
    }

    /// Get the cell at a position
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Place a mark on an empty cell
    ///
    /// Only the target cell can change. An occupied target is rejected and
    /// leaves the board untouched.
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), Rejection> {
        let cell = &mut self.cells[coord.index()];
        if !cell.is_empty() {
            return Err(Rejection::Occupied);
        }
        *cell = player.into();
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Check if every cell holds a mark
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Check if no cell holds a mark
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    /// Number of cells marked by `player`
    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.cells.iter().filter(|c| **c == mark).count()
    }

    /// Iterate over `(coord, cell)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |coord| (coord, self.get(coord)))
    }
}
