//! The eight lines of the board

use crate::board::Coord;

/// A row, column or diagonal of three cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Column 0-2, top to bottom
    Column(u8),
    /// Row 0-2, left to right
    Row(u8),
    /// (0,0) - (1,1) - (2,2)
    MainDiagonal,
    /// (2,0) - (1,1) - (0,2)
    AntiDiagonal,
}

/// Evaluation order: columns, then rows, then diagonals
///
/// When several lines are complete the first one in this order wins.
pub const SCAN_ORDER: [Line; 8] = [
    Line::Column(0),
    Line::Column(1),
    Line::Column(2),
    Line::Row(0),
    Line::Row(1),
    Line::Row(2),
    Line::MainDiagonal,
    Line::AntiDiagonal,
];

const fn at(column: u8, row: u8) -> Coord {
    match Coord::new(column, row) {
        Some(coord) => coord,
        None => panic!("line cell off the board"),
    }
}

/// Cells of each line, indexed like `SCAN_ORDER`
const LINE_CELLS: [[Coord; 3]; 8] = [
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(2, 0), at(1, 1), at(0, 2)],
];

impl Line {
    /// Position of this line in `SCAN_ORDER`
    ///
    /// Column and row numbers above 2 clamp to 2.
    pub fn scan_index(self) -> usize {
        match self {
            Line::Column(c) => c.min(2) as usize,
            Line::Row(r) => 3 + r.min(2) as usize,
            Line::MainDiagonal => 6,
            Line::AntiDiagonal => 7,
        }
    }

    /// The three cells on this line
    pub fn cells(self) -> [Coord; 3] {
        LINE_CELLS[self.scan_index()]
    }

    /// Check if a position lies on this line
    pub fn contains(self, coord: Coord) -> bool {
        self.cells().contains(&coord)
    }
}
