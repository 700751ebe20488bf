//! Board model
//!
//! The 3x3 grid of cells and the coordinate type used to address it.

pub mod cell;
pub mod grid;

pub use cell::{Cell, Coord, Player, BOARD_SIZE};
pub use grid::{Board, Rejection, CELL_COUNT};
