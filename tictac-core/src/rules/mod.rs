//! Win/draw evaluation
//!
//! Scans a board for a terminal condition and records which cells formed
//! the winning line.

pub mod evaluator;
pub mod lines;

pub use evaluator::{evaluate, winning_line, GameResult, Outcome, WinMask};
pub use lines::{Line, SCAN_ORDER};
