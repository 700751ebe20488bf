//! Seven-segment score display

pub mod font;
pub mod scoreboard;

pub use font::{digit_pattern, BLANK, DIGITS};
pub use scoreboard::SegmentScoreboard;
