//! Raw input source trait

use crate::input::InputSnapshot;

/// Source of raw switch and button levels
///
/// Implementations sample the hardware and return the levels unprocessed.
/// Decoding and edge detection happen in the core.
pub trait InputSource {
    /// Sample all inputs once
    fn snapshot(&mut self) -> InputSnapshot;
}
