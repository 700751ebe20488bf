//! Seven-segment display abstractions
//!
//! Segment patterns use the conventional bit order:
//!
//! ```text
//!    a          bit 0 = a
//!  f   b        bit 1 = b
//!    g          ...
//!  e   c        bit 6 = g
//!    d   .      bit 7 = decimal point
//! ```
//!
//! Patterns passed through this trait are always active-high (1 = lit).
//! Boards with active-low displays invert in their implementation.

/// Bank of seven-segment digits
pub trait SegmentBank {
    /// Number of digit slots
    fn slots(&self) -> u8;

    /// Write an active-high segment pattern to a slot
    ///
    /// Writes to slots beyond [`SegmentBank::slots`] are ignored.
    fn write(&mut self, slot: u8, pattern: u8);

    /// Turn every segment of a slot off
    fn blank(&mut self, slot: u8) {
        self.write(slot, 0);
    }

    /// Turn every segment of every slot off
    fn blank_all(&mut self) {
        for slot in 0..self.slots() {
            self.blank(slot);
        }
    }
}
