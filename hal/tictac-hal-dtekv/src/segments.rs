//! Seven-segment displays
//!
//! The DTEK-V has six displays, one data register each. Segments are
//! active-low: a 0 bit lights the segment.

use tictac_hal::SegmentBank;

use crate::map::{SEGMENTS_STRIDE, SEGMENT_COUNT};
use crate::mmio::Register;

/// The board's six seven-segment displays
pub struct SevenSegment {
    digits: [Register<u32>; SEGMENT_COUNT as usize],
}

impl SevenSegment {
    /// Create the display driver
    ///
    /// # Safety
    ///
    /// `base` must point at the first display register, with the others
    /// following every [`SEGMENTS_STRIDE`] bytes (or memory standing in for
    /// them), see [`Register::new`].
    pub unsafe fn new(base: usize) -> Self {
        Self {
            // SAFETY: forwarded from the caller
            digits: core::array::from_fn(|i| unsafe { Register::new(base + i * SEGMENTS_STRIDE) }),
        }
    }
}

impl SegmentBank for SevenSegment {
    fn slots(&self) -> u8 {
        SEGMENT_COUNT
    }

    fn write(&mut self, slot: u8, pattern: u8) {
        if let Some(digit) = self.digits.get_mut(slot as usize) {
            digit.write(u32::from(!pattern));
        }
    }
}
