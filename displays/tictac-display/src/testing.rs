//! In-memory pixel buffer for host tests

use std::vec;
use std::vec::Vec;

use tictac_hal::PixelBuffer;

/// Heap-backed framebuffer
pub struct MemoryBuffer {
    width: u16,
    height: u16,
    pub pixels: Vec<u8>,
}

impl MemoryBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; usize::from(width) * usize::from(height)],
        }
    }

    /// Number of pixels holding `value`
    pub fn count(&self, value: u8) -> usize {
        self.pixels.iter().filter(|p| **p == value).count()
    }
}

impl PixelBuffer for MemoryBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn write_pixel(&mut self, x: u16, y: u16, value: u8) {
        if x < self.width && y < self.height {
            self.pixels[usize::from(x) + usize::from(self.width) * usize::from(y)] = value;
        }
    }

    fn read_pixel(&self, x: u16, y: u16) -> u8 {
        if x < self.width && y < self.height {
            self.pixels[usize::from(x) + usize::from(self.width) * usize::from(y)]
        } else {
            0
        }
    }
}
