//! VGA pixel buffer
//!
//! 320x240, row-major, one byte per pixel. The byte is an RGB332 colour.

use core::ptr::{read_volatile, write_volatile};

use tictac_hal::PixelBuffer;

use crate::map::{VGA_HEIGHT, VGA_WIDTH};

/// The board's VGA framebuffer
pub struct VgaBuffer {
    base: *mut u8,
}

impl VgaBuffer {
    /// Create the framebuffer driver
    ///
    /// # Safety
    ///
    /// `base` must point at `VGA_WIDTH * VGA_HEIGHT` bytes valid for
    /// volatile reads and writes and not accessed through any other handle.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u8,
        }
    }

    fn offset(x: u16, y: u16) -> Option<usize> {
        if x < VGA_WIDTH && y < VGA_HEIGHT {
            Some(x as usize + VGA_WIDTH as usize * y as usize)
        } else {
            None
        }
    }
}

impl PixelBuffer for VgaBuffer {
    fn width(&self) -> u16 {
        VGA_WIDTH
    }

    fn height(&self) -> u16 {
        VGA_HEIGHT
    }

    fn write_pixel(&mut self, x: u16, y: u16, value: u8) {
        if let Some(offset) = Self::offset(x, y) {
            // SAFETY: offset is inside the buffer, see `new`
            unsafe { write_volatile(self.base.add(offset), value) }
        }
    }

    fn read_pixel(&self, x: u16, y: u16) -> u8 {
        match Self::offset(x, y) {
            // SAFETY: offset is inside the buffer, see `new`
            Some(offset) => unsafe { read_volatile(self.base.add(offset)) },
            None => 0,
        }
    }
}
