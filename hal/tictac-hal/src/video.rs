//! Framebuffer abstraction
//!
//! A linear, row-major framebuffer with one byte per pixel. The meaning of
//! the byte (palette index, RGB332, ...) is up to the display crate.

/// Linear 8-bit framebuffer
pub trait PixelBuffer {
    /// Width in pixels
    fn width(&self) -> u16;

    /// Height in pixels
    fn height(&self) -> u16;

    /// Write one pixel
    ///
    /// Out-of-range coordinates are ignored.
    fn write_pixel(&mut self, x: u16, y: u16, value: u8);

    /// Read one pixel back
    ///
    /// Out-of-range coordinates read as zero.
    fn read_pixel(&self, x: u16, y: u16) -> u8;

    /// Fill the whole buffer with one value
    fn fill(&mut self, value: u8) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.write_pixel(x, y, value);
            }
        }
    }
}
