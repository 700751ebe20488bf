//! embedded-graphics draw target over a HAL pixel buffer

use core::convert::Infallible;

use embedded_graphics::prelude::*;
use tictac_hal::PixelBuffer;

use crate::color::VgaColor;

/// `DrawTarget` adapter for a linear RGB332 framebuffer
///
/// Pixels outside the buffer are clipped.
pub struct FramebufferTarget<P> {
    buffer: P,
}

impl<P: PixelBuffer> FramebufferTarget<P> {
    pub fn new(buffer: P) -> Self {
        Self { buffer }
    }

    pub fn buffer(&self) -> &P {
        &self.buffer
    }

    /// Release the underlying buffer
    pub fn release(self) -> P {
        self.buffer
    }
}

impl<P: PixelBuffer> DrawTarget for FramebufferTarget<P> {
    type Color = VgaColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let width = i32::from(self.buffer.width());
        let height = i32::from(self.buffer.height());

        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 || x >= width || y >= height {
                continue;
            }
            self.buffer.write_pixel(x as u16, y as u16, color.into_raw());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buffer.fill(color.into_raw());
        Ok(())
    }
}

impl<P: PixelBuffer> OriginDimensions for FramebufferTarget<P> {
    fn size(&self) -> Size {
        Size::new(u32::from(self.buffer.width()), u32::from(self.buffer.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryBuffer;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
    use tictac_core::config::Rgb332;

    #[test]
    fn test_clear_fills_buffer() {
        let mut target = FramebufferTarget::new(MemoryBuffer::new(8, 4));
        target.clear(VgaColor(Rgb332::WHITE)).unwrap();
        assert_eq!(target.buffer().count(Rgb332::WHITE.into_raw()), 32);
    }

    #[test]
    fn test_offscreen_pixels_clipped() {
        let mut target = FramebufferTarget::new(MemoryBuffer::new(8, 4));
        let red = VgaColor(Rgb332::RED);

        Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(red))
            .draw(&mut target)
            .unwrap();

        // Only the 2x2 on-screen corner lands
        let buffer = target.release();
        assert_eq!(buffer.count(red.into_raw()), 4);
        assert_eq!(buffer.read_pixel(1, 1), red.into_raw());
        assert_eq!(buffer.read_pixel(2, 2), 0);
    }

    #[test]
    fn test_size() {
        let target = FramebufferTarget::new(MemoryBuffer::new(320, 240));
        assert_eq!(target.size(), Size::new(320, 240));
    }
}
