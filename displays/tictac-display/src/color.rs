//! RGB332 as an embedded-graphics colour

use embedded_graphics::pixelcolor::raw::{RawData, RawU8};
use embedded_graphics::pixelcolor::PixelColor;
use tictac_core::config::Rgb332;

/// Framebuffer pixel colour
///
/// Wraps the core `Rgb332` so it can be used as a `PixelColor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VgaColor(pub Rgb332);

impl VgaColor {
    /// Byte written to the framebuffer
    pub fn into_raw(self) -> u8 {
        self.0.into_raw()
    }
}

impl PixelColor for VgaColor {
    type Raw = RawU8;
}

impl From<Rgb332> for VgaColor {
    fn from(color: Rgb332) -> Self {
        Self(color)
    }
}

impl From<VgaColor> for Rgb332 {
    fn from(color: VgaColor) -> Self {
        color.0
    }
}

impl From<RawU8> for VgaColor {
    fn from(raw: RawU8) -> Self {
        Self(Rgb332::from_raw(raw.into_inner()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_matches_core_packing() {
        let color = VgaColor::from(Rgb332::new(7, 0, 0));
        assert_eq!(color.into_raw(), 0b111_000_00);
        assert_eq!(VgaColor::from(RawU8::new(0b111_000_00)), color);
    }
}
