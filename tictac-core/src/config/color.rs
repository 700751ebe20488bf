//! 8-bit RGB332 colour

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Packed colour: 3 bits red, 3 bits green, 2 bits blue
///
/// Layout is `rrrgggbb`, the native pixel format of the VGA framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u8; 3]", into = "[u8; 3]"))]
pub struct Rgb332(u8);

impl Rgb332 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(7, 7, 3);
    pub const RED: Self = Self::new(7, 0, 0);
    pub const GREEN: Self = Self::new(0, 7, 0);
    pub const BLUE: Self = Self::new(0, 0, 3);
    pub const YELLOW: Self = Self::new(7, 7, 0);
    pub const GREY: Self = Self::new(3, 3, 1);

    /// Pack components; red and green are 0-7, blue is 0-3
    ///
    /// Out-of-range components are truncated to their bit width.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red & 0x7) << 5) | ((green & 0x7) << 2) | (blue & 0x3))
    }

    /// Wrap an already packed value
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// The packed value
    pub const fn into_raw(self) -> u8 {
        self.0
    }

    pub const fn red(self) -> u8 {
        self.0 >> 5
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 2) & 0x7
    }

    pub const fn blue(self) -> u8 {
        self.0 & 0x3
    }
}

impl From<[u8; 3]> for Rgb332 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb332> for [u8; 3] {
    fn from(color: Rgb332) -> Self {
        [color.red(), color.green(), color.blue()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing() {
        assert_eq!(Rgb332::WHITE.into_raw(), 0xFF);
        assert_eq!(Rgb332::RED.into_raw(), 0xE0);
        assert_eq!(Rgb332::GREEN.into_raw(), 0x1C);
        assert_eq!(Rgb332::BLUE.into_raw(), 0x03);
    }

    #[test]
    fn test_components() {
        let c = Rgb332::new(5, 2, 1);
        assert_eq!((c.red(), c.green(), c.blue()), (5, 2, 1));
        assert_eq!(<[u8; 3]>::from(c), [5, 2, 1]);
    }

    #[test]
    fn test_truncation() {
        assert_eq!(Rgb332::new(0xF, 0, 0), Rgb332::new(7, 0, 0));
        assert_eq!(Rgb332::new(0, 0, 7), Rgb332::new(0, 0, 3));
    }
}
