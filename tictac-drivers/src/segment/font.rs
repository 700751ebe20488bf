//! Active-high segment patterns for decimal digits
//!
//! Bit 0 is segment a through bit 6 for segment g; bit 7 is the decimal
//! point.

/// All segments off
pub const BLANK: u8 = 0x00;

/// Patterns for 0-9
pub const DIGITS: [u8; 10] = [
    0x3F, // 0: a b c d e f
    0x06, // 1: b c
    0x5B, // 2: a b d e g
    0x4F, // 3: a b c d g
    0x66, // 4: b c f g
    0x6D, // 5: a c d f g
    0x7D, // 6: a c d e f g
    0x07, // 7: a b c
    0x7F, // 8: all
    0x6F, // 9: a b c d f g
];

/// Pattern for a decimal digit, `None` if `digit > 9`
pub fn digit_pattern(digit: u8) -> Option<u8> {
    DIGITS.get(usize::from(digit)).copied()
}
