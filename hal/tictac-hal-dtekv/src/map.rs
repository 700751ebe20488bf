//! DTEK-V memory map

/// Slide switch data register
pub const SWITCHES_BASE: usize = 0x0400_0010;

/// Number of slide switches
pub const SWITCH_COUNT: u8 = 10;

/// Push button (KEY1) data register
pub const BUTTON_BASE: usize = 0x0400_00d0;

/// Interval timer register block
pub const TIMER_BASE: usize = 0x0400_0020;

/// Interval timer input clock
pub const TIMER_CLOCK_HZ: u32 = 30_000_000;

/// First seven-segment display data register
pub const SEGMENTS_BASE: usize = 0x0400_0050;

/// Distance between consecutive seven-segment registers
pub const SEGMENTS_STRIDE: usize = 0x10;

/// Number of seven-segment displays
pub const SEGMENT_COUNT: u8 = 6;

/// VGA pixel buffer (one RGB332 byte per pixel)
pub const VGA_BASE: usize = 0x0800_0000;

/// VGA width in pixels
pub const VGA_WIDTH: u16 = 320;

/// VGA height in pixels
pub const VGA_HEIGHT: u16 = 240;
