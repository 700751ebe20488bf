//! DTEK-V specific HAL for the tic-tac-toe firmware
//!
//! This crate provides memory-mapped implementations of the shared
//! `tictac-hal` traits for the DTEK-V RISC-V board:
//!
//! - Slide switches (implements `tictac_hal::SwitchBank`)
//! - Push button (implements `embedded_hal::digital::InputPin`)
//! - Interval timer (implements `tictac_hal::PeriodicTimer`)
//! - Six seven-segment displays (implements `tictac_hal::SegmentBank`)
//! - 320x240 VGA framebuffer (implements `tictac_hal::PixelBuffer`)
//!
//! Every driver is constructed from a base address so that host tests can
//! point it at ordinary memory.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod button;
pub mod map;
pub mod mmio;
pub mod segments;
pub mod switches;
pub mod timer;
pub mod vga;

pub use button::Button;
pub use segments::SevenSegment;
pub use switches::Switches;
pub use timer::Timer;
pub use vga::VgaBuffer;

/// All peripherals used by the game
pub struct Peripherals {
    pub switches: Switches,
    pub button: Button,
    pub timer: Timer,
    pub segments: SevenSegment,
    pub vga: VgaBuffer,
}

impl Peripherals {
    /// Create every peripheral at its fixed board address
    ///
    /// # Safety
    ///
    /// Must be called at most once, on the DTEK-V board. Each returned
    /// driver assumes exclusive access to its registers.
    pub unsafe fn steal() -> Self {
        // SAFETY: the caller guarantees exclusive access and the map
        // addresses are the board's peripheral registers.
        unsafe {
            Self {
                switches: Switches::new(map::SWITCHES_BASE),
                button: Button::new(map::BUTTON_BASE),
                timer: Timer::new(map::TIMER_BASE),
                segments: SevenSegment::new(map::SEGMENTS_BASE),
                vga: VgaBuffer::new(map::VGA_BASE),
            }
        }
    }
}
