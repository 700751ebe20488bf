//! Board rasterizer for the Tictac firmware
//!
//! This crate provides:
//! - `VgaColor`, the RGB332 pixel colour as an `embedded-graphics` colour
//! - `FramebufferTarget`, a `DrawTarget` over any `tictac_hal::PixelBuffer`
//! - `BoardLayout`, the pixel geometry of the centred 3x3 board
//! - `Rasterizer`, the `BoardRenderer` the game core draws through
//!
//! # Architecture
//!
//! ```text
//! tictac-core (Scene) ──► Rasterizer ──► embedded-graphics primitives
//!                                             │
//!                                             ▼
//!                                    FramebufferTarget<P: PixelBuffer>
//! ```
//!
//! Only the fixed board and fixed-size glyphs are drawn; there is no text.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod layout;
pub mod rasterizer;
pub mod target;

#[cfg(test)]
mod testing;

// Re-export key types
pub use color::VgaColor;
pub use layout::BoardLayout;
pub use rasterizer::Rasterizer;
pub use target::FramebufferTarget;
