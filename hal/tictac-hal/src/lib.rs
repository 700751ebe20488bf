//! Tictac Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by board-specific HALs (DTEK-V, simulators, etc.). This enables the same
//! drivers and rasterizer to run on different hardware platforms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (tictac-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │tictac-drivers │       │tictac-display │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tictac-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tictac-hal-   │
//!             │    dtekv      │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`input::SwitchBank`] - Slide switch word
//! - [`timer::PeriodicTimer`] - Free-running tick source
//! - [`segment::SegmentBank`] - Seven-segment digit registers
//! - [`video::PixelBuffer`] - Linear 8-bit framebuffer
//!
//! Push buttons are plain `embedded_hal::digital::InputPin`s and need no
//! trait of their own.

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod segment;
pub mod timer;
pub mod video;

// Re-export key traits at crate root for convenience
pub use input::SwitchBank;
pub use segment::SegmentBank;
pub use timer::PeriodicTimer;
pub use video::PixelBuffer;
