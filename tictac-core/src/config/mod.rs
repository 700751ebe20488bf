//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware ships them as
//! postcard binary data compiled from `board.toml`.

pub mod color;
pub mod types;

pub use color::Rgb332;
pub use types::*;
