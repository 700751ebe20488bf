//! Input decoding
//!
//! Converts one tick's raw switch and button levels into a validated
//! cursor and a single press event.

pub mod decoder;
pub mod edge;

pub use decoder::{decode_axis, decode_cursor, Cursor, DecodedInput, InputDecoder, InputSnapshot};
pub use edge::EdgeDetector;
