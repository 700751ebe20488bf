//! Collaborator traits
//!
//! These traits define the interface between the game logic and the
//! hardware-facing implementations in the drivers and display crates.

pub mod input;
pub mod renderer;
pub mod scoreboard;

pub use input::InputSource;
pub use renderer::{BoardRenderer, RenderError};
pub use scoreboard::{ScoreDisplay, ScoreError};
