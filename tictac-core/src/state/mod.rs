//! Game state machine
//!
//! The phase machine is explicit, finite and deterministic. `GameState`
//! ties it to the board, win mask and scores.

pub mod events;
pub mod game;
pub mod machine;

pub use events::Event;
pub use game::{Action, GameState};
pub use machine::Phase;
