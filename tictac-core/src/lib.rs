//! Board-agnostic game logic for the tic-tac-toe firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Board model (cells, players, coordinates)
//! - Win/draw evaluation
//! - Input decoding (selector switches, button edges)
//! - Game state machine and score keeping
//! - Render dispatch (dirty tracking, scene composition)
//! - Collaborator traits (renderer, score display, input source)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod config;
pub mod controller;
pub mod input;
pub mod render;
pub mod rules;
pub mod score;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use board::{Board, Cell, Coord, Player};
pub use controller::{Controller, TickReport};
pub use rules::{evaluate, GameResult, WinMask};
pub use state::{GameState, Phase};
