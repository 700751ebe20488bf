//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in tictac-core on top of the register-level traits in
//! tictac-hal:
//!
//! - Input panel (slide switches plus a confirm button)
//! - Seven-segment scoreboard

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod segment;
