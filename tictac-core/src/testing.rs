//! Hand-written collaborators for host tests

use std::vec::Vec;

use crate::board::{Coord, Player};
use crate::config::Rgb332;
use crate::input::InputSnapshot;
use crate::traits::{BoardRenderer, InputSource, RenderError, ScoreDisplay, ScoreError};

/// One renderer call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    Clear(Rgb332),
    Grid(Rgb332),
    Piece(Player, Coord, Rgb332),
    Cursor(Coord, Rgb332),
    Indicator(Player, Rgb332),
    Present,
}

/// Renderer that records every call
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<DrawCall>,
    /// Fail every call with this error
    pub fail_with: Option<RenderError>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of completed frames
    pub fn frames(&self) -> usize {
        self.calls.iter().filter(|c| **c == DrawCall::Present).count()
    }

    fn record(&mut self, call: DrawCall) -> Result<(), RenderError> {
        if let Some(e) = self.fail_with {
            return Err(e);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl BoardRenderer for RecordingRenderer {
    fn clear_frame(&mut self, background: Rgb332) -> Result<(), RenderError> {
        self.record(DrawCall::Clear(background))
    }

    fn draw_grid(&mut self, color: Rgb332) -> Result<(), RenderError> {
        self.record(DrawCall::Grid(color))
    }

    fn draw_piece(&mut self, shape: Player, cell: Coord, color: Rgb332) -> Result<(), RenderError> {
        self.record(DrawCall::Piece(shape, cell, color))
    }

    fn draw_cursor_box(&mut self, cell: Coord, color: Rgb332) -> Result<(), RenderError> {
        self.record(DrawCall::Cursor(cell, color))
    }

    fn draw_turn_indicator(&mut self, player: Player, color: Rgb332) -> Result<(), RenderError> {
        self.record(DrawCall::Indicator(player, color))
    }

    fn present(&mut self) -> Result<(), RenderError> {
        self.record(DrawCall::Present)
    }
}

/// Six-slot score display with a configurable number of usable slots
#[derive(Debug)]
pub struct FakeScoreboard {
    pub digits: [Option<u8>; 6],
    pub writes: usize,
    slots: u8,
}

impl FakeScoreboard {
    pub fn new(slots: u8) -> Self {
        Self {
            digits: [None; 6],
            writes: 0,
            slots,
        }
    }
}

impl ScoreDisplay for FakeScoreboard {
    fn slots(&self) -> u8 {
        self.slots
    }

    fn set_digit(&mut self, slot: u8, digit: Option<u8>) -> Result<(), ScoreError> {
        if slot >= self.slots {
            return Err(ScoreError::InvalidSlot);
        }
        if digit.is_some_and(|d| d > 9) {
            return Err(ScoreError::InvalidDigit);
        }
        self.digits[slot as usize] = digit;
        self.writes += 1;
        Ok(())
    }
}

/// Input source returning whatever the test set last
#[derive(Debug, Default)]
pub struct ScriptedInput {
    snapshot: InputSnapshot,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, switches: u32, button: bool) {
        self.snapshot = InputSnapshot::new(switches, u32::from(button));
    }
}

impl InputSource for ScriptedInput {
    fn snapshot(&mut self) -> InputSnapshot {
        self.snapshot
    }
}
