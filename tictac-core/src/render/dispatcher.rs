//! Dirty tracking for the frame and the score display

use crate::board::Player;
use crate::config::{Palette, ScoreConfig};
use crate::input::Cursor;
use crate::score::Score;
use crate::state::GameState;
use crate::traits::{BoardRenderer, RenderError, ScoreDisplay, ScoreError};

use super::scene::compose;

/// Decides when to redraw and when to push scores
///
/// Starts dirty so the first frame after boot is always drawn. A failed
/// render or score push leaves the corresponding flag set for a retry on
/// the next tick.
#[derive(Debug, Clone)]
pub struct RenderDispatcher {
    palette: Palette,
    score_config: ScoreConfig,
    dirty: bool,
    /// Last score written to the display
    shown_score: Option<Score>,
}

impl RenderDispatcher {
    pub fn new(palette: Palette, score_config: ScoreConfig) -> Self {
        Self {
            palette,
            score_config,
            dirty: true,
            shown_score: None,
        }
    }

    /// Request a redraw on the next `render`
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Redraw the frame if anything changed
    ///
    /// Returns `Ok(true)` if a frame was drawn.
    pub fn render<R: BoardRenderer>(
        &mut self,
        state: &GameState,
        cursor: Cursor,
        renderer: &mut R,
    ) -> Result<bool, RenderError> {
        if !self.dirty {
            return Ok(false);
        }

        compose(state, cursor, &self.palette).replay(renderer)?;
        self.dirty = false;
        Ok(true)
    }

    /// Blank every slot that does not show a score digit
    ///
    /// With scores disabled every slot is blanked.
    pub fn blank_unused<S: ScoreDisplay>(&self, display: &mut S) -> Result<(), ScoreError> {
        if !self.score_config.enabled {
            return display.blank_all();
        }
        for slot in 0..display.slots() {
            if !self.score_config.uses_slot(slot) {
                display.set_digit(slot, None)?;
            }
        }
        Ok(())
    }

    /// Write the score digits if the score changed since the last push
    ///
    /// Returns `Ok(true)` if digits were written.
    pub fn push_score<S: ScoreDisplay>(
        &mut self,
        score: &Score,
        display: &mut S,
    ) -> Result<bool, ScoreError> {
        if !self.score_config.enabled || self.shown_score == Some(*score) {
            return Ok(false);
        }

        for player in [Player::X, Player::O] {
            let slots = self.score_config.slots(player);
            for (slot, digit) in slots.into_iter().zip(score.digits(player)) {
                display.set_digit(slot, Some(digit))?;
            }
        }

        self.shown_score = Some(*score);
        Ok(true)
    }
}
