//! Game controller
//!
//! Owns the game state and the three collaborators, and runs one full
//! decode, update and render pass per tick.

use crate::config::GameConfig;
use crate::input::{Cursor, InputDecoder};
use crate::render::RenderDispatcher;
use crate::rules::Outcome;
use crate::state::{Action, GameState, Phase};
use crate::traits::{BoardRenderer, InputSource, RenderError, ScoreDisplay, ScoreError};

/// What happened during one tick, for logging by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Cursor decoded this tick
    pub cursor: Cursor,
    /// Cursor differs from the previous tick
    pub cursor_changed: bool,
    /// Result of a confirmed press, if there was one
    pub action: Option<Action>,
    /// Set on the tick a game ends
    pub finished: Option<Outcome>,
    /// A frame was drawn
    pub redrawn: bool,
    /// Score digits were written
    pub score_pushed: bool,
    pub render_error: Option<RenderError>,
    pub score_error: Option<ScoreError>,
}

/// Runs the game against its collaborators
pub struct Controller<I, R, S> {
    input: I,
    renderer: R,
    scoreboard: S,
    decoder: InputDecoder,
    dispatcher: RenderDispatcher,
    state: GameState,
    cursor: Cursor,
}

impl<I, R, S> Controller<I, R, S>
where
    I: InputSource,
    R: BoardRenderer,
    S: ScoreDisplay,
{
    /// Create a controller; nothing touches the hardware until `boot`
    pub fn new(config: &GameConfig, input: I, renderer: R, scoreboard: S) -> Self {
        Self {
            input,
            renderer,
            scoreboard,
            decoder: InputDecoder::new(config.input),
            dispatcher: RenderDispatcher::new(config.palette, config.score),
            state: GameState::new(),
            cursor: Cursor::Invalid,
        }
    }

    /// Start a fresh game and draw the first frame
    ///
    /// Blanks unused score slots and pushes the initial score. Errors are
    /// reported, and the frame stays dirty so the next tick retries.
    pub fn boot(&mut self) -> TickReport {
        self.state = GameState::new();
        self.cursor = Cursor::Invalid;
        self.dispatcher.mark_dirty();

        let mut report = TickReport::default();
        if let Err(e) = self.dispatcher.blank_unused(&mut self.scoreboard) {
            report.score_error = Some(e);
        }
        self.finish(&mut report);
        report
    }

    /// Run one polling pass
    pub fn tick(&mut self) -> TickReport {
        let decoded = self.decoder.decode(self.input.snapshot());

        let mut report = TickReport {
            cursor: decoded.cursor,
            cursor_changed: decoded.cursor != self.cursor,
            ..TickReport::default()
        };

        if report.cursor_changed {
            self.cursor = decoded.cursor;
            self.dispatcher.mark_dirty();
        }

        if decoded.pressed {
            let action = self.state.press(self.cursor);
            if action.changed_state() {
                self.dispatcher.mark_dirty();
            }
            if let (Action::Moved { .. }, Phase::Finished(outcome)) = (action, self.state.phase()) {
                report.finished = Some(outcome);
            }
            report.action = Some(action);
        }

        self.finish(&mut report);
        report
    }

    fn finish(&mut self, report: &mut TickReport) {
        report.cursor = self.cursor;

        match self.dispatcher.render(&self.state, self.cursor, &mut self.renderer) {
            Ok(drawn) => report.redrawn = drawn,
            Err(e) => report.render_error = Some(e),
        }

        match self.dispatcher.push_score(self.state.score(), &mut self.scoreboard) {
            Ok(pushed) => report.score_pushed = pushed,
            Err(e) => report.score_error = report.score_error.or(Some(e)),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scoreboard(&self) -> &S {
        &self.scoreboard
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Coord, Player, Rejection};
    use crate::rules::GameResult;
    use crate::testing::{DrawCall, FakeScoreboard, RecordingRenderer, ScriptedInput};

    type TestController = Controller<ScriptedInput, RecordingRenderer, FakeScoreboard>;

    /// Switch word selecting (column, row) with the default mapping
    fn select(column: u8, row: u8) -> u32 {
        (1 << column) | (1 << (3 + row))
    }

    fn controller() -> TestController {
        let mut controller = Controller::new(
            &GameConfig::default(),
            ScriptedInput::new(),
            RecordingRenderer::new(),
            FakeScoreboard::new(6),
        );
        controller.boot();
        controller.renderer_mut().calls.clear();
        controller
    }

    /// Select a cell, press and release
    fn play(controller: &mut TestController, column: u8, row: u8) -> Option<Action> {
        controller.input_mut().set(select(column, row), false);
        controller.tick();
        controller.input_mut().set(select(column, row), true);
        let action = controller.tick().action;
        controller.input_mut().set(select(column, row), false);
        controller.tick();
        action
    }

    #[test]
    fn test_boot_draws_and_pushes() {
        let mut controller = Controller::new(
            &GameConfig::default(),
            ScriptedInput::new(),
            RecordingRenderer::new(),
            FakeScoreboard::new(6),
        );
        let report = controller.boot();

        assert!(report.redrawn);
        assert!(report.score_pushed);
        assert_eq!(controller.renderer().frames(), 1);
        assert_eq!(
            controller.scoreboard().digits,
            [Some(0), Some(0), None, None, Some(0), Some(0)]
        );
    }

    #[test]
    fn test_first_tick_draws_without_boot() {
        let mut controller = Controller::new(
            &GameConfig::default(),
            ScriptedInput::new(),
            RecordingRenderer::new(),
            FakeScoreboard::new(6),
        );
        assert!(controller.tick().redrawn);
    }

    #[test]
    fn test_idle_tick_draws_nothing() {
        let mut controller = controller();
        for _ in 0..5 {
            let report = controller.tick();
            assert!(!report.redrawn);
            assert!(!report.score_pushed);
        }
        assert!(controller.renderer().calls.is_empty());
    }

    #[test]
    fn test_cursor_move_redraws() {
        let mut controller = controller();
        controller.input_mut().set(select(1, 2), false);

        let report = controller.tick();
        assert!(report.cursor_changed);
        assert!(report.redrawn);
        let cell = Coord::new(1, 2).unwrap();
        assert_eq!(report.cursor, Cursor::At(cell));

        let cursor_color = GameConfig::default().palette.cursor;
        let calls = &controller.renderer().calls;
        assert!(calls.contains(&DrawCall::Cursor(cell, cursor_color)));

        assert!(!controller.tick().redrawn);
    }

    #[test]
    fn test_move_redraws_full_frame() {
        let mut controller = controller();
        let action = play(&mut controller, 0, 0);

        assert!(matches!(action, Some(Action::Moved { player: Player::X, .. })));
        assert_eq!(controller.state().board().get(Coord::new(0, 0).unwrap()), Cell::X);
        // cursor move, then the move itself
        assert_eq!(controller.renderer().frames(), 2);
    }

    #[test]
    fn test_press_without_cursor_moves_nothing() {
        let mut controller = controller();
        controller.input_mut().set(0, true);
        let report = controller.tick();

        assert_eq!(report.action, Some(Action::Rejected(Rejection::InvalidCoordinate)));
        assert!(!report.redrawn);
        assert!(controller.state().board().is_empty());
    }

    #[test]
    fn test_held_button_places_once() {
        let mut controller = controller();
        controller.input_mut().set(select(2, 2), true);
        controller.tick();
        controller.input_mut().set(select(1, 1), true);
        let report = controller.tick();

        assert_eq!(report.action, None);
        assert_eq!(controller.state().board().count(Player::X), 1);
        assert!(controller.state().board().get(Coord::new(1, 1).unwrap()).is_empty());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut controller = controller();
        play(&mut controller, 1, 1);
        let action = play(&mut controller, 1, 1);

        assert_eq!(action, Some(Action::Rejected(Rejection::Occupied)));
        assert_eq!(controller.state().phase(), Phase::Playing(Player::O));
    }

    #[test]
    fn test_win_restart_cycle() {
        let mut controller = controller();
        for (c, r) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            play(&mut controller, c, r);
        }

        controller.input_mut().set(select(2, 0), false);
        controller.tick();
        controller.input_mut().set(select(2, 0), true);
        let report = controller.tick();
        assert_eq!(report.finished, Some(Outcome::WonBy(Player::X)));
        assert!(report.score_pushed);
        assert!(matches!(
            report.action,
            Some(Action::Moved { result: GameResult::WonBy(Player::X), .. })
        ));
        assert_eq!(controller.scoreboard().digits[4], Some(1));

        controller.input_mut().set(select(2, 0), false);
        controller.tick();
        controller.input_mut().set(select(2, 0), true);
        let report = controller.tick();
        assert_eq!(report.action, Some(Action::Restarted));
        assert!(report.redrawn);
        assert!(controller.state().board().is_empty());
        assert_eq!(controller.state().phase(), Phase::Playing(Player::X));
        assert_eq!(controller.state().score().get(Player::X), 1);
    }

    #[test]
    fn test_render_failure_retried() {
        let mut controller = controller();
        controller.renderer_mut().fail_with = Some(RenderError::Bus);
        controller.input_mut().set(select(0, 0), false);

        let report = controller.tick();
        assert_eq!(report.render_error, Some(RenderError::Bus));
        assert!(!report.redrawn);

        controller.renderer_mut().fail_with = None;
        assert!(controller.tick().redrawn);
    }
}
