//! Game state: board, win mask, phase and scores

use crate::board::{Board, Coord, Player, Rejection};
use crate::input::Cursor;
use crate::rules::{evaluate, GameResult, Outcome, WinMask};
use crate::score::Score;

use super::events::Event;
use super::machine::Phase;

/// What a confirmed press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A mark was placed
    Moved {
        player: Player,
        coord: Coord,
        result: GameResult,
    },
    /// The move was refused; nothing changed
    Rejected(Rejection),
    /// A finished game was cleared and X is to move
    Restarted,
}

impl Action {
    /// Check if this action changed the game
    pub fn changed_state(&self) -> bool {
        !matches!(self, Action::Rejected(_))
    }
}

/// Complete game state
///
/// `mask` always equals the mask `evaluate` returns for `board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameState {
    board: Board,
    mask: WinMask,
    phase: Phase,
    score: Score,
}

impl GameState {
    /// Empty board, X to move, zero scores
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mask(&self) -> &WinMask {
        &self.mask
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Place the current player's mark at `coord`
    ///
    /// A win is credited to the winner's score on the transition into
    /// `Finished`.
    pub fn try_move(&mut self, coord: Option<Coord>) -> Result<Action, Rejection> {
        let player = self.phase.current_player().ok_or(Rejection::GameOver)?;
        let coord = coord.ok_or(Rejection::InvalidCoordinate)?;

        self.board.place(coord, player)?;

        let (result, mask) = evaluate(&self.board);
        self.mask = mask;
        self.phase = self.phase.transition(Event::Placed(result));

        if let Phase::Finished(Outcome::WonBy(winner)) = self.phase {
            self.score.record_win(winner);
        }

        Ok(Action::Moved {
            player,
            coord,
            result,
        })
    }

    /// Clear the board if the game is finished
    ///
    /// Returns false, changing nothing, while a game is running. Scores are
    /// kept.
    pub fn restart(&mut self) -> bool {
        let next = self.phase.transition(Event::Confirm);
        if next == self.phase {
            return false;
        }
        self.board.reset();
        self.mask = WinMask::empty();
        self.phase = next;
        true
    }

    /// Handle a confirmed press with the cursor seen on the same tick
    pub fn press(&mut self, cursor: Cursor) -> Action {
        if self.restart() {
            return Action::Restarted;
        }
        match self.try_move(cursor.coord()) {
            Ok(action) => action,
            Err(rejection) => Action::Rejected(rejection),
        }
    }
}
