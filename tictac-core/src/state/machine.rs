//! Phase machine definition
//!
//! Turn order and game end are a function of the current phase and an
//! event. Nothing here touches the board.

use crate::board::Player;
use crate::rules::{GameResult, Outcome};

use super::events::Event;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Waiting for this player's move
    Playing(Player),
    /// Game over; the next confirm starts a new game
    Finished(Outcome),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Playing(Player::X)
    }
}

impl Phase {
    /// Player whose turn it is, if the game is running
    pub fn current_player(&self) -> Option<Player> {
        match self {
            Phase::Playing(p) => Some(*p),
            Phase::Finished(_) => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }

    /// Result as seen by the evaluator
    pub fn result(&self) -> GameResult {
        match self {
            Phase::Playing(_) => GameResult::InProgress,
            Phase::Finished(outcome) => (*outcome).into(),
        }
    }

    /// Process an event and return the next phase
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            (Playing(p), Placed(GameResult::InProgress)) => Playing(p.opponent()),
            (Playing(_), Placed(GameResult::WonBy(q))) => Finished(Outcome::WonBy(q)),
            (Playing(_), Placed(GameResult::Draw)) => Finished(Outcome::Draw),

            // X always opens a new game
            (Finished(_), Confirm) => Playing(Player::X),

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(Phase::default(), Phase::Playing(Player::X));
    }

    #[test]
    fn test_turn_alternates() {
        let phase = Phase::default().transition(Event::Placed(GameResult::InProgress));
        assert_eq!(phase, Phase::Playing(Player::O));
        let phase = phase.transition(Event::Placed(GameResult::InProgress));
        assert_eq!(phase, Phase::Playing(Player::X));
    }

    #[test]
    fn test_win_and_draw_finish() {
        let won = Phase::Playing(Player::O).transition(Event::Placed(GameResult::WonBy(Player::O)));
        assert_eq!(won, Phase::Finished(Outcome::WonBy(Player::O)));
        assert_eq!(won.result(), GameResult::WonBy(Player::O));

        let draw = Phase::Playing(Player::X).transition(Event::Placed(GameResult::Draw));
        assert_eq!(draw, Phase::Finished(Outcome::Draw));
        assert_eq!(draw.current_player(), None);
    }

    #[test]
    fn test_confirm_restarts_with_x() {
        for outcome in [Outcome::Draw, Outcome::WonBy(Player::X), Outcome::WonBy(Player::O)] {
            let next = Phase::Finished(outcome).transition(Event::Confirm);
            assert_eq!(next, Phase::Playing(Player::X));
        }
    }

    #[test]
    fn test_unlisted_pairs_are_no_ops() {
        let playing = Phase::Playing(Player::O);
        assert_eq!(playing.transition(Event::Confirm), playing);

        let finished = Phase::Finished(Outcome::Draw);
        assert_eq!(finished.transition(Event::Placed(GameResult::InProgress)), finished);
        assert_eq!(
            finished.transition(Event::Placed(GameResult::WonBy(Player::X))),
            finished
        );
    }
}
