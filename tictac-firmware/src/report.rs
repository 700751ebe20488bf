//! Logging of controller reports

use defmt::*;

use tictac_core::rules::{GameResult, Outcome};
use tictac_core::state::{Action, GameState};
use tictac_core::{Player, TickReport};

/// Log the outcome of `Controller::boot`
pub fn log_boot(report: &TickReport) {
    if report.redrawn {
        info!("Initial frame drawn");
    }
    log_errors(report);
}

/// Log one tick
pub fn log_tick(report: &TickReport, state: &GameState) {
    if report.cursor_changed {
        trace!("Cursor: {}", report.cursor);
    }

    match report.action {
        Some(Action::Moved {
            player,
            coord,
            result,
        }) => {
            debug!(
                "{} placed at column {}, row {}",
                player,
                coord.column(),
                coord.row()
            );
            if result == GameResult::InProgress {
                trace!("Next: {}", player.opponent());
            }
        }
        Some(Action::Rejected(reason)) => trace!("Move rejected: {}", reason),
        Some(Action::Restarted) => debug!("New game, X to move"),
        None => {}
    }

    if let Some(outcome) = report.finished {
        let score = state.score();
        match outcome {
            Outcome::WonBy(winner) => info!("{} wins", winner),
            Outcome::Draw => info!("Draw"),
        }
        info!(
            "Score: X {} - O {}",
            score.get(Player::X),
            score.get(Player::O)
        );
    }

    log_errors(report);
}

fn log_errors(report: &TickReport) {
    if let Some(e) = report.render_error {
        warn!("Render failed: {}, retrying next tick", e);
    }
    if let Some(e) = report.score_error {
        warn!("Score display failed: {}", e);
    }
}
