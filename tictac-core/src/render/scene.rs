//! Semantic frame description

use heapless::Vec;

use crate::board::{Coord, Player, CELL_COUNT};
use crate::config::{Palette, Rgb332};
use crate::input::Cursor;
use crate::rules::Outcome;
use crate::state::{GameState, Phase};
use crate::traits::{BoardRenderer, RenderError};

/// Maximum pieces on the board
pub const MAX_SPRITES: usize = CELL_COUNT;

/// One placed piece
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sprite {
    pub shape: Player,
    pub cell: Coord,
    pub color: Rgb332,
}

/// Everything one frame shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub background: Rgb332,
    pub grid: Rgb332,
    pub pieces: Vec<Sprite, MAX_SPRITES>,
    /// Cursor box, only while playing with a valid cursor
    pub cursor: Option<(Coord, Rgb332)>,
    /// Turn indicator, only while playing
    pub indicator: Option<(Player, Rgb332)>,
}

impl Scene {
    /// Draw the scene from scratch
    pub fn replay<R: BoardRenderer>(&self, renderer: &mut R) -> Result<(), RenderError> {
        renderer.clear_frame(self.background)?;
        renderer.draw_grid(self.grid)?;

        for sprite in &self.pieces {
            renderer.draw_piece(sprite.shape, sprite.cell, sprite.color)?;
        }

        if let Some((cell, color)) = self.cursor {
            renderer.draw_cursor_box(cell, color)?;
        }
        if let Some((player, color)) = self.indicator {
            renderer.draw_turn_indicator(player, color)?;
        }

        renderer.present()
    }
}

/// Compose the frame for a game state and cursor
///
/// Pieces on the winning line use the win colour; after a draw every piece
/// uses the draw colour.
pub fn compose(state: &GameState, cursor: Cursor, palette: &Palette) -> Scene {
    let phase = state.phase();

    // At most one sprite per cell, so the board always fits
    let pieces = state
        .board()
        .iter()
        .filter_map(|(coord, cell)| {
            let owner = cell.owner()?;
            let color = match phase {
                Phase::Finished(Outcome::WonBy(_)) if state.mask().contains(coord) => palette.win,
                Phase::Finished(Outcome::Draw) => palette.draw,
                _ => palette.player(owner),
            };
            Some(Sprite {
                shape: owner,
                cell: coord,
                color,
            })
        })
        .collect();

    let (cursor, indicator) = match phase.current_player() {
        Some(player) => (
            cursor.coord().map(|coord| (coord, palette.cursor)),
            Some((player, palette.player(player))),
        ),
        None => (None, None),
    };

    Scene {
        background: palette.background,
        grid: palette.grid,
        pieces,
        cursor,
        indicator,
    }
}
