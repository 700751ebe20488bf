//! Board renderer trait

use crate::board::{Coord, Player};
use crate::config::Rgb332;

/// Errors reported by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// Frame buffer not available (e.g. mid-scanout swap)
    NotReady,
    /// Geometry does not fit the target
    OutOfBounds,
    /// Device reported a bus error
    Bus,
}

/// Trait for drawing the fixed tic-tac-toe picture
///
/// Operations are semantic: the renderer owns geometry and pixels, the
/// core only decides what appears and in which colour.
pub trait BoardRenderer {
    /// Fill the whole frame with the background colour
    fn clear_frame(&mut self, background: Rgb332) -> Result<(), RenderError>;

    /// Draw the two horizontal and two vertical grid lines
    fn draw_grid(&mut self, color: Rgb332) -> Result<(), RenderError>;

    /// Draw an X or O glyph filling a cell minus the glyph inset
    fn draw_piece(&mut self, shape: Player, cell: Coord, color: Rgb332) -> Result<(), RenderError>;

    /// Outline the selected cell
    fn draw_cursor_box(&mut self, cell: Coord, color: Rgb332) -> Result<(), RenderError>;

    /// Show whose turn it is
    fn draw_turn_indicator(&mut self, player: Player, color: Rgb332) -> Result<(), RenderError>;

    /// Make the finished frame visible
    ///
    /// Renderers drawing straight into scanout memory have nothing to do.
    fn present(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
