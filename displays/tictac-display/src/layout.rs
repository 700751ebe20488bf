//! Pixel geometry of the board
//!
//! The board is centred on screen. Cells are `cell_size` square and
//! separated by `line_width` grid lines; there is no outer border.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use tictac_core::board::Coord;
use tictac_core::config::LayoutConfig;

/// Resolved board geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    origin: Point,
    cell: i32,
    line: i32,
    screen: Size,
    glyph_inset: i32,
    cursor_inset: i32,
}

impl BoardLayout {
    pub fn new(config: &LayoutConfig) -> Self {
        let cell = i32::from(config.cell_size);
        let line = i32::from(config.line_width);
        let board = cell * 3 + line * 2;

        Self {
            origin: Point::new(
                (i32::from(config.screen_width) - board) / 2,
                (i32::from(config.screen_height) - board) / 2,
            ),
            cell,
            line,
            screen: Size::new(u32::from(config.screen_width), u32::from(config.screen_height)),
            glyph_inset: i32::from(config.glyph_inset),
            cursor_inset: i32::from(config.cursor_inset),
        }
    }

    /// Top-left corner of the board
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn screen(&self) -> Size {
        self.screen
    }

    /// Side of one cell
    pub fn cell_size(&self) -> u32 {
        self.cell as u32
    }

    pub fn glyph_inset(&self) -> i32 {
        self.glyph_inset
    }

    /// Side of the board including the inner grid lines
    pub fn board_size(&self) -> u32 {
        (self.cell * 3 + self.line * 2) as u32
    }

    /// Area covered by one cell
    pub fn cell_area(&self, coord: Coord) -> Rectangle {
        let pitch = self.cell + self.line;
        let top_left = self.origin
            + Point::new(i32::from(coord.column()) * pitch, i32::from(coord.row()) * pitch);
        Rectangle::new(top_left, Size::new_equal(self.cell_size()))
    }

    /// The two vertical and two horizontal grid lines
    pub fn grid_lines(&self) -> [Rectangle; 4] {
        let length = self.board_size();
        let width = self.line as u32;
        let offset = |i: i32| (i + 1) * self.cell + i * self.line;

        [
            Rectangle::new(self.origin + Point::new(offset(0), 0), Size::new(width, length)),
            Rectangle::new(self.origin + Point::new(offset(1), 0), Size::new(width, length)),
            Rectangle::new(self.origin + Point::new(0, offset(0)), Size::new(length, width)),
            Rectangle::new(self.origin + Point::new(0, offset(1)), Size::new(length, width)),
        ]
    }

    /// Cursor outline for a cell
    pub fn cursor_area(&self, coord: Coord) -> Rectangle {
        let area = self.cell_area(coord);
        let side = (self.cell - 2 * self.cursor_inset).max(1) as u32;
        Rectangle::new(
            area.top_left + Point::new_equal(self.cursor_inset),
            Size::new_equal(side),
        )
    }

    /// Turn indicator box, centred in the left margin
    pub fn indicator_area(&self) -> Rectangle {
        let center = Point::new(self.origin.x / 2, self.screen.height as i32 / 2);
        Rectangle::with_center(center, Size::new_equal(self.cell_size() / 2))
    }
}
