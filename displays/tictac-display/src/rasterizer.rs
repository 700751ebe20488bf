//! BoardRenderer implementation
//!
//! X is two thick diagonals, O is a thick ring. Both are inset from the
//! cell edge by the configured glyph inset.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use tictac_core::board::{Coord, Player};
use tictac_core::config::{LayoutConfig, Rgb332};
use tictac_core::traits::{BoardRenderer, RenderError};
use tictac_hal::PixelBuffer;

use crate::color::VgaColor;
use crate::layout::BoardLayout;
use crate::target::FramebufferTarget;

/// Stroke of board piece glyphs
const GLYPH_STROKE: u32 = 3;

/// Stroke of the turn indicator glyph
const INDICATOR_STROKE: u32 = 1;

/// Rasterizes the board into a pixel buffer
pub struct Rasterizer<P> {
    target: FramebufferTarget<P>,
    layout: BoardLayout,
}

impl<P: PixelBuffer> Rasterizer<P> {
    /// Create a rasterizer, checking the buffer covers the configured screen
    pub fn new(buffer: P, config: &LayoutConfig) -> Result<Self, RenderError> {
        if buffer.width() < config.screen_width || buffer.height() < config.screen_height {
            return Err(RenderError::OutOfBounds);
        }

        Ok(Self {
            target: FramebufferTarget::new(buffer),
            layout: BoardLayout::new(config),
        })
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn buffer(&self) -> &P {
        self.target.buffer()
    }

    /// Release the underlying buffer
    pub fn release(self) -> P {
        self.target.release()
    }

    fn draw_glyph(
        &mut self,
        shape: Player,
        area: Rectangle,
        inset: i32,
        stroke: u32,
        color: Rgb332,
    ) -> Result<(), RenderError> {
        let style = PrimitiveStyle::with_stroke(VgaColor(color), stroke);
        let side = area.size.width as i32;
        let near = inset;
        let far = side - 1 - inset;
        if far <= near {
            return Err(RenderError::OutOfBounds);
        }

        let corner = |x: i32, y: i32| area.top_left + Point::new(x, y);

        match shape {
            Player::X => {
                Line::new(corner(near, near), corner(far, far))
                    .into_styled(style)
                    .draw(&mut self.target)
                    .map_err(|e| match e {})?;
                Line::new(corner(near, far), corner(far, near))
                    .into_styled(style)
                    .draw(&mut self.target)
                    .map_err(|e| match e {})?;
            }
            Player::O => {
                let radius = side / 2 - inset;
                Circle::with_center(corner(side / 2, side / 2), (2 * radius + 1) as u32)
                    .into_styled(style)
                    .draw(&mut self.target)
                    .map_err(|e| match e {})?;
            }
        }
        Ok(())
    }
}

impl<P: PixelBuffer> BoardRenderer for Rasterizer<P> {
    fn clear_frame(&mut self, background: Rgb332) -> Result<(), RenderError> {
        self.target
            .clear(VgaColor(background))
            .map_err(|e| match e {})
    }

    fn draw_grid(&mut self, color: Rgb332) -> Result<(), RenderError> {
        let style = PrimitiveStyle::with_fill(VgaColor(color));
        for line in self.layout.grid_lines() {
            line.into_styled(style)
                .draw(&mut self.target)
                .map_err(|e| match e {})?;
        }
        Ok(())
    }

    fn draw_piece(&mut self, shape: Player, cell: Coord, color: Rgb332) -> Result<(), RenderError> {
        let area = self.layout.cell_area(cell);
        let inset = self.layout.glyph_inset();
        self.draw_glyph(shape, area, inset, GLYPH_STROKE, color)
    }

    fn draw_cursor_box(&mut self, cell: Coord, color: Rgb332) -> Result<(), RenderError> {
        self.layout
            .cursor_area(cell)
            .into_styled(PrimitiveStyle::with_stroke(VgaColor(color), 1))
            .draw(&mut self.target)
            .map_err(|e| match e {})
    }

    fn draw_turn_indicator(&mut self, player: Player, color: Rgb332) -> Result<(), RenderError> {
        let area = self.layout.indicator_area();
        let inset = (self.layout.glyph_inset() / 2).max(1);
        self.draw_glyph(player, area, inset, INDICATOR_STROKE, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryBuffer;

    const GRID: Rgb332 = Rgb332::WHITE;
    const X: Rgb332 = Rgb332::BLUE;
    const O: Rgb332 = Rgb332::RED;

    fn rasterizer() -> Rasterizer<MemoryBuffer> {
        Rasterizer::new(MemoryBuffer::new(320, 240), &LayoutConfig::default()).unwrap()
    }

    fn at(column: u8, row: u8) -> Coord {
        Coord::new(column, row).unwrap()
    }

    fn pixel(r: &Rasterizer<MemoryBuffer>, x: u16, y: u16) -> Rgb332 {
        Rgb332::from_raw(r.buffer().read_pixel(x, y))
    }

    #[test]
    fn test_rejects_small_buffer() {
        let result = Rasterizer::new(MemoryBuffer::new(160, 120), &LayoutConfig::default());
        assert!(matches!(result, Err(RenderError::OutOfBounds)));
    }

    #[test]
    fn test_clear_frame() {
        let mut r = rasterizer();
        r.clear_frame(Rgb332::GREY).unwrap();
        assert_eq!(r.buffer().count(Rgb332::GREY.into_raw()), 320 * 240);
    }

    #[test]
    fn test_grid_lines() {
        let mut r = rasterizer();
        r.draw_grid(GRID).unwrap();

        // Vertical lines at x = 133 and 185, y in 42..197
        assert_eq!(pixel(&r, 133, 42), GRID);
        assert_eq!(pixel(&r, 185, 196), GRID);
        assert_eq!(pixel(&r, 133, 41), Rgb332::BLACK);
        assert_eq!(pixel(&r, 133, 197), Rgb332::BLACK);

        // Horizontal lines at y = 93 and 145, x in 82..237
        assert_eq!(pixel(&r, 82, 93), GRID);
        assert_eq!(pixel(&r, 236, 145), GRID);
        assert_eq!(pixel(&r, 81, 93), Rgb332::BLACK);

        // 4 lines of 155 px, crossing at 4 points
        assert_eq!(r.buffer().count(GRID.into_raw()), 4 * 155 - 4);
    }

    #[test]
    fn test_x_glyph() {
        let mut r = rasterizer();
        r.draw_piece(Player::X, at(0, 0), X).unwrap();

        // Cell (0, 0) spans 82..133 x 42..93, centre (107, 67)
        assert_eq!(pixel(&r, 107, 67), X);
        // Diagonals run (87, 47)-(127, 87) and (87, 87)-(127, 47)
        assert_eq!(pixel(&r, 88, 48), X);
        assert_eq!(pixel(&r, 126, 48), X);
        assert_eq!(pixel(&r, 82, 42), Rgb332::BLACK);
        assert_eq!(pixel(&r, 107, 47), Rgb332::BLACK);
    }

    #[test]
    fn test_o_glyph() {
        let mut r = rasterizer();
        r.draw_piece(Player::O, at(1, 1), O).unwrap();

        // Cell (1, 1) starts at (134, 94), centre (159, 119), radius 20
        assert_eq!(pixel(&r, 159, 119), Rgb332::BLACK);
        assert_eq!(pixel(&r, 179, 119), O);
        assert_eq!(pixel(&r, 159, 99), O);
        assert_eq!(pixel(&r, 174, 119), Rgb332::BLACK);
    }

    #[test]
    fn test_glyphs_stay_in_cell() {
        let mut r = rasterizer();
        let cell = r.layout().cell_area(at(2, 0));
        r.draw_piece(Player::O, at(2, 0), O).unwrap();
        r.draw_piece(Player::X, at(2, 0), X).unwrap();

        for y in 0..240u16 {
            for x in 0..320u16 {
                let lit = pixel(&r, x, y) != Rgb332::BLACK;
                let inside = cell.contains(Point::new(i32::from(x), i32::from(y)));
                assert!(!lit || inside, "pixel ({}, {}) outside cell", x, y);
            }
        }
    }

    #[test]
    fn test_indicator_smaller_than_piece() {
        let mut piece = rasterizer();
        piece.draw_piece(Player::X, at(1, 1), X).unwrap();
        let mut indicator = rasterizer();
        indicator.draw_turn_indicator(Player::X, X).unwrap();

        let piece_count = piece.buffer().count(X.into_raw());
        let indicator_count = indicator.buffer().count(X.into_raw());
        assert!(indicator_count > 0);
        assert!(indicator_count < piece_count);
    }

    #[test]
    fn test_cursor_box() {
        let mut r = rasterizer();
        r.draw_cursor_box(at(2, 2), Rgb332::YELLOW).unwrap();

        // Cell (2, 2) starts at (186, 146); box inset by 2, side 47
        assert_eq!(pixel(&r, 188, 148), Rgb332::YELLOW);
        assert_eq!(pixel(&r, 234, 194), Rgb332::YELLOW);
        assert_eq!(pixel(&r, 190, 150), Rgb332::BLACK);
        assert_eq!(pixel(&r, 186, 146), Rgb332::BLACK);
        assert_eq!(r.buffer().count(Rgb332::YELLOW.into_raw()), 4 * 46);
    }

    #[test]
    fn test_turn_indicator_left_of_board() {
        let mut r = rasterizer();
        r.draw_turn_indicator(Player::O, O).unwrap();

        let lit = r.buffer().count(O.into_raw());
        assert!(lit > 0);
        for y in 0..240u16 {
            for x in 82..320u16 {
                assert_eq!(pixel(&r, x, y), Rgb332::BLACK);
            }
        }
    }
}
