//! Drawing capability and the backend it draws onto.

use anyhow::Result;

use crate::core::{Cell, Grid, Player};
use crate::types::Color;

/// The terminal backend primitives the game needs.
pub trait Surface {
    /// Current (width, height) in cells.
    fn size(&self) -> (u16, u16);
    /// Out-of-range coordinates are ignored.
    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color);
    fn clear(&mut self, fg: Color, bg: Color);
    /// Make everything set so far visible.
    fn flush(&mut self) -> Result<()>;
}

/// Anything that can render itself onto a [`Surface`].
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

fn put(surface: &mut dyn Surface, cell: &Cell) {
    surface.set_cell(cell.x, cell.y, cell.glyph, cell.fg, cell.bg);
}

/// Draws every cell in storage order.
impl Drawable for Grid {
    fn draw(&self, surface: &mut dyn Surface) {
        for cell in self.cells() {
            put(surface, cell);
        }
    }
}

impl Drawable for Player {
    fn draw(&self, surface: &mut dyn Surface) {
        put(surface, self.cell());
    }
}

/// Redraw the stored appearance of one grid cell, e.g. to erase the avatar.
pub fn restore_cell(grid: &Grid, x: u16, y: u16, surface: &mut dyn Surface) {
    if let Some(cell) = grid.cell_at(x, y) {
        put(surface, cell);
    }
}

/// Full-scene redraw: clear, draw each layer in order, flush.
pub fn flush_scene(layers: &[&dyn Drawable], surface: &mut dyn Surface) -> Result<()> {
    surface.clear(Color::Default, Color::Default);
    for layer in layers {
        layer.draw(surface);
    }
    surface.flush()
}

/// Incremental redraw of a single drawable.
pub fn flush_single(drawable: &dyn Drawable, surface: &mut dyn Surface) -> Result<()> {
    drawable.draw(surface);
    surface.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;
    use crate::fb::FrameBuffer;
    use crate::types::Point;

    #[test]
    fn grid_draw_paints_every_cell() {
        let mut grid = Grid::new(4, 3);
        grid.fill_uniform();
        let mut fb = FrameBuffer::new(4, 3);
        grid.draw(&mut fb);

        assert_eq!(fb.row_text(0), "####");
        assert_eq!(fb.row_text(1), "#..#");
        assert_eq!(fb.row_text(2), "####");
        assert_eq!(fb.get(0, 0).unwrap().fg, Color::Green);
    }

    #[test]
    fn scene_layers_draw_in_order() {
        let mut grid = Grid::new(8, 8);
        grid.fill_uniform();
        let player = Player::new(Point::new(3, 3));
        let mut fb = FrameBuffer::new(8, 8);

        flush_scene(&[&grid, &player], &mut fb).unwrap();

        assert_eq!(fb.get(3, 3).unwrap().ch, '@');
        assert_eq!(fb.get(4, 3).unwrap().ch, '.');
        assert_eq!(fb.flushes(), 1);
    }

    #[test]
    fn restore_cell_brings_back_terrain() {
        let mut grid = Grid::new(5, 5);
        grid.fill_uniform();
        grid.paint(2, 2, Tile::WALL);
        let mut fb = FrameBuffer::new(5, 5);
        fb.set_cell(2, 2, '@', Color::Green, Color::Default);

        restore_cell(&grid, 2, 2, &mut fb);
        assert_eq!(fb.get(2, 2).unwrap().ch, '#');

        // Outside the grid: nothing to restore.
        restore_cell(&grid, 9, 9, &mut fb);
    }

    #[test]
    fn flush_single_only_touches_the_drawable() {
        let player = Player::new(Point::new(1, 0));
        let mut fb = FrameBuffer::new(3, 1);
        fb.set_cell(0, 0, '#', Color::Green, Color::Default);

        flush_single(&player, &mut fb).unwrap();
        assert_eq!(fb.row_text(0), "#@ ");
        assert_eq!(fb.flushes(), 1);
    }
}
