//! The user-controlled avatar.

use crate::cell::{Cell, Tile};
use crate::types::{Color, Point, PLAYER_GLYPH, PLAYER_START};

const PLAYER_TILE: Tile = Tile {
    glyph: PLAYER_GLYPH,
    fg: Color::Green,
    bg: Color::Default,
    passable: true,
    breakable: true,
};

/// A passive render target. Position changes come from [`crate::World`].
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    cell: Cell,
}

impl Player {
    pub fn new(position: Point) -> Self {
        Self {
            cell: Cell::new(position, PLAYER_TILE),
        }
    }

    pub fn cell(&self) -> &Cell {
        &self.cell
    }

    pub fn position(&self) -> Point {
        self.cell.position()
    }

    pub(crate) fn set_position(&mut self, position: Point) {
        self.cell.x = position.x;
        self.cell.y = position.y;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PLAYER_START)
    }
}
