//! Cell and tile types.

use crate::types::{Color, Point, FLOOR_GLYPH, WALL_GLYPH};

/// The paintable appearance and flags of a cell, without its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
    pub passable: bool,
    /// Carried through generation but never consulted by movement.
    pub breakable: bool,
}

impl Tile {
    /// Open, walkable terrain.
    pub const FLOOR: Tile = Tile {
        glyph: FLOOR_GLYPH,
        fg: Color::Default,
        bg: Color::Default,
        passable: true,
        breakable: true,
    };

    /// Interior wall produced by random generation.
    pub const WALL: Tile = Tile {
        glyph: WALL_GLYPH,
        fg: Color::Green,
        bg: Color::Default,
        passable: false,
        breakable: false,
    };

    /// Outer ring of the map.
    pub const BORDER: Tile = Tile {
        glyph: WALL_GLYPH,
        fg: Color::Green,
        bg: Color::Default,
        passable: false,
        breakable: false,
    };

    /// What a freshly allocated grid holds before any fill routine runs.
    pub const BLANK: Tile = Tile {
        glyph: ' ',
        fg: Color::Default,
        bg: Color::Default,
        passable: false,
        breakable: false,
    };
}

/// A single addressable terminal position.
///
/// Inside a [`crate::Grid`], `x`/`y` always match the cell's storage index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub x: u16,
    pub y: u16,
    pub fg: Color,
    pub bg: Color,
    pub passable: bool,
    pub breakable: bool,
}

impl Cell {
    pub fn new(position: Point, tile: Tile) -> Self {
        Self {
            glyph: tile.glyph,
            x: position.x,
            y: position.y,
            fg: tile.fg,
            bg: tile.bg,
            passable: tile.passable,
            breakable: tile.breakable,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn tile(&self) -> Tile {
        Tile {
            glyph: self.glyph,
            fg: self.fg,
            bg: self.bg,
            passable: self.passable,
            breakable: self.breakable,
        }
    }
}
