//! Grid module - the map the avatar walks on
//!
//! The grid is a flat, row-major `Vec<Cell>` sized to the terminal.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges
//! 0..height (top to bottom). Index of (x, y) is `y * width + x`.

use crate::cell::{Cell, Tile};
use crate::rng::RandomSource;
use crate::types::{Point, ROLL_RANGE, WALL_THRESHOLD};

/// Rectangular map of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Allocate a grid of blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Point::new(x, y), Tile::BLANK));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Inverse of [`Grid::index`].
    pub fn position_of(&self, index: usize) -> Option<Point> {
        if index >= self.cells.len() {
            return None;
        }
        let width = self.width as usize;
        Some(Point::new((index % width) as u16, (index / width) as u16))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell_at(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Overwrite the cell at (x, y) with `tile`.
    /// Returns false if out of bounds
    pub fn paint(&mut self, x: u16, y: u16, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = Cell::new(Point::new(x, y), tile);
                true
            }
            None => false,
        }
    }

    /// Resolve a single step.
    ///
    /// Returns `target` when the cell there is passable, `fallback` otherwise.
    /// `fallback` is returned as-is, it is never checked. An out-of-bounds
    /// target counts as impassable.
    pub fn can_move(&self, target: Point, fallback: Point) -> Point {
        match self.cell_at(target.x, target.y) {
            Some(cell) if cell.passable => target,
            _ => fallback,
        }
    }

    /// Every cell becomes open floor, then the border ring is walled off.
    pub fn fill_uniform(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                self.paint(x, y, Tile::FLOOR);
            }
        }
        self.fill_borders();
    }

    /// Scatter walls: each cell rolls `[0, ROLL_RANGE)`, rolls up to and
    /// including `WALL_THRESHOLD` become walls. Cells are visited column by
    /// column, so a seeded source reproduces the same layout.
    pub fn fill_random(&mut self, rng: &mut impl RandomSource) {
        for x in 0..self.width {
            for y in 0..self.height {
                let tile = if rng.next_below(ROLL_RANGE) > WALL_THRESHOLD {
                    Tile::FLOOR
                } else {
                    Tile::WALL
                };
                self.paint(x, y, tile);
            }
        }
        self.fill_borders();
    }

    /// Wall off the outer ring (first/last row and column).
    pub fn fill_borders(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let (right, bottom) = (self.width - 1, self.height - 1);
        for x in 0..self.width {
            self.paint(x, bottom, Tile::BORDER);
            self.paint(x, 0, Tile::BORDER);
        }
        for y in 0..self.height {
            self.paint(right, y, Tile::BORDER);
            self.paint(0, y, Tile::BORDER);
        }
    }

    /// True for cells on the outer ring.
    pub fn is_border(&self, point: Point) -> bool {
        self.contains(point)
            && (point.x == 0
                || point.y == 0
                || point.x == self.width - 1
                || point.y == self.height - 1)
    }
}
