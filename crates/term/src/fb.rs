//! Framebuffer: an in-memory terminal surface.
//!
//! The crossterm surface draws into one of these and diffs it on flush; tests
//! use it directly as a headless backend.

use crate::surface::Surface;
use crate::types::Color;

/// A single terminal cell as displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenCell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl ScreenCell {
    pub const fn new(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

impl Default for ScreenCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Default,
            bg: Color::Default,
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<ScreenCell>,
    flushes: usize,
    /// Set when a write changed what is on screen since the last `take_dirty`.
    dirty: bool,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![ScreenCell::default(); len],
            flushes: 0,
            dirty: false,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the framebuffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, ScreenCell::default());
        self.dirty = true;
    }

    pub fn cells(&self) -> &[ScreenCell] {
        &self.cells
    }

    /// Number of times [`Surface::flush`] was called.
    pub fn flushes(&self) -> usize {
        self.flushes
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<ScreenCell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: ScreenCell) {
        if let Some(i) = self.idx(x, y) {
            if self.cells[i] != cell {
                self.cells[i] = cell;
                self.dirty = true;
            }
        }
    }

    /// Whether anything changed since the last call, resetting the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// One row as a string, handy for assertions.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

impl Surface for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn set_cell(&mut self, x: u16, y: u16, ch: char, fg: Color, bg: Color) {
        self.set(x, y, ScreenCell { ch, fg, bg });
    }

    fn clear(&mut self, fg: Color, bg: Color) {
        self.cells.fill(ScreenCell { ch: ' ', fg, bg });
        self.dirty = true;
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
