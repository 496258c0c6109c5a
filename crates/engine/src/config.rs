//! World setup.
//!
//! The binary always builds from [`WorldConfig::default`]: random walls, a
//! clock-derived seed and the avatar at (5, 5). There is no runtime
//! configuration; other values exist for tests and benches that need a fixed
//! seed or an open map.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{Grid, Player, SimpleRng, World};
use crate::types::{Point, PLAYER_START};

/// Which generator populates the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Random walls over open floor.
    Random,
    /// Open floor everywhere inside the border.
    Uniform,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Random => "random",
            Layout::Uniform => "uniform",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldConfig {
    pub seed: u32,
    pub layout: Layout,
    pub start: Point,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            layout: Layout::Random,
            start: PLAYER_START,
        }
    }
}

impl WorldConfig {
    /// Generate the map and place the avatar.
    pub fn build_world(&self, width: u16, height: u16) -> World {
        let mut grid = Grid::new(width, height);
        match self.layout {
            Layout::Random => grid.fill_random(&mut SimpleRng::new(self.seed)),
            Layout::Uniform => grid.fill_uniform(),
        }
        World::new(grid, Player::new(self.start))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
