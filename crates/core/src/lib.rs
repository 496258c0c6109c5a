//! Core game logic module - pure, deterministic, and testable
//!
//! Everything the grid world knows about itself lives here, with **zero**
//! dependencies on terminals, channels or I/O:
//!
//! - [`cell`]: `Cell` (a positioned tile) and the `Tile` presets (floor, wall, border)
//! - [`grid`]: flat row-major map with lookup, paint, collision and generation
//! - [`player`]: the avatar
//! - [`rng`]: `RandomSource` trait and the seeded `SimpleRng`
//! - [`world`]: grid + avatar + loop state, and the movement rule
//!
//! # Example
//!
//! ```
//! use gridwalk_core::{Grid, Outcome, Player, World};
//! use gridwalk_types::{Command, InputEvent, Point};
//!
//! let mut grid = Grid::new(20, 10);
//! grid.fill_uniform();
//! let mut world = World::new(grid, Player::default());
//!
//! let down = InputEvent::Command(Command::from_char('j').unwrap());
//! assert!(matches!(world.apply(down), Outcome::Moved { .. }));
//! assert_eq!(world.player().position(), Point::new(5, 6));
//! ```

pub mod cell;
pub mod grid;
pub mod player;
pub mod rng;
pub mod world;

pub use gridwalk_types as types;

pub use cell::{Cell, Tile};
pub use grid::Grid;
pub use player::Player;
pub use rng::{RandomSource, SimpleRng};
pub use world::{LoopState, Outcome, World};
