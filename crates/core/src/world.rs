//! World state - grid, avatar and the loop state machine
//!
//! [`World::apply`] is the only place the avatar's position changes. It is
//! pure: the caller decides what to redraw from the returned [`Outcome`].

use crate::grid::Grid;
use crate::player::Player;
use crate::types::{Command, Direction, InputEvent, Point};

/// Game loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Result of applying one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The avatar left `from` and now stands on `to`.
    Moved { from: Point, to: Point },
    /// A movement key whose target was not passable.
    Blocked { at: Point, direction: Direction },
    /// Unmapped input, or anything after termination.
    Ignored,
    /// The quit key.
    Quit,
}

#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    player: Player,
    state: LoopState,
}

impl World {
    pub fn new(grid: Grid, player: Player) -> Self {
        Self {
            grid,
            player,
            state: LoopState::Running,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Apply one input event.
    ///
    /// Once terminated, every further event is ignored and the avatar stays put.
    pub fn apply(&mut self, event: InputEvent) -> Outcome {
        if !self.is_running() {
            return Outcome::Ignored;
        }

        match event {
            InputEvent::Command(Command::Quit) => {
                self.state = LoopState::Terminated;
                Outcome::Quit
            }
            InputEvent::Command(Command::Move(direction)) => self.step(direction),
            InputEvent::Ignored => Outcome::Ignored,
        }
    }

    fn step(&mut self, direction: Direction) -> Outcome {
        let from = self.player.position();
        let to = match direction.step(from) {
            Some(candidate) => self.grid.can_move(candidate, from),
            None => from,
        };

        if to == from {
            return Outcome::Blocked {
                at: from,
                direction,
            };
        }

        self.player.set_position(to);
        Outcome::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Tile;

    fn open_world(width: u16, height: u16, start: Point) -> World {
        let mut grid = Grid::new(width, height);
        grid.fill_uniform();
        World::new(grid, Player::new(start))
    }

    fn key(ch: char) -> InputEvent {
        InputEvent::Command(Command::from_char(ch).unwrap())
    }

    #[test]
    fn moves_onto_open_floor() {
        let mut world = open_world(10, 10, Point::new(5, 5));
        assert_eq!(
            world.apply(key('l')),
            Outcome::Moved {
                from: Point::new(5, 5),
                to: Point::new(6, 5)
            }
        );
        assert_eq!(world.player().position(), Point::new(6, 5));
    }

    #[test]
    fn wall_blocks_movement() {
        let mut world = open_world(10, 10, Point::new(5, 5));
        world.grid.paint(5, 4, Tile::WALL);
        assert_eq!(
            world.apply(key('k')),
            Outcome::Blocked {
                at: Point::new(5, 5),
                direction: Direction::Up
            }
        );
        assert_eq!(world.player().position(), Point::new(5, 5));
    }

    #[test]
    fn top_left_corner_cannot_underflow() {
        // Grid without borders so the avatar can actually stand on (0, 0).
        let mut grid = Grid::new(4, 4);
        for x in 0..4 {
            for y in 0..4 {
                grid.paint(x, y, Tile::FLOOR);
            }
        }
        let mut world = World::new(grid, Player::new(Point::new(0, 0)));
        assert!(matches!(world.apply(key('h')), Outcome::Blocked { .. }));
        assert!(matches!(world.apply(key('k')), Outcome::Blocked { .. }));
        assert_eq!(world.player().position(), Point::new(0, 0));
    }

    #[test]
    fn ignored_input_changes_nothing() {
        let mut world = open_world(10, 10, Point::new(5, 5));
        assert_eq!(world.apply(InputEvent::Ignored), Outcome::Ignored);
        assert_eq!(world.player().position(), Point::new(5, 5));
        assert!(world.is_running());
    }

    #[test]
    fn nothing_moves_after_quit() {
        let mut world = open_world(10, 10, Point::new(5, 5));
        assert_eq!(world.apply(InputEvent::Command(Command::Quit)), Outcome::Quit);
        assert_eq!(world.state(), LoopState::Terminated);
        assert_eq!(world.apply(key('j')), Outcome::Ignored);
        assert_eq!(world.player().position(), Point::new(5, 5));
    }
}
