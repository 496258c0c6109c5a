//! Core types module - shared data structures and constants
//!
//! Plain data used by every other crate: grid coordinates, movement directions,
//! loop commands and terminal colors. Nothing in here performs I/O.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `IDLE_TICK_MS` | 10 | Idle wait between player redraws |
//! | `ROLL_RANGE` | 100 | Upper bound (exclusive) of a generation roll |
//! | `WALL_THRESHOLD` | 30 | Rolls at or below this become walls |
//! | `PLAYER_START` | (5, 5) | Avatar spawn position |
//!
//! # Examples
//!
//! ```
//! use gridwalk_types::{Command, Direction, Point};
//!
//! let here = Point::new(5, 5);
//! assert_eq!(Direction::Down.step(here), Some(Point::new(5, 6)));
//! assert_eq!(Direction::Left.step(Point::new(0, 3)), None);
//!
//! assert_eq!(Command::from_char('j'), Some(Command::Move(Direction::Down)));
//! assert_eq!(Command::from_char('x'), None);
//! ```

/// Idle wait between player redraws in milliseconds.
pub const IDLE_TICK_MS: u64 = 10;

/// Generation rolls are drawn from `[0, ROLL_RANGE)`.
pub const ROLL_RANGE: u32 = 100;

/// Rolls `<= WALL_THRESHOLD` produce a wall, anything above produces floor.
pub const WALL_THRESHOLD: u32 = 30;

/// Avatar spawn position.
pub const PLAYER_START: Point = Point::new(5, 5);

pub const FLOOR_GLYPH: char = '.';
pub const WALL_GLYPH: char = '#';
pub const PLAYER_GLYPH: char = '@';

/// A grid/terminal coordinate. `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

impl From<(u16, u16)> for Point {
    fn from((x, y): (u16, u16)) -> Self {
        Self { x, y }
    }
}

/// The four movement directions. Each adjusts exactly one axis by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Axis delta as `(dx, dy)`.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Apply the delta to `from`.
    ///
    /// Returns `None` when the result leaves the non-negative coordinate space.
    /// The upper bound is the grid's business, not ours.
    pub fn step(&self, from: Point) -> Option<Point> {
        let (dx, dy) = self.delta();
        let x = u16::try_from(i32::from(from.x) + dx).ok()?;
        let y = u16::try_from(i32::from(from.y) + dy).ok()?;
        Some(Point { x, y })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// A decoded user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

impl Command {
    /// Map a movement character (hjkl) to a command.
    ///
    /// The quit key is not a character key, see the input crate for the full keymap.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'j' => Some(Command::Move(Direction::Down)),
            'k' => Some(Command::Move(Direction::Up)),
            'l' => Some(Command::Move(Direction::Right)),
            'h' => Some(Command::Move(Direction::Left)),
            _ => None,
        }
    }
}

/// What the background poller forwards to the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press that mapped to a command.
    Command(Command),
    /// Anything else the terminal reported (unmapped keys, mouse, resize, focus).
    Ignored,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Terminal color attribute.
///
/// `Default` leaves the terminal's own foreground/background in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb(Rgb),
}
