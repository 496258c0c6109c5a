//! Terminal input module.
//!
//! Maps `crossterm` events into [`crate::types::InputEvent`]s and runs the
//! background poller that feeds them to the game loop.

pub mod map;
pub mod poller;

pub use gridwalk_types as types;

pub use map::{handle_key_event, should_quit, translate};
