//! Key mapping from terminal events to loop commands.

use crate::types::{Command, Direction, InputEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to a command.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(ch) => Command::from_char(ch),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Translate any terminal event into what the game loop consumes.
///
/// Only key presses count; repeats and releases (reported on some platforms)
/// are ignored along with mouse, focus, paste and resize events.
pub fn translate(event: Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(key)
            .map(InputEvent::Command)
            .unwrap_or(InputEvent::Ignored),
        _ => InputEvent::Ignored,
    }
}
