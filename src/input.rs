use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the per-tick cell delta for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Pause,
    Restart,
    CycleTheme,
    Quit,
}

/// Polls the terminal for at most `timeout` and maps the next key press to a
/// game input. Non-key events (resize, focus) and unbound keys yield `None`.
pub fn poll_input(timeout: Duration) -> io::Result<Option<GameInput>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind == KeyEventKind::Release {
        return Ok(None);
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(Some(GameInput::Quit));
    }

    Ok(map_key(key.code))
}

fn map_key(code: KeyCode) -> Option<GameInput> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('s') => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left | KeyCode::Char('a') => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(GameInput::Pause),
        KeyCode::Char('r') => Some(GameInput::Restart),
        KeyCode::Char('t') => Some(GameInput::CycleTheme),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
