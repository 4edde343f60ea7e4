use crate::snake::Direction::{self, *};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

impl Input {
    /// Maps a key press; unknown keys map to nothing.
    pub fn from_key(ev: &KeyEvent) -> Option<Input> {
        if is_ctrl_c(ev) {
            return Some(Input::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => Some(Input::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Input::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Input::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Input::Turn(Right)),
            KeyCode::Char(' ') => Some(Input::TogglePause),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Input::Restart),
            KeyCode::Char('q') => Some(Input::Quit),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
