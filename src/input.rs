use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::{Direction::{self, *}, Snake};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

pub fn map_key(ev: &KeyEvent) -> Option<Command> {
    match ev {
        ev if is_ctrl_c(ev) => Some(Command::Quit),
        KeyEvent { code, modifiers: _ } => match code {
            KeyCode::Esc => Some(Command::Quit),
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
            _ => None,
        }
    }
}

/// Applies a tick's worth of key events to the snake. Returns true once a
/// quit key shows up; anything queued after it is dropped.
pub fn handle_keys(events: &[KeyEvent], snake: &mut Snake) -> bool {
    for ev in events {
        match map_key(ev) {
            Some(Command::Quit) => return true,
            Some(Command::Turn(dir)) => snake.set_direction(dir),
            None => {}
        }
    }

    false
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
