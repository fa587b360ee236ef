//! Key mapping from terminal events to game actions.
//!
//! Space is not mapped here: the fast-drop hold is tracked by
//! [`InputHandler`](crate::handler::InputHandler).

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Session
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::TogglePause),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Start),

        _ => None,
    }
}

/// Whether the key engages fast-drop while held.
pub fn is_fast_drop_key(code: KeyCode) -> bool {
    code == KeyCode::Char(' ')
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
