//! Key mapping from terminal events to game meaning.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether this key drives the jump channel.
pub fn is_jump_key(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char(' ')
            | KeyCode::Up
            | KeyCode::Char('w')
            | KeyCode::Char('W')
            | KeyCode::Char('k')
            | KeyCode::Char('K')
    )
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
