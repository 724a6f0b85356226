//! Key mapping from terminal events to logical buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Button;

/// Map a key code to the logical button it controls.
pub fn map_key(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
            Some(Button::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
            Some(Button::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
            Some(Button::SoftDrop)
        }
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Button::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Button::RotateCcw),
        KeyCode::Char(' ') => Some(Button::HardDrop),
        _ => None,
    }
}

/// Check if a key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    #[test]
    fn movement_keys() {
        assert_eq!(map_key(KeyCode::Left), Some(Button::MoveLeft));
        assert_eq!(map_key(KeyCode::Right), Some(Button::MoveRight));
        assert_eq!(map_key(KeyCode::Down), Some(Button::SoftDrop));
        assert_eq!(map_key(KeyCode::Char('a')), Some(Button::MoveLeft));
        assert_eq!(map_key(KeyCode::Char('l')), Some(Button::MoveRight));
    }

    #[test]
    fn rotation_and_drop_keys() {
        assert_eq!(map_key(KeyCode::Up), Some(Button::RotateCw));
        assert_eq!(map_key(KeyCode::Char('x')), Some(Button::RotateCw));
        assert_eq!(map_key(KeyCode::Char('z')), Some(Button::RotateCcw));
        assert_eq!(map_key(KeyCode::Char(' ')), Some(Button::HardDrop));
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Char('!')), None);
        assert_eq!(map_key(KeyCode::Tab), None);
    }

    #[test]
    fn quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('a'))));
    }
}
