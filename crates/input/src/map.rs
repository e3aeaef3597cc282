//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to edge-triggered game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::RotateLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::RotateRight),
        KeyCode::Char(' ') => Some(GameAction::Fire),
        _ => None,
    }
}

/// The held "drive forward" key.
pub fn is_forward_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('w') | KeyCode::Char('W'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::RotateLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::RotateRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('A'))),
            Some(GameAction::RotateLeft)
        );
    }

    #[test]
    fn test_fire_key() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Fire)
        );
    }

    #[test]
    fn test_forward_is_not_an_action() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), None);
        assert!(is_forward_key(KeyCode::Char('w')));
        assert!(is_forward_key(KeyCode::Char('W')));
        assert!(!is_forward_key(KeyCode::Up));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
