//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrow keys, `hjkl` and `wasd` all work, in either case. Quit keys map to
/// [`GameAction::Quit`].
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

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

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn every_binding_maps_to_its_action() {
        let table = [
            (GameAction::MoveLeft, [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('a')]),
            (GameAction::MoveRight, [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')]),
            (GameAction::SoftDrop, [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('s')]),
            (GameAction::Rotate, [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('w')]),
        ];
        for (action, codes) in table {
            for code in codes {
                assert_eq!(press(code), Some(action), "{code:?}");
                if let KeyCode::Char(c) = code {
                    assert_eq!(press(KeyCode::Char(c.to_ascii_uppercase())), Some(action));
                }
            }
        }
    }

    #[test]
    fn unbound_keys_and_modified_letters_are_ignored() {
        for code in [KeyCode::Char(' '), KeyCode::Char('z'), KeyCode::Enter, KeyCode::Tab] {
            assert_eq!(press(code), None, "{code:?}");
        }
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Left, KeyModifiers::ALT)),
            None
        );
    }

    #[test]
    fn quit_bindings() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for key in [
            KeyEvent::from(KeyCode::Char('q')),
            KeyEvent::from(KeyCode::Char('Q')),
            KeyEvent::from(KeyCode::Esc),
            ctrl_c,
        ] {
            assert!(should_quit(key), "{key:?}");
            assert_eq!(handle_key_event(key), Some(GameAction::Quit));
        }
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
