//! Key mapping from terminal events to engine commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_gemswap_types::{Direction, GameCommand};

/// Map keyboard input to engine commands.
pub fn handle_key_event(key: KeyEvent) -> Option<GameCommand> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameCommand::Move(Direction::Up))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameCommand::Move(Direction::Left))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameCommand::Move(Direction::Down))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameCommand::Move(Direction::Right))
        }

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('e') | KeyCode::Char('E') => {
            Some(GameCommand::ToggleSelect)
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameCommand::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameCommand::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameCommand::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameCommand::Move(Direction::Right))
        );

        // WASD and vim keys, both cases.
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameCommand::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameCommand::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameCommand::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameCommand::Move(Direction::Right))
        );
    }

    #[test]
    fn test_selection_keys() {
        for code in [
            KeyCode::Enter,
            KeyCode::Char(' '),
            KeyCode::Char('e'),
            KeyCode::Char('E'),
        ] {
            assert_eq!(
                handle_key_event(KeyEvent::from(code)),
                Some(GameCommand::ToggleSelect)
            );
        }
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('e'))));
    }
}
