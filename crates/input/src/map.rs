//! Key mapping from terminal events to game and menu actions.

use crate::types::{GameAction, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to in-game actions.
pub fn handle_game_key(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::MoveDown),

        // Flip the card under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Flip),

        // Restart the round
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to menu actions.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(MenuAction::FocusPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') | KeyCode::Tab => Some(MenuAction::FocusNext),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(MenuAction::CyclePrev),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(MenuAction::CycleNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Confirm),
        _ => None,
    }
}

/// Check if key should return to the settings menu.
pub fn wants_menu(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('n') | KeyCode::Char('N'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::MoveUp)
        );
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::MoveDown)
        );

        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::MoveDown)
        );
    }

    #[test]
    fn test_flip_keys() {
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::Flip)
        );
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::Flip)
        );
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            handle_game_key(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::Up)),
            Some(MenuAction::FocusPrev)
        );
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::Tab)),
            Some(MenuAction::FocusNext)
        );
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::Left)),
            Some(MenuAction::CyclePrev)
        );
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::Right)),
            Some(MenuAction::CycleNext)
        );
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::Enter)),
            Some(MenuAction::Confirm)
        );
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_menu_return_key() {
        assert!(wants_menu(KeyEvent::from(KeyCode::Char('n'))));
        assert!(!wants_menu(KeyEvent::from(KeyCode::Char('m'))));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
