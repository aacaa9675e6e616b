//! View rendering smoke tests: menu and game surfaces

use tui_memory::core::GameState;
use tui_memory::term::{GameView, MenuState, Viewport};
use tui_memory::types::{GameSettings, GridSize, MenuAction, Theme};

#[test]
fn test_menu_renders_settings_rows() {
    let menu = MenuState::default();
    let surface = menu.render(Viewport::new(80, 24));

    assert!(surface.contains_text("Theme"));
    assert!(surface.contains_text("Numbers"));
    assert!(surface.contains_text("Players"));
    assert!(surface.contains_text("Grid Size"));
    assert!(surface.contains_text("4x4"));
    assert!(surface.contains_text("[ Start Game ]"));
}

#[test]
fn test_menu_render_tracks_cycled_values() {
    let mut menu = MenuState::default();
    menu.apply(MenuAction::CycleNext);
    let surface = menu.render(Viewport::new(80, 24));

    assert!(surface.contains_text("Icons"));
    assert!(!surface.contains_text("Numbers"));
}

#[test]
fn test_game_render_single_player_stats() {
    let mut state = GameState::new(GameSettings::default(), 11);
    state.select(0);
    state.tick(5_000);

    let surface = GameView::default().render(&state, Viewport::new(80, 24));
    assert!(surface.contains_text("MOVES 1"));
    assert!(surface.contains_text("TIME 0:05"));
}

#[test]
fn test_game_render_multiplayer_strip_not_stats() {
    let state = GameState::new(
        GameSettings {
            players: 4,
            ..GameSettings::default()
        },
        11,
    );
    let surface = GameView::default().render(&state, Viewport::new(100, 30));

    for player in 1..=4 {
        assert!(surface.contains_text(&format!("Player {}: 0", player)));
    }
    assert!(!surface.contains_text("MOVES"));
    assert!(!surface.contains_text("TIME"));
}

#[test]
fn test_game_over_dialog_reports_results() {
    let mut state = GameState::new(
        GameSettings {
            players: 2,
            ..GameSettings::default()
        },
        11,
    );
    // Let player 1 sweep the board.
    while !state.is_game_over() {
        let first = (0..state.grid().len())
            .find(|&i| !state.is_solved(i))
            .unwrap();
        let symbol = state.grid().symbol_at(first).unwrap();
        let second = (0..state.grid().len())
            .find(|&i| i != first && state.grid().symbol_at(i) == Some(symbol))
            .unwrap();
        state.select(first);
        state.select(second);
    }

    let surface = GameView::default().render(&state, Viewport::new(80, 24));
    assert!(surface.contains_text("Player 1 Wins!"));
    assert!(surface.contains_text("8 Pairs"));
    assert!(surface.contains_text("0 Pairs"));
}

#[test]
fn test_icon_theme_renders_glyph_faces() {
    let mut state = GameState::new(
        GameSettings {
            theme: Theme::Icons,
            grid_size: GridSize::Four,
            players: 1,
        },
        11,
    );
    state.select(0);
    let symbol = state.grid().symbol_at(0).unwrap();
    let glyph = state.icons().unwrap().glyph(symbol).unwrap();

    let surface = GameView::default().render(&state, Viewport::new(80, 24));
    assert!(surface.contains_text(&glyph.to_string()));
}

#[test]
fn test_render_survives_tiny_viewport() {
    let state = GameState::new(GameSettings::default(), 11);
    // Clipping, not panicking, is the contract for small terminals.
    let surface = GameView::default().render(&state, Viewport::new(10, 5));
    assert_eq!(surface.width(), 10);
    assert_eq!(surface.height(), 5);
}
