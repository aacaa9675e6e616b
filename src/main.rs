//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and a custom surface-based renderer. The binary
//! owns all I/O: the menu and game cores are pure and tick-driven.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_memory::core::GameState;
use tui_memory::input::{handle_game_key, handle_menu_key, should_quit, wants_menu, InputHandler};
use tui_memory::term::{GameView, MenuState, TerminalRenderer, Viewport};
use tui_memory::types::{GameAction, TICK_MS};

enum Screen {
    Menu(MenuState),
    Playing(GameState),
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let view = GameView::default();
    let mut screen = Screen::Menu(MenuState::default());
    let mut input = InputHandler::new();

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let surface = match &screen {
            Screen::Menu(menu) => menu.render(Viewport::new(w, h)),
            Screen::Playing(state) => view.render(state, Viewport::new(w, h)),
        };
        term.draw(&surface)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        let mut next_screen = None;
                        match &mut screen {
                            Screen::Menu(menu) => {
                                if let Some(action) = handle_menu_key(key) {
                                    if let Some(settings) = menu.apply(action) {
                                        next_screen =
                                            Some(Screen::Playing(GameState::new(
                                                settings,
                                                clock_seed(),
                                            )));
                                    }
                                }
                            }
                            Screen::Playing(state) => {
                                if wants_menu(key) {
                                    // Back to the menu with default settings.
                                    next_screen = Some(Screen::Menu(MenuState::default()));
                                } else {
                                    if let Some(action) = input.handle_key_press(key.code) {
                                        state.apply_action(action);
                                    }

                                    if let Some(action) = handle_game_key(key) {
                                        match action {
                                            GameAction::MoveUp
                                            | GameAction::MoveDown
                                            | GameAction::MoveLeft
                                            | GameAction::MoveRight => {
                                                // Press edge handled by the input
                                                // handler above.
                                            }
                                            _ => {
                                                state.apply_action(action);
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        if let Some(next) = next_screen {
                            screen = next;
                            input.reset();
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; the input handler paces
                        // cursor repeats internally.
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            if let Screen::Playing(state) = &mut screen {
                for action in input.update(TICK_MS) {
                    state.apply_action(action);
                }
                state.tick(TICK_MS);
            }
        }
    }
}

/// Seed card layouts from the system clock; the core itself stays
/// deterministic given a seed.
fn clock_seed() -> u32 {
    use std::time::{SystemTime, UNIX_EPOCH};
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() as u32) ^ elapsed.subsec_nanos(),
        Err(_) => 1,
    }
}
