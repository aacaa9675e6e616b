//! GameView: maps `core::GameState` into a terminal surface.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::scoring::{compute_results, format_elapsed, GameOutcome};
use crate::core::GameState;
use crate::surface::{Rgb, Style, Surface};
use crate::types::Theme;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BACKGROUND: Rgb = Rgb::new(20, 20, 28);

/// Renders the card grid, status line, and game-over dialog.
pub struct GameView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 cards read roughly square under typical glyph aspect ratios.
        Self {
            card_w: 4,
            card_h: 2,
        }
    }
}

impl GameView {
    pub fn new(card_w: u16, card_h: u16) -> Self {
        Self {
            card_w: card_w.max(1),
            card_h: card_h.max(1),
        }
    }

    /// Render the current game state into a surface.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);
        surface.fill(' ', Style::new(Rgb::new(200, 200, 200), BACKGROUND));

        let dim = state.settings().grid_size.dimension() as u16;
        let board_w = dim * (self.card_w + 1) - 1;
        let board_h = dim * (self.card_h + 1) - 1;
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = viewport.height.saturating_sub(board_h + 4) / 2;

        for index in 0..state.grid().len() {
            let col = (index as u16) % dim;
            let row = (index as u16) / dim;
            let x = start_x + col * (self.card_w + 1);
            let y = start_y + row * (self.card_h + 1);
            self.draw_card(&mut surface, state, index, x, y);
        }

        let status_y = start_y.saturating_add(board_h).saturating_add(1);
        if state.settings().is_single_player() {
            self.draw_single_status(&mut surface, state, viewport, status_y);
        } else {
            self.draw_score_strip(&mut surface, state, viewport, status_y);
        }

        let hint = Style::new(Rgb::new(110, 110, 120), BACKGROUND).dim();
        surface.put_str_centered(
            0,
            viewport.width,
            status_y.saturating_add(2),
            "↑↓←→ move · enter flip · r restart · n menu · q quit",
            hint,
        );

        if state.is_game_over() {
            self.draw_game_over_dialog(&mut surface, state, viewport);
        }

        surface
    }

    fn draw_card(&self, surface: &mut Surface, state: &GameState, index: usize, x: u16, y: u16) {
        let under_cursor = index == state.cursor() && !state.is_game_over();
        let selected = state.selection().contains(index);
        let solved = state.is_solved(index);

        let style = if solved {
            Style::new(Rgb::new(120, 200, 140), Rgb::new(32, 44, 38)).dim()
        } else if selected && state.mismatch_pending() {
            Style::new(Rgb::new(230, 110, 110), Rgb::new(58, 38, 38)).bold()
        } else if selected {
            Style::new(Rgb::new(255, 220, 120), Rgb::new(58, 58, 74)).bold()
        } else {
            Style::new(Rgb::new(90, 90, 104), Rgb::new(44, 44, 58))
        };
        let style = if under_cursor {
            Style {
                bg: Rgb::new(82, 82, 120),
                ..style
            }
        } else {
            style
        };

        if solved || selected {
            surface.fill_rect(x, y, self.card_w, self.card_h, ' ', style);
            surface.put_str_centered(x, self.card_w, y + self.card_h / 2, &self.face(state, index), style);
        } else {
            surface.fill_rect(x, y, self.card_w, self.card_h, '▒', style);
        }
    }

    /// Face text for a revealed card.
    fn face(&self, state: &GameState, index: usize) -> String {
        let Some(symbol) = state.grid().symbol_at(index) else {
            return String::new();
        };
        match state.settings().theme {
            Theme::Numbers => symbol.to_string(),
            Theme::Icons => state
                .icons()
                .and_then(|icons| icons.glyph(symbol))
                .map(String::from)
                .unwrap_or_else(|| symbol.to_string()),
        }
    }

    fn draw_single_status(
        &self,
        surface: &mut Surface,
        state: &GameState,
        viewport: Viewport,
        y: u16,
    ) {
        let style = Style::new(Rgb::new(200, 200, 200), BACKGROUND);
        let line = format!(
            "MOVES {}   TIME {}",
            state.move_count(),
            format_elapsed(state.play_time_ms())
        );
        surface.put_str_centered(0, viewport.width, y, &line, style);
    }

    fn draw_score_strip(
        &self,
        surface: &mut Surface,
        state: &GameState,
        viewport: Viewport,
        y: u16,
    ) {
        let entries: Vec<String> = state
            .scores()
            .iter()
            .enumerate()
            .map(|(player, score)| format!(" Player {}: {} ", player + 1, score))
            .collect();
        let total_w: u16 = entries.iter().map(|e| e.chars().count() as u16 + 2).sum();
        let mut x = viewport.width.saturating_sub(total_w) / 2;

        for (player, entry) in entries.iter().enumerate() {
            let active = player == state.active_player() && !state.is_game_over();
            let style = if active {
                Style::new(Rgb::new(20, 20, 28), Rgb::new(220, 220, 220)).bold()
            } else {
                Style::new(Rgb::new(170, 170, 180), BACKGROUND)
            };
            surface.put_str(x, y, entry, style);
            x = x.saturating_add(entry.chars().count() as u16 + 2);
        }
    }

    fn draw_game_over_dialog(&self, surface: &mut Surface, state: &GameState, viewport: Viewport) {
        let mut lines: Vec<String> = Vec::new();

        if state.settings().is_single_player() {
            lines.push("You did it!".to_string());
            lines.push(format!("Moves Taken: {}", state.move_count()));
            lines.push(format!(
                "Time elapsed: {}",
                format_elapsed(state.play_time_ms())
            ));
        } else {
            let results = compute_results(state.scores());
            match results.outcome {
                GameOutcome::Win => {
                    // Ranking is never empty for a running multi-player game.
                    let winner = results.winner().unwrap_or(0);
                    lines.push(format!("Player {} Wins!", winner + 1));
                }
                GameOutcome::Tie => lines.push("It's a tie!".to_string()),
            }
            lines.push("Game over! Here are the results...".to_string());
            for entry in &results.ranking {
                let marker = if results.is_winner(entry.player) {
                    " (Winner!)"
                } else {
                    ""
                };
                lines.push(format!(
                    "Player {}{}  -  {} Pairs",
                    entry.player + 1,
                    marker,
                    entry.score
                ));
            }
        }
        lines.push(String::new());
        lines.push("r restart · n menu · q quit".to_string());

        let content_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let box_w = content_w + 6;
        let box_h = lines.len() as u16 + 4;
        let x = viewport.width.saturating_sub(box_w) / 2;
        let y = viewport.height.saturating_sub(box_h) / 2;

        let panel = Style::new(Rgb::new(230, 230, 230), Rgb::new(36, 36, 48));
        let border = Style::new(Rgb::new(255, 210, 120), Rgb::new(36, 36, 48));

        surface.fill_rect(x, y, box_w, box_h, ' ', panel);
        surface.draw_box(x, y, box_w, box_h, border);

        for (i, line) in lines.iter().enumerate() {
            let style = if i == 0 { panel.bold() } else { panel };
            surface.put_str_centered(x, box_w, y + 2 + i as u16, line, style);
        }
    }
}
