//! Pre-game settings menu: pure focus/cycle state plus its view.

use crate::game_view::Viewport;
use crate::surface::{Rgb, Style, Surface};
use crate::types::{GameSettings, GridSize, MenuAction, Theme, MAX_PLAYERS, MIN_PLAYERS};

/// Menu rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuField {
    Theme,
    Players,
    GridSize,
    Start,
}

const FIELDS: [MenuField; 4] = [
    MenuField::Theme,
    MenuField::Players,
    MenuField::GridSize,
    MenuField::Start,
];

/// Settings being edited before a round starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    settings: GameSettings,
    focus: MenuField,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            focus: MenuField::Theme,
        }
    }
}

impl MenuState {
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn focus(&self) -> MenuField {
        self.focus
    }

    /// Apply a menu action. Returns the chosen settings once the start row
    /// is confirmed.
    pub fn apply(&mut self, action: MenuAction) -> Option<GameSettings> {
        match action {
            MenuAction::FocusPrev => {
                self.focus = self.step_focus(-1);
                None
            }
            MenuAction::FocusNext => {
                self.focus = self.step_focus(1);
                None
            }
            MenuAction::CyclePrev => {
                self.cycle(-1);
                None
            }
            MenuAction::CycleNext => {
                self.cycle(1);
                None
            }
            MenuAction::Confirm => {
                if self.focus == MenuField::Start {
                    Some(self.settings)
                } else {
                    // Enter on an option row walks toward the start button.
                    self.focus = self.step_focus(1);
                    None
                }
            }
        }
    }

    fn step_focus(&self, delta: i32) -> MenuField {
        let pos = FIELDS.iter().position(|&f| f == self.focus).unwrap_or(0) as i32;
        let next = (pos + delta).rem_euclid(FIELDS.len() as i32) as usize;
        FIELDS[next]
    }

    fn cycle(&mut self, delta: i32) {
        match self.focus {
            MenuField::Theme => {
                self.settings.theme = cycle_choice(&Theme::ALL, self.settings.theme, delta);
            }
            MenuField::Players => {
                let span = (MAX_PLAYERS - MIN_PLAYERS + 1) as i32;
                let pos = (self.settings.players - MIN_PLAYERS) as i32;
                self.settings.players = MIN_PLAYERS + (pos + delta).rem_euclid(span) as usize;
            }
            MenuField::GridSize => {
                self.settings.grid_size =
                    cycle_choice(&GridSize::ALL, self.settings.grid_size, delta);
            }
            MenuField::Start => {}
        }
    }

    /// Render the menu into a surface.
    pub fn render(&self, viewport: Viewport) -> Surface {
        let mut surface = Surface::new(viewport.width, viewport.height);
        let bg = Style::new(Rgb::new(200, 200, 200), Rgb::new(20, 20, 28));
        surface.fill(' ', bg);

        let label = Style::new(Rgb::new(150, 150, 160), Rgb::new(20, 20, 28));
        let title = Style::new(Rgb::new(255, 210, 120), Rgb::new(20, 20, 28)).bold();
        let hint = Style::new(Rgb::new(110, 110, 120), Rgb::new(20, 20, 28)).dim();

        let w = viewport.width;
        let mut y = viewport.height.saturating_sub(14) / 2;

        surface.put_str_centered(0, w, y, "M E M O R Y", title);
        y = y.saturating_add(2);

        for field in [MenuField::Theme, MenuField::Players, MenuField::GridSize] {
            let (name, value) = match field {
                MenuField::Theme => ("Theme", self.settings.theme.as_str().to_string()),
                MenuField::Players => ("Players", self.settings.players.to_string()),
                MenuField::GridSize => ("Grid Size", self.settings.grid_size.label().to_string()),
                MenuField::Start => unreachable!(),
            };

            let focused = self.focus == field;
            let marker = if focused { "▸ " } else { "  " };
            let line = format!("{}{:<10} ◂ {} ▸", marker, name, value);
            let style = if focused { row_style(true) } else { label };
            surface.put_str_centered(0, w, y, &line, style);
            y = y.saturating_add(2);
        }

        let start_focused = self.focus == MenuField::Start;
        let start_label = if start_focused {
            "▸ [ Start Game ] ◂"
        } else {
            "[ Start Game ]"
        };
        surface.put_str_centered(0, w, y, start_label, row_style(start_focused));
        y = y.saturating_add(3);

        surface.put_str_centered(0, w, y, "↑/↓ select · ←/→ change · enter start · q quit", hint);

        surface
    }
}

fn cycle_choice<T: Copy + PartialEq>(choices: &[T], current: T, delta: i32) -> T {
    let pos = choices.iter().position(|&c| c == current).unwrap_or(0) as i32;
    let next = (pos + delta).rem_euclid(choices.len() as i32) as usize;
    choices[next]
}

fn row_style(focused: bool) -> Style {
    if focused {
        Style::new(Rgb::new(255, 255, 255), Rgb::new(50, 50, 70)).bold()
    } else {
        Style::new(Rgb::new(200, 200, 200), Rgb::new(20, 20, 28))
    }
}
