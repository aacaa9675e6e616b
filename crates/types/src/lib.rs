//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
/// How long a mismatched pair stays face-up before flipping back.
pub const MISMATCH_REVEAL_MS: u32 = 500;

/// Cursor repeat timing for held movement keys (milliseconds)
pub const DEFAULT_DAS_MS: u32 = 180;
pub const DEFAULT_ARR_MS: u32 = 60;

/// Player limits
pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 4;

/// Largest number of pairs any grid can hold (6x6 / 2).
pub const MAX_PAIRS: usize = 18;

/// Symbol identifier on the grid (`1..=pair_count`, each appearing twice).
pub type SymbolId = u8;

/// Supported square grid sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridSize {
    Four,
    Six,
}

impl GridSize {
    pub const ALL: [GridSize; 2] = [GridSize::Four, GridSize::Six];

    /// Cells per row (and per column).
    pub fn dimension(&self) -> usize {
        match self {
            GridSize::Four => 4,
            GridSize::Six => 6,
        }
    }

    /// Total cell count (`dimension²`, always even).
    pub fn cell_count(&self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Number of distinct symbols (each appears twice).
    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Menu label, e.g. "4x4".
    pub fn label(&self) -> &'static str {
        match self {
            GridSize::Four => "4x4",
            GridSize::Six => "6x6",
        }
    }
}

/// Symbol theme: plain numbers or icon glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    Numbers,
    Icons,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Numbers, Theme::Icons];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Numbers => "Numbers",
            Theme::Icons => "Icons",
        }
    }
}

/// Pre-game configuration.
///
/// Immutable for the duration of a round; the menu is the only place it
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub grid_size: GridSize,
    pub theme: Theme,
    pub players: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: GridSize::Four,
            theme: Theme::Numbers,
            players: 1,
        }
    }
}

impl GameSettings {
    pub fn is_single_player(&self) -> bool {
        self.players == 1
    }
}

/// In-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Flip,
    Restart,
}

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    FocusPrev,
    FocusNext,
    CyclePrev,
    CycleNext,
    Confirm,
}
