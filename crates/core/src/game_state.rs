//! Game state module - selection/turn state machine
//!
//! Ties together the grid, the solved set, player scores, and the mismatch
//! reveal timer. The machine is `Idle -> FirstPicked -> SecondPicked ->
//! {Matched | Mismatched} -> Idle`; `Matched` resolves synchronously while
//! `Mismatched` leaves both cards face-up until [`GameState::tick`] consumes
//! the reveal delay.

use arrayvec::ArrayVec;

use crate::grid::{Grid, IconMap};
use crate::rng::SimpleRng;
use crate::types::{GameAction, GameSettings, Theme, MAX_PLAYERS, MISMATCH_REVEAL_MS};

/// Transient two-card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub first: Option<usize>,
    pub second: Option<usize>,
}

impl Selection {
    pub fn contains(&self, index: usize) -> bool {
        self.first == Some(index) || self.second == Some(index)
    }

    /// Two cards picked: the attempt is resolved and no further picks are
    /// accepted until the selection clears.
    pub fn is_full(&self) -> bool {
        self.second.is_some()
    }
}

/// Result of a flip attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Solved cell, repeated pick, out-of-range index, pending mismatch, or
    /// game over: nothing happened.
    Ignored,
    /// First card of an attempt is now face-up.
    FirstRevealed,
    /// Second card matched the first; both are solved.
    Matched,
    /// Second card did not match; both flip back after the reveal delay.
    Mismatched,
}

/// Complete game state for one round.
#[derive(Debug, Clone)]
pub struct GameState {
    settings: GameSettings,
    rng: SimpleRng,
    grid: Grid,
    icons: Option<IconMap>,
    selection: Selection,
    solved: Vec<bool>,
    solved_count: usize,
    cursor: usize,
    active_player: usize,
    scores: ArrayVec<u32, MAX_PLAYERS>,
    move_count: u32,
    play_time_ms: u64,
    timer_running: bool,
    reveal_timer_ms: u32,
}

impl GameState {
    /// Create a new round with the given settings and RNG seed.
    pub fn new(settings: GameSettings, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::generate(settings.grid_size, &mut rng);
        let icons = match settings.theme {
            Theme::Icons => Some(IconMap::assign(grid.pair_count(), &mut rng)),
            Theme::Numbers => None,
        };
        let cell_count = grid.len();
        let scores: ArrayVec<u32, MAX_PLAYERS> =
            (0..settings.players.min(MAX_PLAYERS)).map(|_| 0).collect();

        Self {
            settings,
            rng,
            grid,
            icons,
            selection: Selection::default(),
            solved: vec![false; cell_count],
            solved_count: 0,
            cursor: 0,
            active_player: 0,
            scores,
            move_count: 0,
            play_time_ms: 0,
            timer_running: false,
            reveal_timer_ms: 0,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn icons(&self) -> Option<&IconMap> {
        self.icons.as_ref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn active_player(&self) -> usize {
        self.active_player
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Accumulated play time in milliseconds (single-player; starts on the
    /// first move, frozen at game over).
    pub fn play_time_ms(&self) -> u64 {
        self.play_time_ms
    }

    pub fn is_solved(&self, index: usize) -> bool {
        self.solved.get(index).copied().unwrap_or(false)
    }

    pub fn solved_count(&self) -> usize {
        self.solved_count
    }

    /// A card shows its face while selected or solved.
    pub fn is_revealed(&self, index: usize) -> bool {
        self.selection.contains(index) || self.is_solved(index)
    }

    /// A mismatched pair is still face-up waiting for the reveal delay.
    pub fn mismatch_pending(&self) -> bool {
        self.reveal_timer_ms > 0
    }

    /// Terminal condition: every card solved.
    pub fn is_game_over(&self) -> bool {
        self.solved_count == self.grid.len()
    }

    /// Attempt to flip the card at `index`.
    ///
    /// Solved cells, the already-selected cell, out-of-range indices, and
    /// picks while a mismatch is pending are all no-ops.
    pub fn select(&mut self, index: usize) -> FlipOutcome {
        if self.is_game_over() || self.selection.is_full() {
            return FlipOutcome::Ignored;
        }
        if index >= self.grid.len() || self.solved[index] || self.selection.first == Some(index) {
            return FlipOutcome::Ignored;
        }

        let Some(first) = self.selection.first else {
            self.selection.first = Some(index);
            if self.settings.is_single_player() {
                self.move_count += 1;
                self.timer_running = true;
            }
            return FlipOutcome::FirstRevealed;
        };

        self.selection.second = Some(index);

        if self.grid.symbol_at(first) == self.grid.symbol_at(index) {
            self.solved[first] = true;
            self.solved[index] = true;
            self.solved_count += 2;
            self.selection = Selection::default();
            if !self.settings.is_single_player() {
                self.scores[self.active_player] += 1;
            }
            if self.is_game_over() {
                self.timer_running = false;
            }
            FlipOutcome::Matched
        } else {
            // The flip-back is delayed for visibility, but the turn passes
            // right away.
            self.reveal_timer_ms = MISMATCH_REVEAL_MS;
            if !self.settings.is_single_player() {
                self.active_player = (self.active_player + 1) % self.settings.players;
            }
            FlipOutcome::Mismatched
        }
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Returns `true` when a pending mismatch flipped back this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.is_game_over() {
            return false;
        }

        if self.timer_running {
            self.play_time_ms += elapsed_ms as u64;
        }

        if self.reveal_timer_ms > 0 {
            self.reveal_timer_ms = self.reveal_timer_ms.saturating_sub(elapsed_ms);
            if self.reveal_timer_ms == 0 {
                self.selection = Selection::default();
                return true;
            }
        }

        false
    }

    /// Move the keyboard cursor, wrapping at grid edges.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let dim = self.settings.grid_size.dimension() as i32;
        let x = (self.cursor as i32 % dim + dx).rem_euclid(dim);
        let y = (self.cursor as i32 / dim + dy).rem_euclid(dim);
        self.cursor = (y * dim + x) as usize;
    }

    /// Apply a game action. Returns `true` if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveUp => {
                self.move_cursor(0, -1);
                true
            }
            GameAction::MoveDown => {
                self.move_cursor(0, 1);
                true
            }
            GameAction::MoveLeft => {
                self.move_cursor(-1, 0);
                true
            }
            GameAction::MoveRight => {
                self.move_cursor(1, 0);
                true
            }
            GameAction::Flip => self.select(self.cursor) != FlipOutcome::Ignored,
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start a fresh round with the same settings.
    ///
    /// Reshuffles from the live RNG stream so the layout differs from the
    /// previous round.
    pub fn restart(&mut self) {
        self.grid = Grid::generate(self.settings.grid_size, &mut self.rng);
        self.icons = match self.settings.theme {
            Theme::Icons => Some(IconMap::assign(self.grid.pair_count(), &mut self.rng)),
            Theme::Numbers => None,
        };
        self.selection = Selection::default();
        self.solved = vec![false; self.grid.len()];
        self.solved_count = 0;
        self.cursor = 0;
        self.active_player = 0;
        for score in self.scores.iter_mut() {
            *score = 0;
        }
        self.move_count = 0;
        self.play_time_ms = 0;
        self.timer_running = false;
        self.reveal_timer_ms = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameSettings::default(), 1)
    }
}
