//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management for the
//! memory/matching card game. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical card layouts
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: shuffled paired-symbol grid and icon glyph assignment
//! - [`game_state`]: selection/turn state machine, solved set, scores, timers
//! - [`rng`]: seedable LCG with Fisher-Yates shuffle
//! - [`scoring`]: elapsed-time formatting and final results ranking
//!
//! # Game Rules
//!
//! - The grid holds `gridSize²` cards; every symbol appears exactly twice.
//! - A turn reveals up to two cards. Equal symbols lock both face-up and
//!   (multi-player) score one pair for the active player, who keeps the
//!   turn. Unequal symbols stay visible for a fixed delay, then flip back;
//!   the turn passes to the next player.
//! - The game ends when every card is solved.
//!
//! # Example
//!
//! ```
//! use tui_memory_core::GameState;
//! use tui_memory_types::GameSettings;
//!
//! let mut game = GameState::new(GameSettings::default(), 12345);
//!
//! // Reveal the first two cards.
//! game.select(0);
//! game.select(1);
//!
//! // Timers advance through tick; call it every frame with elapsed ms.
//! game.tick(16);
//! assert!(!game.is_game_over());
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod scoring;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use game_state::{FlipOutcome, GameState, Selection};
pub use grid::{Grid, IconMap, ICON_GLYPHS};
pub use rng::SimpleRng;
pub use scoring::{compute_results, format_elapsed, GameOutcome, GameResults, PlayerScore};
