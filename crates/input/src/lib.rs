//! Terminal input module.
//!
//! Maps `crossterm` key events into game/menu actions and provides a
//! held-key repeat handler for cursor movement, suitable for terminal
//! environments (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_memory_types as types;

pub use handler::InputHandler;
pub use map::{handle_game_key, handle_menu_key, should_quit, wants_menu};
