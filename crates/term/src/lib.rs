//! Terminal rendering module.
//!
//! Renders game and menu state into a simple styled-glyph surface that is
//! flushed to the terminal by a diffing backend. No widget/layout framework;
//! the views are pure functions from state to [`Surface`], which keeps them
//! unit-testable without a terminal.

pub mod game_view;
pub mod menu;
pub mod renderer;
pub mod surface;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use game_view::{GameView, Viewport};
pub use menu::{MenuField, MenuState};
pub use renderer::TerminalRenderer;
pub use surface::{Glyph, Rgb, Style, Surface};
