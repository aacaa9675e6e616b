//! Held-key repeat handler for cursor movement.
//!
//! Supports terminals that do not emit key release events by using a
//! timeout: a direction key counts as held until its release event arrives
//! or no press has been seen for a short while.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::map::handle_game_key;
use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state that triggers repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks the held movement direction and emits repeats after a delay.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<GameAction>,
    last_key_time: std::time::Instant,
    das_timer: u32,
    arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            held: None,
            last_key_time: std::time::Instant::now(),
            das_timer: 0,
            arr_accumulator: 0,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    fn is_movement(action: GameAction) -> bool {
        matches!(
            action,
            GameAction::MoveUp
                | GameAction::MoveDown
                | GameAction::MoveLeft
                | GameAction::MoveRight
        )
    }

    /// Register a key press.
    ///
    /// Returns the action to apply immediately for movement keys (the
    /// press edge); repeats come from [`InputHandler::update`]. Non-movement
    /// keys are not tracked here.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let action = handle_game_key(crossterm::event::KeyEvent::from(code))?;
        if !Self::is_movement(action) {
            return None;
        }

        self.last_key_time = std::time::Instant::now();
        if self.held == Some(action) {
            // Terminal auto-repeat of the same key: the DAS/ARR timers own
            // repeat pacing.
            return None;
        }

        self.held = Some(action);
        self.das_timer = 0;
        self.arr_accumulator = 0;
        Some(action)
    }

    /// Register a key release (terminals that emit them).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        let Some(action) = handle_game_key(crossterm::event::KeyEvent::from(code)) else {
            return;
        };
        if self.held == Some(action) {
            self.clear_held();
        }
    }

    /// Advance timers and collect repeat actions for this tick.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 8> {
        let mut actions = ArrayVec::<GameAction, 8>::new();

        // Auto-release when the terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if self.held.is_some() && time_since_last_key > self.key_release_timeout_ms {
            self.clear_held();
        }

        let Some(held) = self.held else {
            return actions;
        };

        let prev_das = self.das_timer;
        self.das_timer += elapsed_ms;

        if self.das_timer >= self.das_delay {
            let excess = if prev_das < self.das_delay {
                self.das_timer - self.das_delay
            } else {
                elapsed_ms
            };
            self.arr_accumulator += excess;

            while self.arr_accumulator >= self.arr_rate {
                let _ = actions.try_push(held);
                self.arr_accumulator -= self.arr_rate;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.clear_held();
        self.last_key_time = std::time::Instant::now();
    }

    fn clear_held(&mut self) {
        self.held = None;
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_emits_action_once() {
        let mut ih = InputHandler::with_config(100, 25);

        assert_eq!(
            ih.handle_key_press(KeyCode::Left),
            Some(GameAction::MoveLeft)
        );
        // Auto-repeat of the same key is swallowed.
        assert_eq!(ih.handle_key_press(KeyCode::Left), None);
    }

    #[test]
    fn test_repeats_start_after_das_delay() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        assert_eq!(
            ih.handle_key_press(KeyCode::Down),
            Some(GameAction::MoveDown)
        );

        // Before DAS expires: no repeats.
        assert!(ih.update(99).is_empty());

        // Exactly at DAS: still no repeats (needs excess over DAS).
        assert!(ih.update(1).is_empty());

        // First ARR interval after DAS: one repeat.
        assert_eq!(ih.update(25).as_slice(), &[GameAction::MoveDown]);

        // Two intervals at once: two repeats.
        assert_eq!(
            ih.update(50).as_slice(),
            &[GameAction::MoveDown, GameAction::MoveDown]
        );
    }

    #[test]
    fn test_direction_change_resets_timers() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        ih.handle_key_press(KeyCode::Left);
        assert_eq!(ih.update(125).as_slice(), &[GameAction::MoveLeft]);

        // Switching direction restarts DAS from zero.
        assert_eq!(
            ih.handle_key_press(KeyCode::Right),
            Some(GameAction::MoveRight)
        );
        assert!(ih.update(99).is_empty());
        assert!(ih.update(1).is_empty());
        assert_eq!(ih.update(25).as_slice(), &[GameAction::MoveRight]);
    }

    #[test]
    fn test_release_stops_repeats() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_release(KeyCode::Up);
        assert!(ih.update(500).is_empty());
    }

    #[test]
    fn test_auto_release_without_release_events() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(50);

        ih.handle_key_press(KeyCode::Left);

        // Simulate no key events by moving the last key time into the past.
        ih.last_key_time = std::time::Instant::now() - std::time::Duration::from_millis(51);

        assert!(ih.update(0).is_empty());
        // Held state cleared: further updates stay silent.
        assert!(ih.update(500).is_empty());
    }

    #[test]
    fn test_non_movement_keys_are_ignored() {
        let mut ih = InputHandler::new();
        assert_eq!(ih.handle_key_press(KeyCode::Enter), None);
        assert_eq!(ih.handle_key_press(KeyCode::Char('r')), None);
        assert!(ih.update(1000).is_empty());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut ih = InputHandler::with_config(100, 25).with_key_release_timeout_ms(10_000);

        ih.handle_key_press(KeyCode::Left);
        assert!(!ih.update(200).is_empty(), "expected repeats before reset");

        ih.reset();
        assert!(ih.update(200).is_empty(), "reset should stop repeats");
    }
}
