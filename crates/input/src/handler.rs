//! Fast-drop hold tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a press that is not refreshed (by key repeat) within the grace window is
//! treated as released. Once a real release has been seen the timeout is no
//! longer applied.

use crossterm::event::KeyCode;

use crate::map::is_fast_drop_key;
use crate::types::{GameAction, FAST_DROP_GRACE_MS};

/// Tracks whether the fast-drop key is held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: bool,
    since_press_ms: u32,
    grace_ms: u32,
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_grace_ms(FAST_DROP_GRACE_MS)
    }

    pub fn with_grace_ms(grace_ms: u32) -> Self {
        Self {
            held: false,
            since_press_ms: 0,
            grace_ms,
            release_events: false,
        }
    }

    pub fn grace_ms(&self) -> u32 {
        self.grace_ms
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Press (or key-repeat) of `code`. Returns the engage action on the
    /// first press of a hold.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if !is_fast_drop_key(code) {
            return None;
        }
        self.since_press_ms = 0;
        if self.held {
            return None;
        }
        self.held = true;
        Some(GameAction::FastDropEngage)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        if !is_fast_drop_key(code) {
            return None;
        }
        self.release_events = true;
        self.release()
    }

    /// Advance the grace clock. Returns the release action if the hold timed
    /// out.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<GameAction> {
        if !self.held || self.release_events {
            return None;
        }
        self.since_press_ms = self.since_press_ms.saturating_add(elapsed_ms);
        if self.since_press_ms > self.grace_ms {
            return self.release();
        }
        None
    }

    /// Follow the engine's fast-drop flag. A lock releases fast-drop on its
    /// own, and the next press must engage it again.
    pub fn observe_fast_drop(&mut self, active: bool) {
        if !active {
            self.held = false;
            self.since_press_ms = 0;
        }
    }

    fn release(&mut self) -> Option<GameAction> {
        if !self.held {
            return None;
        }
        self.held = false;
        self.since_press_ms = 0;
        Some(GameAction::FastDropRelease)
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

    const SPACE: KeyCode = KeyCode::Char(' ');

    #[test]
    fn test_press_engages_once() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(SPACE), Some(GameAction::FastDropEngage));
        assert_eq!(h.handle_key_press(SPACE), None);
        assert!(h.is_held());
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Left), None);
        assert_eq!(h.handle_key_release(KeyCode::Left), None);
        assert!(!h.is_held());
    }

    #[test]
    fn test_grace_auto_release() {
        let mut h = InputHandler::with_grace_ms(100);
        h.handle_key_press(SPACE);
        assert_eq!(h.update(60), None);
        // Key repeat refreshes the hold.
        assert_eq!(h.handle_key_press(SPACE), None);
        assert_eq!(h.update(60), None);
        assert_eq!(h.update(60), Some(GameAction::FastDropRelease));
        assert!(!h.is_held());
        assert_eq!(h.update(500), None);
    }

    #[test]
    fn test_release_event_disables_timeout() {
        let mut h = InputHandler::with_grace_ms(100);
        h.handle_key_press(SPACE);
        assert_eq!(h.handle_key_release(SPACE), Some(GameAction::FastDropRelease));

        h.handle_key_press(SPACE);
        assert_eq!(h.update(10_000), None);
        assert!(h.is_held());
    }

    #[test]
    fn test_engine_release_resets_hold() {
        let mut h = InputHandler::new();
        h.handle_key_press(SPACE);
        h.observe_fast_drop(false);
        assert!(!h.is_held());
        assert_eq!(h.handle_key_press(SPACE), Some(GameAction::FastDropEngage));
    }
}
