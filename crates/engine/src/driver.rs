//! Synchronous game loop: a [`GameState`] plus its gravity [`TickTimer`].

use log::debug;

use crate::core::{GameSnapshot, GameState};
use crate::timer::TickTimer;
use crate::types::{GameAction, LockEvent};

/// Owns a session and drives gravity from elapsed time.
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
    timer: TickTimer,
    ticks: u64,
}

impl GameLoop {
    pub fn new(seed: u32) -> Self {
        Self::from_state(GameState::new(seed))
    }

    pub fn from_state(state: GameState) -> Self {
        let mut game = Self {
            state,
            timer: TickTimer::new(),
            ticks: 0,
        };
        game.sync_timer();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    /// Gravity ticks fired since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.state.take_last_event()
    }

    /// Milliseconds until the next gravity tick, if one is pending.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.timer.remaining_ms()
    }

    /// Apply a command, then re-arm the timer.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let changed = self.state.apply_action(action);
        self.sync_timer();
        changed
    }

    /// Let `elapsed_ms` pass. Every deadline reached inside the budget fires
    /// one tick, and the timer is re-armed between firings.
    ///
    /// Returns the number of ticks fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let mut budget = elapsed_ms;
        let mut fired = 0;

        while self.timer.consume(&mut budget) {
            self.state.soft_drop_tick();
            self.ticks += 1;
            fired += 1;
            self.sync_timer();
        }

        fired
    }

    fn sync_timer(&mut self) {
        if !self.state.is_playing() {
            if self.timer.is_armed() {
                debug!("tick timer cancelled ({})", self.state.status().as_str());
            }
            self.timer.cancel();
            return;
        }

        let interval = self.state.tick_interval_ms();
        if self.timer.schedule(interval) {
            debug!("tick timer armed: {}ms", interval);
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(1)
    }
}
