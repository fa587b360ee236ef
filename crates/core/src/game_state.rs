//! Game state module - the session state machine
//!
//! Ties together the board, the active piece, the piece generator and the
//! progression rules. Status moves MENU → PLAYING ⇄ PAUSED → GAMEOVER and back
//! to PLAYING through [`GameState::start`]. Every mutating command is a no-op
//! unless the status is PLAYING.
//!
//! Locking is handled synchronously inside the drop that detects it: merge,
//! sweep, score, then spawn the lookahead piece.

use log::{debug, info};

use crate::board::Board;
use crate::player::{DropOutcome, Player};
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_line_score, next_level, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Player>,
    next: PieceKind,
    generator: PieceGenerator,
    status: GameStatus,
    fast_drop: bool,
    score: u32,
    rows: u32,
    level: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a session in the menu with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut generator = PieceGenerator::new(seed);
        let next = generator.draw();

        Self {
            board: Board::new(),
            active: None,
            next,
            generator,
            status: GameStatus::Menu,
            fast_drop: false,
            score: 0,
            rows: 0,
            level: 1,
            last_event: None,
        }
    }

    /// Start a fresh game.
    ///
    /// Accepted from MENU, PAUSED and GAMEOVER; ignored while PLAYING.
    pub fn start(&mut self) -> bool {
        if self.status == GameStatus::Playing {
            return false;
        }

        self.board.clear();
        self.score = 0;
        self.rows = 0;
        self.level = 1;
        self.fast_drop = false;
        self.last_event = None;
        self.status = GameStatus::Playing;
        info!("game started (seed {})", self.generator.seed());

        self.spawn_next();
        true
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> Option<Player> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fast_drop(&self) -> bool {
        self.fast_drop
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn set_active(&mut self, piece: Player) {
        self.active = Some(piece);
    }

    #[cfg(test)]
    pub fn set_next(&mut self, kind: PieceKind) {
        self.next = kind;
    }

    #[cfg(test)]
    pub fn set_rows(&mut self, rows: u32) {
        self.rows = rows;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.status = self.status;
        out.fast_drop = self.fast_drop;
        out.score = self.score;
        out.rows = self.rows;
        out.level = self.level;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// External status change. Only PLAYING → PAUSED and PAUSED → PLAYING
    /// are honoured.
    pub fn set_status(&mut self, status: GameStatus) -> bool {
        match (self.status, status) {
            (GameStatus::Playing, GameStatus::Paused) | (GameStatus::Paused, GameStatus::Playing) => {
                debug!("status {} -> {}", self.status.as_str(), status.as_str());
                self.status = status;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Playing => self.set_status(GameStatus::Paused),
            GameStatus::Paused => self.set_status(GameStatus::Playing),
            _ => false,
        }
    }

    /// Interval until the next gravity tick, in milliseconds.
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(self.level, self.fast_drop)
    }

    /// Move the active piece one column. Rejected during fast-drop.
    pub fn move_lateral(&mut self, dir: i8) -> bool {
        if !self.is_playing() || self.fast_drop {
            return false;
        }
        let Some(ref mut piece) = self.active else {
            return false;
        };
        piece.move_lateral(&self.board, dir)
    }

    /// Rotate the active piece clockwise. Rejected during fast-drop.
    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() || self.fast_drop {
            return false;
        }
        let Some(ref mut piece) = self.active else {
            return false;
        };
        piece.rotate(&self.board)
    }

    pub fn engage_fast_drop(&mut self) -> bool {
        if !self.is_playing() || self.fast_drop {
            return false;
        }
        self.fast_drop = true;
        true
    }

    pub fn release_fast_drop(&mut self) -> bool {
        if !self.is_playing() || !self.fast_drop {
            return false;
        }
        self.fast_drop = false;
        true
    }

    /// One gravity step: check level progression, then drop the active piece
    /// by one row, locking it if it cannot move.
    ///
    /// Returns true if the step changed the game.
    pub fn soft_drop_tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }

        let level = next_level(self.rows, self.level);
        if level != self.level {
            self.level = level;
            info!("level up: {} (rows {})", self.level, self.rows);
        }

        let Some(mut piece) = self.active else {
            return false;
        };

        match piece.soft_drop(&self.board) {
            DropOutcome::Moved => {
                self.active = Some(piece);
            }
            DropOutcome::Landed { top_out } => {
                self.active = Some(piece);
                self.lock_active(top_out);
            }
        }
        true
    }

    /// Merge the landed piece, sweep rows, score, then spawn or end the game.
    fn lock_active(&mut self, top_out: bool) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.fast_drop = false;
        self.board.lock_piece(&piece.shape, piece.x, piece.y, piece.kind);

        let cleared = self.board.sweep_full_rows().len() as u32;
        let points = calculate_line_score(cleared, self.level);
        self.rows += cleared;
        self.score += points;
        debug!(
            "locked {} at ({}, {}): {} rows, {} points",
            piece.kind.as_str(),
            piece.x,
            piece.y,
            cleared,
            points
        );

        if top_out {
            info!("top out, final score {}", self.score);
            self.status = GameStatus::GameOver;
        } else {
            self.spawn_next();
        }

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            rows_cleared: cleared,
            points,
            top_out,
            game_over: self.status == GameStatus::GameOver,
        });
    }

    /// Promote the lookahead to the active piece and draw a new lookahead.
    /// A spawn that collides immediately ends the game.
    fn spawn_next(&mut self) -> bool {
        let piece = Player::spawn(self.next);
        self.next = self.generator.draw();
        self.active = Some(piece);

        if piece.is_blocked(&self.board, 0, 0) {
            info!("spawn blocked, final score {}", self.score);
            self.status = GameStatus::GameOver;
            return false;
        }
        true
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveLeft => self.move_lateral(-1),
            GameAction::MoveRight => self.move_lateral(1),
            GameAction::SoftDrop => self.soft_drop_tick(),
            GameAction::Rotate => self.rotate(),
            GameAction::FastDropEngage => self.engage_fast_drop(),
            GameAction::FastDropRelease => self.release_fast_drop(),
            GameAction::TogglePause => self.toggle_pause(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
