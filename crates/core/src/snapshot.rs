//! Snapshot module - read-only copies of the game for renderers
//!
//! A snapshot owns its data (the board grid is copied), so a renderer or an
//! async observer can hold it while the session keeps running.

use crate::pieces::Shape;
use crate::player::Player;
use crate::types::{Cell, GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Player> for ActiveSnapshot {
    fn from(value: Player) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute board coordinates of every filled cell (may include y < 0).
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(cx, cy)| (self.x + cx, self.y + cy))
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub status: GameStatus,
    pub fast_drop: bool,
    pub score: u32,
    pub rows: u32,
    pub level: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Clear; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            status: GameStatus::Menu,
            fast_drop: false,
            score: 0,
            rows: 0,
            level: 1,
        }
    }
}
