//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the tick driver and any renderer alike.
//!
//! # Board Dimensions
//!
//! The playfield is fixed at compile time:
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 2`, 0) = (4, 0)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame/poll interval of the terminal loop |
//! | `BASE_FALL_MS` | 1000 | Fall interval numerator |
//! | `FALL_INTERVAL_MIN_MS` | 100 | Fastest normal fall interval |
//! | `FAST_DROP_MS` | 15 | Fall interval while fast-drop is held |
//! | `FAST_DROP_GRACE_MS` | 150 | Fast-drop auto-release without key-up events |
//!
//! # Examples
//!
//! ```
//! use pharaoh_blocks_types::{Cell, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! let cell = Cell::Merged(PieceKind::T);
//! assert_eq!(cell.occupant(), Some(PieceKind::T));
//! assert!(!cell.is_clear());
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the top-left anchor of a freshly spawned piece.
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Row of the top-left anchor of a freshly spawned piece.
pub const SPAWN_Y: i8 = 0;

/// Frame interval of the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Fall interval numerator; divided by `level * 0.8`.
pub const BASE_FALL_MS: u32 = 1000;

/// Fastest fall interval reachable through level progression.
pub const FALL_INTERVAL_MIN_MS: u32 = 100;

/// Fixed fall interval while fast-drop is held.
pub const FAST_DROP_MS: u32 = 15;

/// Fast-drop auto-release window for terminals that never report key releases.
pub const FAST_DROP_GRACE_MS: u32 = 150;

/// Rows that must be exceeded per level step: level `n` advances once
/// `rows > (n + 1) * ROWS_PER_LEVEL`.
pub const ROWS_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N rows at once, multiplied by the current level:
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4+ rows: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use pharaoh_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter tag
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Whether a cell is empty or holds a settled block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Clear,
    Merged,
}

/// A cell on the game board
///
/// - `Clear`: empty, created by board init or by a row sweep
/// - `Merged(kind)`: settled block, created only when a piece locks
///
/// An occupant exists exactly when the cell is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Clear,
    Merged(PieceKind),
}

impl Cell {
    pub fn occupant(&self) -> Option<PieceKind> {
        match self {
            Cell::Clear => None,
            Cell::Merged(kind) => Some(*kind),
        }
    }

    pub fn state(&self) -> CellState {
        match self {
            Cell::Clear => CellState::Clear,
            Cell::Merged(_) => CellState::Merged,
        }
    }

    pub fn is_clear(&self) -> bool {
        matches!(self, Cell::Clear)
    }
}

/// Session status. Exactly one is current at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Menu => "menu",
            GameStatus::Playing => "playing",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "gameover",
        }
    }
}

/// 24-bit RGB colour (presentation metadata only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Commands accepted by the engine
///
/// These are issued by human input, the tick driver or tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Start a fresh game (from the menu, a pause or after game over)
    Start,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one row (same step the tick driver performs)
    SoftDrop,
    /// Rotate piece 90° clockwise with wall kicks
    Rotate,
    /// Begin fast-drop (held input)
    FastDropEngage,
    /// End fast-drop
    FastDropRelease,
    /// Toggle between playing and paused
    TogglePause,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use pharaoh_blocks_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("fastDropEngage"), Some(GameAction::FastDropEngage));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "fastdropengage" => Some(GameAction::FastDropEngage),
            "fastdroprelease" => Some(GameAction::FastDropRelease),
            "togglepause" => Some(GameAction::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::FastDropEngage => "fastDropEngage",
            GameAction::FastDropRelease => "fastDropRelease",
            GameAction::TogglePause => "togglePause",
        }
    }
}

/// Event recorded every time a piece locks.
///
/// Observers take it with `GameState::take_last_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub rows_cleared: u32,
    pub points: u32,
    /// The piece was still partly above row 0 when it landed.
    pub top_out: bool,
    pub game_over: bool,
}
