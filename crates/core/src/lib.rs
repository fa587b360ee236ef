//! Core game logic - pure, deterministic, and testable
//!
//! Everything here is synchronous and free of terminal or timer concerns.
//! The only side effect is `log` output.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven shape matrices, clockwise rotation and kick offsets
//! - [`rng`]: seeded LCG and the uniform piece generator
//! - [`board`]: 12x20 grid, collision predicate, merge and row sweep
//! - [`player`]: the falling piece and its guarded moves
//! - [`scoring`]: line points, level progression and fall intervals
//! - [`game_state`]: the session state machine tying it all together
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Example
//!
//! ```
//! use pharaoh_blocks_core::GameState;
//! use pharaoh_blocks_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.status(), GameStatus::Playing);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The core never measures time. A driver calls
//! [`GameState::soft_drop_tick`](game_state::GameState::soft_drop_tick) each
//! time [`GameState::tick_interval_ms`](game_state::GameState::tick_interval_ms)
//! elapses.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use pharaoh_blocks_types as types;

pub use board::{Board, ClearedRows};
pub use game_state::GameState;
pub use pieces::{kick_offsets, random_piece, shape_for, PieceDef, Shape};
pub use player::{DropOutcome, Player};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_line_score, fall_interval_ms, should_level_up, tick_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
