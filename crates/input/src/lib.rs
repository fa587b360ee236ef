//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! fast-drop hold, including terminals that never report key releases.

pub mod handler;
pub mod map;

pub use pharaoh_blocks_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_fast_drop_key, should_quit};
