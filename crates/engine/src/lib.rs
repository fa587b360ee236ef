//! Tick driver for the game core.
//!
//! The core never measures time; this crate owns the periodic gravity timer
//! and feeds it from either a synchronous frame loop ([`GameLoop`]) or a tokio
//! task ([`runtime::spawn_session`]). Both re-arm the same [`TickTimer`] after
//! every tick and every command, and cancel it whenever the session leaves
//! PLAYING.

pub mod config;
pub mod driver;
pub mod runtime;
pub mod timer;

pub use pharaoh_blocks_core as core;
pub use pharaoh_blocks_types as types;

pub use config::GameConfig;
pub use driver::GameLoop;
pub use runtime::{spawn_session, SessionHandle};
pub use timer::TickTimer;
