//! Terminal renderer for the game.
//!
//! A [`GameView`] paints a [`GameSnapshot`](crate::core::GameSnapshot) into a
//! [`FrameBuffer`] of styled glyphs (pure, testable), and a
//! [`TerminalRenderer`] flushes frames to the terminal, writing only the runs
//! that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use pharaoh_blocks_core as core;
pub use pharaoh_blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
