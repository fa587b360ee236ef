//! Pharaoh's Blocks (workspace facade crate).
//!
//! Re-exports the member crates as `pharaoh_blocks::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use pharaoh_blocks_core as core;
pub use pharaoh_blocks_engine as engine;
pub use pharaoh_blocks_input as input;
pub use pharaoh_blocks_term as term;
pub use pharaoh_blocks_types as types;
