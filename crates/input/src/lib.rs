//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto session [`crate::types::Command`]s. Held
//! keys rely on the terminal's own auto-repeat; there is no repeat timer here.

pub mod map;

pub use tetris_engine_types as types;

pub use map::{command_for_key, should_quit};
