//! Tetris engine (workspace facade crate).
//!
//! Re-exports the member crates under one roof as
//! `tetris_engine::{core, input, term, types}` and adds the pieces shared by
//! both binaries: environment configuration and the JSON observation format.

pub mod config;
pub mod observe;

pub use tetris_engine_core as core;
pub use tetris_engine_input as input;
pub use tetris_engine_term as term;
pub use tetris_engine_types as types;
