//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into a
//! simple framebuffer that is then flushed to the terminal backend, which keeps
//! the view code pure and lets the renderer send only changed cells.
//!
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (no I/O)
//! - [`TerminalRenderer`] owns the terminal and writes frames with crossterm

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tetris_engine_core as core;
pub use tetris_engine_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
