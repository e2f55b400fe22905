//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules, the session state machine, and the
//! geometry they are built on. It has **zero dependencies** on UI, terminals, or I/O:
//!
//! - **Deterministic**: same piece source, same commands, same game
//! - **Testable**: every transition is a plain function of (state, command)
//! - **Portable**: runs in a terminal, headless, or behind any other front-end
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of empty or colored cells
//! - [`pieces`]: tetromino shape table and the spawn factory
//! - [`geometry`]: rotate, collide, merge, clear lines, drop distance
//! - [`scoring`]: fixed drop and line-clear points
//! - [`rng`]: piece sources (seeded uniform RNG, fixed sequences)
//! - [`game_state`]: session state machine and the [`Game`] host
//! - [`gravity`]: elapsed time to gravity ticks
//! - [`snapshot`]: read model for renderers
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every piece is one of the seven kinds with equal odds
//! - **Plain rotation**: clockwise quarter turn in place, no wall kicks, O never turns
//! - **Soft drop** moves one row for 1 point and never locks
//! - **Hard drop** falls to rest for 2 points per row, then locks
//! - **Gravity tick** moves one row, or locks when the piece cannot fall
//! - **Line clears** score 100 / 300 / 500 / 800 per lock
//! - **Game over** when the promoted piece collides at its spawn position
//!
//! # Example
//!
//! ```
//! use tetris_engine_core::{Game, Phase};
//! use tetris_engine_types::Command;
//!
//! let mut game = Game::new(12345);
//! game.start();
//! assert_eq!(game.state().phase(), Phase::Playing);
//!
//! game.apply_action(Command::MoveRight);
//! game.apply_action(Command::Rotate);
//! game.apply_action(Command::HardDrop);
//!
//! assert!(game.state().score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Gravity runs at a fixed 1000ms interval. The core holds no timer; a host
//! feeds elapsed time to [`Gravity`] and applies `Command::Tick` for every tick
//! it reports while [`GameState::accepts_ticks`] is true.

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tetris_engine_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Grid};
pub use game_state::{Game, GameState, Phase};
pub use geometry::{clear_lines, collides, drop_distance, landing_y, merge, rotate};
pub use gravity::Gravity;
pub use pieces::{canonical_shape, create_random_tetromino, Shape, Tetromino};
pub use rng::{PieceSequence, PieceSource, SimpleRng};
pub use scoring::{drop_score, line_clear_score};
pub use snapshot::GameSnapshot;
